use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use northline_core::{
    FormController, LeadPayload, Store, SubmissionError, SubmissionStatus, TextField,
};

/// Drives the form store the way the page does: the submit handler
/// asks the controller to begin, forwards the payload to a transport,
/// and applies the completion event later. The transport here records
/// what it was asked to send.
struct Harness {
    store: Rc<Store<FormController>>,
    sent: Rc<RefCell<Vec<LeadPayload>>>,
    renders: Rc<RefCell<Vec<SubmissionStatus>>>,
}

impl Harness {
    fn new() -> (Self, northline_core::Subscription) {
        let store = Rc::new(Store::new(FormController::new()));
        let renders = Rc::new(RefCell::new(Vec::new()));
        let subscription = store.subscribe(Rc::new({
            let store = Rc::clone(&store);
            let renders = Rc::clone(&renders);
            move || renders.borrow_mut().push(store.with(|f| f.status().clone()))
        }));
        (
            Self {
                store,
                sent: Rc::new(RefCell::new(Vec::new())),
                renders,
            },
            subscription,
        )
    }

    fn type_lead(&self) {
        self.store.update(|form| {
            form.set_field(TextField::Name, "Jasper".into());
            form.set_field(TextField::Phone, "0201234567".into());
            form.set_consent(true);
        });
    }

    /// Submit click: validate, and hand the payload to the transport
    /// if validation passed.
    fn click_submit(&self) -> bool {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 14, 0, 0).unwrap();
        let mut payload = None;
        self.store
            .update(|form| payload = form.begin_submit(now).ok());
        match payload {
            Some(payload) => {
                self.sent.borrow_mut().push(payload);
                true
            }
            None => false,
        }
    }

    /// The request's completion event arrives.
    fn complete(&self, outcome: Result<(), SubmissionError>) {
        self.store.update(|form| form.finish_submit(outcome));
    }
}

#[test]
fn validation_failure_issues_no_request() {
    let (harness, _sub) = Harness::new();
    assert!(!harness.click_submit());
    assert!(harness.sent.borrow().is_empty());
    assert_eq!(
        harness.store.with(|f| f.status().clone()),
        SubmissionStatus::Idle
    );
    assert!(harness.store.with(|f| f.error().is_some()));
}

#[test]
fn successful_round_trip_resets_the_form() {
    let (harness, _sub) = Harness::new();
    harness.type_lead();
    assert!(harness.click_submit());
    assert_eq!(harness.sent.borrow().len(), 1);
    assert_eq!(harness.sent.borrow()[0].name, "Jasper");
    harness.complete(Ok(()));
    harness.store.with(|form| {
        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
        assert!(form.fields().name.is_empty());
        assert!(!form.fields().consent);
    });
}

#[test]
fn failed_round_trip_preserves_input_for_a_retry() {
    let (harness, _sub) = Harness::new();
    harness.type_lead();
    assert!(harness.click_submit());
    harness.complete(Err(SubmissionError::Rejected(502)));
    harness.store.with(|form| {
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));
        assert_eq!(form.fields().name, "Jasper");
        assert_eq!(form.fields().phone, "0201234567");
        assert!(form.fields().consent);
    });
    // Retry is one more explicit click; a second request goes out.
    assert!(harness.click_submit());
    assert_eq!(harness.sent.borrow().len(), 2);
}

#[test]
fn subscribers_see_every_status_transition() {
    let (harness, _sub) = Harness::new();
    harness.type_lead();
    harness.click_submit();
    harness.complete(Ok(()));
    let renders = harness.renders.borrow();
    assert!(renders.contains(&SubmissionStatus::Submitting));
    assert_eq!(renders.last(), Some(&SubmissionStatus::Succeeded));
}
