use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

/// Fixed tag identifying this site in the webhook payload.
pub const LEAD_SOURCE: &str = "northline-website";

/// Generic failure text shown to the visitor. Transport detail stays
/// in the logs; field values are preserved so nothing has to be
/// re-entered before retrying.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Er ging iets mis. Probeer later opnieuw of mail ons.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub preferred: String,
    pub notes: String,
    pub consent: bool,
}

/// Free-text fields of the lead form. Consent has its own setter since
/// it is the one boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Company,
    Email,
    Phone,
    Preferred,
    Notes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Local, recoverable rejection raised before any network call. Only
/// the first failing rule is surfaced: consent first, then the
/// required name/phone pair.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Vink aan dat we je mogen contacten.")]
    ConsentRequired,
    #[error("Naam en telefoon zijn verplicht.")]
    NameAndPhoneRequired,
}

/// Remote failure: the webhook rejected the lead or the request never
/// completed. Neither variant's detail reaches the visitor.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("webhook responded with status {0}")]
    Rejected(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

/// JSON body POSTed to the webhook: the source tag, every field by
/// name and an ISO-8601 UTC instant captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub source: &'static str,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub preferred: String,
    pub notes: String,
    pub consent: bool,
    pub timestamp: String,
}

/// State of the lead-capture form: field values, submission status and
/// the current banner message (validation or submission failure).
///
/// The async boundary is split in two so the container never holds a
/// borrow across a suspension point: `begin_submit` validates and
/// hands back the payload to send, `finish_submit` applies the
/// outcome once the request's completion event arrives. The controller
/// does not guard against a second `begin_submit` while `Submitting`;
/// the view disables its submit control instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormController {
    fields: FormFields,
    status: SubmissionStatus,
    error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Set one free-text field. No validation happens here. Editing a
    /// field after a successful submission clears the success note;
    /// nothing expires it on a timer.
    pub fn set_field(&mut self, field: TextField, value: String) {
        match field {
            TextField::Name => self.fields.name = value,
            TextField::Company => self.fields.company = value,
            TextField::Email => self.fields.email = value,
            TextField::Phone => self.fields.phone = value,
            TextField::Preferred => self.fields.preferred = value,
            TextField::Notes => self.fields.notes = value,
        }
        self.clear_success();
    }

    pub fn set_consent(&mut self, value: bool) {
        self.fields.consent = value;
        self.clear_success();
    }

    fn clear_success(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Fail-fast check in fixed priority order; at most one error is
    /// reported per attempt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.fields.consent {
            return Err(ValidationError::ConsentRequired);
        }
        if self.fields.name.is_empty() || self.fields.phone.is_empty() {
            return Err(ValidationError::NameAndPhoneRequired);
        }
        Ok(())
    }

    /// Validate and, if the form is valid, move to `Submitting` and
    /// return the payload to POST. On a validation error the status is
    /// left untouched, the banner is set and no payload is produced,
    /// so the caller issues no request.
    ///
    /// `now` is captured per attempt; a retry gets a fresh timestamp.
    /// Resubmission is allowed from any prior status.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<LeadPayload, ValidationError> {
        self.error = None;
        if let Err(err) = self.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(LeadPayload {
            source: LEAD_SOURCE,
            name: self.fields.name.clone(),
            company: self.fields.company.clone(),
            email: self.fields.email.clone(),
            phone: self.fields.phone.clone(),
            preferred: self.fields.preferred.clone(),
            notes: self.fields.notes.clone(),
            consent: self.fields.consent,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Apply the request's completion event. Success resets every
    /// field to its initial value; failure keeps them all and surfaces
    /// only the generic message.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.error = None;
                self.fields = FormFields::default();
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed");
                self.status = SubmissionStatus::Failed(SUBMISSION_FAILED_MESSAGE.to_string());
                self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submit_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap()
    }

    fn filled_form() -> FormController {
        let mut form = FormController::new();
        form.set_field(TextField::Name, "Marieke de Vries".into());
        form.set_field(TextField::Phone, "0612345678".into());
        form.set_consent(true);
        form
    }

    #[test]
    fn missing_consent_wins_over_missing_name_and_phone() {
        let mut form = FormController::new();
        let err = form.begin_submit(submit_time()).unwrap_err();
        assert_eq!(err, ValidationError::ConsentRequired);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.error(), Some("Vink aan dat we je mogen contacten."));
    }

    #[test]
    fn missing_name_is_reported_after_consent() {
        let mut form = FormController::new();
        form.set_consent(true);
        form.set_field(TextField::Phone, "0612345678".into());
        let err = form.begin_submit(submit_time()).unwrap_err();
        assert_eq!(err, ValidationError::NameAndPhoneRequired);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn valid_form_moves_to_submitting_and_emits_the_payload() {
        let mut form = filled_form();
        form.set_field(TextField::Notes, "Salon, veel gemiste oproepen".into());
        let payload = form.begin_submit(submit_time()).unwrap();
        assert!(form.is_submitting());
        assert_eq!(payload.source, LEAD_SOURCE);
        assert_eq!(payload.name, "Marieke de Vries");
        assert_eq!(payload.timestamp, "2026-08-30T09:30:00.000Z");
        assert!(payload.consent);
    }

    #[test]
    fn payload_serializes_every_field_by_name() {
        let mut form = filled_form();
        let payload = form.begin_submit(submit_time()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        for key in [
            "source",
            "name",
            "company",
            "email",
            "phone",
            "preferred",
            "notes",
            "consent",
            "timestamp",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["source"], "northline-website");
    }

    #[test]
    fn each_attempt_recomputes_the_timestamp() {
        let mut form = filled_form();
        let first = form.begin_submit(submit_time()).unwrap();
        form.finish_submit(Err(SubmissionError::Transport("timed out".into())));
        let later = Utc.with_ymd_and_hms(2026, 8, 30, 9, 31, 0).unwrap();
        let second = form.begin_submit(later).unwrap();
        assert_ne!(first.timestamp, second.timestamp);
    }

    #[test]
    fn success_resets_the_fields() {
        let mut form = filled_form();
        form.begin_submit(submit_time()).unwrap();
        form.finish_submit(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
        assert_eq!(form.fields(), &FormFields::default());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn failure_keeps_the_fields_and_hides_the_detail() {
        let mut form = filled_form();
        form.set_field(TextField::Email, "marieke@salon.nl".into());
        form.begin_submit(submit_time()).unwrap();
        form.finish_submit(Err(SubmissionError::Rejected(500)));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed(SUBMISSION_FAILED_MESSAGE.to_string())
        );
        assert_eq!(form.fields().email, "marieke@salon.nl");
        assert_eq!(form.fields().name, "Marieke de Vries");
        let banner = form.error().unwrap();
        assert!(!banner.contains("500"));
        assert_eq!(banner, SUBMISSION_FAILED_MESSAGE);
    }

    #[test]
    fn resubmission_is_allowed_after_failure_and_success() {
        let mut form = filled_form();
        form.begin_submit(submit_time()).unwrap();
        form.finish_submit(Err(SubmissionError::Transport("offline".into())));
        assert!(form.begin_submit(submit_time()).is_ok());
        form.finish_submit(Ok(()));
        // Succeeded leaves the form empty, so a new attempt needs new
        // input, but nothing blocks it once the fields are refilled.
        let mut form = filled_form();
        form.begin_submit(submit_time()).unwrap();
        form.finish_submit(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
    }

    #[test]
    fn editing_a_field_clears_the_success_note() {
        let mut form = filled_form();
        form.begin_submit(submit_time()).unwrap();
        form.finish_submit(Ok(()));
        form.set_field(TextField::Name, "J".into());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }
}
