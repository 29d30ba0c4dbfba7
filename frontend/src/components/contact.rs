use std::rc::Rc;

use chrono::Utc;
use gloo_console::log;
use northline_core::{FormController, Store, SubmissionStatus, TextField};
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

/// Lead-capture form. The controller lives in a [`Store`]; the
/// component subscribes and mirrors the current snapshot into render
/// state, so the submit handler and the request-completion event both
/// operate on the one authoritative value even while a request is in
/// flight.
#[function_component(Contact)]
pub fn contact() -> Html {
    let store = use_state(|| Rc::new(Store::new(FormController::new())));
    let store: Rc<Store<FormController>> = (*store).clone();
    let snapshot = use_state(|| store.get());

    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let store_for_cb = store.clone();
                let subscription = store.subscribe(Rc::new(move || {
                    snapshot.set(store_for_cb.get());
                }));
                move || drop(subscription)
            },
            (),
        );
    }

    let text_input = |field: TextField| {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.update(|form| form.set_field(field, input.value()));
        })
    };
    let notes_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            store.update(|form| form.set_field(TextField::Notes, input.value()));
        })
    };
    let consent_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.update(|form| form.set_consent(input.checked()));
        })
    };

    let onsubmit = {
        let store = store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Validation and the Submitting transition happen inside the
            // store; only a valid form yields a payload, so an invalid
            // submit issues no request at all.
            let mut payload = None;
            store.update(|form| payload = form.begin_submit(Utc::now()).ok());
            if let Some(payload) = payload {
                let store = store.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = crate::utils::webhook::post_lead(&payload).await;
                    if let Err(err) = &outcome {
                        log!("lead webhook call failed:", err.to_string());
                    }
                    store.update(|form| form.finish_submit(outcome));
                });
            }
        })
    };

    let fields = snapshot.fields().clone();
    let submitting = snapshot.is_submitting();
    let succeeded = snapshot.status() == &SubmissionStatus::Succeeded;

    html! {
        <section id="contact" class="section">
            <div class="container narrow">
                <h2>{"Contact & demo"}</h2>
                <p class="section-sub">{"Vul je gegevens in — we plannen direct een belmoment of demo."}</p>
            </div>
            <div class="container contact-grid">
                <div class="card">
                    <form {onsubmit}>
                        <div class="field-row">
                            <label>
                                {"Naam *"}
                                <input
                                    name="name"
                                    value={fields.name}
                                    oninput={text_input(TextField::Name)}
                                    placeholder="Voor- en achternaam"
                                />
                            </label>
                            <label>
                                {"Bedrijf"}
                                <input
                                    name="company"
                                    value={fields.company}
                                    oninput={text_input(TextField::Company)}
                                    placeholder="Bedrijfsnaam"
                                />
                            </label>
                        </div>
                        <div class="field-row">
                            <label>
                                {"E-mail"}
                                <input
                                    type="email"
                                    name="email"
                                    value={fields.email}
                                    oninput={text_input(TextField::Email)}
                                    placeholder="jij@bedrijf.nl"
                                />
                            </label>
                            <label>
                                {"Telefoon *"}
                                <input
                                    name="phone"
                                    value={fields.phone}
                                    oninput={text_input(TextField::Phone)}
                                    placeholder="06..."
                                />
                            </label>
                        </div>
                        <label>
                            {"Voorkeursmoment"}
                            <input
                                name="preferred"
                                value={fields.preferred}
                                oninput={text_input(TextField::Preferred)}
                                placeholder="Bijv. maandag 10:00"
                            />
                        </label>
                        <label>
                            {"Notities"}
                            <textarea
                                name="notes"
                                rows="4"
                                value={fields.notes}
                                oninput={notes_input}
                                placeholder="Vertel kort over je bedrijf en wensen"
                            />
                        </label>
                        <label class="consent">
                            <input
                                type="checkbox"
                                name="consent"
                                checked={fields.consent}
                                onchange={consent_change}
                            />
                            {"Ik ga akkoord dat Northline Solutions contact met mij opneemt."}
                        </label>
                        if let Some(message) = snapshot.error() {
                            <div class="form-error">{message.to_string()}</div>
                        }
                        <div class="form-actions">
                            <button type="submit" class="button-primary" disabled={submitting}>
                                { if submitting { "Versturen…" } else { "Bel me terug / plan demo" } }
                            </button>
                            if succeeded {
                                <span class="form-success">{"Bedankt! We nemen snel contact op."}</span>
                            }
                        </div>
                    </form>
                </div>
                <div class="card">
                    <h3>{"Wat gebeurt er hierna?"}</h3>
                    <ol>
                        <li>{"We bellen of mailen binnen 1 werkdag terug."}</li>
                        <li>{"Korte intake (15 min) om je wensen door te nemen."}</li>
                        <li>{"We koppelen je agenda en telefonie — binnen 7 dagen live."}</li>
                    </ol>
                    <div class="privacy-note">
                        <strong>{"Privacy & data"}</strong>
                        {" We verwerken alleen wat nodig is om contact op te nemen. \
                          Zie onze privacyverklaring voor details."}
                    </div>
                </div>
            </div>
        </section>
    }
}
