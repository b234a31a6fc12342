use crate::dom::event_value;
use crate::i18n::{t, tr};
use petpat_core::constants::SUMMARY_MAX_UNITS;
use petpat_core::{FeedbackForm, FeedbackStatus, Lang, summary_units, truncate_summary};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    /// Pre-filled contents; the form is empty by default.
    #[prop_or_default]
    pub initial: FeedbackForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Summary,
    Message,
}

fn with_field(form: &FeedbackForm, field: Field, value: String) -> FeedbackForm {
    let mut next = form.clone();
    match field {
        Field::Name => next.name = value,
        Field::Email => next.email = value,
        Field::Summary => next.summary = truncate_summary(&value),
        Field::Message => next.message = value,
    }
    next
}

#[function_component(FeedbackFormView)]
pub fn feedback_form_view(p: &Props) -> Html {
    let form = use_state(|| p.initial.clone());
    let status = use_state(FeedbackStatus::default);

    let on_field = |field: Field| {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                form.set(with_field(&form, field, value));
                if matches!(*status, FeedbackStatus::Success | FeedbackStatus::Error) {
                    status.set(FeedbackStatus::Idle);
                }
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FeedbackStatus::Sending {
                return;
            }
            let submission = match form.validate() {
                Ok(submission) => submission,
                Err(err) => {
                    log::warn!("feedback not sent: {err}");
                    return;
                }
            };
            status.set(FeedbackStatus::Sending);
            #[cfg(target_arch = "wasm32")]
            {
                let form = form.clone();
                let status = status.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::api::submit_feedback(&submission).await {
                        Ok(()) => {
                            form.set(FeedbackForm::default());
                            status.set(FeedbackStatus::Success);
                        }
                        Err(err) => {
                            log::error!("feedback submission failed: {err}");
                            status.set(FeedbackStatus::Error);
                        }
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            log::info!("feedback ready: {}", submission.email_subject());
        })
    };

    let sending = *status == FeedbackStatus::Sending;
    let used = summary_units(&form.summary).to_string();
    let max = SUMMARY_MAX_UNITS.to_string();
    let limit = {
        let args = BTreeMap::from([("used", used.as_str()), ("max", max.as_str())]);
        tr("feedback.summary_limit", Some(&args))
    };

    html! {
        <section class="feedback" id="feedback">
            <h2>{ t("feedback.title") }</h2>
            <p>{ t("feedback.desc") }</p>
            <form class="feedback-form" onsubmit={on_submit}>
                <div class="form-row">
                    <label class="control">
                        <span class="control-label">{ t("feedback.name") }</span>
                        <input id="fb-name" type="text" autocomplete="name" value={form.name.clone()} oninput={on_field(Field::Name)} disabled={sending} />
                    </label>
                    <label class="control">
                        <span class="control-label">{ t("feedback.email") }</span>
                        <input id="fb-email" type="email" autocomplete="email" value={form.email.clone()} oninput={on_field(Field::Email)} disabled={sending} />
                    </label>
                </div>
                <label class="control">
                    <span class="control-label">{ t("feedback.summary") }</span>
                    <input
                        id="fb-summary"
                        type="text"
                        placeholder={t("feedback.summary_placeholder")}
                        value={form.summary.clone()}
                        oninput={on_field(Field::Summary)}
                        disabled={sending}
                    />
                    <span class="hint">{ limit }</span>
                </label>
                <label class="control">
                    <span class="control-label">{ t("feedback.message") }</span>
                    <textarea
                        id="fb-message"
                        rows="5"
                        placeholder={t("feedback.message_placeholder")}
                        value={form.message.clone()}
                        oninput={on_field(Field::Message)}
                        disabled={sending}
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled={sending || !form.is_complete()}>
                    { if sending { t("feedback.sending") } else { t("feedback.send") } }
                </button>
                if *status == FeedbackStatus::Success {
                    <p class="notice notice-ok" role="status">{ t("feedback.success") }</p>
                }
                if *status == FeedbackStatus::Error {
                    <p class="notice notice-warn" role="alert">{ t("feedback.error") }</p>
                }
            </form>
        </section>
    }
}
