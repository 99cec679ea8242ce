use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::behaviors::contact::{
    ContactDraft, Field, SubmissionFlow, SubmissionView, SubmitOutcome, SubmitPhase,
    ValidationReport,
};
use crate::behaviors::timers::GlooTimers;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submit_delay_ms: u32,
    pub success_dismiss_ms: u32,
}

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

struct FormState {
    phase: UseStateHandle<SubmitPhase>,
    draft: UseStateHandle<ContactDraft>,
}

impl SubmissionView for FormState {
    fn show_phase(&mut self, phase: SubmitPhase) {
        self.phase.set(phase);
    }

    fn clear_form(&mut self) {
        self.draft.set(ContactDraft::default());
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let report = use_state(ValidationReport::default);
    let phase = use_state(|| SubmitPhase::Idle);
    let flow = {
        let view = FormState {
            phase: phase.clone(),
            draft: draft.clone(),
        };
        use_memo(
            move |(send_ms, dismiss_ms)| {
                SubmissionFlow::new(view, GlooTimers, *send_ms, *dismiss_ms)
            },
            (props.submit_delay_ms, props.success_dismiss_ms),
        )
    };

    let on_field = |field: Field| {
        let draft = draft.clone();
        let report = report.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.set(field, input_value(&e));
            draft.set(next);

            if report.error(field).is_some() {
                let mut cleared = (*report).clone();
                cleared.clear(field);
                report.set(cleared);
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let report = report.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match flow.submit(&draft) {
                SubmitOutcome::Busy => {}
                SubmitOutcome::Invalid(checked) => report.set(checked),
                SubmitOutcome::Accepted => report.set(ValidationReport::default()),
            }
        })
    };

    let field_class = |field: Field| classes!("form-group", report.error(field).map(|_| "invalid"));
    let field_error = |field: Field| match report.error(field) {
        Some(error) => html! { <span class="field-error" role="alert">{error.to_string()}</span> },
        None => html! {},
    };
    let sending = *phase == SubmitPhase::Sending;

    html! {
        <form class="contact-form fade-in-up" novalidate={true} {onsubmit}>
            <div class={field_class(Field::Name)}>
                <label for="contact-name">{"الاسم"}</label>
                <input
                    id="contact-name"
                    type="text"
                    value={draft.name.clone()}
                    oninput={on_field(Field::Name)}
                    aria-invalid={report.error(Field::Name).is_some().to_string()}
                />
                { field_error(Field::Name) }
            </div>
            <div class={field_class(Field::Email)}>
                <label for="contact-email">{"البريد الإلكتروني"}</label>
                <input
                    id="contact-email"
                    type="email"
                    dir="ltr"
                    value={draft.email.clone()}
                    oninput={on_field(Field::Email)}
                    aria-invalid={report.error(Field::Email).is_some().to_string()}
                />
                { field_error(Field::Email) }
            </div>
            <div class={field_class(Field::Phone)}>
                <label for="contact-phone">{"رقم الجوال (اختياري)"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    dir="ltr"
                    value={draft.phone.clone()}
                    oninput={on_field(Field::Phone)}
                    aria-invalid={report.error(Field::Phone).is_some().to_string()}
                />
                { field_error(Field::Phone) }
            </div>
            <div class={field_class(Field::Message)}>
                <label for="contact-message">{"رسالتك"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    value={draft.message.clone()}
                    oninput={on_field(Field::Message)}
                    aria-invalid={report.error(Field::Message).is_some().to_string()}
                />
                { field_error(Field::Message) }
            </div>
            <button type="submit" class="btn btn-primary" disabled={sending}>
                { if sending { "جارٍ الإرسال..." } else { "أرسل الطلب" } }
            </button>
            {
                if *phase == SubmitPhase::Sent {
                    html! {
                        <p class="form-success" role="status">
                            {"شكراً لتواصلك معنا! سنرد عليك خلال يوم عمل واحد."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
