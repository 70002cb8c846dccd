use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::components::toast::{use_toasts, ToastKind};
use crate::config::{CONTACT_EMAIL, PHONE_NUMBER, SUCCESS_RESET_MS};
use crate::contact::form::{ContactFormState, SubmissionStatus, SubmitBlocked};
use crate::contact::submit::{submit_contact, ContactRequest};
use crate::contact::validation::{Field, ServiceType, MESSAGE_MAX_LENGTH, NAME_MAX_LENGTH};
use crate::i18n::{Dictionary, Locale};

pub enum FormAction {
    Input(Field, String),
    Blur(Field),
    Replace(ContactFormState),
    Finished(bool),
    AcknowledgeSuccess,
}

#[derive(Clone, PartialEq)]
pub struct FormModel(ContactFormState);

impl Default for FormModel {
    fn default() -> Self {
        FormModel(ContactFormState::new())
    }
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            FormAction::Input(field, value) => state.set_value(field, value),
            FormAction::Blur(field) => state.touch(field),
            FormAction::Replace(next) => state = next,
            FormAction::Finished(succeeded) => state.finish_submit(succeeded),
            FormAction::AcknowledgeSuccess => state.acknowledge_success(),
        }
        Rc::new(FormModel(state))
    }
}

fn field_label(field: Field, dict: &Dictionary) -> &'static str {
    let form = &dict.contact.form;
    match field {
        Field::Name => form.name,
        Field::Phone => form.phone,
        Field::Email => form.email,
        Field::ServiceType => form.service_type,
        Field::Message => form.message,
    }
}

fn field_placeholder(field: Field, dict: &Dictionary) -> &'static str {
    let form = &dict.contact.form;
    match field {
        Field::Name => form.name_placeholder,
        Field::Phone => form.phone_placeholder,
        Field::Email => form.email_placeholder,
        Field::ServiceType => form.service_type_placeholder,
        Field::Message => form.message_placeholder,
    }
}

fn input_class(state: &ContactFormState, field: Field) -> &'static str {
    if state.visible_error(field).is_some() {
        "form-input invalid"
    } else if state.is_field_valid(field) {
        "form-input valid"
    } else {
        "form-input"
    }
}

fn render_indicator(state: &ContactFormState, field: Field) -> Html {
    if !state.is_touched(field) {
        return html! {};
    }
    if state.visible_error(field).is_some() {
        html! { <span class="field-indicator error">{"✕"}</span> }
    } else if !state.value(field).trim().is_empty() {
        html! { <span class="field-indicator ok">{"✓"}</span> }
    } else {
        html! {}
    }
}

fn render_error(state: &ContactFormState, field: Field, dict: &Dictionary) -> Html {
    match state.visible_error(field) {
        Some(err) => html! {
            <p class="field-error" id={format!("{}-error", field.id())}>{ err.message(field, dict) }</p>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub locale: Locale,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let dict = props.locale.dictionary();
    let form = use_reducer(FormModel::default);
    let toasts = use_toasts();
    let state = &form.0;

    // success -> idle after the confirmation has been visible for a while
    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |status| {
                let timeout = (*status == SubmissionStatus::Success).then(|| {
                    Timeout::new(SUCCESS_RESET_MS, move || dispatcher.dispatch(FormAction::AcknowledgeSuccess))
                });
                move || drop(timeout)
            },
            state.status(),
        );
    }

    let on_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(FormAction::Input(field, value));
        })
    };

    let on_blur = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(FormAction::Blur(field)))
    };

    let on_service_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Input(Field::ServiceType, select.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let locale = props.locale;
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = form.0.clone();
            let result = next.begin_submit();
            match result {
                Err(SubmitBlocked::AlreadySubmitting) => return,
                Err(SubmitBlocked::Invalid(count)) => {
                    log::info!("Contact form blocked: {}", SubmitBlocked::Invalid(count));
                    form.dispatch(FormAction::Replace(next));
                }
                Ok(contact) => {
                    form.dispatch(FormAction::Replace(next));
                    let dispatcher = form.dispatcher();
                    let toasts = toasts.clone();
                    let dict = locale.dictionary();
                    let request = ContactRequest::new(contact, locale);
                    spawn_local(async move {
                        let outcome = submit_contact(&request).await;
                        if let Err(e) = &outcome {
                            log::error!("Contact submission failed: {}", e);
                        }
                        if let Some(toasts) = toasts {
                            match outcome {
                                Ok(()) => toasts.show(dict.contact.form.success, ToastKind::Success),
                                Err(_) => toasts.show(dict.contact.form.error, ToastKind::Error),
                            }
                        }
                        dispatcher.dispatch(FormAction::Finished(outcome.is_ok()));
                    });
                }
            }
        })
    };

    let message_len = state.value(Field::Message).chars().count();
    let near_limit = message_len * 10 > MESSAGE_MAX_LENGTH * 9;

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section { padding: 5rem 1rem; background: linear-gradient(to bottom, #f9fafb, #fff); }
                .contact-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-detail {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }
                .contact-detail:hover { transform: translateX(8px); border-color: #fca5a5; }
                .contact-response {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    border-radius: 16px;
                    color: #fff;
                    background: linear-gradient(135deg, #dc2626, #b91c1c);
                }
                .form-group { margin-bottom: 1.5rem; }
                .form-group label { display: block; font-weight: 600; font-size: 0.875rem; margin-bottom: 0.5rem; color: #111827; }
                .form-label-row { display: flex; justify-content: space-between; align-items: center; }
                .char-count { font-size: 0.75rem; color: #6b7280; }
                .char-count.near-limit { color: #dc2626; font-weight: 600; }
                .form-field { position: relative; }
                .form-input {
                    width: 100%;
                    padding: 0.75rem 3rem 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                    outline: none;
                    background: #fff;
                    box-sizing: border-box;
                }
                .form-input:focus { box-shadow: 0 0 0 2px rgba(220, 38, 38, 0.4); }
                .form-input.invalid { border-color: #fca5a5; }
                .form-input.valid { border-color: #86efac; }
                textarea.form-input { resize: none; padding-right: 1rem; }
                .field-indicator { position: absolute; right: 0.75rem; top: 50%; transform: translateY(-50%); font-weight: 700; }
                .field-indicator.error { color: #dc2626; }
                .field-indicator.ok { color: #16a34a; }
                .field-error { margin-top: 0.25rem; font-size: 0.875rem; color: #dc2626; }
                .submit-button {
                    width: 100%;
                    padding: 1rem 2rem;
                    background: #dc2626;
                    color: #fff;
                    font-weight: 600;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .submit-button:hover { background: #b91c1c; }
                .submit-button:disabled { background: #9ca3af; cursor: not-allowed; }
                .spinner {
                    width: 20px;
                    height: 20px;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .form-status { margin-top: 1rem; padding: 1rem; border-radius: 8px; font-size: 0.875rem; font-weight: 500; }
                .form-status.success { background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; }
                .form-status.error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="section-header">
                <h2>{ dict.contact.title }</h2>
                <p>{ dict.contact.subtitle }</p>
            </div>
            <div class="contact-grid">
                <div class="contact-info">
                    <h3>{ dict.contact.info_title }</h3>
                    <div class="contact-detail">
                        <span>{"📞"}</span>
                        <div>
                            <p><strong>{ dict.contact.form.phone }</strong></p>
                            <p>{ PHONE_NUMBER }</p>
                        </div>
                    </div>
                    <div class="contact-detail">
                        <span>{"✉️"}</span>
                        <div>
                            <p><strong>{ dict.contact.form.email }</strong></p>
                            <p>{ CONTACT_EMAIL }</p>
                        </div>
                    </div>
                    <div class="contact-detail">
                        <span>{"📍"}</span>
                        <div>
                            <p><strong>{ dict.contact.info_title }</strong></p>
                            <p>{ dict.contact.address }</p>
                        </div>
                    </div>
                    <div class="contact-response">
                        <h4>{ dict.contact.response_title }</h4>
                        <p>{ dict.contact.response_description }</p>
                    </div>
                </div>

                <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                    { for [(Field::Name, "text"), (Field::Phone, "tel"), (Field::Email, "email")].into_iter().map(|(field, kind)| html! {
                        <div class="form-group">
                            <label for={field.id()}>{ field_label(field, dict) }</label>
                            <div class="form-field">
                                <input
                                    type={kind}
                                    id={field.id()}
                                    name={field.id()}
                                    class={input_class(state, field)}
                                    value={state.value(field).to_string()}
                                    placeholder={field_placeholder(field, dict)}
                                    maxlength={(field == Field::Name).then(|| NAME_MAX_LENGTH.to_string())}
                                    oninput={on_input(field)}
                                    onblur={on_blur(field)}
                                />
                                { render_indicator(state, field) }
                            </div>
                            { render_error(state, field, dict) }
                        </div>
                    }) }

                    <div class="form-group">
                        <label for={Field::ServiceType.id()}>{ field_label(Field::ServiceType, dict) }</label>
                        <div class="form-field">
                            <select
                                id={Field::ServiceType.id()}
                                name={Field::ServiceType.id()}
                                class={input_class(state, Field::ServiceType)}
                                onchange={on_service_change}
                                onblur={on_blur(Field::ServiceType)}
                            >
                                <option value="" selected={state.value(Field::ServiceType).is_empty()}>
                                    { field_placeholder(Field::ServiceType, dict) }
                                </option>
                                { for ServiceType::ALL.into_iter().map(|service| html! {
                                    <option
                                        value={service.value()}
                                        selected={state.value(Field::ServiceType) == service.value()}
                                    >
                                        { service.label(&dict.contact.service_types) }
                                    </option>
                                }) }
                            </select>
                            { render_indicator(state, Field::ServiceType) }
                        </div>
                        { render_error(state, Field::ServiceType, dict) }
                    </div>

                    <div class="form-group">
                        <div class="form-label-row">
                            <label for={Field::Message.id()}>{ field_label(Field::Message, dict) }</label>
                            <span class={classes!("char-count", near_limit.then(|| "near-limit"))}>
                                { format!("{}/{}", message_len, MESSAGE_MAX_LENGTH) }
                            </span>
                        </div>
                        <div class="form-field">
                            <textarea
                                id={Field::Message.id()}
                                name={Field::Message.id()}
                                rows="5"
                                class={input_class(state, Field::Message)}
                                value={state.value(Field::Message).to_string()}
                                placeholder={field_placeholder(Field::Message, dict)}
                                maxlength={MESSAGE_MAX_LENGTH.to_string()}
                                oninput={on_input(Field::Message)}
                                onblur={on_blur(Field::Message)}
                            />
                        </div>
                        { render_error(state, Field::Message, dict) }
                    </div>

                    <button type="submit" class="submit-button" disabled={state.is_submitting()}>
                        if state.is_submitting() {
                            <span class="spinner"></span>
                            { dict.contact.form.submitting }
                        } else {
                            { dict.contact.form.submit }{" ➤"}
                        }
                    </button>

                    {
                        match state.status() {
                            SubmissionStatus::Success => html! {
                                <div class="form-status success" role="status">{"✔ "}{ dict.contact.form.success }</div>
                            },
                            SubmissionStatus::Error => html! {
                                <div class="form-status error" role="alert">{"⚠ "}{ dict.contact.form.error }</div>
                            },
                            _ => html! {},
                        }
                    }
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_drives_the_submission_lifecycle() {
        let model = Rc::new(FormModel::default());
        let model = model
            .reduce(FormAction::Input(Field::Name, "John Doe".to_string()))
            .reduce(FormAction::Input(Field::Phone, "0905 123 456".to_string()))
            .reduce(FormAction::Input(Field::Email, "john@example.com".to_string()))
            .reduce(FormAction::Input(Field::ServiceType, "mobile".to_string()))
            .reduce(FormAction::Input(Field::Message, "Need new steer tires".to_string()));

        let mut next = model.0.clone();
        next.begin_submit().unwrap();
        let model = model.reduce(FormAction::Replace(next));
        assert_eq!(model.0.status(), SubmissionStatus::Submitting);

        let model = model.reduce(FormAction::Finished(true));
        assert_eq!(model.0.status(), SubmissionStatus::Success);
        assert_eq!(model.0.value(Field::Name), "");

        let model = model.reduce(FormAction::AcknowledgeSuccess);
        assert_eq!(model.0.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn blur_reveals_the_error() {
        let model = Rc::new(FormModel::default())
            .reduce(FormAction::Input(Field::Phone, "123".to_string()))
            .reduce(FormAction::Blur(Field::Phone));
        assert!(model.0.visible_error(Field::Phone).is_some());
        assert_eq!(input_class(&model.0, Field::Phone), "form-input invalid");
        assert_eq!(input_class(&model.0, Field::Name), "form-input");
    }
}
