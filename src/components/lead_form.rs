use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::lead::{self, FieldEdit, FormStatus, LeadAction, LeadFields, SubmissionController};
use crate::tracking::Tracker;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub tracker: Tracker,
}

/// `oninput` handler copying the value of an `E` element into one form field.
fn bind_field<E: JsCast + AsRef<web_sys::EventTarget> + 'static>(
    fields: &UseReducerDispatcher<LeadFields>,
    edit: fn(String) -> FieldEdit,
    value: fn(&E) -> String,
) -> Callback<InputEvent> {
    let fields = fields.clone();
    Callback::from(move |e: InputEvent| {
        let element: E = e.target_unchecked_into();
        fields.dispatch(LeadAction::Edit(edit(value(&element))));
    })
}

fn input_value(input: &HtmlInputElement) -> String {
    input.value()
}

fn textarea_value(area: &HtmlTextAreaElement) -> String {
    area.value()
}

/// Early-access form in the hero section.
#[function_component(LeadFormCard)]
pub fn lead_form_card(props: &LeadFormProps) -> Html {
    let fields = use_reducer(LeadFields::default);
    let status = use_state(|| FormStatus::Idle);
    let controller = use_mut_ref(SubmissionController::default);
    // Dropping the handle cancels the reset, so unmount and resubmission both clear it
    let pending_reset = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let fields = fields.clone();
        let status = status.clone();
        let controller = controller.clone();
        let pending_reset = pending_reset.clone();
        let tracker = props.tracker.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = fields.to_form();
            if let Err(err) = form.validate() {
                warn!("Lead form not sent: {}", err);
                return;
            }

            let attempt = match controller.borrow_mut().begin() {
                Some(attempt) => attempt,
                None => {
                    debug!("Submission already in flight, ignoring");
                    return;
                }
            };
            pending_reset.borrow_mut().take();
            status.set(FormStatus::Loading);

            let fields = fields.dispatcher();
            let status = status.clone();
            let controller = controller.clone();
            let pending_reset = pending_reset.clone();
            let tracker = tracker.clone();

            spawn_local(async move {
                let outcome = lead::submit(&form).await;
                if !controller.borrow_mut().finish(attempt, &outcome) {
                    debug!("Dropping outcome of superseded attempt {:?}", attempt);
                    return;
                }

                match &outcome {
                    Ok(()) => tracker.lead(),
                    Err(e) => warn!("Lead submission failed: {}", e),
                }
                status.set(controller.borrow().status());
                fields.dispatch(LeadAction::Settled(outcome));

                let reset = {
                    let controller = controller.clone();
                    let status = status.clone();
                    Timeout::new(config::STATUS_RESET_MS, move || {
                        if controller.borrow_mut().expire(attempt) {
                            status.set(FormStatus::Idle);
                        }
                    })
                };
                *pending_reset.borrow_mut() = Some(reset);
            });
        })
    };

    let edits = fields.dispatcher();

    html! {
        <div class="hero-form-wrapper" id="hero-form">
            <h3 class="hero-form-title">{"Solicite Acesso Antecipado"}</h3>
            <p class="hero-form-desc">
                {"Seja um dos primeiros a utilizar nossa plataforma e otimizar sua estratégia fiscal."}
            </p>
            <form class="hero-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Nome Completo"}</label>
                    <input type="text" id="name" name="name" placeholder="Seu nome" required={true}
                        value={fields.name.clone()} oninput={bind_field::<HtmlInputElement>(&edits, FieldEdit::Name, input_value)} />
                </div>
                <div class="form-group">
                    <label for="email">{"E-mail Corporativo"}</label>
                    <input type="email" id="email" name="email" placeholder="seu@empresa.com.br" required={true}
                        value={fields.email.clone()} oninput={bind_field::<HtmlInputElement>(&edits, FieldEdit::Email, input_value)} />
                </div>
                <div class="form-group">
                    <label for="company">{"Empresa"}</label>
                    <input type="text" id="company" name="company" placeholder="Nome da empresa" required={true}
                        value={fields.company.clone()} oninput={bind_field::<HtmlInputElement>(&edits, FieldEdit::Company, input_value)} />
                </div>
                <div class="form-group">
                    <label for="comments">{"Comentários (opcional)"}</label>
                    <textarea id="comments" name="comments" rows="3"
                        placeholder="Conte um pouco sobre a sua empresa"
                        value={fields.comments.clone()}
                        oninput={bind_field::<HtmlTextAreaElement>(&edits, FieldEdit::Comments, textarea_value)} />
                </div>
                <button type="submit" class="btn-submit" disabled={*status == FormStatus::Loading}>
                    {status.button_label()}
                </button>
                {
                    if let Some((class, text)) = status.notice() {
                        html! { <p class={class}>{text}</p> }
                    } else {
                        html! {}
                    }
                }
            </form>
        </div>
    }
}
