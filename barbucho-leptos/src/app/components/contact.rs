use std::time::Duration;

use barbucho_state::contact::ContactField;
use barbucho_state::contact::ContactForm;
use barbucho_state::contact::SubmissionState;
use barbucho_state::contact::SubmitAttempt;
use barbucho_state::delivery::ContactDelivery;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use tracing::warn;
use web_sys::SubmitEvent;

use crate::app::delivery::SimulatedDelivery;
use crate::app::global_state::GlobalState;
use crate::app::utils::SectionUrl;

/// How long the success check stays up before the fields are cleared.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(2_000);

/// The contact form: field state, validation on submit, the delivery
/// round-trip and the timed reset all live here. The inputs are disabled
/// while a submission is in flight or settling, so re-entry is blocked
/// both in the UI and in [`ContactForm::begin_submit`].
#[component]
pub fn ContactSection() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let form = create_rw_signal(ContactForm::new());
    let reset_timer: StoredValue<Option<TimeoutHandle>> = store_value(None);

    // The settle timer must not outlive this section.
    on_cleanup(move || {
        if let Some(handle) = reset_timer.get_value() {
            handle.clear();
        }
    });

    let on_edit = move |field: ContactField| {
        move |ev: web_sys::Event| {
            form.update(|f| f.edit(field, event_target_value(&ev)));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(attempt) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let SubmitAttempt::Accepted(payload) = attempt else {
            return;
        };

        spawn_local(async move {
            let outcome = SimulatedDelivery.deliver(&payload).await;
            let delivered = outcome.is_ok();
            // try_update: the section may be gone by the time the
            // delivery resolves.
            if form.try_update(|f| f.complete(outcome)).is_none() {
                return;
            }
            if !delivered {
                return;
            }

            global_state.notify("Mensagem enviada!", "Entraremos em contato em breve.");

            match set_timeout_with_handle(
                move || {
                    let _ = form.try_update(|f| f.settle());
                },
                SUCCESS_RESET_DELAY,
            ) {
                Ok(handle) => {
                    let _ = reset_timer.try_set_value(Some(handle));
                }
                Err(err) => warn!("failed to schedule form reset: {:?}", err),
            }
        });
    };

    let inputs_locked = move || form.with(|f| !f.accepts_input());
    let field_error = move |field: ContactField| form.with(move |f| f.errors().get(field));
    let input_class = move |field: ContactField| {
        format!(
            "w-full px-4 py-3 rounded-lg bg-dark-night/50 border {} focus:outline-none focus:border-neon-cyan transition-colors",
            if field_error(field).is_some() {
                "border-red-500"
            } else {
                "border-warm-white/20"
            }
        )
    };

    let submit_label = move || {
        form.with(|f| match f.state() {
            SubmissionState::Idle => "Enviar Mensagem",
            SubmissionState::Submitting => "Enviando...",
            SubmissionState::Success => "Enviado!",
            SubmissionState::Failed(_) => "Tentar Novamente",
        })
    };

    let delivery_error = move || {
        form.with(|f| match f.state() {
            SubmissionState::Failed(err) => Some(err.to_string()),
            _ => None,
        })
    };

    view! {
        <section id=SectionUrl::Contato.id() class="py-24 relative overflow-hidden">
            <div class="neon-line absolute top-0 left-0 right-0"></div>

            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="text-neon-cyan font-display text-sm uppercase tracking-widest mb-4 block">"Contato"</span>
                    <h2 class="font-display text-4xl md:text-5xl font-bold mb-4">
                        "Fale " <span class="gradient-text">"Conosco"</span>
                    </h2>
                    <p class="text-warm-white/60 text-lg max-w-2xl mx-auto">
                        "Dúvidas, sugestões ou reservas? Entre em contato pelo formulário abaixo"
                    </p>
                </div>

                <div class="max-w-xl mx-auto">
                    <form on:submit=on_submit class="glass-card p-8 space-y-6">
                        <div>
                            <label for="contact_name" class="block text-sm font-medium mb-2">"Nome"</label>
                            <input
                                id="contact_name"
                                name="name"
                                type="text"
                                placeholder="Seu nome completo"
                                prop:value=move || form.with(|f| f.fields().name.clone())
                                on:input=on_edit(ContactField::Name)
                                disabled=inputs_locked
                                class=move || input_class(ContactField::Name)
                            />
                            <Show when=move || field_error(ContactField::Name).is_some()>
                                <p class="text-sm text-red-500 mt-1">{move || field_error(ContactField::Name)}</p>
                            </Show>
                        </div>

                        <div>
                            <label for="contact_phone" class="block text-sm font-medium mb-2">"Telefone / WhatsApp"</label>
                            <input
                                id="contact_phone"
                                name="phone"
                                type="tel"
                                placeholder="(11) 99999-9999"
                                prop:value=move || form.with(|f| f.fields().phone.clone())
                                on:input=on_edit(ContactField::Phone)
                                disabled=inputs_locked
                                class=move || input_class(ContactField::Phone)
                            />
                            <Show when=move || field_error(ContactField::Phone).is_some()>
                                <p class="text-sm text-red-500 mt-1">{move || field_error(ContactField::Phone)}</p>
                            </Show>
                        </div>

                        <div>
                            <label for="contact_message" class="block text-sm font-medium mb-2">"Mensagem"</label>
                            <textarea
                                id="contact_message"
                                name="message"
                                rows="4"
                                placeholder="Escreva sua mensagem..."
                                prop:value=move || form.with(|f| f.fields().message.clone())
                                on:input=on_edit(ContactField::Message)
                                disabled=inputs_locked
                                class=move || format!("{} resize-none", input_class(ContactField::Message))
                            ></textarea>
                            <Show when=move || field_error(ContactField::Message).is_some()>
                                <p class="text-sm text-red-500 mt-1">{move || field_error(ContactField::Message)}</p>
                            </Show>
                        </div>

                        <Show when=move || delivery_error().is_some()>
                            <p class="text-sm text-red-500 text-center">{delivery_error}</p>
                        </Show>

                        <button
                            type="submit"
                            disabled=move || form.with(|f| matches!(f.state(), SubmissionState::Submitting | SubmissionState::Success))
                            class=move || format!(
                                "w-full py-4 rounded-lg font-display font-semibold text-lg uppercase tracking-wider transition-all duration-300 {}",
                                form.with(|f| match f.state() {
                                    SubmissionState::Success => "bg-green-500 text-dark-night",
                                    SubmissionState::Submitting => "neon-button-magenta opacity-60 cursor-wait",
                                    _ => "neon-button-magenta",
                                })
                            )
                        >
                            {submit_label}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
