use super::form_binding::{field_error, field_setter, field_value, phase, submit_after_delay};
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::latency::MountGuard;
use contracts::shared::validation::{ContactForm, FormState, SubmitPhase};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let delay_ms = use_app_context().delay(|c| c.delays.contact_ms);
    let guard = MountGuard::new();
    let state = RwSignal::new(FormState::<ContactForm>::new());
    let phase = phase(state);

    let send = Callback::new(move |_: ()| submit_after_delay(state, &guard, delay_ms, true));

    view! {
        <div class="contact">
            <section class="page-hero">
                <h1>"Get In Touch"</h1>
                <p>"Have questions about our tours? We'd love to hear from you."</p>
            </section>

            <section class="section section--split">
                <div class="contact__form">
                    <Show
                        when=move || phase.get() != SubmitPhase::Succeeded
                        fallback=move || view! {
                            <div class="success-card">
                                <h2>"Message Sent!"</h2>
                                <p>"Thank you for contacting us. We'll get back to you within 24 hours."</p>
                                <button
                                    class="button button--primary"
                                    on:click=move |_| state.update(|s| s.start_over())
                                >
                                    "Send Another Message"
                                </button>
                            </div>
                        }
                    >
                        <h2>"Send Message"</h2>
                        <form
                            novalidate
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                send.run(());
                            }
                        >
                            <div class="form__grid">
                                <Input
                                    label="Full Name"
                                    id="name"
                                    value=field_value(state, "name")
                                    on_input=field_setter(state, "name")
                                    error=field_error(state, "name")
                                />
                                <Input
                                    label="Email Address"
                                    id="email"
                                    input_type="email"
                                    value=field_value(state, "email")
                                    on_input=field_setter(state, "email")
                                    error=field_error(state, "email")
                                />
                            </div>
                            <Input
                                label="Subject"
                                id="subject"
                                value=field_value(state, "subject")
                                on_input=field_setter(state, "subject")
                                error=field_error(state, "subject")
                            />
                            <Textarea
                                label="Your Message"
                                id="message"
                                rows=6
                                value=field_value(state, "message")
                                on_input=field_setter(state, "message")
                                error=field_error(state, "message")
                            />
                            <button
                                type="submit"
                                class="button button--primary button--block"
                                disabled=move || phase.get() == SubmitPhase::Submitting
                            >
                                {move || if phase.get() == SubmitPhase::Submitting {
                                    view! { <Spinner size=SpinnerSize::Small/> " Sending..." }.into_any()
                                } else {
                                    "Send Message".into_any()
                                }}
                            </button>
                        </form>
                    </Show>
                </div>

                <aside class="contact__info">
                    <h2>"Contact Info"</h2>
                    <div class="contact__item">
                        <h3>"Address"</h3>
                        <p>"123 Travel Street, Adventure City, AC 12345"</p>
                    </div>
                    <div class="contact__item">
                        <h3>"Phone"</h3>
                        <p>"+1 (555) 123-4567"</p>
                    </div>
                    <div class="contact__item">
                        <h3>"Email"</h3>
                        <p>"info@travelbeyondtours.com"</p>
                    </div>
                    <div class="contact__item">
                        <h3>"Business Hours"</h3>
                        <p>"Monday - Friday: 9:00 AM - 6:00 PM"</p>
                        <p>"Saturday: 10:00 AM - 4:00 PM"</p>
                        <p>"Sunday: Closed"</p>
                    </div>
                </aside>
            </section>
        </div>
    }
}
