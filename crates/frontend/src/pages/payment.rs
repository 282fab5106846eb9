use super::form_binding::{
    field_error, field_setter, field_value, phase, submit_after_delay, FormSignal,
};
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Input, Select};
use crate::shared::latency::MountGuard;
use contracts::shared::validation::{FormState, PaymentForm, SubmitPhase, COUNTRIES};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

fn payment_field(
    state: FormSignal<PaymentForm>,
    label: &'static str,
    name: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <Input
            label=label
            id=name
            input_type=input_type
            placeholder=placeholder
            value=field_value(state, name)
            on_input=field_setter(state, name)
            error=field_error(state, name)
        />
    }
}

fn country_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select Country".to_string())];
    options.extend(
        COUNTRIES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string())),
    );
    options
}

/// Оплата бронирования. Сумма берётся из конфигурации, а не из выбранного тура.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let ctx = use_app_context();
    let delay_ms = ctx.delay(|c| c.delays.payment_ms);
    let summary = ctx.config.with_value(|c| c.payment.clone());
    let total = StoredValue::new(summary.format(summary.total_cents()));
    let lines = StoredValue::new(
        summary
            .lines
            .iter()
            .map(|l| (l.label.clone(), summary.format(l.amount_cents)))
            .collect::<Vec<_>>(),
    );

    let guard = MountGuard::new();
    let state = RwSignal::new(FormState::<PaymentForm>::new());
    let phase = phase(state);
    let pay = Callback::new(move |_: ()| submit_after_delay(state, &guard, delay_ms, false));
    let processing = move || phase.get() == SubmitPhase::Submitting;

    view! {
        <div class="payment">
            <Show
                when=move || phase.get() != SubmitPhase::Succeeded
                fallback=move || view! {
                    <div class="success-card">
                        <h2>"Payment Successful!"</h2>
                        <p>
                            "Your booking has been confirmed. You will receive a confirmation email shortly with all the details."
                        </p>
                        <div class="success-card__actions">
                            <A href="/" attr:class="button button--primary">"Return Home"</A>
                            <button
                                class="button button--secondary"
                                on:click=move |_| state.set(FormState::new())
                            >
                                "Make Another Payment"
                            </button>
                        </div>
                    </div>
                }
            >
                <section class="page-hero">
                    <h1>"Secure Payment"</h1>
                    <p>"Complete your booking with our secure payment system"</p>
                </section>

                <section class="section section--split">
                    <form
                        class="payment__form"
                        novalidate
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            pay.run(());
                        }
                    >
                        <h2>"Payment Details"</h2>

                        <h3>"Card Information"</h3>
                        {payment_field(state, "Card Number", "card_number", "1234 5678 9012 3456", "text")}
                        {payment_field(state, "Cardholder Name", "cardholder_name", "John Doe", "text")}
                        <div class="form__grid">
                            {payment_field(state, "Expiry Date", "expiry_date", "MM/YY", "text")}
                            {payment_field(state, "CVV", "cvv", "123", "text")}
                        </div>

                        <h3>"Contact Information"</h3>
                        <div class="form__grid">
                            {payment_field(state, "Email Address", "email", "john@example.com", "email")}
                            {payment_field(state, "Phone Number", "phone", "+1 (555) 123-4567", "tel")}
                        </div>

                        <h3>"Billing Address"</h3>
                        {payment_field(state, "Street Address", "address", "123 Main Street", "text")}
                        <div class="form__grid">
                            {payment_field(state, "City", "city", "New York", "text")}
                            {payment_field(state, "ZIP Code", "zip_code", "10001", "text")}
                            <Select
                                label="Country"
                                id="country"
                                value=field_value(state, "country")
                                on_change=field_setter(state, "country")
                                error=field_error(state, "country")
                                options=country_options()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary button--block"
                            disabled=processing
                        >
                            {move || if processing() {
                                view! { <Spinner size=SpinnerSize::Small/> " Processing Payment..." }.into_any()
                            } else {
                                format!("Pay {}", total.get_value()).into_any()
                            }}
                        </button>
                    </form>

                    <aside class="order-summary">
                        <h2>"Order Summary"</h2>
                        {lines.with_value(|lines| lines.iter().map(|(label, amount)| view! {
                            <div class="order-summary__line">
                                <span>{label.clone()}</span>
                                <span>{amount.clone()}</span>
                            </div>
                        }).collect_view())}
                        <div class="order-summary__line order-summary__line--total">
                            <span>"Total"</span>
                            <span>{total.get_value()}</span>
                        </div>
                        <ul class="order-summary__perks">
                            <li>"Secure SSL encryption"</li>
                            <li>"24/7 customer support"</li>
                            <li>"Free cancellation up to 48h"</li>
                            <li>"Instant confirmation"</li>
                        </ul>
                    </aside>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_options_start_with_placeholder() {
        let options = country_options();
        assert_eq!(options[0].0, "");
        assert_eq!(options.len(), COUNTRIES.len() + 1);
        assert!(options.iter().any(|(code, _)| code == "US"));
    }
}
