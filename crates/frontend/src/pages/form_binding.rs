//! Привязка полей `FormState` к компонентам формы

use crate::shared::latency::{after_delay, MountGuard};
use contracts::shared::validation::{Form, FormState, SubmitPhase};
use leptos::prelude::*;

pub type FormSignal<F> = RwSignal<FormState<F>>;

pub fn field_value<F>(state: FormSignal<F>, name: &'static str) -> Signal<String>
where
    F: Form + Send + Sync + 'static,
{
    Signal::derive(move || {
        state.with(|s| s.values.field(name).map(str::to_string).unwrap_or_default())
    })
}

pub fn field_error<F>(state: FormSignal<F>, name: &'static str) -> Signal<Option<String>>
where
    F: Form + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.error(name).map(str::to_string)))
}

pub fn field_setter<F>(state: FormSignal<F>, name: &'static str) -> Callback<String>
where
    F: Form + Send + Sync + 'static,
{
    Callback::new(move |value: String| state.update(|s| s.set_field(name, value)))
}

pub fn phase<F>(state: FormSignal<F>) -> Memo<SubmitPhase>
where
    F: Form + Send + Sync + 'static,
{
    Memo::new(move |_| state.with(|s| s.phase))
}

/// Проверить форму и, если она верна, завершить отправку после задержки
pub fn submit_after_delay<F>(state: FormSignal<F>, guard: &MountGuard, delay_ms: u32, reset: bool)
where
    F: Form + Send + Sync + 'static,
{
    let accepted = state.try_update(|s| s.submit()).unwrap_or(false);
    if !accepted {
        log::debug!("form rejected by validation");
        return;
    }
    after_delay(guard, delay_ms, move || state.update(|s| s.complete(reset)));
}
