use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Строка поиска с задержкой уведомления.
///
/// Поле обновляется сразу, `on_search` вызывается после паузы ввода
/// (`search.debounce_ms` из конфигурации). Каждое нажатие сбрасывает таймер.
#[component]
pub fn SearchInput(
    /// Текущее значение поиска (для начального заполнения и сброса)
    #[prop(into)]
    value: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let debounce_ms = use_app_context().config.with_value(|c| c.search.debounce_ms);
    let text = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);
    // Последний термин, отправленный через `on_search`
    let emitted = StoredValue::new(value.get_untracked());

    // Внешний сброс (Clear filters) перезаписывает поле; эхо собственного
    // отложенного термина поле не трогает
    Effect::new(move |_| {
        let external = value.get();
        let last = emitted.get_value();
        if let Some(term) = external_override(&external, &last) {
            let _ = pending.try_update_value(Option::take);
            emitted.set_value(term.clone());
            text.set(term);
        }
    });

    // Drop таймера отменяет его
    on_cleanup(move || {
        let _ = pending.try_update_value(Option::take);
    });

    let on_input = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        text.set(term.clone());
        let timer = Timeout::new(debounce_ms, move || {
            emitted.set_value(term.clone());
            on_search.run(term);
        });
        pending.set_value(Some(timer));
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field form__input"
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || text.get()
                on:input=on_input
            />
        </div>
    }
}

/// Значение, которым нужно перезаписать поле; `None`, если внешнее значение
/// совпадает с последним отправленным термином
fn external_override(external: &str, last_emitted: &str) -> Option<String> {
    (external != last_emitted).then(|| external.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_debounced_term_does_not_rewrite_field() {
        // пользователь набрал "bal", отправлено "ba", пришло эхо "ba"
        assert_eq!(external_override("ba", "ba"), None);
    }

    #[test]
    fn test_external_reset_rewrites_field() {
        assert_eq!(external_override("", "bali"), Some(String::new()));
    }
}
