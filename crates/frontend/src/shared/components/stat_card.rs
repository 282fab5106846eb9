use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка показателя на обзоре админки
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Значение; `None` пока идёт загрузка
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
