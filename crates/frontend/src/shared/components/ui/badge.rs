use contracts::domain::common::Facet;
use contracts::enums::BadgeVariant;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional)]
    variant: Option<BadgeVariant>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = variant.unwrap_or(BadgeVariant::Neutral).css_class();

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}

/// Бейдж значения фасета (статус, категория)
#[component]
pub fn FacetBadge<F: Facet>(value: F) -> impl IntoView {
    view! {
        <Badge variant=value.badge()>{value.display_name()}</Badge>
    }
}
