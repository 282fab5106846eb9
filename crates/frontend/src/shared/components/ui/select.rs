use contracts::domain::common::{Choice, Facet, FacetFilter};
use leptos::prelude::*;

/// Пары (код, подпись) для меню значений
pub fn choice_options<C: Choice>() -> Vec<(String, String)> {
    C::all()
        .iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect()
}

/// Меню фильтра по фасету: "all" и все значения
pub fn facet_filter_options<F: Facet>(all_label: &str) -> Vec<(String, String)> {
    let mut options = vec![(FacetFilter::<F>::ALL_CODE.to_string(), all_label.to_string())];
    options.extend(choice_options::<F>());
    options
}

/// Select component with label support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let val_for_check = val.clone();
                        let is_selected = move || value.get() == val_for_check;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_tour::aggregate::{TourCategory, TourSort};

    #[test]
    fn test_facet_filter_options_start_with_all() {
        let options = facet_filter_options::<TourCategory>("All Categories");
        assert_eq!(options[0], ("all".to_string(), "All Categories".to_string()));
        assert_eq!(options.len(), TourCategory::all().len() + 1);
    }

    #[test]
    fn test_sort_options_follow_menu_order() {
        let codes: Vec<String> = choice_options::<TourSort>().into_iter().map(|(c, _)| c).collect();
        assert_eq!(codes[0], "popular");
        assert_eq!(codes[2], "price-low");
    }
}
