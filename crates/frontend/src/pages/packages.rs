use super::cards::TourCard;
use super::catalogue::public_store;
use crate::shared::components::ui::{choice_options, facet_filter_options, Select};
use crate::shared::components::SearchInput;
use contracts::domain::a002_tour::aggregate::{Tour, TourCategory, TourSort};
use contracts::domain::a002_tour::seed::seed_tours;
use contracts::domain::common::{Choice, FacetFilter};
use contracts::shared::list_view::{apply_query, ListQuery};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PackagesPage() -> impl IntoView {
    let store = StoredValue::new(public_store(seed_tours()));
    let query = RwSignal::new(ListQuery::<Tour>::default());

    let visible = Memo::new(move |_| {
        query.with(|q| {
            store.with_value(|s| apply_query(s.iter(), q).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let search = Signal::derive(move || query.with(|q| q.search.clone()));
    let category = Signal::derive(move || query.with(|q| q.category.code().to_string()));
    let sort = Signal::derive(move || query.with(|q| q.sort.code().to_string()));

    let on_search = Callback::new(move |term: String| query.update(|q| q.search = term));
    let on_category = Callback::new(move |code: String| {
        query.update(|q| q.category = FacetFilter::from_code(&code))
    });
    let on_sort = Callback::new(move |code: String| {
        query.update(|q| q.sort = TourSort::from_code(&code).unwrap_or_default())
    });

    view! {
        <div class="packages">
            <section class="page-hero">
                <h1>"Tour Packages"</h1>
                <p>"Discover amazing destinations and create unforgettable memories with our carefully curated tour packages."</p>
            </section>

            <section class="section">
                <div class="filter-panel">
                    <div class="filter-panel__search">
                        <SearchInput
                            value=search
                            on_search=on_search
                            placeholder="Search destinations, activities, or tours..."
                        />
                    </div>
                    <Select
                        value=category
                        on_change=on_category
                        options={facet_filter_options::<TourCategory>("All Categories")}
                    />
                    <Select value=sort on_change=on_sort options={choice_options::<TourSort>()}/>
                </div>

                <p class="packages__count">
                    {move || format!("Showing {} of {} tours", visible.get().len(), store.with_value(|s| s.len()))}
                </p>

                {move || {
                    let tours = visible.get();
                    if tours.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3>"No tours found"</h3>
                                <p>"Try adjusting your search or filter criteria"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {tours.into_iter().map(|tour| view! { <TourCard tour=tour/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </section>

            <section class="section section--cta">
                <h2>"Can't Find What You're Looking For?"</h2>
                <p>"Our travel experts can create a custom tour package tailored to your preferences."</p>
                <A href="/contact" attr:class="button button--primary">"Contact Us"</A>
            </section>
        </div>
    }
}
