use super::catalogue::public_store;
use crate::shared::modal::Modal;
use contracts::domain::a003_gallery_item::aggregate::{GalleryCategory, GalleryItem};
use contracts::domain::a003_gallery_item::seed::seed_gallery_items;
use contracts::domain::common::{Choice, FacetFilter};
use contracts::shared::list_view::{apply_query, ListQuery};
use leptos::prelude::*;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let store = StoredValue::new(public_store(seed_gallery_items()));
    let filter = RwSignal::new(FacetFilter::<GalleryCategory>::All);
    let selected = RwSignal::new(None::<GalleryItem>);

    let visible = Memo::new(move |_| {
        let query = ListQuery::<GalleryItem> {
            category: filter.get(),
            ..Default::default()
        };
        store.with_value(|s| apply_query(s.iter(), &query).into_iter().cloned().collect::<Vec<_>>())
    });

    let filters: Vec<(FacetFilter<GalleryCategory>, &'static str)> =
        std::iter::once((FacetFilter::All, "All"))
            .chain(
                GalleryCategory::all()
                    .iter()
                    .map(|c| (FacetFilter::Only(*c), c.display_name())),
            )
            .collect();

    view! {
        <div class="gallery">
            <section class="page-hero">
                <h1>"Travel Gallery"</h1>
                <p>"Explore stunning moments captured by our travelers around the world."</p>
            </section>

            <section class="section">
                <div class="gallery__filters">
                    {filters.into_iter().map(|(value, label)| view! {
                        <button
                            class="button button--chip"
                            class:button--chip-active=move || filter.get() == value
                            on:click=move |_| filter.set(value)
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>

                {move || {
                    let items = visible.get();
                    if items.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <h3>"No images found"</h3>
                                <p>"Try selecting a different category"</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="gallery__grid">
                            {items.into_iter().map(|item| {
                                let src = item.image.as_str().to_string();
                                let alt = item.alt.clone();
                                let title = item.title.clone();
                                view! {
                                    <figure class="gallery__item" on:click=move |_| selected.set(Some(item.clone()))>
                                        <img src=src alt=alt/>
                                        <figcaption>{title}</figcaption>
                                    </figure>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>

            {move || selected.get().map(|item| view! {
                <Modal title=item.title.clone() on_close=Callback::new(move |_| selected.set(None))>
                    <img class="lightbox__image" src=item.image.as_str().to_string() alt=item.alt.clone()/>
                    <p>{item.description.clone()}</p>
                </Modal>
            })}
        </div>
    }
}
