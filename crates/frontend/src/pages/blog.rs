use super::cards::BlogCard;
use super::catalogue::public_store;
use crate::shared::components::ui::{choice_options, facet_filter_options, Select};
use crate::shared::components::SearchInput;
use contracts::domain::a004_blog_post::aggregate::{BlogCategory, BlogPost, BlogSort};
use contracts::domain::a004_blog_post::seed::seed_blog_posts;
use contracts::domain::common::{Choice, FacetFilter};
use contracts::shared::list_view::{apply_query, ListQuery};
use leptos::prelude::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    let store = StoredValue::new(public_store(seed_blog_posts()));
    let query = RwSignal::new(ListQuery::<BlogPost>::default());

    let visible = Memo::new(move |_| {
        query.with(|q| {
            store.with_value(|s| apply_query(s.iter(), q).into_iter().cloned().collect::<Vec<_>>())
        })
    });
    let featured = store.with_value(|s| s.iter().find(|p| p.featured).cloned());

    let search = Signal::derive(move || query.with(|q| q.search.clone()));
    let category = Signal::derive(move || query.with(|q| q.category.code().to_string()));
    let sort = Signal::derive(move || query.with(|q| q.sort.code().to_string()));

    view! {
        <div class="blog">
            <section class="page-hero">
                <h1>"Travel Blog"</h1>
                <p>"Stories, tips and inspiration from our travel experts."</p>
            </section>

            {featured.map(|post| view! {
                <section class="section blog__featured">
                    <h2>"Featured Story"</h2>
                    <BlogCard post=post/>
                </section>
            })}

            <section class="section">
                <div class="filter-panel">
                    <div class="filter-panel__search">
                        <SearchInput
                            value=search
                            on_search=Callback::new(move |term: String| query.update(|q| q.search = term))
                            placeholder="Search articles..."
                        />
                    </div>
                    <Select
                        value=category
                        on_change=Callback::new(move |code: String| {
                            query.update(|q| q.category = FacetFilter::from_code(&code))
                        })
                        options={facet_filter_options::<BlogCategory>("All Categories")}
                    />
                    <Select
                        value=sort
                        on_change=Callback::new(move |code: String| {
                            query.update(|q| q.sort = BlogSort::from_code(&code).unwrap_or_default())
                        })
                        options={choice_options::<BlogSort>()}
                    />
                </div>

                {move || {
                    let posts = visible.get();
                    if posts.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3>"No articles found"</h3>
                                <p>"Try adjusting your search or filter criteria"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {posts.into_iter().map(|post| view! { <BlogCard post=post/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}
