use crate::shared::components::ui::FacetBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use contracts::domain::a002_tour::aggregate::Tour;
use contracts::domain::a004_blog_post::aggregate::BlogPost;
use leptos::prelude::*;
use leptos_router::components::A;

/// Карточка тура со ссылкой на страницу тура
#[component]
pub fn TourCard(tour: Tour) -> impl IntoView {
    let href = format!("/tour/{}", tour.id);

    view! {
        <div class="tour-card">
            <div class="tour-card__image">
                <img src=tour.image.as_str().to_string() alt=tour.title.clone()/>
                <span class="tour-card__rating">{icon("star")}{format!("{:.1}", tour.rating)}</span>
            </div>
            <div class="tour-card__body">
                <div class="tour-card__location">{icon("map-pin")}<span>{tour.location.clone()}</span></div>
                <h3 class="tour-card__title">{tour.title.clone()}</h3>
                <p class="tour-card__description">{tour.description.clone()}</p>
                <div class="tour-card__footer">
                    <div>
                        <span class="tour-card__price">{format!("${}", tour.price)}</span>
                        <span class="tour-card__unit">"/person"</span>
                    </div>
                    <span class="tour-card__duration">{icon("clock")}{tour.duration.clone()}</span>
                </div>
                <A href=href attr:class="button button--primary button--block">"View Details"</A>
            </div>
        </div>
    }
}

#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="blog-card">
            <img class="blog-card__image" src=post.image.as_str().to_string() alt=post.title.clone()/>
            <div class="blog-card__body">
                <div class="blog-card__meta">
                    <FacetBadge value=post.category/>
                    <span>{post.read_time.clone()}</span>
                </div>
                <h3 class="blog-card__title">{post.title.clone()}</h3>
                <p class="blog-card__excerpt">{post.excerpt.clone()}</p>
                <div class="blog-card__footer">
                    <span>{post.author.clone()}</span>
                    <span>{format_date_opt(post.lifecycle.published_at.as_ref())}</span>
                </div>
            </div>
        </article>
    }
}
