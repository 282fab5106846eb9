//! Раздел "Blog Posts" админки

use crate::shared::components::ui::{choice_options, Checkbox, FacetBadge, Input, Select, Textarea};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_view::fields::{
    draft_flag, draft_value, stage_choice, stage_with, ImageUpload, ImageUrlInput, TagEditor,
};
use crate::shared::list_view::{detail_row, AdminEntity, ControllerSignal};
use contracts::domain::a004_blog_post::aggregate::{BlogCategory, BlogPost, BlogPostDto, BlogStatus};
use contracts::domain::a004_blog_post::seed::seed_blog_posts;
use contracts::domain::common::{Choice, MediaRef};
use leptos::prelude::*;

impl AdminEntity for BlogPost {
    fn icon() -> &'static str {
        "blog"
    }

    fn search_placeholder() -> &'static str {
        "Search posts by title, author, tags..."
    }

    fn seed() -> Vec<Self> {
        seed_blog_posts()
    }

    fn columns() -> &'static [&'static str] {
        &["Post", "Author", "Category", "Status", "Published"]
    }

    fn row(&self) -> AnyView {
        view! {
            <td class="table__cell">
                <div class="entity-cell">
                    <img class="entity-cell__thumb" src=self.image.as_str().to_string() alt=self.title.clone()/>
                    <div>
                        <div class="entity-cell__title">
                            {self.title.clone()}
                            {self.featured.then(|| view! { <span class="entity-cell__featured">{icon("star")}</span> })}
                        </div>
                        <div class="entity-cell__subtitle">{self.read_time.clone()}</div>
                    </div>
                </div>
            </td>
            <td class="table__cell">{self.author.clone()}</td>
            <td class="table__cell"><FacetBadge value=self.category/></td>
            <td class="table__cell"><FacetBadge value=self.status/></td>
            <td class="table__cell">{format_date_opt(self.lifecycle.published_at.as_ref())}</td>
        }
        .into_any()
    }

    fn details(&self) -> AnyView {
        view! {
            <div class="details">
                <img class="details__image" src=self.image.as_str().to_string() alt=self.title.clone()/>
                <p class="details__excerpt">{self.excerpt.clone()}</p>
                <dl class="details__list">
                    {detail_row("Author", self.author.clone())}
                    {detail_row("Category", view! { <FacetBadge value=self.category/> })}
                    {detail_row("Status", view! { <FacetBadge value=self.status/> })}
                    {detail_row("Featured", if self.featured { "Yes" } else { "No" })}
                    {detail_row("Read Time", self.read_time.clone())}
                    {detail_row("Published", format_date_opt(self.lifecycle.published_at.as_ref()))}
                    {detail_row("Slug", self.slug.clone())}
                    {detail_row("Tags", if self.tags.is_empty() { "-".to_string() } else { self.tags.join(", ") })}
                </dl>
                <div class="details__content">{self.content.clone()}</div>
            </div>
        }
        .into_any()
    }

    fn form(ctl: ControllerSignal<Self>) -> AnyView {
        let title = draft_value(ctl, |d: &BlogPostDto| d.title.clone().unwrap_or_default());
        let author = draft_value(ctl, |d: &BlogPostDto| d.author.clone().unwrap_or_default());
        let category = draft_value(ctl, |d: &BlogPostDto| {
            d.category.map(|c| c.code().to_string()).unwrap_or_default()
        });
        let status = draft_value(ctl, |d: &BlogPostDto| {
            d.status.map(|s| s.code().to_string()).unwrap_or_default()
        });
        let read_time = draft_value(ctl, |d: &BlogPostDto| d.read_time.clone().unwrap_or_default());
        let excerpt = draft_value(ctl, |d: &BlogPostDto| d.excerpt.clone().unwrap_or_default());
        let content = draft_value(ctl, |d: &BlogPostDto| d.content.clone().unwrap_or_default());
        let featured = draft_flag(ctl, |d: &BlogPostDto| d.featured.unwrap_or(false));

        view! {
            <div class="form__grid">
                <Input
                    label="Title"
                    value=title
                    on_input=stage_with(ctl, |d: &mut BlogPostDto, v: String| d.title = Some(v))
                />
                <Input
                    label="Author"
                    value=author
                    on_input=stage_with(ctl, |d: &mut BlogPostDto, v: String| d.author = Some(v))
                />
                <Select
                    label="Category"
                    value=category
                    on_change=stage_choice(ctl, |d: &mut BlogPostDto, v: BlogCategory| d.category = Some(v))
                    options={choice_options::<BlogCategory>()}
                />
                <Select
                    label="Status"
                    value=status
                    on_change=stage_choice(ctl, |d: &mut BlogPostDto, v: BlogStatus| d.status = Some(v))
                    options={choice_options::<BlogStatus>()}
                />
                <Input
                    label="Read Time"
                    placeholder="e.g. 5 min read"
                    value=read_time
                    on_input=stage_with(ctl, |d: &mut BlogPostDto, v: String| d.read_time = Some(v))
                />
            </div>
            <ImageUpload ctl=ctl/>
            <ImageUrlInput ctl=ctl/>
            <Textarea
                label="Excerpt"
                rows=2
                value=excerpt
                on_input=stage_with(ctl, |d: &mut BlogPostDto, v: String| d.excerpt = Some(v))
            />
            <Textarea
                label="Content"
                rows=8
                value=content
                on_input=stage_with(ctl, |d: &mut BlogPostDto, v: String| d.content = Some(v))
            />
            <TagEditor ctl=ctl/>
            <Checkbox
                label="Featured post"
                id="blog-featured"
                checked=featured
                on_change=stage_with(ctl, |d: &mut BlogPostDto, v: bool| d.featured = Some(v))
            />
        }
        .into_any()
    }

    fn draft_media(dto: &BlogPostDto) -> Option<&MediaRef> {
        dto.image.as_ref()
    }
}
