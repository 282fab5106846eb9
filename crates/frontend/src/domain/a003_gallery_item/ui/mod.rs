//! Раздел "Gallery" админки

use crate::shared::components::ui::{choice_options, Checkbox, FacetBadge, Input, Select, Textarea};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_view::fields::{
    draft_flag, draft_value, stage_choice, stage_with, ImageUpload, ImageUrlInput, TagEditor,
};
use crate::shared::list_view::{detail_row, AdminEntity, ControllerSignal};
use contracts::domain::a003_gallery_item::aggregate::{
    GalleryCategory, GalleryItem, GalleryItemDto, GalleryStatus,
};
use contracts::domain::a003_gallery_item::seed::seed_gallery_items;
use contracts::domain::common::{Choice, MediaRef};
use leptos::prelude::*;

impl AdminEntity for GalleryItem {
    fn icon() -> &'static str {
        "gallery"
    }

    fn search_placeholder() -> &'static str {
        "Search images by title, tags..."
    }

    fn seed() -> Vec<Self> {
        seed_gallery_items()
    }

    fn columns() -> &'static [&'static str] {
        &["Image", "Category", "Status", "Uploaded By", "Date"]
    }

    fn row(&self) -> AnyView {
        view! {
            <td class="table__cell">
                <div class="entity-cell">
                    <img class="entity-cell__thumb" src=self.image.as_str().to_string() alt=self.alt.clone()/>
                    <div>
                        <div class="entity-cell__title">
                            {self.title.clone()}
                            {self.featured.then(|| view! { <span class="entity-cell__featured">{icon("star")}</span> })}
                        </div>
                        <div class="entity-cell__subtitle">{self.tags.join(", ")}</div>
                    </div>
                </div>
            </td>
            <td class="table__cell"><FacetBadge value=self.category/></td>
            <td class="table__cell"><FacetBadge value=self.status/></td>
            <td class="table__cell">{self.uploaded_by.clone()}</td>
            <td class="table__cell">{format_date(&self.lifecycle.created_at)}</td>
        }
        .into_any()
    }

    fn details(&self) -> AnyView {
        view! {
            <div class="details">
                <img class="details__image" src=self.image.as_str().to_string() alt=self.alt.clone()/>
                <p class="details__description">{self.description.clone()}</p>
                <dl class="details__list">
                    {detail_row("Category", view! { <FacetBadge value=self.category/> })}
                    {detail_row("Status", view! { <FacetBadge value=self.status/> })}
                    {detail_row("Featured", if self.featured { "Yes" } else { "No" })}
                    {detail_row("Uploaded By", self.uploaded_by.clone())}
                    {detail_row("Uploaded", format_date(&self.lifecycle.created_at))}
                    {detail_row("Alt Text", self.alt.clone())}
                    {detail_row("Tags", if self.tags.is_empty() { "-".to_string() } else { self.tags.join(", ") })}
                </dl>
            </div>
        }
        .into_any()
    }

    fn form(ctl: ControllerSignal<Self>) -> AnyView {
        let title = draft_value(ctl, |d: &GalleryItemDto| d.title.clone().unwrap_or_default());
        let category = draft_value(ctl, |d: &GalleryItemDto| {
            d.category.map(|c| c.code().to_string()).unwrap_or_default()
        });
        let alt = draft_value(ctl, |d: &GalleryItemDto| d.alt.clone().unwrap_or_default());
        let status = draft_value(ctl, |d: &GalleryItemDto| {
            d.status.map(|s| s.code().to_string()).unwrap_or_default()
        });
        let description =
            draft_value(ctl, |d: &GalleryItemDto| d.description.clone().unwrap_or_default());
        let featured = draft_flag(ctl, |d: &GalleryItemDto| d.featured.unwrap_or(false));

        view! {
            <div class="form__grid">
                <Input
                    label="Title"
                    value=title
                    on_input=stage_with(ctl, |d: &mut GalleryItemDto, v: String| d.title = Some(v))
                />
                <Select
                    label="Category"
                    value=category
                    on_change=stage_choice(ctl, |d: &mut GalleryItemDto, v: GalleryCategory| {
                        d.category = Some(v)
                    })
                    options={choice_options::<GalleryCategory>()}
                />
            </div>
            <ImageUpload ctl=ctl/>
            <ImageUrlInput ctl=ctl/>
            <div class="form__grid">
                <Input
                    label="Alt Text"
                    placeholder="Describe the image"
                    value=alt
                    on_input=stage_with(ctl, |d: &mut GalleryItemDto, v: String| d.alt = Some(v))
                />
                <Select
                    label="Status"
                    value=status
                    on_change=stage_choice(ctl, |d: &mut GalleryItemDto, v: GalleryStatus| {
                        d.status = Some(v)
                    })
                    options={choice_options::<GalleryStatus>()}
                />
            </div>
            <Textarea
                label="Description"
                value=description
                on_input=stage_with(ctl, |d: &mut GalleryItemDto, v: String| d.description = Some(v))
            />
            <TagEditor ctl=ctl/>
            <Checkbox
                label="Featured image"
                id="gallery-featured"
                checked=featured
                on_change=stage_with(ctl, |d: &mut GalleryItemDto, v: bool| d.featured = Some(v))
            />
        }
        .into_any()
    }

    fn draft_media(dto: &GalleryItemDto) -> Option<&MediaRef> {
        dto.image.as_ref()
    }
}
