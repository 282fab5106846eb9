//! Раздел "Tours" админки

use crate::shared::components::ui::{choice_options, Badge, Checkbox, FacetBadge, Input, Select, Textarea};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_view::fields::{
    draft_flag, draft_value, parse_number, stage_choice, stage_with, ImageUpload, ImageUrlInput,
    TagEditor,
};
use crate::shared::list_view::{detail_row, AdminEntity, ControllerSignal};
use contracts::domain::a002_tour::aggregate::{Difficulty, Tour, TourCategory, TourDto, TourStatus};
use contracts::domain::a002_tour::seed::seed_tours;
use contracts::domain::common::{Choice, MediaRef};
use leptos::prelude::*;

fn code_of<C: Choice>(value: Option<C>) -> String {
    value.map(|c| c.code().to_string()).unwrap_or_default()
}

impl AdminEntity for Tour {
    fn icon() -> &'static str {
        "tours"
    }

    fn search_placeholder() -> &'static str {
        "Search tours by title, location..."
    }

    fn seed() -> Vec<Self> {
        seed_tours()
    }

    fn columns() -> &'static [&'static str] {
        &["Tour", "Category", "Price", "Duration", "Rating", "Status"]
    }

    fn row(&self) -> AnyView {
        let featured = self.featured;
        view! {
            <td class="table__cell">
                <div class="entity-cell">
                    <img class="entity-cell__thumb" src=self.image.as_str().to_string() alt=self.title.clone()/>
                    <div>
                        <div class="entity-cell__title">
                            {self.title.clone()}
                            {featured.then(|| view! { <span class="entity-cell__featured">{icon("star")}</span> })}
                        </div>
                        <div class="entity-cell__subtitle">{self.location.clone()}</div>
                    </div>
                </div>
            </td>
            <td class="table__cell"><FacetBadge value=self.category/></td>
            <td class="table__cell">{format!("${}", self.price)}</td>
            <td class="table__cell">{self.duration.clone()}</td>
            <td class="table__cell">{format!("{:.1}", self.rating)}</td>
            <td class="table__cell"><FacetBadge value=self.status/></td>
        }
        .into_any()
    }

    fn details(&self) -> AnyView {
        let difficulty = self.difficulty.display_name();
        view! {
            <div class="details">
                <img class="details__image" src=self.image.as_str().to_string() alt=self.title.clone()/>
                <p class="details__description">{self.description.clone()}</p>
                <dl class="details__list">
                    {detail_row("Location", self.location.clone())}
                    {detail_row("Price", format!("${}", self.price))}
                    {detail_row("Duration", self.duration.clone())}
                    {detail_row("Category", view! { <FacetBadge value=self.category/> })}
                    {detail_row("Difficulty", view! { <Badge>{difficulty}</Badge> })}
                    {detail_row("Status", view! { <FacetBadge value=self.status/> })}
                    {detail_row("Max Participants", self.max_participants.to_string())}
                    {detail_row("Rating", format!("{:.1}", self.rating))}
                    {detail_row("Featured", if self.featured { "Yes" } else { "No" })}
                    {detail_row("Created", format_date(&self.lifecycle.created_at))}
                </dl>
                {(!self.tags.is_empty()).then(|| view! {
                    <div class="tag-list">
                        {self.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                    </div>
                })}
            </div>
        }
        .into_any()
    }

    fn form(ctl: ControllerSignal<Self>) -> AnyView {
        let title = draft_value(ctl, |d: &TourDto| d.title.clone().unwrap_or_default());
        let price = draft_value(ctl, |d: &TourDto| d.price.unwrap_or(0).to_string());
        let duration = draft_value(ctl, |d: &TourDto| d.duration.clone().unwrap_or_default());
        let location = draft_value(ctl, |d: &TourDto| d.location.clone().unwrap_or_default());
        let category = draft_value(ctl, |d: &TourDto| code_of(d.category));
        let difficulty = draft_value(ctl, |d: &TourDto| code_of(d.difficulty));
        let max_participants =
            draft_value(ctl, |d: &TourDto| d.max_participants.unwrap_or(0).to_string());
        let status = draft_value(ctl, |d: &TourDto| code_of(d.status));
        let description =
            draft_value(ctl, |d: &TourDto| d.description.clone().unwrap_or_default());
        let featured = draft_flag(ctl, |d: &TourDto| d.featured.unwrap_or(false));

        view! {
            <div class="form__grid">
                <Input
                    label="Title"
                    value=title
                    on_input=stage_with(ctl, |d: &mut TourDto, v: String| d.title = Some(v))
                />
                <Input
                    label="Price"
                    input_type="number"
                    value=price
                    on_input=stage_with(ctl, |d: &mut TourDto, v: String| d.price = Some(parse_number(&v)))
                />
                <Input
                    label="Duration"
                    placeholder="e.g. 7 days"
                    value=duration
                    on_input=stage_with(ctl, |d: &mut TourDto, v: String| d.duration = Some(v))
                />
                <Input
                    label="Location"
                    value=location
                    on_input=stage_with(ctl, |d: &mut TourDto, v: String| d.location = Some(v))
                />
                <Select
                    label="Category"
                    value=category
                    on_change=stage_choice(ctl, |d: &mut TourDto, v: TourCategory| d.category = Some(v))
                    options={choice_options::<TourCategory>()}
                />
                <Select
                    label="Difficulty"
                    value=difficulty
                    on_change=stage_choice(ctl, |d: &mut TourDto, v: Difficulty| d.difficulty = Some(v))
                    options={choice_options::<Difficulty>()}
                />
                <Input
                    label="Max Participants"
                    input_type="number"
                    value=max_participants
                    on_input=stage_with(ctl, |d: &mut TourDto, v: String| {
                        d.max_participants = Some(parse_number(&v))
                    })
                />
                <Select
                    label="Status"
                    value=status
                    on_change=stage_choice(ctl, |d: &mut TourDto, v: TourStatus| d.status = Some(v))
                    options={choice_options::<TourStatus>()}
                />
            </div>
            <Textarea
                label="Description"
                rows=4
                value=description
                on_input=stage_with(ctl, |d: &mut TourDto, v: String| d.description = Some(v))
            />
            <ImageUpload ctl=ctl/>
            <ImageUrlInput ctl=ctl/>
            <TagEditor ctl=ctl/>
            <Checkbox
                label="Featured tour"
                id="tour-featured"
                checked=featured
                on_change=stage_with(ctl, |d: &mut TourDto, v: bool| d.featured = Some(v))
            />
        }
        .into_any()
    }

    fn draft_media(dto: &TourDto) -> Option<&MediaRef> {
        dto.image.as_ref()
    }
}
