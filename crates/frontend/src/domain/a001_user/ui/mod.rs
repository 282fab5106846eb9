//! Раздел "Users" админки

use crate::shared::components::ui::{choice_options, FacetBadge, Input, Select};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::list_view::fields::{draft_value, stage_choice, stage_with};
use crate::shared::list_view::{detail_row, AdminEntity, ControllerSignal};
use contracts::domain::a001_user::aggregate::{User, UserDto, UserRole, UserStatus};
use contracts::domain::a001_user::seed::seed_users;
use contracts::domain::common::{Choice, MediaRef};
use leptos::prelude::*;

impl AdminEntity for User {
    fn icon() -> &'static str {
        "users"
    }

    fn search_placeholder() -> &'static str {
        "Search users by name or email..."
    }

    fn all_categories_label() -> &'static str {
        "All Roles"
    }

    /// Пользователи регистрируются сами; админ только правит и удаляет
    fn can_create() -> bool {
        false
    }

    fn seed() -> Vec<Self> {
        seed_users()
    }

    fn columns() -> &'static [&'static str] {
        &["User", "Role", "Status", "Join Date", "Last Active"]
    }

    fn row(&self) -> AnyView {
        view! {
            <td class="table__cell">
                <div class="entity-cell">
                    <img class="entity-cell__avatar" src=self.avatar.as_str().to_string() alt=self.name.clone()/>
                    <div>
                        <div class="entity-cell__title">{self.name.clone()}</div>
                        <div class="entity-cell__subtitle">{self.email.clone()}</div>
                    </div>
                </div>
            </td>
            <td class="table__cell"><FacetBadge value=self.role/></td>
            <td class="table__cell"><FacetBadge value=self.status/></td>
            <td class="table__cell">{format_date(&self.lifecycle.created_at)}</td>
            <td class="table__cell">{format_date_opt(self.last_active.as_ref())}</td>
        }
        .into_any()
    }

    fn details(&self) -> AnyView {
        view! {
            <div class="details">
                <div class="details__hero details__hero--avatar">
                    <img src=self.avatar.as_str().to_string() alt=self.name.clone()/>
                    <div>
                        <h3>{self.name.clone()}</h3>
                        <p>{self.email.clone()}</p>
                    </div>
                </div>
                <dl class="details__list">
                    {detail_row("Role", view! { <FacetBadge value=self.role/> })}
                    {detail_row("Status", view! { <FacetBadge value=self.status/> })}
                    {detail_row("Join Date", format_date(&self.lifecycle.created_at))}
                    {detail_row("Last Active", format_date_opt(self.last_active.as_ref()))}
                </dl>
            </div>
        }
        .into_any()
    }

    fn form(ctl: ControllerSignal<Self>) -> AnyView {
        let name = draft_value(ctl, |d: &UserDto| d.name.clone().unwrap_or_default());
        let email = draft_value(ctl, |d: &UserDto| d.email.clone().unwrap_or_default());
        let role = draft_value(ctl, |d: &UserDto| {
            d.role.unwrap_or(UserRole::User).code().to_string()
        });
        let status = draft_value(ctl, |d: &UserDto| {
            d.status.unwrap_or(UserStatus::Active).code().to_string()
        });

        view! {
            <Input
                label="Name"
                value=name
                on_input=stage_with(ctl, |d: &mut UserDto, v: String| d.name = Some(v))
            />
            <Input
                label="Email"
                input_type="email"
                value=email
                on_input=stage_with(ctl, |d: &mut UserDto, v: String| d.email = Some(v))
            />
            <Select
                label="Role"
                value=role
                on_change=stage_choice(ctl, |d: &mut UserDto, v: UserRole| d.role = Some(v))
                options={choice_options::<UserRole>()}
            />
            <Select
                label="Status"
                value=status
                on_change=stage_choice(ctl, |d: &mut UserDto, v: UserStatus| d.status = Some(v))
                options={choice_options::<UserStatus>()}
            />
        }
        .into_any()
    }

    fn draft_media(dto: &UserDto) -> Option<&MediaRef> {
        dto.avatar.as_ref()
    }
}
