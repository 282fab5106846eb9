use super::Section;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardSidebar(active: RwSignal<Section>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(|s| s.clear());
        navigate("/", Default::default());
    };

    view! {
        <aside class="app-sidebar">
            <A href="/" attr:class="app-sidebar__brand">
                <span class="app-sidebar__logo">"T"</span>
                <span>"Travel Beyond Tours"</span>
            </A>
            <nav class="app-sidebar__content">
                {Section::all().iter().copied().map(|section| view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || active.get() == section
                        on:click=move |_| active.set(section)
                    >
                        {icon(section.icon())}
                        <span>{section.label()}</span>
                    </div>
                }).collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <div class="app-sidebar__user">
                    <span class="app-sidebar__avatar">"A"</span>
                    <div>
                        <div class="app-sidebar__user-name">"Admin User"</div>
                        <div class="app-sidebar__user-email">"admin@travelbeyondtours.com"</div>
                    </div>
                </div>
                <button class="button button--ghost" on:click=on_logout>"Logout"</button>
            </div>
        </aside>
    }
}
