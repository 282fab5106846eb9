use super::overview::Overview;
use super::sidebar::DashboardSidebar;
use super::Section;
use crate::layout::global_context::use_app_context;
use crate::shared::latency::{after_delay, MountGuard};
use crate::shared::list_view::{create_controller, EntityList};
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_tour::aggregate::Tour;
use contracts::domain::a003_gallery_item::aggregate::GalleryItem;
use contracts::domain::a004_blog_post::aggregate::BlogPost;
use leptos::prelude::*;
use thaw::*;

/// Админка: обзор и четыре раздела записей.
///
/// Хранилища создаются один раз и живут, пока открыта страница;
/// переключение разделов их не сбрасывает.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let guard = MountGuard::new();
    let (loading, set_loading) = signal(true);
    after_delay(&guard, ctx.delay(|c| c.delays.dashboard_ms), move || {
        set_loading.set(false)
    });

    let section = RwSignal::new(Section::Overview);

    let users = create_controller::<User>();
    let tours = create_controller::<Tour>();
    let gallery = create_controller::<GalleryItem>();
    let posts = create_controller::<BlogPost>();

    view! {
        <div class="dashboard">
            <DashboardSidebar active=section/>
            <main class="dashboard__main">
                <header class="dashboard__header">
                    <h1 class="dashboard__title">{move || section.get().label()}</h1>
                    <p class="dashboard__subtitle">
                        "Manage your tours, users, gallery and blog content"
                    </p>
                </header>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="dashboard__loading">
                            <Spinner/>
                            <span>"Loading dashboard..."</span>
                        </div>
                    }
                >
                    {move || match section.get() {
                        Section::Overview => view! {
                            <Overview section=section users=users tours=tours gallery=gallery posts=posts/>
                        }.into_any(),
                        Section::Users => view! { <EntityList ctl=users/> }.into_any(),
                        Section::Tours => view! { <EntityList ctl=tours/> }.into_any(),
                        Section::Gallery => view! { <EntityList ctl=gallery/> }.into_any(),
                        Section::Blog => view! { <EntityList ctl=posts/> }.into_any(),
                    }}
                </Show>
            </main>
        </div>
    }
}
