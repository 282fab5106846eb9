use super::Section;
use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use crate::shared::list_view::ControllerSignal;
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_tour::aggregate::{Tour, TourStatus};
use contracts::domain::a003_gallery_item::aggregate::GalleryItem;
use contracts::domain::a004_blog_post::aggregate::{BlogPost, BlogStatus};
use leptos::prelude::*;

/// Показатели обзора, считаются по текущим хранилищам разделов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewStats {
    pub total_users: usize,
    pub active_tours: usize,
    pub gallery_items: usize,
    pub published_posts: usize,
}

impl OverviewStats {
    pub fn collect(
        users: &[User],
        tours: &[Tour],
        gallery: &[GalleryItem],
        posts: &[BlogPost],
    ) -> Self {
        Self {
            total_users: users.len(),
            active_tours: tours.iter().filter(|t| t.status == TourStatus::Active).count(),
            gallery_items: gallery.len(),
            published_posts: posts.iter().filter(|p| p.status == BlogStatus::Published).count(),
        }
    }
}

#[component]
pub fn Overview(
    section: RwSignal<Section>,
    users: ControllerSignal<User>,
    tours: ControllerSignal<Tour>,
    gallery: ControllerSignal<GalleryItem>,
    posts: ControllerSignal<BlogPost>,
) -> impl IntoView {
    let stats = Memo::new(move |_| {
        users.with(|u| {
            tours.with(|t| {
                gallery.with(|g| {
                    posts.with(|p| {
                        OverviewStats::collect(
                            u.store().records(),
                            t.store().records(),
                            g.store().records(),
                            p.store().records(),
                        )
                    })
                })
            })
        })
    });

    let quick_actions = [
        (Section::Users, "Manage Users", "View and edit user accounts"),
        (Section::Tours, "Manage Tours", "Add and edit tour packages"),
        (Section::Gallery, "Manage Gallery", "Upload and organize images"),
        (Section::Blog, "Manage Blog", "Create and edit blog posts"),
    ];

    view! {
        <div class="overview">
            <div class="overview__stats">
                <StatCard
                    label="Total Users"
                    icon_name="users"
                    value=Signal::derive(move || Some(stats.get().total_users))
                />
                <StatCard
                    label="Active Tours"
                    icon_name="tours"
                    value=Signal::derive(move || Some(stats.get().active_tours))
                />
                <StatCard
                    label="Gallery Items"
                    icon_name="gallery"
                    value=Signal::derive(move || Some(stats.get().gallery_items))
                />
                <StatCard
                    label="Published Posts"
                    icon_name="blog"
                    value=Signal::derive(move || Some(stats.get().published_posts))
                />
            </div>

            <div class="overview__actions">
                <h3>"Quick Actions"</h3>
                <div class="overview__actions-grid">
                    {quick_actions.into_iter().map(|(target, title, hint)| view! {
                        <button class="quick-action" on:click=move |_| section.set(target)>
                            <span class="quick-action__icon">{icon(target.icon())}</span>
                            <span class="quick-action__title">{title}</span>
                            <span class="quick-action__hint">{hint}</span>
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::seed::seed_users;
    use contracts::domain::a002_tour::seed::seed_tours;
    use contracts::domain::a003_gallery_item::seed::seed_gallery_items;
    use contracts::domain::a004_blog_post::seed::seed_blog_posts;

    #[test]
    fn test_stats_follow_status() {
        let users = seed_users();
        let mut tours = seed_tours();
        let gallery = seed_gallery_items();
        let posts = seed_blog_posts();

        let before = OverviewStats::collect(&users, &tours, &gallery, &posts);
        assert_eq!(before.total_users, users.len());
        assert_eq!(before.gallery_items, gallery.len());

        let active = tours.iter_mut().find(|t| t.status == TourStatus::Active);
        if let Some(tour) = active {
            tour.status = TourStatus::Inactive;
        }
        let after = OverviewStats::collect(&users, &tours, &gallery, &posts);
        assert_eq!(after.active_tours + 1, before.active_tours);
        assert_eq!(after.published_posts, before.published_posts);
    }
}
