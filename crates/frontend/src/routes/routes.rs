use crate::dashboards::AdminDashboard;
use crate::layout::PublicLayout;
use crate::pages::{
    AboutPage, BlogPage, ContactPage, GalleryPage, LandingPage, NotFoundPage, PackagesPage,
    PaymentPage, TourDetailPage,
};
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Карта маршрутов сайта.
///
/// Публичные страницы идут внутри `PublicLayout`; вход, регистрация
/// и админка рендерятся без шапки и подвала.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/dashboard") view=AdminDashboard/>
                <ParentRoute path=path!("") view=PublicLayout>
                    <Route path=path!("") view=LandingPage/>
                    <Route path=path!("about") view=AboutPage/>
                    <Route path=path!("contact") view=ContactPage/>
                    <Route path=path!("blog") view=BlogPage/>
                    <Route path=path!("gallery") view=GalleryPage/>
                    <Route path=path!("packages") view=PackagesPage/>
                    <Route path=path!("tour/:id") view=TourDetailPage/>
                    <Route path=path!("payment") view=PaymentPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
