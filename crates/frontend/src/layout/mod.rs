pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Оболочка публичных страниц.
///
/// ```text
/// +----------------------+
/// |        Header        |
/// +----------------------+
/// |     page (Outlet)    |
/// +----------------------+
/// |        Footer        |
/// +----------------------+
/// ```
///
/// Админка и формы входа рендерятся без неё.
#[component]
pub fn PublicLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                <Outlet />
            </main>
            <footer::Footer />
        </div>
    }
}
