use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/packages", "Packages"),
    ("/gallery", "Gallery"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    let logged_in = Memo::new(move |_| session.with(|s| s.is_logged_in()));

    let on_logout = Callback::new(move |_: ()| {
        session.update(|s| s.clear());
        menu_open.set(false);
        navigate("/", Default::default());
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__brand">
                    <span class="header__logo">"T"</span>
                    <span class="header__title">"Travel Beyond Tours"</span>
                </A>

                <nav class="header__nav" class:header__nav--open=move || mobile_open.get()>
                    {NAV_ITEMS.iter().map(|(href, label)| view! {
                        <A href=*href attr:class="header__link" on:click=move |_| mobile_open.set(false)>
                            {*label}
                        </A>
                    }).collect_view()}
                </nav>
            </div>

            <div class="header__actions">
                <Show
                    when=move || logged_in.get()
                    fallback=|| view! {
                        <A href="/login" attr:class="button button--primary">"Login"</A>
                    }
                >
                    <div class="user-menu">
                        <button
                            class="user-menu__toggle"
                            aria-label="User menu"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {icon("users")}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="user-menu__dropdown">
                                <A href="/dashboard" attr:class="user-menu__item" on:click=move |_| menu_open.set(false)>
                                    {icon("dashboard")}
                                    <span>"Dashboard"</span>
                                </A>
                                <button class="user-menu__item" on:click=move |_| on_logout.run(())>
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
                <button
                    class="button button--ghost header__burger"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {"☰"}
                </button>
            </div>
        </header>
    }
}
