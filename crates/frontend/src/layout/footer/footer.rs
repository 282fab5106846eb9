use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>"Travel Beyond Tours"</h3>
                    <p>"Creating unforgettable travel experiences around the world."</p>
                </div>
                <div class="footer__column">
                    <h4>"Explore"</h4>
                    <A href="/packages">"Tour Packages"</A>
                    <A href="/gallery">"Gallery"</A>
                    <A href="/blog">"Blog"</A>
                </div>
                <div class="footer__column">
                    <h4>"Company"</h4>
                    <A href="/about">"About Us"</A>
                    <A href="/contact">"Contact"</A>
                </div>
                <div class="footer__column">
                    <h4>"Contact"</h4>
                    <p>"+1 (555) 123-4567"</p>
                    <p>"info@travelbeyondtours.com"</p>
                </div>
            </div>
            <div class="footer__bottom">"© 2024 Travel Beyond Tours. All rights reserved."</div>
        </footer>
    }
}
