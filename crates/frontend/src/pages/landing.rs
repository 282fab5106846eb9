use super::cards::TourCard;
use super::catalogue::public_store;
use contracts::domain::a002_tour::aggregate::Tour;
use contracts::domain::a002_tour::seed::seed_tours;
use leptos::prelude::*;
use leptos_router::components::A;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("500+", "Happy Travelers"),
    ("50+", "Destinations"),
    ("100+", "Tours Available"),
    ("4.9", "Average Rating"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let featured: Vec<Tour> = public_store(seed_tours())
        .iter()
        .filter(|t| t.featured)
        .take(4)
        .cloned()
        .collect();

    view! {
        <div class="landing">
            <section class="hero">
                <img
                    class="hero__background"
                    src="https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=1920&h=1080&fit=crop"
                    alt="Travel destination"
                />
                <div class="hero__content">
                    <h1 class="hero__title">
                        "Discover Your"
                        <span class="hero__accent">"Next Adventure"</span>
                    </h1>
                    <p class="hero__subtitle">
                        "Explore breathtaking destinations, create unforgettable memories, and experience the world like never before."
                    </p>
                    <div class="hero__actions">
                        <A href="/packages" attr:class="button button--primary">"Explore Tours"</A>
                        <A href="/gallery" attr:class="button button--secondary">"View Gallery"</A>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2>"Why Choose Us"</h2>
                    <p>"Trusted by travelers worldwide for exceptional experiences"</p>
                </div>
                <div class="highlights">
                    {HIGHLIGHTS.iter().map(|(value, label)| view! {
                        <div class="highlights__item">
                            <div class="highlights__value">{*value}</div>
                            <div class="highlights__label">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2>"Featured Tours"</h2>
                    <p>"Handpicked experiences our travelers love most"</p>
                </div>
                <div class="card-grid">
                    {featured.into_iter().map(|tour| view! { <TourCard tour=tour/> }).collect_view()}
                </div>
                <div class="section__footer">
                    <A href="/packages" attr:class="button button--secondary">"View All Tours"</A>
                </div>
            </section>
        </div>
    }
}
