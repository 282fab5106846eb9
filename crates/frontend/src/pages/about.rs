use leptos::prelude::*;
use leptos_router::components::A;

const VALUES: &[(&str, &str)] = &[
    ("Passion", "We're driven by our love for travel and our desire to share the world's beauty with others."),
    ("Excellence", "We strive for the highest standards in every aspect of our service and operations."),
    ("Community", "We believe in building connections and supporting the communities we visit."),
    ("Sustainability", "We're committed to responsible tourism that protects our planet for future generations."),
];

const TEAM: &[(&str, &str)] = &[
    ("Michael Chen", "Head of Operations"),
    ("Emily Rodriguez", "Travel Specialist"),
    ("David Thompson", "Marketing Director"),
    ("Bob Lash", "Customer Experience Manager"),
    ("James Wilson", "Adventure Guide"),
];

/// Инициалы для аватара-заглушки: "Emily Rodriguez" -> "ER"
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="page-hero">
                <h1>"About Travel Beyond Tours"</h1>
                <p>
                    "We're passionate about creating extraordinary travel experiences that connect you with the world's most beautiful destinations."
                </p>
            </section>

            <section class="section section--split">
                <div>
                    <h2>"Our Mission"</h2>
                    <p>
                        "To make extraordinary travel experiences accessible to everyone by providing carefully curated tours, exceptional service, and authentic cultural connections that create lasting memories."
                    </p>
                    <p>
                        "We believe that travel has the power to transform lives, broaden perspectives, and create meaningful connections between people and places around the world."
                    </p>
                </div>
                <img
                    src="https://images.unsplash.com/photo-1526778548025-fa2f459cd5c1?w=1000&auto=format&fit=crop&q=60"
                    alt="Mission"
                />
            </section>

            <section class="section">
                <div class="section__header">
                    <h2>"Our Values"</h2>
                </div>
                <div class="card-grid">
                    {VALUES.iter().map(|(title, text)| view! {
                        <div class="value-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2>"Meet Our Team"</h2>
                </div>
                <div class="card-grid">
                    {TEAM.iter().map(|(name, role)| view! {
                        <div class="team-card">
                            <div class="team-card__avatar">{initials(name)}</div>
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section section--cta">
                <h2>"Ready to Start Your Journey?"</h2>
                <A href="/packages" attr:class="button button--primary">"Browse Tours"</A>
                <A href="/contact" attr:class="button button--secondary">"Contact Us"</A>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Emily Rodriguez"), "ER");
        assert_eq!(initials("  Bob   Lash "), "BL");
        assert_eq!(initials(""), "");
    }
}
