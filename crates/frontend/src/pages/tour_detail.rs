use super::catalogue::public_store;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Badge, FacetBadge};
use crate::shared::icons::icon;
use crate::shared::latency::{after_delay, MountGuard};
use contracts::domain::a002_tour::aggregate::Tour;
use contracts::domain::a002_tour::seed::seed_tours;
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

const INCLUDED: &[&str] = &[
    "Accommodation in selected hotels",
    "All meals as specified",
    "Professional English-speaking guide",
    "All entrance fees and activities",
    "Airport transfers",
    "Transportation throughout the tour",
    "Travel insurance",
];

const NOT_INCLUDED: &[&str] = &[
    "International flights",
    "Personal expenses",
    "Optional activities",
    "Tips and gratuities",
    "Alcoholic beverages",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Booking {
    Idle,
    InProgress,
    Confirmed,
}

#[component]
pub fn TourDetailPage() -> impl IntoView {
    let params = use_params_map();
    let store = StoredValue::new(public_store(seed_tours()));

    let tour = Memo::new(move |_| {
        let id = params.with(|p| p.get("id")).map(RecordId::new)?;
        let found = store.with_value(|s| s.get(&id).cloned());
        if found.is_none() {
            log::warn!("tour {} not found", id);
        }
        found
    });

    move || match tour.get() {
        Some(tour) => view! { <TourDetail tour=tour/> }.into_any(),
        None => view! {
            <div class="empty-state empty-state--page">
                <h2>"Tour not found"</h2>
                <p>"The tour you are looking for does not exist or is no longer available."</p>
                <A href="/packages" attr:class="button button--primary">"Browse Tours"</A>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn TourDetail(tour: Tour) -> impl IntoView {
    let booking_ms = use_app_context().delay(|c| c.delays.booking_ms);
    let guard = MountGuard::new();
    let (booking, set_booking) = signal(Booking::Idle);

    let book_now = move |_| {
        if booking.get_untracked() != Booking::Idle {
            return;
        }
        set_booking.set(Booking::InProgress);
        after_delay(&guard, booking_ms, move || set_booking.set(Booking::Confirmed));
    };

    let highlights = if tour.tags.is_empty() {
        vec![tour.location.clone(), tour.category.display_name().to_string()]
    } else {
        tour.tags.clone()
    };

    view! {
        <Show
            when=move || booking.get() != Booking::Confirmed
            fallback=|| view! {
                <div class="success-card">
                    {icon("check")}
                    <h2>"Booking Confirmed!"</h2>
                    <p>"Your tour has been successfully booked. You will receive a confirmation email shortly."</p>
                    <div class="success-card__actions">
                        <A href="/payment" attr:class="button button--primary">"Complete Payment"</A>
                        <A href="/packages" attr:class="button button--secondary">"Browse More Tours"</A>
                    </div>
                </div>
            }
        >
            <div class="tour-detail">
                <section class="tour-detail__hero">
                    <img src=tour.image.as_str().to_string() alt=tour.title.clone()/>
                    <div class="tour-detail__hero-content">
                        <div class="tour-detail__badges">
                            <FacetBadge value=tour.category/>
                            <Badge>{tour.difficulty.display_name()}</Badge>
                        </div>
                        <h1>{tour.title.clone()}</h1>
                        <p>{icon("map-pin")}{tour.location.clone()}</p>
                    </div>
                </section>

                <section class="section section--split">
                    <div class="tour-detail__main">
                        <h2>"About This Tour"</h2>
                        <p>{tour.description.clone()}</p>

                        <h2>"Tour Highlights"</h2>
                        <ul class="tour-detail__highlights">
                            {highlights.iter().map(|h| view! { <li>{icon("check")}{h.clone()}</li> }).collect_view()}
                        </ul>

                        <h2>"What's Included"</h2>
                        <div class="tour-detail__included">
                            <div>
                                <h3>"Included"</h3>
                                <ul>{INCLUDED.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}</ul>
                            </div>
                            <div>
                                <h3>"Not Included"</h3>
                                <ul>{NOT_INCLUDED.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}</ul>
                            </div>
                        </div>
                    </div>

                    <aside class="booking-card">
                        <div class="booking-card__price">
                            <span class="booking-card__amount">{format!("${}", tour.price)}</span>
                            <span>"per person"</span>
                        </div>
                        <dl class="booking-card__facts">
                            <div><dt>"Duration"</dt><dd>{tour.duration.clone()}</dd></div>
                            <div><dt>"Group Size"</dt><dd>{format!("Up to {} people", tour.max_participants)}</dd></div>
                            <div><dt>"Rating"</dt><dd>{format!("{:.1} / 5", tour.rating)}</dd></div>
                        </dl>
                        <button
                            class="button button--primary button--block"
                            disabled=move || booking.get() == Booking::InProgress
                            on:click=book_now.clone()
                        >
                            {move || if booking.get() == Booking::InProgress {
                                view! { <Spinner size=SpinnerSize::Small/> " Booking..." }.into_any()
                            } else {
                                "Book Now".into_any()
                            }}
                        </button>
                        <ul class="booking-card__perks">
                            <li>"Free cancellation up to 48h"</li>
                            <li>"Instant confirmation"</li>
                            <li>"24/7 customer support"</li>
                        </ul>
                    </aside>
                </section>
            </div>
        </Show>
    }
}
