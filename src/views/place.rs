use maud::{html, Markup};

use crate::availability::{booking_range, parse_day, DayStatus};
use crate::calendar::BookingCalendar;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::place::Place;
use crate::models::review::Review;
use crate::models::user::UserProfile;
use crate::views::{amenity_icon, format_price, layout, Notice};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Everything the place-details page renders from.
pub struct PlaceView<'a> {
    pub place: &'a Place,
    pub reviews: &'a [Review],
    pub bookings: &'a [Booking],
    /// Present for authenticated non-owners; drives the booking section.
    pub calendar: Option<&'a BookingCalendar>,
    pub viewer: Option<&'a UserProfile>,
    pub is_owner: bool,
    pub notice: Option<&'a Notice>,
    /// Preserved form values after a retryable submission failure.
    pub selection: Option<BookingFormValues<'a>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookingFormValues<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub message: &'a str,
}

pub fn page(view: &PlaceView) -> Markup {
    let place = view.place;
    layout::page(
        &place.title,
        view.viewer,
        view.notice,
        html! {
            (photos(place))
            section class="place-content" {
                h1 { (place.title) }
                p class="place-location" {
                    span class="icon" { "\u{1f4cd}" }
                    " Latitude: " (place.latitude) ", Longitude: " (place.longitude)
                }
                p class="place-price" { (format_price(place.price)) " / night" }
                div class="place-description" {
                    (place.description.as_deref().unwrap_or("No description available."))
                }
                div class="place-owner" {
                    p { strong { "Owner: " } (place.owner.display_name()) }
                }
                @if !place.amenities.is_empty() {
                    div class="place-amenities" {
                        h3 { "Amenities" }
                        ul {
                            @for amenity in &place.amenities {
                                li {
                                    span class="amenity-icon" { (amenity_icon(&amenity.name)) }
                                    " " (amenity.name)
                                }
                            }
                        }
                    }
                }
            }
            (booked_periods(view.bookings))
            @if view.is_owner {
                (owner_bookings(place, view.bookings))
            } @else if let Some(calendar) = view.calendar {
                (booking_section(place, calendar, view.selection))
            }
            (reviews_section(view))
        },
    )
}

fn photos(place: &Place) -> Markup {
    if place.photos.is_empty() {
        return html! {
            div class="place-image-container" {
                div class="place-image-placeholder" { "\u{1f3e0}" }
            }
        };
    }
    html! {
        div class="place-images-grid" {
            div class="place-image-main" {
                img src=(place.photos[0].photo_url) alt="Main photo";
            }
            @for photo in &place.photos[1..] {
                div class="place-image-item" {
                    img src=(photo.photo_url) alt=(photo.caption.as_deref().unwrap_or(""));
                }
            }
        }
    }
}

/// Confirmed periods, visible to everyone.
fn booked_periods(bookings: &[Booking]) -> Markup {
    let confirmed: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .collect();
    if confirmed.is_empty() {
        return html! {};
    }
    html! {
        section class="booked-periods" {
            h3 { "Booked periods" }
            ul class="booked-periods-list" {
                @for booking in confirmed {
                    li class="booked-period" {
                        span class="icon" { "\u{1f4c5}" }
                        @if let Some(range) = booking_range(booking) {
                            " From " (range.start) " to " (range.end)
                        } @else {
                            " Dates unavailable"
                        }
                    }
                }
            }
        }
    }
}

/// Booking management cards for the owner, with approve/reject actions on
/// pending requests.
fn owner_bookings(place: &Place, bookings: &[Booking]) -> Markup {
    if bookings.is_empty() {
        return html! {};
    }
    html! {
        section class="place-bookings" {
            h3 { "Booking requests" }
            div class="bookings-list" {
                @for booking in bookings {
                    div class={"booking-card " (booking.status.css_class())} {
                        div class="booking-header" {
                            span class="booking-user" { (booking.user.display_name()) }
                            span class="booking-status" { (booking.status.label()) }
                        }
                        div class="booking-dates" {
                            @if let Some(range) = booking_range(booking) {
                                "From " (range.start) " to " (range.end)
                            } @else {
                                "Dates unavailable"
                            }
                        }
                        @if let Some(message) = &booking.message {
                            div class="booking-message" { (message) }
                        }
                        @if booking.status == BookingStatus::Pending {
                            div class="booking-actions" {
                                form method="post"
                                    action={"/places/" (place.id) "/bookings/" (booking.id) "/confirm"}
                                    class="inline" {
                                    button type="submit" class="button success" {
                                        "\u{2705} Approve"
                                    }
                                }
                                form method="post"
                                    action={"/places/" (place.id) "/bookings/" (booking.id) "/reject"}
                                    class="inline" {
                                    button type="submit" class="button danger" {
                                        "\u{274c} Reject"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Availability calendar plus the booking form, for authenticated visitors.
fn booking_section(
    place: &Place,
    calendar: &BookingCalendar,
    selection: Option<BookingFormValues>,
) -> Markup {
    let values = selection.unwrap_or_default();
    let min_date = calendar.min_date();
    html! {
        section class="booking-section" {
            h3 { "Book this place" }
            (availability_calendar(calendar))
            form method="post" action={"/places/" (place.id) "/bookings"} class="booking-form" {
                div class="form-row" {
                    label for="start_date" { "Check-in" }
                    input type="date" id="start_date" name="start_date"
                        min=(min_date) value=(values.start_date);
                }
                div class="form-row" {
                    label for="end_date" { "Check-out" }
                    input type="date" id="end_date" name="end_date"
                        min=(min_date) value=(values.end_date);
                }
                div class="form-row" {
                    label for="message" { "Message to the owner" }
                    textarea id="message" name="message" rows="3" { (values.message) }
                }
                button type="submit" { "Request booking" }
            }
        }
    }
}

fn availability_calendar(calendar: &BookingCalendar) -> Markup {
    html! {
        div class="availability-calendar" {
            @for grid in calendar.upcoming_months(3) {
                div class="calendar-month" {
                    h4 { (grid.title()) }
                    div class="calendar-grid" {
                        @for name in WEEKDAYS {
                            span class="dow" { (name) }
                        }
                        @for _ in 0..grid.leading_blanks {
                            span class="day blank" {}
                        }
                        @for (day, status) in &grid.days {
                            (calendar_day(*day, *status))
                        }
                    }
                }
            }
            div class="calendar-legend" {
                span class="day available-date" { } " Available "
                span class="day booked-date" { } " Booked "
                span class="day past-date" { } " Past"
            }
        }
    }
}

fn calendar_day(day: chrono::NaiveDate, status: DayStatus) -> Markup {
    use chrono::Datelike;
    html! {
        span class={"day " (status.css_class())} title=(status.title()) {
            (day.day())
            @if status == DayStatus::Booked {
                span class="booked-indicator" { "\u{2022}" }
            }
        }
    }
}

fn reviews_section(view: &PlaceView) -> Markup {
    html! {
        section class="reviews" {
            h3 { "Reviews" }
            @if view.reviews.is_empty() {
                p { "No reviews yet." }
            } @else {
                div class="reviews-list" {
                    @for review in view.reviews {
                        (review_card(review))
                    }
                }
            }
            @if view.viewer.is_some() && !view.is_owner {
                (review_form(view.place))
            }
        }
    }
}

fn review_card(review: &Review) -> Markup {
    html! {
        div class="review-card" {
            div class="review-header" {
                span class="review-author" { (review.user.display_name()) }
                span class="review-rating" {
                    ("\u{2b50}".repeat(review.rating.min(5) as usize))
                }
            }
            p class="review-text" { (review.text) }
            @if let Some(day) = review.created_at.as_deref().and_then(parse_day) {
                div class="review-date" { (day) }
            }
        }
    }
}

fn review_form(place: &Place) -> Markup {
    html! {
        form method="post" action={"/places/" (place.id) "/reviews"} class="review-form" {
            h4 { "Add a review" }
            div class="form-row" {
                label for="rating" { "Rating" }
                select id="rating" name="rating" {
                    @for value in 1..=5u8 {
                        option value=(value) { (value) }
                    }
                }
            }
            div class="form-row" {
                label for="text" { "Your review" }
                textarea id="text" name="text" rows="4" {}
            }
            button type="submit" { "Submit review" }
        }
    }
}
