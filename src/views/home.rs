use maud::{html, Markup};

use crate::models::place::Place;
use crate::models::user::UserProfile;
use crate::views::{amenity_icon, format_price, layout, Notice};

const PRICE_STEPS: [f64; 4] = [50.0, 100.0, 200.0, 500.0];

pub fn page(
    places: &[Place],
    viewer: Option<&UserProfile>,
    max_price: Option<f64>,
    notice: Option<&Notice>,
) -> Markup {
    layout::page(
        "Places",
        viewer,
        notice,
        html! {
            section class="filter-bar" {
                form method="get" action="/" {
                    label for="max_price" { "Max price per night" }
                    select name="max_price" id="max_price" {
                        option value="all" selected[max_price.is_none()] { "All prices" }
                        @for step in PRICE_STEPS {
                            option value=(step) selected[max_price == Some(step)] {
                                "Up to " (format_price(step))
                            }
                        }
                    }
                    button type="submit" { "Filter" }
                }
            }
            @if places.is_empty() {
                div class="no-places" {
                    p { "No places available" }
                }
            } @else {
                section class="places-grid" {
                    @for place in places {
                        (place_card(place))
                    }
                }
            }
        },
    )
}

fn place_card(place: &Place) -> Markup {
    html! {
        a class="place-card" href={"/places/" (place.id)} {
            @if let Some(photo) = place.primary_photo() {
                div class="place-card-image" {
                    img src=(photo.photo_url)
                        alt=(photo.caption.as_deref().unwrap_or(&place.title));
                }
            } @else {
                div class="place-card-image placeholder" {
                    span class="placeholder-icon" { "\u{1f3e0}" }
                }
            }
            div class="place-card-content" {
                h3 { (place.title) }
                p class="place-location" {
                    span class="icon" { "\u{1f4cd}" }
                    " Lat: " (place.latitude) ", Long: " (place.longitude)
                }
                p class="place-price" { (format_price(place.price)) " / night" }
                (amenity_tags(place))
            }
        }
    }
}

/// First four amenities as icon tags, with a `+N` overflow tag listing the
/// rest in its tooltip.
fn amenity_tags(place: &Place) -> Markup {
    if place.amenities.is_empty() {
        return html! {};
    }
    let shown = &place.amenities[..place.amenities.len().min(4)];
    let overflow = &place.amenities[place.amenities.len().min(4)..];
    html! {
        div class="place-amenities" {
            @for amenity in shown {
                span class="amenity-tag" title=(amenity.name) { (amenity_icon(&amenity.name)) }
            }
            @if !overflow.is_empty() {
                span class="amenity-tag more"
                    title=(overflow.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")) {
                    "+" (overflow.len())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::{Amenity, Owner};
    use uuid::Uuid;

    fn place_with_amenities(names: &[&str]) -> Place {
        Place {
            id: Uuid::nil(),
            title: "Test <b>Place</b>".into(),
            description: None,
            price: 120.0,
            latitude: 48.85,
            longitude: 2.35,
            owner: Owner {
                id: Uuid::nil(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
            },
            amenities: names
                .iter()
                .map(|n| Amenity {
                    id: Uuid::nil(),
                    name: (*n).into(),
                })
                .collect(),
            photos: vec![],
        }
    }

    #[test]
    fn test_card_escapes_place_title() {
        let html = place_card(&place_with_amenities(&[])).into_string();
        assert!(html.contains("Test &lt;b&gt;Place&lt;/b&gt;"));
    }

    #[test]
    fn test_amenity_overflow_tag() {
        let place = place_with_amenities(&["WiFi", "TV", "Kitchen", "Heating", "Gym", "Hot tub"]);
        let html = amenity_tags(&place).into_string();
        assert!(html.contains("+2"));
        assert!(html.contains("Gym, Hot tub"));
    }

    #[test]
    fn test_no_overflow_tag_for_four_amenities() {
        let place = place_with_amenities(&["WiFi", "TV", "Kitchen", "Heating"]);
        let html = amenity_tags(&place).into_string();
        assert!(!html.contains("more"));
    }
}
