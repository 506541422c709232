use maud::{html, Markup};

use crate::models::place::Amenity;
use crate::models::user::UserProfile;
use crate::views::{amenity_icon, layout, Notice};

/// Values kept when the form re-renders after a validation failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceFormValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
}

pub fn page(
    viewer: Option<&UserProfile>,
    amenities: &[Amenity],
    notice: Option<&Notice>,
    values: PlaceFormValues,
) -> Markup {
    layout::page(
        "Add a place",
        viewer,
        notice,
        html! {
            section class="create-place" {
                h1 { "Add a place" }
                form method="post" action="/places/new" {
                    div class="form-row" {
                        label for="title" { "Title" }
                        input type="text" id="title" name="title" value=(values.title) required;
                    }
                    div class="form-row" {
                        label for="description" { "Description" }
                        textarea id="description" name="description" rows="5" required {
                            (values.description)
                        }
                    }
                    div class="form-row" {
                        label for="price" { "Price per night" }
                        input type="number" id="price" name="price" min="1" step="0.01"
                            value=(values.price) required;
                    }
                    div class="form-row" {
                        label for="latitude" { "Latitude" }
                        input type="number" id="latitude" name="latitude" step="any"
                            value=(values.latitude) required;
                    }
                    div class="form-row" {
                        label for="longitude" { "Longitude" }
                        input type="number" id="longitude" name="longitude" step="any"
                            value=(values.longitude) required;
                    }
                    fieldset class="amenities-picker" {
                        legend { "Amenities" }
                        @for amenity in amenities {
                            label class="amenity-option" {
                                input type="checkbox" name="amenities" value=(amenity.id);
                                " " (amenity_icon(&amenity.name)) " " (amenity.name)
                            }
                        }
                    }
                    button type="submit" { "Create place" }
                }
            }
        },
    )
}
