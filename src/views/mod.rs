//! Maud templates. Text interpolation escapes by default, so none of the
//! user-supplied strings (titles, reviews, booking messages) need manual
//! sanitizing.

pub mod admin;
pub mod home;
pub mod layout;
pub mod login;
pub mod place;
pub mod place_new;

use maud::Markup;

/// One-shot banner rendered at the top of a page.
#[derive(Debug, Clone)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

pub fn format_price(amount: f64) -> String {
    format!("\u{20ac}{amount:.2}")
}

/// Emoji for a known amenity name.
pub fn amenity_icon(name: &str) -> &'static str {
    match name {
        "WiFi" => "\u{1f4f6}",
        "Air conditioning" => "\u{2744}\u{fe0f}",
        "Heating" => "\u{1f525}",
        "Kitchen" => "\u{1f373}",
        "TV" => "\u{1f4fa}",
        "Free parking" => "\u{1f17f}\u{fe0f}",
        "Washing machine" => "\u{1f9fa}",
        "Swimming pool" => "\u{1f3ca}\u{200d}\u{2642}\u{fe0f}",
        "Hot tub" => "\u{1f30a}",
        "Gym" => "\u{1f3cb}\u{fe0f}\u{200d}\u{2642}\u{fe0f}",
        _ => "\u{2728}",
    }
}

/// Standalone error page used by `PageError::into_response`.
pub fn error_page(message: &str) -> Markup {
    layout::page(
        "Something went wrong",
        None,
        Some(&Notice::error(message)),
        maud::html! {
            section class="error-body" {
                p { "The page could not be displayed." }
                p { a href="/" { "Back to home" } }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(100.0), "\u{20ac}100.00");
        assert_eq!(format_price(79.5), "\u{20ac}79.50");
    }

    #[test]
    fn test_unknown_amenity_gets_default_icon() {
        assert_eq!(amenity_icon("Sauna"), "\u{2728}");
        assert_ne!(amenity_icon("WiFi"), "\u{2728}");
    }

    #[test]
    fn test_error_page_escapes_markup_in_message() {
        let html = error_page("<script>alert(1)</script>").into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
