use maud::{html, Markup, DOCTYPE};

use crate::models::user::UserProfile;
use crate::views::Notice;

/// Shared page chrome: header with auth-aware navigation, notice banner,
/// main content.
pub fn page(
    title: &str,
    viewer: Option<&UserProfile>,
    notice: Option<&Notice>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Homestay" }
                link rel="stylesheet" href="/static/styles.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" { "\u{1f3e0} Homestay" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            @if let Some(user) = viewer {
                                li { a href="/places/new" { "Add a place" } }
                                @if user.is_admin {
                                    li { a href="/admin" { "Admin" } }
                                }
                                li {
                                    form method="post" action="/logout" class="inline" {
                                        button type="submit" class="link-button" { "Logout" }
                                    }
                                }
                            } @else {
                                li { a href="/login" { "Login" } }
                            }
                        }
                    }
                }
                main {
                    @if let Some(notice) = notice {
                        (banner(notice))
                    }
                    (content)
                }
            }
        }
    }
}

fn banner(notice: &Notice) -> Markup {
    match notice {
        Notice::Success(message) => html! {
            div class="success-message" {
                span class="icon" { "\u{2705}" }
                " " (message)
            }
        },
        Notice::Error(message) => html! {
            div class="error-message" {
                span class="icon" { "\u{26a0}\u{fe0f}" }
                " " (message)
            }
        },
    }
}
