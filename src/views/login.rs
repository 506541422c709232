use maud::{html, Markup};

use crate::views::{layout, Notice};

/// Login and registration forms on one page.
pub fn page(notice: Option<&Notice>, email: &str) -> Markup {
    layout::page(
        "Login",
        None,
        notice,
        html! {
            section class="auth-forms" {
                div class="auth-card" {
                    h2 { "Login" }
                    form method="post" action="/login" {
                        div class="form-row" {
                            label for="email" { "Email" }
                            input type="email" id="email" name="email" value=(email) required;
                        }
                        div class="form-row" {
                            label for="password" { "Password" }
                            input type="password" id="password" name="password" required;
                        }
                        button type="submit" { "Login" }
                    }
                }
                div class="auth-card" {
                    h2 { "Create an account" }
                    form method="post" action="/register" {
                        div class="form-row" {
                            label for="reg-email" { "Email" }
                            input type="email" id="reg-email" name="email" required;
                        }
                        div class="form-row" {
                            label for="reg-first-name" { "First name" }
                            input type="text" id="reg-first-name" name="first_name" required;
                        }
                        div class="form-row" {
                            label for="reg-last-name" { "Last name" }
                            input type="text" id="reg-last-name" name="last_name" required;
                        }
                        div class="form-row" {
                            label for="reg-password" { "Password" }
                            input type="password" id="reg-password" name="password" required;
                        }
                        button type="submit" { "Register" }
                    }
                }
            }
        },
    )
}
