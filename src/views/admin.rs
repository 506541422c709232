use maud::{html, Markup};

use crate::models::user::UserProfile;
use crate::views::{layout, Notice};

pub fn page(viewer: &UserProfile, users: &[UserProfile], notice: Option<&Notice>) -> Markup {
    layout::page(
        "User management",
        Some(viewer),
        notice,
        html! {
            section class="admin" {
                h1 { "User management" }
                table class="users-table" {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        @for user in users {
                            tr {
                                td { (user.display_name()) }
                                td { (user.email) }
                                td { @if user.is_admin { "Admin" } @else { "User" } }
                                td class="user-actions" {
                                    @if user.id == viewer.id {
                                        em { "you" }
                                    } @else {
                                        @if user.is_admin {
                                            (action_form(user, "demote", "Demote"))
                                        } @else {
                                            (action_form(user, "promote", "Promote"))
                                        }
                                        (action_form(user, "delete", "Delete"))
                                    }
                                }
                            }
                        }
                    }
                }
                div class="admin-create" {
                    h2 { "Create a user" }
                    form method="post" action="/admin/users" {
                        div class="form-row" {
                            label for="email" { "Email" }
                            input type="email" id="email" name="email" required;
                        }
                        div class="form-row" {
                            label for="first_name" { "First name" }
                            input type="text" id="first_name" name="first_name" required;
                        }
                        div class="form-row" {
                            label for="last_name" { "Last name" }
                            input type="text" id="last_name" name="last_name" required;
                        }
                        div class="form-row" {
                            label for="password" { "Password" }
                            input type="password" id="password" name="password" required;
                        }
                        div class="form-row" {
                            label class="checkbox" {
                                input type="checkbox" name="is_admin";
                                " Administrator"
                            }
                        }
                        button type="submit" { "Create user" }
                    }
                }
            }
        },
    )
}

fn action_form(user: &UserProfile, action: &str, label: &str) -> Markup {
    html! {
        form method="post" action={"/admin/users/" (user.id) "/" (action)} class="inline" {
            button type="submit" class="button small" { (label) }
        }
    }
}
