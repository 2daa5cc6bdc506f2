//! Avatar rendering for the signed in user
//!
//! Shows the uploaded image when there is one, otherwise a gradient tile
//! with the uppercase initial of the name.

use maud::{Markup, html};

use crate::auth::{User, initial_of};

/// Create avatar element from a name and optional image URL
pub fn render(name: &str, avatar_url: Option<&str>) -> Markup {
    match avatar_url {
        Some(src) => html! { img class="avatar avatar-image" src=(src) alt="avatar"; },
        None => html! { span class="avatar avatar-initial" { (initial_of(name)) } },
    }
}

/// Create avatar element for a possibly signed out user
pub fn for_user(user: Option<&User>) -> Markup {
    match user {
        Some(u) => render(&u.name, u.avatar_url.as_deref()),
        None => render("", None),
    }
}
