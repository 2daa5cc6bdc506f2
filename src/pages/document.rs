//! Document page: a rendered markdown file inside the navigation shell

use maud::{Markup, html};

use crate::auth::User;
use crate::components::layout::page_wrapper;
use crate::components::modal::{profile_modal, settings_modal};
use crate::components::sidebar::sidebar;
use crate::markdown::Variant;
use crate::shell::Shell;

/// Stylesheets written by [`crate::write_css_assets`], relative to the page
pub const STYLESHEETS: &[&str] = &["assets/shell.css", "assets/markdown.css"];

/// Generates the HTML page for a rendered document
///
/// Open modals are rendered after the sidebar so they stack above it.
///
/// # Arguments
///
/// * `title`: Page title
/// * `shell`: Sidebar and modal state
/// * `user`: Signed in user, if any
/// * `variant`: Presentation variant for the page chrome
/// * `content`: Rendered markdown markup
///
/// # Returns
///
/// Complete HTML document
pub fn generate(
    title: &str,
    shell: &Shell,
    user: Option<&User>,
    variant: Variant,
    content: Markup,
) -> Markup {
    let chrome = html! {
        (sidebar(&shell.sidebar, user))
        @if shell.sidebar.profile_open {
            (profile_modal(&shell.profile))
        }
        @if shell.sidebar.settings_open {
            (settings_modal(&shell.settings))
        }
    };

    let body = html! {
        article class="markdown-body" { (content) }
    };

    page_wrapper(title, STYLESHEETS, variant, chrome, body)
}
