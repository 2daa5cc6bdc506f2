//! Sidebar navigation component

use maud::{Markup, html};

use crate::auth::User;
use crate::avatar;
use crate::shell::{HOME_ROUTE, MENU_ITEMS, MenuItem, ShellEvent, SidebarState};

/// Renders the sidebar with logo, quick actions, menu, and footer actions
///
/// The mobile toggle and overlay reflect `state.open`. Buttons carry
/// `data-action` or `data-event` attributes naming the transition a host
/// script should trigger; nothing here is interactive on its own.
///
/// # Arguments
///
/// * `state`: Sidebar visibility and current route
/// * `user`: Signed in user, shown next to the profile button
///
/// # Returns
///
/// Sidebar markup including the mobile toggle and overlay
pub fn sidebar(state: &SidebarState, user: Option<&User>) -> Markup {
    let panel_class = if state.open {
        "sidebar sidebar-open"
    } else {
        "sidebar"
    };

    html! {
        button class="menu-toggle" data-action="toggle-menu" {
            @if state.open {
                i class="ph ph-x" {}
            } @else {
                i class="ph ph-list" {}
            }
        }

        aside class=(panel_class) {
            a class="logo" href=(HOME_ROUTE) {
                div class="logo-mark" { i class="ph ph-scales" {} }
                div {
                    h1 class="logo-title" { "LegalAI Pro" }
                    p class="logo-tagline" { "Premium Legal Intelligence" }
                }
            }

            div class="plan-badge" {
                i class="ph ph-crown plan-icon" {}
                div class="plan-text" {
                    p class="plan-name" { "Premium Plan" }
                    p class="plan-detail" { "Unlimited access" }
                }
                i class="ph ph-lightning plan-icon" {}
            }

            div class="quick-actions" {
                button class="quick-action" data-action="search" {
                    i class="ph ph-magnifying-glass" {}
                    span { "Search" }
                }
                button class="quick-action" data-event=(ShellEvent::OpenChat.name()) {
                    i class="ph ph-chat-circle" {}
                    span { "Chat" }
                }
            }

            nav class="menu" {
                h3 class="menu-heading" { "MAIN NAVIGATION" }
                ul class="menu-list" {
                    @for item in MENU_ITEMS {
                        li { (menu_link(item, state.route())) }
                    }
                }
            }

            div class="sidebar-bottom" {
                div class="usage" {
                    div class="usage-header" {
                        span class="usage-label" { "Today's Usage" }
                        span class="usage-count" { "12/∞ searches" }
                    }
                    div class="usage-track" { div class="usage-bar" {} }
                    p class="usage-note" { "Premium unlimited access" }
                }

                div class="sidebar-actions" {
                    button class="action-button" data-action="open-profile" {
                        i class="ph ph-bell" {}
                    }
                    button class="action-button action-primary" data-action="open-profile" {
                        @if let Some(u) = user {
                            (avatar::render(&u.name, u.avatar_url.as_deref()))
                        } @else {
                            i class="ph ph-user" {}
                        }
                        span { "Profile" }
                    }
                    button class="action-button" data-action="open-settings" {
                        i class="ph ph-gear" {}
                    }
                }
            }
        }

        @if state.open {
            div class="overlay" data-action="close-menu" {}
        }
    }
}

/// Renders one menu entry, highlighted when it matches the route
fn menu_link(item: &MenuItem, route: &str) -> Markup {
    let active = item.is_active(route);
    let class = if active {
        "menu-link menu-link-active"
    } else {
        "menu-link"
    };

    html! {
        a class=(class) href=(item.path) {
            span class="menu-icon" { i class=(item.icon) {} }
            span class="menu-label" { (item.label) }
            @if active {
                span class="menu-indicator" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_route_highlighted() {
        // Arrange
        let state = SidebarState::new("/contracts");

        // Act
        let html = sidebar(&state, None).into_string();

        // Assert
        assert!(
            html.contains(r#"<a class="menu-link menu-link-active" href="/contracts">"#),
            "Active item should be highlighted: {}",
            html
        );
        assert_eq!(html.matches("menu-link-active").count(), 1);
        assert_eq!(html.matches("menu-indicator").count(), 1);
    }

    #[test]
    fn test_all_menu_items_rendered() {
        // Arrange & Act
        let html = sidebar(&SidebarState::default(), None).into_string();

        // Assert
        for item in MENU_ITEMS {
            assert!(html.contains(item.label), "Missing {}", item.label);
        }
        assert!(!html.contains("menu-link-active"));
    }

    #[test]
    fn test_open_state_shows_overlay() {
        // Arrange
        let mut state = SidebarState::default();

        // Act
        let closed = sidebar(&state, None).into_string();
        state.toggle();
        let open = sidebar(&state, None).into_string();

        // Assert
        assert!(!closed.contains("overlay"));
        assert!(closed.contains("ph-list"));
        assert!(open.contains(r#"class="sidebar sidebar-open""#));
        assert!(open.contains("overlay"));
        assert!(open.contains("ph-x"));
    }

    #[test]
    fn test_signed_in_user_avatar() {
        // Arrange
        let user = User::new("ada@example.com", "ada");

        // Act
        let html = sidebar(&SidebarState::default(), Some(&user)).into_string();

        // Assert
        assert!(html.contains(r#"<span class="avatar avatar-initial">A</span>"#));
        assert!(html.contains(r#"data-event="openChat""#));
    }
}
