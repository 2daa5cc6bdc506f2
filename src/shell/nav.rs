//! Sidebar menu and open/closed state.

/// Route of the landing page.
pub const HOME_ROUTE: &str = "/";

/// Entry of the main navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Phosphor icon classes
    pub icon: &'static str,
}

impl MenuItem {
    /// Exact match only; `/cases/42` does not activate `/cases`.
    pub fn is_active(&self, route: &str) -> bool {
        self.path == route
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Case Research",
        path: "/cases",
        icon: "ph ph-scales",
    },
    MenuItem {
        label: "Contract Analysis",
        path: "/contracts",
        icon: "ph ph-file-text",
    },
    MenuItem {
        label: "Legal News",
        path: "/news",
        icon: "ph ph-newspaper",
    },
    MenuItem {
        label: "Find a Lawyer",
        path: "/find-lawyer",
        icon: "ph ph-squares-four",
    },
];

/// Window-level events the shell exchanges with the rest of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Received: another view asks for the profile modal
    OpenProfile,
    /// Sent: the chat quick action was pressed
    OpenChat,
}

impl ShellEvent {
    pub fn name(self) -> &'static str {
        match self {
            ShellEvent::OpenProfile => "openProfile",
            ShellEvent::OpenChat => "openChat",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "openProfile" => Some(ShellEvent::OpenProfile),
            "openChat" => Some(ShellEvent::OpenChat),
            _ => None,
        }
    }
}

/// Which parts of the sidebar are visible, plus the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    route: String,
    pub open: bool,
    pub profile_open: bool,
    pub settings_open: bool,
}

impl SidebarState {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            open: false,
            profile_open: false,
            settings_open: false,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Menu item matching the current route, if any.
    pub fn active_item(&self) -> Option<&'static MenuItem> {
        MENU_ITEMS.iter().find(|item| item.is_active(&self.route))
    }

    /// Mobile menu button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follows a link and collapses the mobile sidebar.
    pub fn navigate(&mut self, path: &str) {
        log::debug!("Navigating from {} to {}", self.route, path);
        self.route = path.to_string();
        self.open = false;
    }

    pub fn go_home(&mut self) {
        self.navigate(HOME_ROUTE);
    }

    /// Chat quick action; the returned event is for the host to dispatch.
    pub fn request_chat(&mut self) -> ShellEvent {
        self.open = false;
        ShellEvent::OpenChat
    }

    pub fn close_profile(&mut self) {
        self.profile_open = false;
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_exact_match() {
        // Arrange
        let on_news = SidebarState::new("/news");
        let nested = SidebarState::new("/news/today");

        // Act & Assert
        assert_eq!(on_news.active_item().map(|i| i.label), Some("Legal News"));
        assert!(nested.active_item().is_none());
        assert!(SidebarState::default().active_item().is_none());
    }

    #[test]
    fn test_navigate_closes_menu() {
        // Arrange
        let mut state = SidebarState::default();
        state.toggle();
        assert!(state.open);

        // Act
        state.navigate("/contracts");

        // Assert
        assert!(!state.open);
        assert_eq!(state.route(), "/contracts");
    }

    #[test]
    fn test_go_home_from_menu() {
        // Arrange
        let mut state = SidebarState::new("/cases");
        state.toggle();

        // Act
        state.go_home();

        // Assert
        assert_eq!(state.route(), HOME_ROUTE);
        assert!(!state.open);
    }

    #[test]
    fn test_request_chat() {
        // Arrange
        let mut state = SidebarState::default();
        state.toggle();

        // Act
        let event = state.request_chat();

        // Assert
        assert_eq!(event, ShellEvent::OpenChat);
        assert_eq!(event.name(), "openChat");
        assert!(!state.open);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ShellEvent::from_name("openProfile"), Some(ShellEvent::OpenProfile));
        assert_eq!(ShellEvent::from_name("resize"), None);
    }

    #[test]
    fn test_menu_paths_are_unique() {
        let mut paths: Vec<_> = MENU_ITEMS.iter().map(|i| i.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }
}
