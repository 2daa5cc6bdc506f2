//! Navigation shell state: sidebar, profile modal, settings modal.
//!
//! Everything here is plain data driven by explicit method calls; the
//! [`components`](crate::components) module turns it into markup. The auth
//! context is passed in rather than reached through global state.

mod nav;
mod profile;
mod settings;

pub use nav::{HOME_ROUTE, MENU_ITEMS, MenuItem, ShellEvent, SidebarState};
pub use profile::{ProfileDraft, data_url};
pub use settings::{SettingsState, THEME_KEY, load_theme, save_theme};

use crate::auth::{AuthContext, AuthError, KeyValueStore, StoreError};
use crate::markdown::Variant;

/// Complete shell state for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub sidebar: SidebarState,
    pub profile: ProfileDraft,
    pub settings: SettingsState,
}

impl Shell {
    /// Builds the shell for a route, restoring the theme from the store.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read
    pub fn load<S: KeyValueStore>(route: &str, auth: &AuthContext<S>) -> Result<Self, StoreError> {
        Ok(Self {
            sidebar: SidebarState::new(route),
            profile: ProfileDraft::from_user(auth.user()),
            settings: SettingsState::load(auth.store())?,
        })
    }

    pub fn variant(&self) -> Variant {
        self.settings.variant()
    }

    /// Opens the profile modal with a fresh copy of the current user.
    pub fn open_profile<S: KeyValueStore>(&mut self, auth: &AuthContext<S>) {
        self.profile = ProfileDraft::from_user(auth.user());
        self.sidebar.profile_open = true;
    }

    /// Reacts to an incoming window event.
    pub fn handle_event<S: KeyValueStore>(&mut self, event: ShellEvent, auth: &AuthContext<S>) {
        match event {
            ShellEvent::OpenProfile => self.open_profile(auth),
            ShellEvent::OpenChat => log::debug!("Ignoring own {} event", event.name()),
        }
    }

    /// Saves the profile draft and closes the modal on success.
    ///
    /// # Errors
    ///
    /// Returns the failing auth operation; the modal stays open
    pub fn save_profile<S: KeyValueStore>(&mut self, auth: &mut AuthContext<S>) -> Result<(), AuthError> {
        self.profile.save(auth)?;
        self.sidebar.close_profile();
        Ok(())
    }

    /// Flips dark mode, persisting it in the auth context's store.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written
    pub fn toggle_dark_mode<S: KeyValueStore>(&mut self, auth: &mut AuthContext<S>) -> Result<(), StoreError> {
        self.settings.toggle_dark_mode(auth.store_mut())
    }

    /// Signs out from either modal and returns to the landing page.
    pub fn logout<S: KeyValueStore>(&mut self, auth: &mut AuthContext<S>) {
        auth.logout();
        self.sidebar.close_profile();
        self.sidebar.close_settings();
        self.sidebar.go_home();
        self.profile = ProfileDraft::default();
    }
}
