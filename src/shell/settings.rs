//! Settings modal state and the persisted theme preference.

use crate::auth::{KeyValueStore, StoreError};
use crate::markdown::Variant;

/// Store key holding `dark` or `light`.
pub const THEME_KEY: &str = "theme";

/// Reads the stored theme; anything but `dark` means light.
///
/// # Errors
///
/// Returns error if the store cannot be read
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Result<Variant, StoreError> {
    let stored = store.get(THEME_KEY)?;
    Ok(match stored.as_deref() {
        Some("dark") => Variant::Dark,
        _ => Variant::Light,
    })
}

/// Writes the theme preference.
///
/// # Errors
///
/// Returns error if the store cannot be written
pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, variant: Variant) -> Result<(), StoreError> {
    store.set(THEME_KEY, variant.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    pub dark_mode: bool,
    pub notifications: bool,
    pub feedback: String,
}

impl SettingsState {
    /// Seeds dark mode from the store. Notifications start enabled.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            dark_mode: load_theme(store)?.is_dark(),
            ..Self::default()
        })
    }

    pub fn variant(&self) -> Variant {
        if self.dark_mode {
            Variant::Dark
        } else {
            Variant::Light
        }
    }

    /// Flips dark mode and writes it through.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written; the toggle is not applied
    pub fn toggle_dark_mode<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<(), StoreError> {
        let next = !self.dark_mode;
        save_theme(store, if next { Variant::Dark } else { Variant::Light })?;
        self.dark_mode = next;
        Ok(())
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    pub fn clear_feedback(&mut self) {
        self.feedback.clear();
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            feedback: String::new(),
        }
    }
}
