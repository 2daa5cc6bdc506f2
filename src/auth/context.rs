//! Auth context with write-through persistence.

use std::thread;
use std::time::Duration;

use super::error::{AuthError, StoreError};
use super::store::KeyValueStore;
use super::user::{ProfileUpdate, User};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Store key holding the JSON user record.
pub const USER_KEY: &str = "user";

/// Store key holding the bare display name.
pub const USER_NAME_KEY: &str = "userName";

/// Artificial delays standing in for backend round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    pub login: Duration,
    pub signup: Duration,
    pub profile: Duration,
    pub password: Duration,
}

impl Latency {
    /// No delay at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Delays used by the interactive demo.
    pub fn demo() -> Self {
        Self {
            login: Duration::from_millis(1000),
            signup: Duration::from_millis(1000),
            profile: Duration::from_millis(400),
            password: Duration::from_millis(600),
        }
    }
}

/// Current user plus the store it is mirrored to.
///
/// Created once at startup with [`AuthContext::load`] and passed to UI code
/// explicitly. Every successful mutation is written to the store before the
/// in-memory record changes, so both always agree.
#[derive(Debug)]
pub struct AuthContext<S> {
    store: S,
    user: Option<User>,
    latency: Latency,
}

impl<S: KeyValueStore> AuthContext<S> {
    /// Restores the signed in user from the store.
    ///
    /// A record that does not parse is logged and treated as signed out.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read
    pub fn load(store: S) -> Result<Self, AuthError> {
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("Ignoring corrupt stored user: {}", e);
                    None
                }
            },
            None => None,
        };
        log::debug!("Auth context loaded, signed in: {}", user.is_some());

        Ok(Self {
            store,
            user,
            latency: Latency::none(),
        })
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Signs in with any credentials whose password is long enough.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for short passwords, or a storage error
    pub fn login(&mut self, email: &str, username: &str, password: &str) -> Result<(), AuthError> {
        pause(self.latency.login);
        if too_short(password) {
            return Err(AuthError::InvalidCredentials);
        }
        self.replace(Some(User::new(email, username)))?;
        log::debug!("Signed in as {}", username);
        Ok(())
    }

    /// Creates an account and signs in.
    ///
    /// # Errors
    ///
    /// Returns `PasswordTooShort` for short passwords, or a storage error
    pub fn signup(&mut self, email: &str, name: &str, password: &str) -> Result<(), AuthError> {
        pause(self.latency.signup);
        if too_short(password) {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        self.replace(Some(User::new(email, name)))?;
        log::debug!("Signed up {}", email);
        Ok(())
    }

    /// Merges profile fields into the current user.
    ///
    /// Does nothing when signed out.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), AuthError> {
        pause(self.latency.profile);
        let Some(current) = &self.user else {
            log::debug!("Profile update ignored, no user signed in");
            return Ok(());
        };
        let mut next = current.clone();
        next.apply(update);
        self.replace(Some(next))?;
        Ok(())
    }

    /// Checks a new password. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `PasswordTooShort` for short passwords
    pub fn update_password(&mut self, new_password: &str) -> Result<(), AuthError> {
        pause(self.latency.password);
        if too_short(new_password) {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }

    /// Signs out and clears the stored record.
    ///
    /// The in-memory user is always cleared; a failed store write is logged.
    pub fn logout(&mut self) {
        if let Err(e) = persist(&mut self.store, None) {
            log::warn!("Failed to clear stored user: {}", e);
        }
        self.user = None;
    }

    fn replace(&mut self, user: Option<User>) -> Result<(), StoreError> {
        persist(&mut self.store, user.as_ref())?;
        self.user = user;
        Ok(())
    }
}

fn persist<S: KeyValueStore>(store: &mut S, user: Option<&User>) -> Result<(), StoreError> {
    match user {
        Some(user) => {
            let record = serde_json::to_string(user)?;
            store.set_all(&[(USER_KEY, record.as_str()), (USER_NAME_KEY, user.name.as_str())])
        }
        None => store.remove_all(&[USER_KEY, USER_NAME_KEY]),
    }
}

fn too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FileStore, MemoryStore};

    fn signed_in() -> AuthContext<MemoryStore> {
        let mut auth = AuthContext::load(MemoryStore::new()).unwrap();
        auth.login("ada@example.com", "Ada", "secret1").unwrap();
        auth
    }

    #[test]
    fn test_load_empty_store_is_signed_out() {
        // Arrange & Act
        let auth = AuthContext::load(MemoryStore::new()).unwrap();

        // Assert
        assert!(!auth.is_signed_in());
        assert!(auth.user().is_none());
    }

    #[test]
    fn test_login_short_password_is_invalid_credentials() {
        // Arrange
        let mut auth = AuthContext::load(MemoryStore::new()).unwrap();

        // Act
        let result = auth.login("ada@example.com", "Ada", "12345");

        // Assert
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!auth.is_signed_in());
        assert!(auth.store().is_empty(), "Failed login must not write");
    }

    #[test]
    fn test_login_writes_through() {
        // Arrange & Act
        let auth = signed_in();

        // Assert
        let user = auth.user().expect("Should be signed in");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "Ada");
        assert_eq!(
            auth.store().get(USER_KEY).unwrap().as_deref(),
            Some(r#"{"email":"ada@example.com","name":"Ada"}"#)
        );
        assert_eq!(auth.store().get(USER_NAME_KEY).unwrap().as_deref(), Some("Ada"));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Arrange
        let mut auth = AuthContext::load(MemoryStore::new()).unwrap();

        // Act: six characters, more than six bytes
        let result = auth.login("e@example.com", "E", "ééééé!");

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_signup_short_password() {
        // Arrange
        let mut auth = AuthContext::load(MemoryStore::new()).unwrap();

        // Act
        let result = auth.signup("bo@example.com", "Bo", "abc");

        // Assert
        match result {
            Err(AuthError::PasswordTooShort { min }) => assert_eq!(min, 6),
            other => panic!("expected PasswordTooShort, got {:?}", other),
        }
    }

    #[test]
    fn test_signup_signs_in() {
        // Arrange
        let mut auth = AuthContext::load(MemoryStore::new()).unwrap();

        // Act
        auth.signup("bo@example.com", "Bo", "abcdef").unwrap();

        // Assert
        assert_eq!(auth.user(), Some(&User::new("bo@example.com", "Bo")));
    }

    #[test]
    fn test_update_profile_merges_and_persists() {
        // Arrange
        let mut auth = signed_in();

        // Act
        auth.update_profile(ProfileUpdate {
            dob: Some(Some("1990-04-01".to_string())),
            ..Default::default()
        })
        .unwrap();

        // Assert
        let stored = auth.store().get(USER_KEY).unwrap().unwrap();
        let restored: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored.dob.as_deref(), Some("1990-04-01"));
        assert_eq!(restored.name, "Ada");
    }

    #[test]
    fn test_update_profile_signed_out_is_noop() {
        // Arrange
        let mut auth = AuthContext::load(MemoryStore::new()).unwrap();

        // Act
        let result = auth.update_profile(ProfileUpdate {
            name: Some("Ghost".to_string()),
            ..Default::default()
        });

        // Assert
        assert!(result.is_ok());
        assert!(auth.user().is_none());
        assert!(auth.store().is_empty());
    }

    #[test]
    fn test_update_password() {
        // Arrange
        let mut auth = signed_in();

        // Act & Assert
        assert!(auth.update_password("longenough").is_ok());
        assert!(matches!(
            auth.update_password("short"),
            Err(AuthError::PasswordTooShort { min: 6 })
        ));
    }

    #[test]
    fn test_logout_clears_store() {
        // Arrange
        let mut auth = signed_in();

        // Act
        auth.logout();

        // Assert
        assert!(!auth.is_signed_in());
        assert!(auth.store().get(USER_KEY).unwrap().is_none());
        assert!(auth.store().get(USER_NAME_KEY).unwrap().is_none());
    }

    #[test]
    fn test_load_restores_user() {
        // Arrange
        let store = signed_in().into_store();

        // Act
        let auth = AuthContext::load(store).unwrap();

        // Assert
        assert_eq!(auth.user().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn test_load_ignores_corrupt_record() {
        // Arrange
        let mut store = MemoryStore::new();
        store.set(USER_KEY, "{not json").unwrap();

        // Act
        let auth = AuthContext::load(store).unwrap();

        // Assert
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn test_failed_write_leaves_store_and_user_unchanged() {
        // Arrange: a directory at the store path makes every write fail
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        let mut auth = AuthContext::load(store).unwrap();

        // Act
        let result = auth.login("ada@example.com", "Ada", "secret1");

        // Assert
        assert!(matches!(result, Err(AuthError::Storage(StoreError::Io(_)))));
        assert!(!auth.is_signed_in());
        assert!(auth.store().get(USER_KEY).unwrap().is_none());
        assert!(auth.store().get(USER_NAME_KEY).unwrap().is_none());
    }

    #[test]
    fn test_demo_latency_values() {
        let latency = Latency::demo();
        assert_eq!(latency.login, Duration::from_millis(1000));
        assert_eq!(latency.profile, Duration::from_millis(400));
        assert_eq!(latency.password, Duration::from_millis(600));
        assert_eq!(Latency::none().login, Duration::ZERO);
    }
}
