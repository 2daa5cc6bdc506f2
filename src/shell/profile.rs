//! Profile modal form state.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::auth::{AuthContext, AuthError, KeyValueStore, ProfileUpdate, User};

/// Editable copy of the profile, seeded when the modal opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub new_password: String,
    avatar: Option<String>,
    initial_avatar: Option<String>,
    saving: bool,
}

impl ProfileDraft {
    pub fn from_user(user: Option<&User>) -> Self {
        let avatar = user.and_then(|u| u.avatar_url.clone());
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            dob: user.and_then(|u| u.dob.clone()).unwrap_or_default(),
            new_password: String::new(),
            initial_avatar: avatar.clone(),
            avatar,
            saving: false,
        }
    }

    /// Avatar currently shown in the preview.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Encodes an uploaded image as a `data:` URL preview.
    pub fn attach_photo(&mut self, bytes: &[u8], mime: &str) {
        self.avatar = Some(data_url(bytes, mime));
    }

    /// Reverts the preview to the avatar the modal opened with.
    pub fn keep_photo(&mut self) {
        self.avatar = self.initial_avatar.clone();
    }

    pub fn remove_photo(&mut self) {
        self.avatar = None;
    }

    /// Update carrying every field of the form.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            dob: Some(Some(self.dob.clone())),
            avatar_url: Some(self.avatar.clone()),
        }
    }

    /// Saves the profile, then the password if one was typed.
    ///
    /// The typed password is cleared only after it was accepted.
    ///
    /// # Errors
    ///
    /// Returns the first failing auth operation
    pub fn save<S: KeyValueStore>(&mut self, auth: &mut AuthContext<S>) -> Result<(), AuthError> {
        self.saving = true;
        let result = self.submit(auth);
        self.saving = false;
        result
    }

    fn submit<S: KeyValueStore>(&mut self, auth: &mut AuthContext<S>) -> Result<(), AuthError> {
        auth.update_profile(self.to_update())?;
        if !self.new_password.is_empty() {
            auth.update_password(&self.new_password)?;
            self.new_password.clear();
        }
        Ok(())
    }
}

/// Builds a base64 `data:` URL for inline images.
pub fn data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
