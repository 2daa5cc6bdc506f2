//! Signed in user record.

use serde::{Deserialize, Serialize};

/// Profile of the signed in user.
///
/// Stored as JSON with camelCase keys; absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            dob: None,
            avatar_url: None,
        }
    }

    /// Merges a partial update into this record.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(dob) = update.dob {
            self.dob = dob.filter(|d| !d.is_empty());
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = avatar_url;
        }
    }

    /// Uppercase first character of the name, or `U` when the name is empty.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

/// Uppercase first character of a display name, falling back to `U` for an
/// empty name.
///
/// The name is not trimmed, so a leading space yields a blank initial. The
/// full uppercase mapping is kept: `ß` becomes `SS`.
pub fn initial_of(name: &str) -> String {
    match name.chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "U".to_string(),
    }
}

/// Partial profile change.
///
/// `None` leaves a field unchanged. For the optional fields `Some(None)`
/// clears the value; an empty date of birth also clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
