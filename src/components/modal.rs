//! Profile and settings modal components

use maud::{Markup, html};

use crate::avatar;
use crate::shell::{ProfileDraft, SettingsState};

/// Modal frame with backdrop, title, and close button
fn frame(title: &str, close_action: &str, body: Markup) -> Markup {
    html! {
        div class="modal" {
            div class="modal-backdrop" data-action=(close_action) {}
            div class="modal-panel" {
                div class="modal-header" {
                    h3 class="modal-title" { (title) }
                    button class="modal-close" data-action=(close_action) {
                        i class="ph ph-x" {}
                    }
                }
                (body)
            }
        }
    }
}

/// Renders the profile modal for the given draft
///
/// The avatar preview follows the draft, so an attached but unsaved photo
/// is already visible. The password field is never prefilled.
///
/// # Arguments
///
/// * `draft`: Profile form state
///
/// # Returns
///
/// Modal markup with avatar, fields, photo actions, and save controls
pub fn profile_modal(draft: &ProfileDraft) -> Markup {
    frame(
        "Profile",
        "close-profile",
        html! {
            div class="profile-summary" {
                label class="avatar-picker" {
                    input type="file" accept="image/*" class="hidden" name="avatar";
                    (avatar::render(&draft.name, draft.avatar()))
                    span class="avatar-change" { "Change" }
                }
                div class="profile-fields" {
                    (field("Name", "text", "name", &draft.name))
                    (field("Email", "email", "email", &draft.email))
                    (field("Date of Birth", "date", "dob", &draft.dob))
                }
            }

            div class="photo-actions" {
                button class="button button-muted" data-action="keep-photo" { "Keep Photo" }
                button class="button button-danger-soft" data-action="remove-photo" { "Remove Photo" }
            }

            div class="password-field" {
                label class="field-label-strong" { "Update Password" }
                input type="password" class="input" name="new-password" placeholder="New password";
            }

            div class="modal-footer" {
                button class="button button-danger" data-action="logout" { "Logout" }
                div class="modal-footer-end" {
                    button class="button button-muted" data-action="close-profile" { "Cancel" }
                    button class="button button-primary" data-action="save-profile" disabled[draft.is_saving()] {
                        "Save Changes"
                    }
                }
            }
        },
    )
}

fn field(label: &str, kind: &str, name: &str, value: &str) -> Markup {
    html! {
        div {
            label class="field-label" { (label) }
            input type=(kind) class="input" name=(name) value=(value);
        }
    }
}

/// Renders the settings modal
///
/// # Arguments
///
/// * `settings`: Toggle states and feedback text
///
/// # Returns
///
/// Modal markup with dark mode, notifications, feedback, and logout
pub fn settings_modal(settings: &SettingsState) -> Markup {
    frame(
        "Settings",
        "close-settings",
        html! {
            div class="settings" {
                div class="setting-row" {
                    span class="setting-label" { "Dark Mode" }
                    input type="checkbox" name="dark-mode" data-action="toggle-dark-mode" checked[settings.dark_mode];
                }
                div class="setting-row" {
                    span class="setting-label" { "Notifications" }
                    input type="checkbox" name="notifications" checked[settings.notifications];
                }
                div {
                    label class="field-label" { "Feedback" }
                    textarea class="input feedback" name="feedback" placeholder="Tell us what to improve..." {
                        (settings.feedback)
                    }
                    div class="feedback-actions" {
                        button class="button button-muted" data-action="clear-feedback" { "Clear" }
                    }
                }
                div class="settings-footer" {
                    button class="button button-danger button-wide" data-action="logout" {
                        i class="ph ph-x" {}
                        "Logout"
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::User;

    #[test]
    fn test_profile_modal_prefills_fields() {
        // Arrange
        let mut user = User::new("ada@example.com", "Ada");
        user.dob = Some("1815-12-10".to_string());
        let draft = ProfileDraft::from_user(Some(&user));

        // Act
        let html = profile_modal(&draft).into_string();

        // Assert
        assert!(html.contains(r#"name="name" value="Ada""#));
        assert!(html.contains(r#"name="email" value="ada@example.com""#));
        assert!(html.contains(r#"name="dob" value="1815-12-10""#));
        assert!(html.contains(r#"<span class="avatar avatar-initial">A</span>"#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_profile_modal_shows_attached_photo() {
        // Arrange
        let mut draft = ProfileDraft::from_user(None);
        draft.attach_photo(b"hi", "image/png");

        // Act
        let html = profile_modal(&draft).into_string();

        // Assert
        assert!(html.contains(r#"src="data:image/png;base64,aGk=""#));
    }

    #[test]
    fn test_settings_modal_reflects_toggles() {
        // Arrange
        let mut settings = SettingsState::default();
        settings.dark_mode = true;
        settings.notifications = false;
        settings.feedback = "<more>".to_string();

        // Act
        let html = settings_modal(&settings).into_string();

        // Assert
        assert!(html.contains(r#"name="dark-mode" data-action="toggle-dark-mode" checked"#));
        assert!(html.contains(r#"name="notifications">"#));
        assert!(html.contains("&lt;more&gt;"));
    }
}
