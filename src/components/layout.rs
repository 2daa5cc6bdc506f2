//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use crate::markdown::Variant;

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head, and the two column shell structure. The `dark`
/// class on the root element follows the selected variant so stylesheets
/// can switch palettes.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: CSS file paths to include
/// * `variant`: Light or dark presentation
/// * `sidebar`: Sidebar and modal markup
/// * `body`: Page-specific main content
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    stylesheets: &[&str],
    variant: Variant,
    sidebar: Markup,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[variant.is_dark().then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - LegalAI Pro" }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="shell" {
                    (sidebar)
                    main class="content" {
                        (body)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_class_on_root() {
        // Arrange & Act
        let dark = page_wrapper("T", &[], Variant::Dark, html! {}, html! {}).into_string();
        let light = page_wrapper("T", &[], Variant::Light, html! {}, html! {}).into_string();

        // Assert
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));
        assert!(light.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn test_stylesheets_and_title() {
        // Arrange & Act
        let html = page_wrapper(
            "Brief",
            &["assets/base.css", "assets/markdown.css"],
            Variant::Light,
            html! { aside {} },
            html! { p { "body" } },
        )
        .into_string();

        // Assert
        assert!(html.contains("<title>Brief - LegalAI Pro</title>"));
        assert!(html.contains(r#"href="assets/base.css""#));
        assert!(html.contains(r#"href="assets/markdown.css""#));
        assert!(html.contains(r#"<main class="content"><p>body</p></main>"#));
    }
}
