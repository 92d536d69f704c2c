//! Result section card component

use maud::{Markup, PreEscaped, html};

/// Renders a titled card around pre-rendered HTML
///
/// The content is inserted without escaping. Callers pass output of
/// [`crate::TextRenderer`], which is already HTML.
///
/// # Arguments
///
/// * `id`: Element id used for in-page anchors
/// * `icon`: Leading glyph for the card header
/// * `title`: Card header text
/// * `content_html`: Rendered HTML fragment
///
/// # Returns
///
/// Section markup
pub fn result_section(id: &str, icon: &str, title: &str, content_html: &str) -> Markup {
    html! {
        section class="result-card" id=(id) {
            div class="result-header" {
                span class="result-icon" { (icon) }
                h2 class="result-title" { (title) }
            }
            div class="result-content" {
                (PreEscaped(content_html))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_section_keeps_html() {
        // Arrange
        let content = "<p><strong>Match</strong></p>";

        // Act
        let html = result_section("analysis", "📊", "Analysis", content).into_string();

        // Assert
        assert!(html.contains(r#"id="analysis""#));
        assert!(html.contains("<h2 class=\"result-title\">Analysis</h2>"));
        assert!(
            html.contains(content),
            "Rendered content should not be escaped"
        );
    }
}
