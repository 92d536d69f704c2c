//! Integration tests for analysis text rendering.
//!
//! Exercises the public renderer and results page with realistic
//! service output.

mod common;

use anyhow::Result;
use pretty_assertions::assert_eq;
use screener::{AnalysisResponse, TextRenderer};

/// Tests header, paragraph, list, and trailing paragraph composition.
#[test]
fn test_render_mixed_document() {
    // Arrange
    let text = "## Summary\nStrong candidate.\n\n- Rust\n- Go\n\nRecommend interview.";

    // Act
    let html = TextRenderer::analysis().render(text);

    // Assert
    assert_eq!(
        html,
        "<p><h3>Summary</h3><br>Strong candidate.</p><p><ul><li>Rust</li>\n<li>Go</li></ul></p><p>Recommend interview.</p>"
    );
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
}

/// Tests that a list-like line later in the text gets no second wrapper.
#[test]
fn test_render_single_list_wrapper() {
    // Arrange
    let text = "- one\n- two\n\nNotes\n\n- three";

    // Act
    let html = TextRenderer::bias_report().render(text);

    // Assert
    assert_eq!(
        html.matches("<ul><li>one</li>\n<li>two</li></ul>").count(),
        0,
        "Greedy run extends to the last item"
    );
    assert_eq!(html.matches("<ul>").count(), 1);
    assert!(html.starts_with("<p><ul><li>one</li>\n<li>two</li>"));
    assert!(html.ends_with("<li>three</li></ul></p>"));
}

/// Tests a plain two item bullet list is wrapped exactly once.
#[test]
fn test_render_bullet_fixture() {
    let html = TextRenderer::analysis().render("- one\n- two");

    assert_eq!(
        html.matches("<ul><li>one</li>\n<li>two</li></ul>").count(),
        1
    );
}

/// Tests numbered and bulleted items merged into one list in analysis text.
#[test]
fn test_render_mixed_list_markers() {
    // Arrange
    let text = "- first\n2. second";

    // Act
    let analysis = TextRenderer::analysis().render(text);
    let bias = TextRenderer::bias_report().render(text);

    // Assert
    assert_eq!(analysis, "<p><ul><li>first</li>\n<li>second</li></ul></p>");
    assert_eq!(bias, "<p><ul><li>first</li></ul><br>2. second</p>");
}

/// Tests emphasis inside list items and headers.
#[test]
fn test_render_inline_inside_blocks() {
    // Arrange
    let text = "### **Key** gaps\n- *Kubernetes* experience\n- __AWS__ certification";

    // Act
    let html = TextRenderer::analysis().render(text);

    // Assert
    assert_eq!(
        html,
        "<p><h4><strong>Key</strong> gaps</h4><br><ul><li><em>Kubernetes</em> experience</li>\n<li><strong>AWS</strong> certification</li></ul></p>"
    );
}

/// Tests renderer is usable from several threads at once.
#[test]
fn test_render_concurrently() {
    // Arrange
    let renderer = TextRenderer::analysis();
    let expected = renderer.render("**a**\n- b");

    // Act
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| renderer.render("**a**\n- b")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Assert
    for result in results {
        assert_eq!(result, expected);
    }
}

/// Tests full results page from a saved service response.
#[test]
fn test_results_page_from_fixture() -> Result<()> {
    // Arrange
    let response = AnalysisResponse::from_path(common::fixture("response.json"))?;

    // Act
    let html = screener::pages::results::generate("Jane Doe", &response).into_string();

    // Assert
    assert!(html.contains("<title>Jane Doe - Screener</title>"));
    assert!(html.contains("<strong>Overall Match</strong>: 78%"));
    assert!(html.contains("<ul><li>Rust</li>\n<li>PostgreSQL</li></ul>"));
    assert!(html.contains("<em>Strong</em> backend background."));
    assert!(
        html.contains("</p><p>1. Consider neutral wording.</p>"),
        "Bias report keeps numbered lines as text"
    );
    assert_eq!(
        response.extra_sections(),
        vec!["culture_fit", "interview_questions"]
    );

    Ok(())
}
