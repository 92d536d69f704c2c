//! Analysis results page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::section::result_section;
use crate::markdown::TextRenderer;
use crate::response::AnalysisResponse;

/// Stylesheet path relative to the generated page.
const RESULTS_CSS: &str = "assets/results.css";

/// Generates the results page for one analysis response
///
/// Renders the analysis text with numbered lists enabled and the bias
/// report with numbered lists disabled, each in its own card. Empty text
/// fields still produce their card with an empty paragraph.
///
/// # Arguments
///
/// * `title`: Page heading and document title
/// * `response`: Parsed analysis service response
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(title: &str, response: &AnalysisResponse) -> Markup {
    let analysis_html = TextRenderer::analysis().render(&response.analysis);
    let bias_html = TextRenderer::bias_report().render(&response.bias_report);

    page_wrapper(
        title,
        &[RESULTS_CSS],
        html! {
            header class="page-header" {
                h1 class="page-title" { (title) }
            }

            main id="results" class="results" {
                (result_section("analysis-output", "📊", "Skill Match Analysis", &analysis_html))
                (result_section("bias-output", "⚖️", "Bias Report", &bias_html))
            }
        },
    )
}
