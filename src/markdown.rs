//! Markdown subset rendering for generated analysis text.
//!
//! This module converts the small markdown dialect emitted by the analysis
//! service (bold, italic, two header levels, bulleted and numbered items,
//! paragraph and line breaks) to an HTML fragment. It is not a general
//! markdown parser: unsupported or unbalanced input degrades to partially
//! converted text instead of failing.

mod emphasis;
mod renderer;

pub use renderer::TextRenderer;
