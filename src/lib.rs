//! Resume screening client that renders analysis results as HTML.

mod assets;
pub mod components;
mod config;
mod markdown;
pub mod pages;
mod response;
mod submission;

pub use assets::write_css_assets;
pub use config::{Config, Source};
pub use markdown::TextRenderer;
pub use response::AnalysisResponse;
pub use submission::{AnalysisClient, DEFAULT_ENDPOINT, SLOW_NOTICE_AFTER, Submission};
