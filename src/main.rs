use anyhow::{Context, Result};
use screener::{AnalysisClient, AnalysisResponse, Config, Source, Submission};
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Loads the analysis response from a saved file or a fresh upload.
///
/// # Arguments
///
/// * `config`: Validated command line configuration
///
/// # Returns
///
/// Parsed analysis response
///
/// # Errors
///
/// Returns error if the saved file cannot be parsed, submission validation
/// fails, or the analysis service request fails
fn load_response(config: &Config) -> Result<AnalysisResponse> {
    match config.source()? {
        Source::Saved(path) => {
            info!("Rendering saved response {}", path.display());
            AnalysisResponse::from_path(path)
        }
        Source::Upload { resume, .. } => {
            let job_desc = config.read_job_desc()?;

            let mut submission = Submission::new(resume, &job_desc)?;
            if let Some(values) = &config.company_values {
                submission = submission.with_company_values(values.clone());
            }
            if let Some(location) = &config.location {
                submission = submission.with_location(location.clone());
            }

            let client = AnalysisClient::new(config.endpoint.clone(), config.timeout())?;
            submission.submit(&client)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let response = load_response(&config)?;

    let extras = response.extra_sections();
    if !extras.is_empty() {
        info!(sections = ?extras, "Response carries additional sections");
    }
    if response.analysis.is_empty() {
        warn!("Response has no analysis text");
    }

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    screener::write_css_assets(&config.output.join("assets"))?;

    let page = screener::pages::results::generate(&config.title, &response);
    let index_path = config.output.join("index.html");
    fs::write(&index_path, page.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        warn!("Failed to open {}: {:#}", index_path.display(), e);
    }

    Ok(())
}
