//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const RESULTS: &str = include_str!("../assets/results.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    fs::write(assets_dir.join("results.css"), RESULTS)
        .context("Failed to write CSS asset: results.css")?;
    Ok(())
}
