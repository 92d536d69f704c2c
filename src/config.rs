//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::submission::DEFAULT_ENDPOINT;

/// Command line configuration for Screener.
#[derive(Debug, Clone, Parser)]
#[command(name = "screener", version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["response", "resume"])))]
pub struct Config {
    /// Saved analysis response JSON to render without contacting the service
    #[arg(long)]
    pub response: Option<PathBuf>,

    /// Resume PDF to submit for analysis
    #[arg(long, requires = "job_desc")]
    pub resume: Option<PathBuf>,

    /// Text file containing the job description
    #[arg(long)]
    pub job_desc: Option<PathBuf>,

    /// Company values used for culture fit assessment
    #[arg(long)]
    pub company_values: Option<String>,

    /// Job location used for salary benchmarking
    #[arg(long)]
    pub location: Option<String>,

    /// Analysis service address
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 300)]
    pub timeout: u64,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Results page title
    #[arg(long, default_value = "Screening Results")]
    pub title: String,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Where the analysis response comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// Previously saved response body
    Saved(&'a Path),
    /// Fresh upload to the analysis service
    Upload { resume: &'a Path, job_desc: &'a Path },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns the response source selected on the command line.
    ///
    /// # Errors
    ///
    /// Returns error if neither a saved response nor a complete upload
    /// (resume and job description) was given.
    pub fn source(&self) -> Result<Source<'_>> {
        match (&self.response, &self.resume, &self.job_desc) {
            (Some(response), _, _) => Ok(Source::Saved(response)),
            (None, Some(resume), Some(job_desc)) => Ok(Source::Upload { resume, job_desc }),
            _ => bail!("Either --response or both --resume and --job-desc are required"),
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file does not exist or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        match self.source()? {
            Source::Saved(response) => {
                if !response.exists() {
                    bail!("Response file does not exist: {}", response.display());
                }
            }
            Source::Upload { job_desc, .. } => {
                if !job_desc.exists() {
                    bail!(
                        "Job description file does not exist: {}",
                        job_desc.display()
                    );
                }
            }
        }

        if self.timeout == 0 {
            bail!("Timeout must be at least one second");
        }

        Ok(())
    }

    /// Returns request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Reads job description text from the configured file.
    ///
    /// # Errors
    ///
    /// Returns error if no job description file was given or it cannot be read.
    pub fn read_job_desc(&self) -> Result<String> {
        let path = self
            .job_desc
            .as_ref()
            .context("No job description file configured")?;

        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description: {}", path.display()))
    }
}
