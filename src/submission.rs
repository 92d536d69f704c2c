//! Resume submission to the analysis service.

use anyhow::{Context, Result, bail};
use reqwest::blocking::{Client, multipart::Form};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::response::AnalysisResponse;

/// Default analysis service address.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Delay before the long running notice is shown.
///
/// Analysis usually completes in 30 to 60 seconds.
pub const SLOW_NOTICE_AFTER: Duration = Duration::from_secs(30);

/// Validated resume and job description pair ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    resume: PathBuf,
    job_desc: String,
    company_values: Option<String>,
    location: Option<String>,
}

impl Submission {
    /// Validates inputs and creates submission.
    ///
    /// The job description is trimmed before use.
    ///
    /// # Errors
    ///
    /// Returns error if the resume file does not exist, the job description
    /// is blank, or the resume is not a `.pdf` file, checked in that order
    pub fn new(resume: impl AsRef<Path>, job_desc: &str) -> Result<Self> {
        let resume = resume.as_ref();
        let job_desc = job_desc.trim();

        if !resume.is_file() {
            bail!("Please select a resume PDF file");
        }

        if job_desc.is_empty() {
            bail!("Please enter a job description");
        }

        let is_pdf = resume
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.to_lowercase().ends_with(".pdf"));
        if !is_pdf {
            bail!("Please upload a PDF file");
        }

        Ok(Self {
            resume: resume.to_path_buf(),
            job_desc: job_desc.to_string(),
            company_values: None,
            location: None,
        })
    }

    /// Sets company values used for culture fit assessment.
    pub fn with_company_values(mut self, values: impl Into<String>) -> Self {
        self.company_values = non_blank(values.into());
        self
    }

    /// Sets job location used for salary benchmarking.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    pub fn resume(&self) -> &Path {
        &self.resume
    }

    pub fn job_desc(&self) -> &str {
        &self.job_desc
    }

    /// Builds the multipart upload form.
    fn form(&self) -> Result<Form> {
        let mut form = Form::new()
            .text("job_desc", self.job_desc.clone())
            .file("resume", &self.resume)
            .with_context(|| format!("Failed to read resume: {}", self.resume.display()))?;

        if let Some(values) = &self.company_values {
            form = form.text("company_values", values.clone());
        }
        if let Some(location) = &self.location {
            form = form.text("location", location.clone());
        }

        Ok(form)
    }

    /// Uploads the submission and parses the analysis result.
    ///
    /// Logs a progress notice if the service has not answered after
    /// [`SLOW_NOTICE_AFTER`].
    ///
    /// # Errors
    ///
    /// Returns error if the service is unreachable, answers with a non
    /// success status, or reports an error in its response body
    pub fn submit(&self, client: &AnalysisClient) -> Result<AnalysisResponse> {
        self.submit_with_notice(client, SLOW_NOTICE_AFTER)
    }

    /// Uploads the submission, logging the progress notice after `notice_after`.
    ///
    /// # Errors
    ///
    /// Same as [`Submission::submit`]
    pub fn submit_with_notice(
        &self,
        client: &AnalysisClient,
        notice_after: Duration,
    ) -> Result<AnalysisResponse> {
        let url = client.upload_url();
        info!("Analyzing {} (may take 30-60s)", self.resume.display());

        let notice = ProgressNotice::start(notice_after);
        let result = client.http.post(&url).multipart(self.form()?).send();
        notice.finish();

        let response = result.map_err(|e| client.describe_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Server error: {}", status);
        }

        let body = response.text().context("Failed to read response body")?;
        debug!(bytes = body.len(), "Received analysis response");

        AnalysisResponse::from_json(&body)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Blocking HTTP client bound to one analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
}

impl AnalysisClient {
    /// Creates client for service at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.endpoint)
    }

    fn describe_send_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_connect() {
            anyhow::anyhow!(
                "Connection error: Make sure the analysis server is running on {}",
                self.endpoint
            )
        } else if error.is_timeout() {
            anyhow::anyhow!("Analysis timed out waiting for {}", self.endpoint)
        } else {
            anyhow::Error::new(error).context("Failed to submit resume")
        }
    }
}

/// Long running request notice.
///
/// Logs a single warning if not finished within the delay.
struct ProgressNotice {
    done: mpsc::Sender<()>,
    handle: thread::JoinHandle<bool>,
}

impl ProgressNotice {
    fn start(after: Duration) -> Self {
        let (done, waiting) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let slow = matches!(waiting.recv_timeout(after), Err(RecvTimeoutError::Timeout));
            if slow {
                warn!("Still processing... AI analysis in progress");
            }
            slow
        });

        Self { done, handle }
    }

    /// Stops the notice and returns whether it was shown.
    fn finish(self) -> bool {
        let _ = self.done.send(());
        self.handle.join().unwrap_or(false)
    }
}
