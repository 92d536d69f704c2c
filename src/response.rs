//! Analysis service response contract.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// Structured result returned by the analysis service upload endpoint.
///
/// Only the two text blobs are rendered. The remaining sections are carried
/// as opaque JSON values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    /// Skill match analysis text
    #[serde(default)]
    pub analysis: String,
    /// Bias findings for the job description
    #[serde(default)]
    pub bias_report: String,
    #[serde(default)]
    pub culture_fit: Option<serde_json::Value>,
    #[serde(default)]
    pub salary_benchmark: Option<serde_json::Value>,
    #[serde(default)]
    pub interview_questions: Option<serde_json::Value>,
}

/// Response body shape used by the service to report failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl AnalysisResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not valid JSON, or carries a non-empty
    /// `error` field, in which case the error message is the service message.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).context("Response is not valid JSON")?;

        if let Ok(ErrorBody { error: Some(message) }) = ErrorBody::deserialize(&value)
            && !message.is_empty()
        {
            bail!("{}", message);
        }

        Self::deserialize(value).context("Response does not match the analysis contract")
    }

    /// Reads and parses a saved response file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read response file: {}", path.display()))?;
        Self::from_json(&body)
    }

    /// Names of the optional sections present in this response.
    pub fn extra_sections(&self) -> Vec<&'static str> {
        [
            ("culture_fit", &self.culture_fit),
            ("salary_benchmark", &self.salary_benchmark),
            ("interview_questions", &self.interview_questions),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_ref().is_some_and(|v| !v.is_null()))
        .map(|(name, _)| name)
        .collect()
    }
}
