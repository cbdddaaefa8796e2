use serde::Serialize;
use thiserror::Error;

/// Input value an `InvalidInput` error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputField {
    ApiKey,
    Address,
    TransactionCount,
}

impl std::fmt::Display for InputField {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            InputField::ApiKey => write!(f, "api_key"),
            InputField::Address => write!(f, "address"),
            InputField::TransactionCount => write!(f, "transaction_count"),
        }
    }
}

/// Failures that stop the pipeline before a report can be produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: InputField, reason: String },

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}. Please try again later.")]
    NetworkError(String),
}

impl PipelineError {
    pub fn invalid_input(
        field: InputField,
        reason: impl Into<String>,
    ) -> Self {
        PipelineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Category for log lines
    pub fn category(&self) -> &'static str {
        match self {
            PipelineError::InvalidInput { .. } => "invalid_input",
            PipelineError::ProviderError(_) => "provider",
            PipelineError::NetworkError(_) => "network",
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PipelineError::NetworkError(format!("request timed out: {}", e.without_url()))
        } else {
            PipelineError::NetworkError(e.without_url().to_string())
        }
    }
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
