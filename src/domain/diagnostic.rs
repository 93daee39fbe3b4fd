// Diagnostic report domain models
use super::alert::DiagnosticAlert;
use serde::Serialize;
use thiserror::Error;

/// Why a text-generation call did not produce usable text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("generation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("timeout after {0}ms")]
    Timeout(u64),

    #[error("generation service returned no text")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    InvalidResponse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GenerationError {
    /// Stable label for logs and API payloads
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Transport(_) => "transport",
            GenerationError::Status { status, .. } if *status == 401 || *status == 403 => "auth",
            GenerationError::Status { .. } => "status",
            GenerationError::Timeout(_) => "timeout",
            GenerationError::EmptyResponse => "empty_response",
            GenerationError::InvalidResponse(_) => "invalid_response",
            GenerationError::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Result of a report request. Callers always get displayable text; the
/// failure cause stays inspectable.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Generated(String),
    Fallback { text: String, cause: GenerationError },
}

impl ReportOutcome {
    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            ReportOutcome::Generated(text) => text,
            ReportOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ReportOutcome::Generated(text) => text,
            ReportOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn cause(&self) -> Option<&GenerationError> {
        match self {
            ReportOutcome::Generated(_) => None,
            ReportOutcome::Fallback { cause, .. } => Some(cause),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PanelPhase {
    #[default]
    Idle,
    Generating,
    ReportReady,
    Dismissed,
}

/// Observable state of the diagnostic panel
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    pub phase: PanelPhase,
    pub alert: Option<DiagnosticAlert>,
    pub report_text: Option<String>,
    pub is_generating: bool,
    /// `kind()` of the last fallback, if the displayed report is one
    pub failure: Option<String>,
    /// Token of the most recently issued request
    pub request_token: u64,
}
