//! Error types for the console's remote layer.

use folio_order::StructuralError;
use folio_types::EntityId;
use thiserror::Error;
use tracing::warn;

/// Result type for remote collection operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Errors that can occur talking to the content API.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("request to {path} failed with status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// The target entity does not exist (anymore).
    #[error("{kind} {id} not found")]
    NotFound { kind: String, id: EntityId },

    /// The response body did not match the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A field the console depends on was missing from a response.
    #[error("malformed response from {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// A write did not complete within the configured bound.
    #[error("operation timed out")]
    Timeout,

    /// The loaded hierarchy cannot be walked.
    #[error("structural error: {0}")]
    Structure(#[from] StructuralError),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure injected by an in-memory collaborator.
    #[error("injected failure: {0}")]
    Injected(String),
}

impl ConsoleError {
    /// Whether retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout | Self::Injected(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::NotFound { .. }
            | Self::Serialization(_)
            | Self::Malformed { .. }
            | Self::Structure(_)
            | Self::Config(_) => false,
        }
    }
}

/// The board operation a failure interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Load,
    Save,
    Delete,
    Reorder,
}

impl FailureKind {
    /// Message shown to the operator.
    pub fn message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load data.",
            Self::Save => "Failed to save.",
            Self::Delete => "Failed to delete.",
            Self::Reorder => "Failed to update order. Reloaded the latest data.",
        }
    }
}

/// A remote failure caught at a board operation boundary.
#[derive(Debug, Error)]
#[error("{}", .kind.message())]
pub struct Failure {
    pub kind: FailureKind,
    #[source]
    pub source: ConsoleError,
}

/// The single user-facing error slot a board carries.
#[derive(Debug, Default)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    /// Records a failure: logs the cause and keeps the operator message.
    pub fn raise(&mut self, kind: FailureKind, source: ConsoleError) -> Failure {
        warn!(?kind, error = %source, "board operation failed");
        self.message = Some(kind.message().to_string());
        Failure { kind, source }
    }

    /// Records a message without a structured cause.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
