//! Custom error types for the table analysis library.
//!
//! Only genuine misuse (unknown columns, wrong column kinds, invalid
//! arguments) and load failures are errors. Empty or degenerate data is
//! absorbed into well-defined report values by the analysis functions.
//!
//! Errors are serializable so a presentation layer can show them as
//! `{ code, message }` objects.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for data-insight.
#[derive(Error, Debug)]
pub enum InsightError {
    /// Referenced column is absent from the table or has the wrong kind.
    #[error("Invalid column '{column}': {reason}")]
    InvalidColumn { column: String, reason: String },

    /// Invalid argument for an operation (e.g. a zero `top_n`).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input bytes could not be turned into a table.
    #[error("Failed to load dataset: {0}")]
    LoadFailed(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Summary provider error.
    #[error("AI client error: {0}")]
    AiClientError(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error (for the summary provider, only with "ai" feature).
    #[cfg(feature = "ai")]
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<InsightError>,
    },
}

impl InsightError {
    /// Shorthand for a column that does not exist in the table.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::InvalidColumn {
            column: column.into(),
            reason: "column not found in table".to_string(),
        }
    }

    /// Shorthand for a column that exists but is not numeric.
    pub fn not_numeric(column: impl Into<String>) -> Self {
        Self::InvalidColumn {
            column: column.into(),
            reason: "column is not numeric".to_string(),
        }
    }

    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        InsightError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidColumn { .. } => "INVALID_COLUMN",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::LoadFailed(_) => "LOAD_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::AiClientError(_) => "AI_CLIENT_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            #[cfg(feature = "ai")]
            Self::HttpRequest(_) => "HTTP_REQUEST_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error was caused by the caller (bad column, bad argument,
    /// bad configuration) rather than by the data or the environment.
    pub fn is_misuse(&self) -> bool {
        match self {
            Self::InvalidColumn { .. } | Self::InvalidArgument(_) | Self::InvalidConfig(_) => true,
            Self::WithContext { source, .. } => source.is_misuse(),
            _ => false,
        }
    }
}

impl Serialize for InsightError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("InsightError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, InsightError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| InsightError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            InsightError::column_not_found("sales").error_code(),
            "INVALID_COLUMN"
        );
        assert_eq!(
            InsightError::LoadFailed("bad".to_string()).error_code(),
            "LOAD_FAILED"
        );
    }

    #[test]
    fn test_is_misuse() {
        assert!(InsightError::not_numeric("region").is_misuse());
        assert!(InsightError::InvalidArgument("top_n".to_string()).is_misuse());
        assert!(!InsightError::LoadFailed("bad".to_string()).is_misuse());
        assert!(
            InsightError::column_not_found("x")
                .with_context("During outlier summary")
                .is_misuse()
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = InsightError::column_not_found("Revenue");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("INVALID_COLUMN"));
        assert!(json.contains("Revenue"));
    }

    #[test]
    fn test_with_context() {
        let error = InsightError::not_numeric("region").with_context("During category ranking");
        assert!(error.to_string().contains("During category ranking"));
        assert_eq!(error.error_code(), "INVALID_COLUMN");
    }
}
