//! Error types for vnuser.

use thiserror::Error;
use vnuser_sheet::SheetError;

/// Result type for vnuser operations.
pub type VnUserResult<T> = Result<T, VnUserError>;

/// Errors that can occur while turning a document into usernames.
#[derive(Debug, Error)]
pub enum VnUserError {
    /// The input bytes are not a readable tabular document, or it has no sheets.
    #[error("Input format error: {0}")]
    InputFormat(String),

    /// The processing configuration does not match the document.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sheet adapter failure while building the output document.
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VnUserError {
    /// Create an input format error.
    pub fn input_format(message: impl Into<String>) -> Self {
        Self::InputFormat(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error was caused by the processing configuration.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VnUserError::config("sheet \"Staff\" not found");
        assert_eq!(err.to_string(), "Configuration error: sheet \"Staff\" not found");
        assert!(err.is_config());

        let err = VnUserError::input_format("document contains no sheets");
        assert!(!err.is_config());
    }

    #[test]
    fn test_from_sheet_error() {
        let err: VnUserError = SheetError::NoSheets.into();
        assert!(matches!(err, VnUserError::Sheet(SheetError::NoSheets)));
    }
}
