//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input table could not be read.
    #[error("Input error: {0}")]
    Input(String),

    /// A row failed validation at the table boundary.
    #[error("Invalid row {row}: {reason}")]
    InvalidRow {
        /// Zero-based row index in the source table.
        row: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// Output could not be produced.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::Input(_) | Self::InvalidRow { .. } => 65,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code used in machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Input(_) => "INPUT_ERROR",
            Self::InvalidRow { .. } => "INVALID_ROW",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Config(String::new()), 78, "CONFIG_ERROR")]
    #[case(AppError::Input(String::new()), 65, "INPUT_ERROR")]
    #[case(AppError::InvalidRow { row: 0, reason: String::new() }, 65, "INVALID_ROW")]
    #[case(AppError::Internal(String::new()), 70, "INTERNAL_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] exit: u8, #[case] code: &str) {
        assert_eq!(err.exit_code(), exit);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Input("msg".into()).to_string(),
            "Input error: msg"
        );
        assert_eq!(
            AppError::InvalidRow {
                row: 3,
                reason: "bad date".into()
            }
            .to_string(),
            "Invalid row 3: bad date"
        );
        assert_eq!(
            AppError::Internal("serializer failed".into()).to_string(),
            "Internal error: serializer failed"
        );
    }
}
