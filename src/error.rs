//! Custom error types and handling
//!
//! Only the build step, configuration and report output can fail a run.
//! Failures of the benchmarked commands are never surfaced as errors.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Build errors
    #[error("Build command `{command}` failed with exit code {}", describe_exit(.exit_code))]
    BuildFailed {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("Failed to launch build command `{command}`: {source}")]
    BuildLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Statistics errors
    #[error("Cannot summarize an empty sample set")]
    EmptySampleSet,

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] crate::config::ConfigError),

    // Output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BuildFailed { .. } => "BUILD_FAILED",
            Self::BuildLaunch { .. } => "BUILD_LAUNCH_FAILED",
            Self::EmptySampleSet => "EMPTY_SAMPLE_SET",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error came from the mandatory build step
    pub fn is_build_failure(&self) -> bool {
        matches!(self, Self::BuildFailed { .. } | Self::BuildLaunch { .. })
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_failed_message() {
        let err = AppError::BuildFailed {
            command: "go build -o ./describe".to_string(),
            exit_code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "Build command `go build -o ./describe` failed with exit code 2"
        );
        assert_eq!(err.error_code(), "BUILD_FAILED");
        assert!(err.is_build_failure());
    }

    #[test]
    fn test_signal_terminated_build() {
        let err = AppError::BuildFailed {
            command: "make".to_string(),
            exit_code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_non_build_errors() {
        assert!(!AppError::EmptySampleSet.is_build_failure());
        assert_eq!(AppError::EmptySampleSet.error_code(), "EMPTY_SAMPLE_SET");
    }
}
