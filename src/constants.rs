//! Application-wide constants
//!
//! Default values for configuration and the fixed labels used in reports.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// BUILD DEFAULTS
// =============================================================================

/// Default build command producing the compiled artifact
pub const DEFAULT_BUILD_COMMAND: &str = "go build -o ./describe";

/// Default path of the compiled artifact
pub const DEFAULT_ARTIFACT_PATH: &str = "./describe";

// =============================================================================
// DATASET DEFAULTS
// =============================================================================

/// Default directory holding the benchmark datasets
pub const DEFAULT_DATASET_DIR: &str = "test_data";

/// Default dataset file extension (without the dot)
pub const DEFAULT_DATASET_EXTENSION: &str = "csv";

/// Default environment variable through which the compiled artifact
/// receives the dataset path
pub const DEFAULT_DATASET_ENV_VAR: &str = "CSV_FILE";

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Default number of executions per target per dataset (no warm-up discard)
pub const DEFAULT_BENCHMARK_REPEATS: u32 = 5;

/// Default interpreter for the comparison library
pub const DEFAULT_PYTHON_INTERPRETER: &str = "python3";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// REPORT LABELS
// =============================================================================

/// Report labels for the benchmarked targets
pub mod labels {
    pub const COMPILED: &str = "compiled-describe";
    pub const LIBRARY: &str = "library-describe";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
