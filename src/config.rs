//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded once at startup, validated, and then passed explicitly
//! to the builder, the runner and the suite driver.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_ARTIFACT_PATH, DEFAULT_BENCHMARK_REPEATS, DEFAULT_BUILD_COMMAND,
    DEFAULT_DATASET_DIR, DEFAULT_DATASET_ENV_VAR, DEFAULT_DATASET_EXTENSION,
    DEFAULT_PYTHON_INTERPRETER,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub build: BuildConfig,
    pub datasets: DatasetConfig,
    pub benchmark: BenchmarkConfig,
    pub output: OutputConfig,
}

/// Build step configuration
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Build command, program first
    pub command: Vec<String>,
    /// Path of the executable the build produces
    pub artifact_path: PathBuf,
}

/// Dataset discovery configuration
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub dir: PathBuf,
    /// Extension without the leading dot
    pub extension: String,
}

/// Benchmark execution configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Executions per target per dataset, all of them reported
    pub repeats: u32,
    /// Environment variable the compiled artifact reads its input path from
    pub dataset_env_var: String,
    /// Interpreter running the comparison library
    pub interpreter: String,
}

/// Logging and report output configuration.
///
/// The log filter itself comes from `RUST_LOG` through the subscriber's
/// `EnvFilter`, falling back to `DEFAULT_LOG_FILTER`.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Emit logs as JSON lines instead of the human-readable format
    pub json_logs: bool,
    /// Where to write the JSON suite report, if anywhere
    pub json_report_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            build: BuildConfig::from_lookup(&lookup)?,
            datasets: DatasetConfig::from_lookup(&lookup)?,
            benchmark: BenchmarkConfig::from_lookup(&lookup)?,
            output: OutputConfig::from_lookup(&lookup),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build: BuildConfig {
                command: split_command(DEFAULT_BUILD_COMMAND),
                artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            },
            datasets: DatasetConfig {
                dir: PathBuf::from(DEFAULT_DATASET_DIR),
                extension: DEFAULT_DATASET_EXTENSION.to_string(),
            },
            benchmark: BenchmarkConfig {
                repeats: DEFAULT_BENCHMARK_REPEATS,
                dataset_env_var: DEFAULT_DATASET_ENV_VAR.to_string(),
                interpreter: DEFAULT_PYTHON_INTERPRETER.to_string(),
            },
            output: OutputConfig {
                json_logs: false,
                json_report_path: None,
            },
        }
    }
}

impl BuildConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("BUILD_COMMAND").unwrap_or_else(|| DEFAULT_BUILD_COMMAND.to_string());
        let command = split_command(&raw);
        if command.is_empty() {
            return Err(ConfigError::InvalidValue("BUILD_COMMAND".to_string()));
        }

        Ok(Self {
            command,
            artifact_path: PathBuf::from(
                lookup("ARTIFACT_PATH").unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.to_string()),
            ),
        })
    }

    /// The build command as a single display string
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl DatasetConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let extension = lookup("DATASET_EXTENSION")
            .unwrap_or_else(|| DEFAULT_DATASET_EXTENSION.to_string())
            .trim()
            .trim_start_matches('.')
            .to_string();
        if extension.is_empty() {
            return Err(ConfigError::InvalidValue("DATASET_EXTENSION".to_string()));
        }

        Ok(Self {
            dir: PathBuf::from(
                lookup("DATASET_DIR").unwrap_or_else(|| DEFAULT_DATASET_DIR.to_string()),
            ),
            extension,
        })
    }
}

impl BenchmarkConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let repeats: u32 = lookup("BENCHMARK_REPEATS")
            .unwrap_or_else(|| DEFAULT_BENCHMARK_REPEATS.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BENCHMARK_REPEATS".to_string()))?;
        if repeats == 0 {
            return Err(ConfigError::InvalidValue("BENCHMARK_REPEATS".to_string()));
        }

        let dataset_env_var =
            lookup("DATASET_ENV_VAR").unwrap_or_else(|| DEFAULT_DATASET_ENV_VAR.to_string());
        if dataset_env_var.is_empty() || dataset_env_var.contains('=') {
            return Err(ConfigError::InvalidValue("DATASET_ENV_VAR".to_string()));
        }

        Ok(Self {
            repeats,
            dataset_env_var,
            interpreter: lookup("PYTHON_INTERPRETER")
                .unwrap_or_else(|| DEFAULT_PYTHON_INTERPRETER.to_string()),
        })
    }
}

impl OutputConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            json_logs: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
            json_report_path: lookup("REPORT_JSON_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn split_command(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
