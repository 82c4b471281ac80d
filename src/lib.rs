//! describe-bench - CSV summarization benchmark
//!
//! This library times two ways of producing descriptive statistics for CSV
//! datasets: a locally compiled program and the pandas `describe` baseline.
//!
//! # Features
//!
//! - Single build step for the compiled artifact, fatal on failure
//! - Repeated wall-clock timing with all output discarded
//! - Min, max, mean and median per target and dataset
//! - Optional JSON report of the whole run
//!
//! # Architecture
//!
//! - **Config**: environment-driven configuration, loaded once
//! - **Benchmark**: builder, runner, metrics, targets and the suite driver
//! - **Models**: samples, results and reports

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
