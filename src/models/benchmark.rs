//! Benchmark result models

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A single timed execution of a benchmarked command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// Iteration number, starting at 0 (every iteration is reported)
    pub iteration: u32,
    /// Wall clock time in seconds
    pub wall_time_secs: f64,
    /// Exit code of the process, if it launched and exited normally.
    /// Informational only; it never affects the statistics.
    pub exit_code: Option<i32>,
}

/// Aggregated benchmark results across all iterations of one command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Report label, e.g. `compiled-describe`
    pub name: String,
    pub iterations: u32,

    // Time statistics (seconds)
    pub time_min_secs: f64,
    pub time_max_secs: f64,
    pub time_mean_secs: f64,
    pub time_median_secs: f64,
    pub time_stddev_secs: f64,

    /// Individual runs in execution order
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    /// Create a benchmark result from runs.
    ///
    /// Every run takes part in every statistic: no warm-up discard and no
    /// outlier rejection.
    pub fn from_runs(name: impl Into<String>, runs: Vec<BenchmarkRun>) -> AppResult<Self> {
        if runs.is_empty() {
            return Err(AppError::EmptySampleSet);
        }

        let times: Vec<f64> = runs.iter().map(|r| r.wall_time_secs).collect();
        let iterations = times.len();

        let time_mean_secs = times.iter().sum::<f64>() / iterations as f64;
        let time_min_secs = times.iter().cloned().fold(f64::INFINITY, f64::min);
        let time_max_secs = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // Calculate median
        let mut sorted_times = times.clone();
        sorted_times.sort_by(f64::total_cmp);
        let time_median_secs = if iterations % 2 == 0 {
            (sorted_times[iterations / 2 - 1] + sorted_times[iterations / 2]) / 2.0
        } else {
            sorted_times[iterations / 2]
        };

        // Population standard deviation
        let variance = times
            .iter()
            .map(|t| (t - time_mean_secs).powi(2))
            .sum::<f64>()
            / iterations as f64;

        Ok(Self {
            name: name.into(),
            iterations: iterations as u32,
            time_min_secs,
            time_max_secs,
            time_mean_secs,
            time_median_secs,
            time_stddev_secs: variance.sqrt(),
            runs,
        })
    }

    /// Number of runs whose process did not exit with status 0
    pub fn failed_runs(&self) -> usize {
        self.runs.iter().filter(|r| r.exit_code != Some(0)).count()
    }
}

/// Both targets' results for one dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    pub dataset: PathBuf,
    pub compiled: BenchmarkResult,
    pub library: BenchmarkResult,
    /// `library` mean divided by `compiled` mean, absent when the compiled
    /// mean is zero
    pub speedup: Option<f64>,
}

/// Results of a whole benchmarking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub generated_at: DateTime<Utc>,
    pub repeats: u32,
    pub datasets: Vec<DatasetReport>,
}

impl SuiteReport {
    /// Create an empty report stamped with the current time
    pub fn new(repeats: u32) -> Self {
        Self {
            generated_at: Utc::now(),
            repeats,
            datasets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(times: &[f64]) -> Vec<BenchmarkRun> {
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| BenchmarkRun {
                iteration: i as u32,
                wall_time_secs: t,
                exit_code: Some(0),
            })
            .collect()
    }

    #[test]
    fn test_single_sample() {
        let result = BenchmarkResult::from_runs("one", runs(&[0.75])).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.time_min_secs, 0.75);
        assert_eq!(result.time_max_secs, 0.75);
        assert_eq!(result.time_mean_secs, 0.75);
        assert_eq!(result.time_median_secs, 0.75);
        assert_eq!(result.time_stddev_secs, 0.0);
    }

    #[test]
    fn test_even_length_median_averages_middle_pair() {
        let result = BenchmarkResult::from_runs("even", runs(&[4.0, 1.0, 3.0, 2.0])).unwrap();
        assert_eq!(result.time_min_secs, 1.0);
        assert_eq!(result.time_max_secs, 4.0);
        assert_eq!(result.time_mean_secs, 2.5);
        assert_eq!(result.time_median_secs, 2.5);
    }

    #[test]
    fn test_identical_samples() {
        let result = BenchmarkResult::from_runs("flat", runs(&[2.0, 2.0, 2.0])).unwrap();
        assert_eq!(result.time_min_secs, 2.0);
        assert_eq!(result.time_max_secs, 2.0);
        assert_eq!(result.time_mean_secs, 2.0);
        assert_eq!(result.time_median_secs, 2.0);
    }

    #[test]
    fn test_first_sample_not_discarded() {
        // A slow cold start still counts toward every statistic
        let result = BenchmarkResult::from_runs("cold", runs(&[9.0, 1.0, 1.0])).unwrap();
        assert_eq!(result.iterations, 3);
        assert_eq!(result.time_max_secs, 9.0);
        assert!((result.time_mean_secs - 11.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.time_median_secs, 1.0);
    }

    #[test]
    fn test_empty_sample_set_rejected() {
        assert!(matches!(
            BenchmarkResult::from_runs("empty", Vec::new()),
            Err(AppError::EmptySampleSet)
        ));
    }

    #[test]
    fn test_failed_runs_counted() {
        let mut samples = runs(&[1.0, 1.0, 1.0]);
        samples[1].exit_code = Some(1);
        samples[2].exit_code = None;
        let result = BenchmarkResult::from_runs("mixed", samples).unwrap();
        assert_eq!(result.failed_runs(), 2);
    }
}
