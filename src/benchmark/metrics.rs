//! Metrics aggregation and report rendering

use crate::error::AppResult;
use crate::models::{BenchmarkResult, BenchmarkRun};
use crate::utils::format_seconds;

/// Aggregate a sample set into descriptive statistics
pub fn summarize(name: &str, runs: Vec<BenchmarkRun>) -> AppResult<BenchmarkResult> {
    BenchmarkResult::from_runs(name, runs)
}

/// Render a result as the human-readable report block
pub fn render(result: &BenchmarkResult) -> String {
    format!(
        "{}:\n  Min   : {}\n  Max   : {}\n  Mean  : {}\n  Median: {}\n",
        result.name,
        format_seconds(result.time_min_secs),
        format_seconds(result.time_max_secs),
        format_seconds(result.time_mean_secs),
        format_seconds(result.time_median_secs),
    )
}

/// Which side of a comparison was faster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faster {
    Compiled,
    Library,
    Equal,
}

/// Performance comparison between the compiled artifact and the library
#[derive(Debug, Clone)]
pub struct PerformanceComparison {
    pub compiled_label: String,
    pub library_label: String,
    /// Library mean divided by compiled mean
    pub speedup: Option<f64>,
    pub faster: Faster,
}

impl PerformanceComparison {
    /// Compare two benchmark results by mean wall time
    pub fn compare(compiled: &BenchmarkResult, library: &BenchmarkResult) -> Self {
        let speedup = if compiled.time_mean_secs > 0.0 {
            Some(library.time_mean_secs / compiled.time_mean_secs)
        } else {
            None
        };

        let faster = if (compiled.time_mean_secs - library.time_mean_secs).abs() < 1e-6 {
            Faster::Equal
        } else if compiled.time_mean_secs < library.time_mean_secs {
            Faster::Compiled
        } else {
            Faster::Library
        };

        Self {
            compiled_label: compiled.name.clone(),
            library_label: library.name.clone(),
            speedup,
            faster,
        }
    }

    /// Label of the faster side, if the means differ
    pub fn winner(&self) -> Option<&str> {
        match self.faster {
            Faster::Compiled => Some(self.compiled_label.as_str()),
            Faster::Library => Some(self.library_label.as_str()),
            Faster::Equal => None,
        }
    }

    /// One-line summary of the comparison
    pub fn render(&self) -> String {
        let ratio = match self.speedup {
            Some(ratio) => format!("{:.2}x", ratio),
            None => "n/a".to_string(),
        };
        let verdict = match self.winner() {
            Some(label) => format!("{} faster", label),
            None => "no difference".to_string(),
        };

        format!(
            "Speedup ({} / {} mean): {} ({})",
            self.library_label, self.compiled_label, ratio, verdict
        )
    }
}
