//! Benchmark suite - Orchestrates the whole benchmarking run
//!
//! Workflow:
//! 1. Build the compiled artifact (fatal on failure)
//! 2. Discover dataset files
//! 3. For each dataset, time the compiled artifact and the library baseline
//! 4. Print both reports and their comparison
//! 5. Optionally write the JSON suite report
//!
//! Everything runs sequentially; each process is awaited before the next
//! one starts.

use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::{
    config::Config,
    error::AppResult,
    models::{BenchmarkResult, Dataset, DatasetReport, SuiteReport},
};

use super::{
    builder::Builder,
    discovery::discover,
    metrics::{self, PerformanceComparison},
    runner::BenchmarkRunner,
    targets::{self, TargetHandler},
};

/// Benchmark suite comparing the compiled artifact with the library baseline
pub struct BenchmarkSuite {
    config: Config,
    runner: BenchmarkRunner,
    compiled: TargetHandler,
    library: TargetHandler,
}

impl BenchmarkSuite {
    /// Create a new benchmark suite
    pub fn new(config: Config) -> Self {
        let runner = BenchmarkRunner::new(config.benchmark.repeats);
        let compiled = targets::compiled::handler(&config);
        let library = targets::library::handler(&config);

        Self {
            config,
            runner,
            compiled,
            library,
        }
    }

    /// Run the suite, printing reports to standard output
    pub async fn run(&self) -> AppResult<SuiteReport> {
        self.run_with_output(&mut io::stdout()).await
    }

    /// Run the suite, printing reports to `out`
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> AppResult<SuiteReport> {
        Builder::new(self.config.build.clone()).build().await?;
        writeln!(out)?;

        let mut report = SuiteReport::new(self.runner.repeats());

        let datasets = discover(&self.config.datasets.dir, &self.config.datasets.extension);
        if datasets.is_empty() {
            writeln!(
                out,
                "No {} files found in {}",
                self.config.datasets.extension.to_uppercase(),
                dir_with_slash(&self.config.datasets.dir)
            )?;
        } else {
            info!(count = datasets.len(), repeats = self.runner.repeats(), "Benchmarking datasets");
        }

        for dataset in &datasets {
            let dataset_report = self.benchmark_dataset(dataset, out).await?;
            report.datasets.push(dataset_report);
        }

        if let Some(path) = &self.config.output.json_report_path {
            write_json_report(&report, path).await?;
        }

        Ok(report)
    }

    /// Time both targets on one dataset and print their reports
    async fn benchmark_dataset<W: Write>(
        &self,
        dataset: &Dataset,
        out: &mut W,
    ) -> AppResult<DatasetReport> {
        writeln!(out, "Benchmarking dataset: {}", dataset)?;
        out.flush()?;

        let compiled = self.benchmark_target(&self.compiled, dataset).await?;
        let library = self.benchmark_target(&self.library, dataset).await?;

        let comparison = PerformanceComparison::compare(&compiled, &library);

        writeln!(out, "{}", metrics::render(&compiled))?;
        writeln!(out, "{}", metrics::render(&library))?;
        writeln!(out, "{}", comparison.render())?;
        writeln!(out)?;
        out.flush()?;

        Ok(DatasetReport {
            dataset: dataset.path.clone(),
            compiled,
            library,
            speedup: comparison.speedup,
        })
    }

    async fn benchmark_target(
        &self,
        target: &TargetHandler,
        dataset: &Dataset,
    ) -> AppResult<BenchmarkResult> {
        let command = target.command_for(dataset);
        let runs = self.runner.run(&command).await;
        let result = metrics::summarize(target.label(), runs)?;

        let failed = result.failed_runs();
        if failed > 0 {
            warn!(
                label = target.label(),
                dataset = %dataset,
                failed,
                "Some benchmarked runs did not exit successfully"
            );
        }
        info!(
            label = target.label(),
            dataset = %dataset,
            mean_secs = result.time_mean_secs,
            "Target benchmarked"
        );

        Ok(result)
    }
}

/// Display a directory with exactly one trailing separator
fn dir_with_slash(dir: &Path) -> String {
    let shown = dir.display().to_string();
    format!("{}/", shown.trim_end_matches('/'))
}

async fn write_json_report(report: &SuiteReport, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(report)?;
    tokio::fs::write(path, json).await?;

    info!(path = %path.display(), "Wrote JSON report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::error::AppError;

    /// A configuration whose build and targets are all cheap shell tools
    fn test_config(dataset_dir: &Path, build: &[&str]) -> Config {
        let mut config = Config::default();
        config.build.command = build.iter().map(|s| s.to_string()).collect();
        config.build.artifact_path = PathBuf::from("true");
        config.datasets.dir = dataset_dir.to_path_buf();
        config.benchmark.repeats = 2;
        config.benchmark.interpreter = "true".to_string();
        config
    }

    #[tokio::test]
    async fn test_build_failure_aborts_before_benchmarking() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "x\n1\n").unwrap();

        let suite = BenchmarkSuite::new(test_config(dir.path(), &["false"]));
        let mut out = Vec::new();
        let err = suite.run_with_output(&mut out).await.unwrap_err();

        assert!(matches!(err, AppError::BuildFailed { .. }));
        assert!(!String::from_utf8(out).unwrap().contains("Benchmarking dataset"));
    }

    #[tokio::test]
    async fn test_empty_directory_finishes_successfully() {
        let dir = tempfile::tempdir().unwrap();

        let suite = BenchmarkSuite::new(test_config(dir.path(), &["true"]));
        let mut out = Vec::new();
        let report = suite.run_with_output(&mut out).await.unwrap();

        assert!(report.datasets.is_empty());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("No CSV files found in"));
    }

    #[tokio::test]
    async fn test_empty_directory_message_single_slash() {
        let dir = tempfile::tempdir().unwrap();
        let with_slash = PathBuf::from(format!("{}/", dir.path().display()));

        let suite = BenchmarkSuite::new(test_config(&with_slash, &["true"]));
        let mut out = Vec::new();
        suite.run_with_output(&mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        let expected = format!("No CSV files found in {}/\n", dir.path().display());
        assert!(printed.contains(&expected));
        assert!(!printed.contains("//"));
    }

    #[test]
    fn test_dir_with_slash() {
        assert_eq!(dir_with_slash(Path::new("test_data")), "test_data/");
        assert_eq!(dir_with_slash(Path::new("test_data/")), "test_data/");
        assert_eq!(dir_with_slash(Path::new("/")), "/");
    }

    #[tokio::test]
    async fn test_one_iteration_per_csv() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.csv", "b.csv", "readme.md", "c.tsv"] {
            fs::write(dir.path().join(name), "x\n1\n").unwrap();
        }

        let suite = BenchmarkSuite::new(test_config(dir.path(), &["true"]));
        let mut out = Vec::new();
        let report = suite.run_with_output(&mut out).await.unwrap();

        assert_eq!(report.datasets.len(), 2);
        for dataset in &report.datasets {
            assert_eq!(dataset.compiled.name, "compiled-describe");
            assert_eq!(dataset.library.name, "library-describe");
            assert_eq!(dataset.compiled.iterations, 2);
            assert_eq!(dataset.library.iterations, 2);
        }

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Benchmarking dataset:").count(), 2);
        assert_eq!(printed.matches("compiled-describe:").count(), 2);
        assert_eq!(printed.matches("library-describe:").count(), 2);
    }

    #[tokio::test]
    async fn test_failing_targets_are_still_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "").unwrap();

        let mut config = test_config(dir.path(), &["true"]);
        config.build.artifact_path = PathBuf::from("false");
        config.benchmark.interpreter = "definitely-not-python-5512".to_string();

        let report = BenchmarkSuite::new(config)
            .run_with_output(&mut Vec::new())
            .await
            .unwrap();

        assert_eq!(report.datasets.len(), 1);
        assert_eq!(report.datasets[0].compiled.failed_runs(), 2);
        assert_eq!(report.datasets[0].library.failed_runs(), 2);
    }

    #[tokio::test]
    async fn test_json_report_written() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.csv"), "").unwrap();
        let report_path = dir.path().join("out").join("report.json");

        let mut config = test_config(dir.path(), &["true"]);
        config.output.json_report_path = Some(report_path.clone());

        BenchmarkSuite::new(config)
            .run_with_output(&mut Vec::new())
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&report_path).unwrap()).unwrap();
        assert_eq!(written["repeats"], 2);
        assert_eq!(written["datasets"].as_array().unwrap().len(), 1);
    }
}
