//! describe-bench - Application Entry Point
//!
//! Builds the compiled artifact, then benchmarks it against the pandas
//! baseline on every dataset. Takes no arguments; see `Config` for the
//! environment variables it reads.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use describe_bench::{
    benchmark::BenchmarkSuite, config::Config, constants::DEFAULT_LOG_FILTER,
    utils::format_duration,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; stdout is reserved for the reports
    let (json_layer, text_layer) = if config.output.json_logs {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::info!(
        datasets = %config.datasets.dir.display(),
        repeats = config.benchmark.repeats,
        "Starting describe benchmark"
    );

    let started = chrono::Utc::now();
    let suite = BenchmarkSuite::new(config);

    match suite.run().await {
        Ok(report) => {
            tracing::info!(
                datasets = report.datasets.len(),
                elapsed = %format_duration(chrono::Utc::now() - started),
                "Benchmark finished"
            );
            Ok(())
        }
        Err(e) if e.is_build_failure() => {
            tracing::error!(code = e.error_code(), "Build failed, nothing was benchmarked: {}", e);
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Benchmark aborted: {}", e);
            Err(e.into())
        }
    }
}
