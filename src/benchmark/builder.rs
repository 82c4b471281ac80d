//! Build step for the compiled artifact.
//!
//! The build command runs once, before any benchmark. Its output is left
//! attached to the terminal so compiler diagnostics stay visible. Any
//! failure is fatal for the whole run; there is no retry.

use std::path::PathBuf;
use std::time::Instant;

use tokio::process::Command;

use crate::config::BuildConfig;
use crate::error::{AppError, AppResult};

/// Builder runs the configured build command.
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    /// Create a new builder with the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the build and return the artifact path.
    pub async fn build(&self) -> AppResult<PathBuf> {
        let command_line = self.config.command_line();
        let (program, args) = self
            .config
            .command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("Build command is empty"))?;

        tracing::info!(command = %command_line, "Building compiled artifact");
        let start = Instant::now();

        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|source| AppError::BuildLaunch {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(AppError::BuildFailed {
                command: command_line,
                exit_code: status.code(),
            });
        }

        let artifact = self.config.artifact_path.clone();
        tracing::info!(
            artifact = %artifact.display(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Build finished"
        );

        if !artifact.is_file() {
            tracing::warn!(
                artifact = %artifact.display(),
                "Build succeeded but the artifact was not found; its runs will fail to launch"
            );
        }

        Ok(artifact)
    }
}
