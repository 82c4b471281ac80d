//! Benchmark runner - Times repeated executions of a command

use std::time::Instant;

use crate::models::BenchmarkRun;

use super::command::CommandSpec;

/// Benchmark runner that measures wall-clock latency of a command
pub struct BenchmarkRunner {
    repeats: u32,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner
    pub fn new(repeats: u32) -> Self {
        Self { repeats }
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// Run `command` once per configured repeat.
    ///
    /// Returns exactly `repeats` runs in execution order. A command that
    /// fails to launch or exits non-zero is still timed and recorded: the
    /// runner measures invocation latency, not output correctness.
    pub async fn run(&self, command: &CommandSpec) -> Vec<BenchmarkRun> {
        let mut runs = Vec::with_capacity(self.repeats as usize);

        for iteration in 0..self.repeats {
            let mut process = command.to_quiet_command();

            let start = Instant::now();
            let status = process.status().await;
            let wall_time_secs = start.elapsed().as_secs_f64();

            let exit_code = match status {
                Ok(status) => {
                    if !status.success() {
                        tracing::debug!(
                            command = %command,
                            iteration,
                            exit_code = ?status.code(),
                            "Benchmarked command exited unsuccessfully"
                        );
                    }
                    status.code()
                }
                Err(e) => {
                    tracing::debug!(
                        command = %command,
                        iteration,
                        error = %e,
                        "Benchmarked command failed to launch"
                    );
                    None
                }
            };

            runs.push(BenchmarkRun {
                iteration,
                wall_time_secs,
                exit_code,
            });
        }

        runs
    }
}
