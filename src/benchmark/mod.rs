//! Benchmark execution engine
//!
//! A run has three stages:
//!
//! 1. **Builder** (`builder.rs`): builds the compiled artifact once.
//! 2. **Runner** (`runner.rs`): times repeated executions of a command with
//!    output discarded.
//! 3. **Metrics** (`metrics.rs`): reduces the timings to min, max, mean and
//!    median and renders them.
//!
//! The suite (`suite.rs`) drives these stages over every discovered dataset
//! for both targets.

pub mod builder;
pub mod command;
pub mod discovery;
pub mod metrics;
pub mod runner;
pub mod suite;
pub mod targets;

pub use builder::Builder;
pub use command::CommandSpec;
pub use runner::BenchmarkRunner;
pub use suite::BenchmarkSuite;
