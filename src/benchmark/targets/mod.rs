//! Benchmark targets
//!
//! Each target knows how to turn a dataset into the command that
//! summarizes it. The compiled artifact takes the dataset path from an
//! environment variable; the comparison library takes it as a trailing
//! argument.

pub mod compiled;
pub mod library;

use crate::models::Dataset;

use super::command::CommandSpec;

/// How a target receives the dataset path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetPassing {
    /// Set as this environment variable on the process
    EnvVar(String),
    /// Appended as the last command-line argument
    TrailingArg,
}

/// Target handler for command construction
#[derive(Debug, Clone)]
pub struct TargetHandler {
    label: String,
    program: String,
    args: Vec<String>,
    dataset_passing: DatasetPassing,
}

impl TargetHandler {
    /// Report label of this target
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Build the command that summarizes `dataset`
    pub fn command_for(&self, dataset: &Dataset) -> CommandSpec {
        let spec = self
            .args
            .iter()
            .fold(CommandSpec::new(&self.program), |spec, arg| spec.arg(arg));

        match &self.dataset_passing {
            DatasetPassing::EnvVar(var) => spec.env(var, dataset.path()),
            DatasetPassing::TrailingArg => spec.arg(dataset.path()),
        }
    }
}
