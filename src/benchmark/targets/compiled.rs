//! Compiled artifact target

use crate::{config::Config, constants::labels};

use super::{DatasetPassing, TargetHandler};

/// Get handler for the locally built executable
pub fn handler(config: &Config) -> TargetHandler {
    TargetHandler {
        label: labels::COMPILED.to_string(),
        program: config.build.artifact_path.to_string_lossy().into_owned(),
        args: Vec::new(),
        dataset_passing: DatasetPassing::EnvVar(config.benchmark.dataset_env_var.clone()),
    }
}
