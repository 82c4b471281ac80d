//! Comparison library target (pandas)

use crate::{config::Config, constants::labels};

use super::{DatasetPassing, TargetHandler};

/// Inline script run by the interpreter. The dataset path arrives as
/// `sys.argv[1]` and is never spliced into the script text.
pub const DESCRIBE_SCRIPT: &str = "\
import sys
import pandas as pd
pd.read_csv(sys.argv[1]).describe(include=\"all\")
";

/// Get handler for the pandas baseline
pub fn handler(config: &Config) -> TargetHandler {
    TargetHandler {
        label: labels::LIBRARY.to_string(),
        program: config.benchmark.interpreter.clone(),
        args: vec!["-c".to_string(), DESCRIBE_SCRIPT.to_string()],
        dataset_passing: DatasetPassing::TrailingArg,
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;
    use crate::models::Dataset;

    #[test]
    fn test_path_passed_as_argument() {
        let config = Config::default();
        let spec = handler(&config).command_for(&Dataset::new("test_data/b.csv"));

        assert_eq!(spec.program(), "python3");
        assert_eq!(
            spec.args(),
            &[
                OsString::from("-c"),
                OsString::from(DESCRIBE_SCRIPT),
                OsString::from("test_data/b.csv"),
            ]
        );
        assert!(spec.envs().is_empty());
    }

    #[test]
    fn test_hostile_path_stays_out_of_script() {
        let config = Config::default();
        let hostile = "x\"); import os; os.system(\"echo pwned\"); (\".csv";
        let spec = handler(&config).command_for(&Dataset::new(hostile));

        assert_eq!(spec.args()[1], OsString::from(DESCRIBE_SCRIPT));
        assert_eq!(spec.args()[2], OsString::from(hostile));
    }

    #[test]
    fn test_script_requests_all_column_types() {
        assert!(DESCRIBE_SCRIPT.contains("describe(include=\"all\")"));
        assert!(DESCRIBE_SCRIPT.contains("sys.argv[1]"));
    }
}
