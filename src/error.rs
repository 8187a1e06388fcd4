//! Error types for electron_release_action.
//!
//! Configuration problems are detected before the packaging tool is ever
//! started and are never retried. Execution problems come from the packaging
//! tool itself and are retried until the attempt budget runs out.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for electron_release_action operations
pub type Result<T> = std::result::Result<T, ActionError>;

/// Main error type for all action operations
#[derive(Error, Debug)]
pub enum ActionError {
    /// Input or manifest validation errors
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Packaging tool invocation errors
    #[error("{0}")]
    Execution(#[from] ExecutionError),
}

/// Configuration errors, raised while reading inputs
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required input is absent or empty
    #[error("\"{name}\" input variable is not defined")]
    MissingInput {
        /// Input name as passed to the action (lowercase)
        name: String,
    },

    /// Input is present but cannot be used
    #[error("\"{name}\" input variable has invalid value \"{value}\": {reason}")]
    InvalidInput {
        /// Input name
        name: String,
        /// Raw value
        value: String,
        /// Reason for the error
        reason: String,
    },

    /// No package.json in the package root
    #[error("`package.json` file not found at path \"{}\"", path.display())]
    ManifestNotFound {
        /// Path where package.json was expected
        path: PathBuf,
    },
}

/// Packaging tool execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The tool could not be started at all
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and reported failure
    #[error("Command failed: `{command}` ({})", describe_exit(*code))]
    NonZeroExit {
        /// Command line that failed
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// Every attempt failed; carries the last failure
    #[error("{last} (gave up after {attempts} attempt(s))")]
    AttemptsExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        last: Box<ExecutionError>,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl ActionError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ActionError::Config(ConfigError::MissingInput { name }) => vec![
                format!("Add `{name}` to the `with:` block of the workflow step"),
                format!(
                    "Or export INPUT_{} in the environment before running",
                    name.to_uppercase()
                ),
            ],
            ActionError::Config(ConfigError::InvalidInput { name, .. }) => {
                vec![format!("Check the value passed for `{name}`")]
            }
            ActionError::Config(ConfigError::ManifestNotFound { .. }) => vec![
                "Point `package_root` at the directory containing the app's package.json"
                    .to_string(),
                "Make sure the repository is checked out before this step runs".to_string(),
            ],
            ActionError::Execution(ExecutionError::Spawn { .. }) => vec![
                "Install yarn on the runner (e.g. `npm install -g yarn`)".to_string(),
                "Install the app's dependencies before building".to_string(),
            ],
            ActionError::Execution(ExecutionError::AttemptsExhausted { .. }) => vec![
                "Raise `max_attempts` if failures are transient (network, notarization)"
                    .to_string(),
            ],
            _ => vec!["Check the packaging tool output above for specific details".to_string()],
        }
    }
}
