//! Configure-then-package flow.

use crate::cli::OutputManager;
use crate::config::ActionConfig;
use crate::error::Result;
use crate::inputs::Inputs;
use crate::packager::{CommandExecutor, PackagerCommand};
use crate::platform::Platform;
use crate::retry::retry_attempts;

/// Drives one action run with a given executor
#[derive(Debug)]
pub struct Runner<E> {
    executor: E,
    output: OutputManager,
}

impl<E: CommandExecutor> Runner<E> {
    /// Create a runner
    pub fn new(executor: E, output: OutputManager) -> Self {
        Self { executor, output }
    }

    /// Executor, e.g. to inspect what was run
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Read and validate inputs into a configuration
    pub fn configure(&self, inputs: &Inputs, platform: Platform) -> Result<ActionConfig> {
        let config = ActionConfig::configure(inputs, platform)?;
        self.output.verbose(&format!(
            "Platform: {}, working directory: {}, max attempts: {}",
            config.platform,
            config.working_dir.display(),
            config.max_attempts
        ));
        Ok(config)
    }

    /// Run electron-builder, retrying up to `config.max_attempts` times
    ///
    /// Returns the number of attempts it took to succeed.
    pub fn execute(&mut self, config: &ActionConfig) -> Result<u32> {
        let app = config.manifest.display_name();
        if config.release {
            self.output.info(&format!("Building and releasing {app}…"));
        } else {
            self.output.info(&format!("Building {app}…"));
        }

        let command = PackagerCommand::electron_builder(config);
        let executor = &mut self.executor;
        let outcome = retry_attempts(
            |_| executor.run(&command),
            config.max_attempts,
            "electron-builder",
            &self.output,
        )?;

        self.output.success(&format!("Built {app}"));
        Ok(outcome.attempts)
    }

    /// Configure from `inputs`, then execute
    pub fn run(&mut self, inputs: &Inputs, platform: Platform) -> Result<u32> {
        let config = self.configure(inputs, platform)?;
        self.execute(&config)
    }
}
