//! The electron-builder invocation.
//!
//! [`PackagerCommand`] describes what to run; a [`CommandExecutor`] runs it.
//! The production executor inherits stdout/stderr so the tool's output shows
//! up directly in the CI log.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ActionConfig;
use crate::error::ExecutionError;

/// Package runner used to launch electron-builder
pub const PACKAGE_RUNNER: &str = "yarn";

/// Arguments passed to the package runner
///
/// Builds for macOS and Linux and always publishes; electron-builder decides
/// per-platform what can actually be built on the current host.
pub const PACKAGER_ARGS: &[&str] = &["run", "electron-builder", "-ml", "--publish", "always"];

/// A fully described subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagerCommand {
    program: PathBuf,
    args: Vec<OsString>,
    envs: Vec<(String, String)>,
    current_dir: PathBuf,
}

impl PackagerCommand {
    /// Create a command for `program` running in `current_dir`
    pub fn new(program: impl Into<PathBuf>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: current_dir.into(),
        }
    }

    /// The electron-builder command for a configured run
    ///
    /// `CI` is set to the empty string so electron-builder does not switch to
    /// its CI-specific publishing heuristics.
    pub fn electron_builder(config: &ActionConfig) -> Self {
        let mut cmd = Self::new(resolve_program(PACKAGE_RUNNER), &config.working_dir);
        cmd.args(PACKAGER_ARGS.iter().copied());
        cmd.env("CI", "");
        for (name, value) in config.env.iter() {
            cmd.env(name, value);
        }
        cmd
    }

    /// Append several arguments
    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the subprocess
    pub fn env(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.envs.retain(|(existing, _)| *existing != name);
        self.envs.push((name, value.into()));
        self
    }

    /// Working directory
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Environment overrides, in insertion order
    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Value of an environment override
    pub fn env_value(&self, name: &str) -> Option<&str> {
        self.envs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Build the `std::process::Command` with inherited stdio
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.current_dir);
        for (name, value) in &self.envs {
            cmd.env(name, value);
        }
        cmd
    }
}

impl fmt::Display for PackagerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self
            .program
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.program.to_string_lossy());
        write!(f, "{program}")?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Resolve `name` on `PATH`, falling back to the bare name
///
/// On Windows this finds `yarn.cmd`, which `Command::new("yarn")` would miss.
fn resolve_program(name: &str) -> PathBuf {
    match which::which(name) {
        Ok(path) => {
            log::debug!("Resolved {} to {}", name, path.display());
            path
        }
        Err(e) => {
            log::debug!("Could not resolve {} on PATH: {}", name, e);
            PathBuf::from(name)
        }
    }
}

/// Runs a packaging command to completion
pub trait CommandExecutor {
    /// Run `command` once; `Ok` only for a zero exit status
    fn run(&mut self, command: &PackagerCommand) -> Result<(), ExecutionError>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &mut E {
    fn run(&mut self, command: &PackagerCommand) -> Result<(), ExecutionError> {
        (**self).run(command)
    }
}

/// Executor that spawns a real subprocess and waits for it
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&mut self, command: &PackagerCommand) -> Result<(), ExecutionError> {
        log::debug!(
            "Running {} in {}",
            command,
            command.current_dir().display()
        );

        let status = command
            .to_command()
            .status()
            .map_err(|e| ExecutionError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecutionError::NonZeroExit {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
