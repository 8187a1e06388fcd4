//! Command line interface for electron_release_action.
//!
//! Parses flags, captures inputs from the environment and runs the action
//! with a real subprocess executor.

mod args;
mod commands;
mod output;

pub use args::Args;
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;
use crate::inputs::Inputs;
use crate::packager::SystemExecutor;
use crate::platform::Platform;

/// Main CLI entry point
pub fn run(args: &Args) -> Result<i32> {
    let inputs = Inputs::from_env();
    let platform = Platform::current();
    log::debug!("Detected platform: {}", platform);
    execute_command(args, &inputs, platform, SystemExecutor)
}

/// Parse arguments without executing
pub fn parse_args() -> Args {
    Args::parse_args()
}
