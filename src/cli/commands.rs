//! Command execution: dry run or a real build.

use crate::cli::{Args, OutputManager};
use crate::config::ActionConfig;
use crate::error::Result;
use crate::inputs::Inputs;
use crate::packager::{CommandExecutor, PackagerCommand};
use crate::platform::Platform;
use crate::runner::Runner;

/// Execute one run with the given inputs, platform and executor
///
/// Returns the process exit code on success; errors are fatal and left to
/// the caller to report.
pub fn execute_command<E: CommandExecutor>(
    args: &Args,
    inputs: &Inputs,
    platform: Platform,
    executor: E,
) -> Result<i32> {
    let output = OutputManager::new(args.verbose, false);
    let mut runner = Runner::new(executor, output.clone());

    let config = runner.configure(inputs, platform)?;
    if args.dry_run {
        print_plan(&config, &output);
        return Ok(0);
    }

    runner.execute(&config)?;
    Ok(0)
}

/// Print what a run would do; variable values are never shown
fn print_plan(config: &ActionConfig, output: &OutputManager) {
    let command = PackagerCommand::electron_builder(config);

    output.section("Dry run");
    output.info(&format!("Platform: {}", config.platform));
    output.info(&format!("Command: CI= {}", command));
    output.info(&format!(
        "Working directory: {}",
        command.current_dir().display()
    ));
    output.info(&format!("Max attempts: {}", config.max_attempts));
    output.info("Environment:");
    for name in config.env.names() {
        output.indent(name);
    }
    if let Some(args) = &config.extra_args {
        output.warn(&format!("`args` input \"{args}\" is not passed to electron-builder"));
    }
}
