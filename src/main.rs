//! Electron Release Action - build and release an Electron app from CI.
//!
//! Reads `INPUT_*` variables, configures electron-builder and runs it with
//! retries. Exits 1 on any configuration or build failure.

use electron_release_action::cli;
use electron_release_action::cli::OutputManager;
use std::process;

fn main() {
    let args = cli::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match cli::run(&args) {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&e.to_string());

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.indent("Recovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&format!("• {suggestion}"));
                }
            }

            process::exit(e.exit_code());
        }
    }
}
