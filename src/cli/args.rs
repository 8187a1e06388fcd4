//! Command line argument parsing.
//!
//! Everything the build needs comes from `INPUT_*` variables set by the CI
//! runner; the flags only change how the run is reported.

use clap::Parser;

/// Build and release an Electron app with electron-builder
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "electron_release_action",
    version,
    about = "Build and release an Electron app with electron-builder",
    long_about = "Build and release an Electron app with electron-builder.

Inputs are read from INPUT_<NAME> environment variables, as set by the CI runner:
  release, package_root, gh_token, node_env, publish_type (required)
  app_root, args, max_attempts (optional)
  mac_certs, mac_certs_password, appleid, appleidpass (macOS)
  windows_certs, windows_certs_password (Windows)"
)]
pub struct Args {
    /// Validate inputs and print the command that would run, without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for these arguments; `RUST_LOG` takes precedence
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
