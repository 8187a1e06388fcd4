//! # Electron Release Action
//!
//! CI helper that builds, and optionally publishes, an Electron app with
//! electron-builder.
//!
//! Inputs arrive as `INPUT_<NAME>` environment variables. They are validated
//! up front, mapped to the variables electron-builder expects (GitHub token,
//! code signing certificates, Apple ID credentials), and the build is run,
//! retrying up to `max_attempts` times.
//!
//! ## Usage
//!
//! ```bash
//! INPUT_RELEASE=true INPUT_PACKAGE_ROOT=app INPUT_GH_TOKEN=... \
//!   INPUT_NODE_ENV=production INPUT_PUBLISH_TYPE=release \
//!   electron_release_action
//! electron_release_action --dry-run   # validate inputs and show the command
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod inputs;
pub mod manifest;
pub mod packager;
pub mod platform;
pub mod retry;
pub mod runner;

// Re-export main types for public API
pub use cli::Args;
pub use config::{ActionConfig, PackagerEnv};
pub use error::{ActionError, ConfigError, ExecutionError, Result};
pub use inputs::Inputs;
pub use packager::{CommandExecutor, PackagerCommand, SystemExecutor};
pub use platform::Platform;
pub use runner::Runner;
