//! Host platform detection.

use std::fmt;

/// Platform the action runs on, as far as code signing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS runner
    Mac,
    /// Windows runner
    Windows,
    /// Linux and everything else
    Linux,
}

impl Platform {
    /// Detect the platform of the current host
    ///
    /// Uses runtime detection via `std::env::consts::OS` so the same binary
    /// logic applies on every runner image.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as reported by `std::env::consts::OS`) to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::Mac,
            "windows" => Platform::Windows,
            _ => Platform::Linux,
        }
    }

    /// Short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
