//! `package.json` handling.
//!
//! electron-builder needs a `package.json` next to the app, so its presence
//! is checked eagerly. The content is only read for display purposes.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// File name of the npm package manifest
pub const MANIFEST_FILE: &str = "package.json";

/// The few `package.json` fields used in progress messages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,
    /// Package version
    #[serde(default)]
    pub version: Option<String>,
    /// Human readable product name (electron-builder convention)
    #[serde(default, rename = "productName")]
    pub product_name: Option<String>,
}

impl PackageManifest {
    /// Return the manifest path under `package_root`, or an error if it does not exist
    pub fn locate(package_root: &Path) -> Result<PathBuf, ConfigError> {
        let path = package_root.join(MANIFEST_FILE);
        if path.exists() {
            Ok(path)
        } else {
            Err(ConfigError::ManifestNotFound { path })
        }
    }

    /// Read the manifest, returning defaults if it cannot be read or parsed
    pub fn load_lenient(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                log::debug!("Could not parse {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Name to show in messages, e.g. `my-app 1.2.3`
    pub fn display_name(&self) -> String {
        let name = self
            .product_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("the Electron app");
        match &self.version {
            Some(version) if self.product_name.is_some() || self.name.is_some() => {
                format!("{name} {version}")
            }
            _ => name.to_string(),
        }
    }
}
