//! Action configuration.
//!
//! [`ActionConfig::configure`] turns the raw [`Inputs`] into an immutable
//! configuration, including the variables electron-builder expects
//! ([`PackagerEnv`]). The runner's own environment is never modified; the
//! variables are applied to the packaging subprocess only.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::inputs::Inputs;
use crate::manifest::PackageManifest;
use crate::platform::Platform;

/// Default number of packaging attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Environment variables to set on the packaging subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagerEnv {
    vars: BTreeMap<String, String>,
}

impl PackagerEnv {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `NAME=value` if `value` is non-empty; no-op otherwise
    ///
    /// An empty or absent value never replaces anything, so whatever the
    /// subprocess would inherit for `NAME` is left alone.
    pub fn set<V: ToString>(&mut self, name: &str, value: Option<V>) {
        let Some(value) = value.map(|v| v.to_string()) else {
            return;
        };
        if value.is_empty() {
            return;
        }
        self.vars.insert(name.to_uppercase(), value);
    }

    /// Value recorded for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&name.to_uppercase()).map(String::as_str)
    }

    /// Recorded variables, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Recorded variable names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

/// Fully resolved configuration for one action run
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Host platform
    pub platform: Platform,
    /// Whether the run publishes a release (`release: true`)
    pub release: bool,
    /// Directory containing package.json
    pub package_root: PathBuf,
    /// Directory the packaging tool runs in
    pub working_dir: PathBuf,
    /// Value of the `args` input; accepted but not passed to the packaging tool
    pub extra_args: Option<String>,
    /// Attempt bound, at least 1
    pub max_attempts: u32,
    /// Display metadata from package.json
    pub manifest: PackageManifest,
    /// Variables for the packaging subprocess
    pub env: PackagerEnv,
}

impl ActionConfig {
    /// Read inputs, validate them, and derive the packaging environment
    ///
    /// Stops at the first missing or invalid input. The package.json check
    /// happens before any packaging variable is derived.
    pub fn configure(inputs: &Inputs, platform: Platform) -> Result<Self, ConfigError> {
        let release = inputs.required("release")? == "true";
        let package_root = PathBuf::from(inputs.required("package_root")?);
        let extra_args = inputs.optional("args")?.map(str::to_string);
        let max_attempts = parse_max_attempts(inputs.optional("max_attempts")?)?;

        // Legacy option: electron-builder needs package.json next to the app,
        // so `package_root` alone should be used instead
        let working_dir = inputs
            .optional("app_root")?
            .map(PathBuf::from)
            .unwrap_or_else(|| package_root.clone());

        let manifest_path = PackageManifest::locate(&package_root)?;

        let mut env = PackagerEnv::new();
        env.set("GH_TOKEN", Some(inputs.required("gh_token")?));
        env.set("NODE_ENV", Some(inputs.required("node_env")?));
        env.set("PUBLISH_TYPE", Some(inputs.required("publish_type")?));

        match platform {
            Platform::Mac => {
                env.set("CSC_LINK", inputs.optional("mac_certs")?);
                env.set("CSC_KEY_PASSWORD", inputs.optional("mac_certs_password")?);
                env.set("APPLEID", Some(inputs.required("appleid")?));
                env.set("APPLEIDPASS", Some(inputs.required("appleidpass")?));
            }
            Platform::Windows => {
                env.set("CSC_LINK", inputs.optional("windows_certs")?);
                env.set("CSC_KEY_PASSWORD", inputs.optional("windows_certs_password")?);
            }
            Platform::Linux => {}
        }

        // Silence advertisement banners during install
        env.set("ADBLOCK", Some(true));

        if extra_args.is_some() {
            log::warn!("The `args` input is set but is not passed to electron-builder");
        }

        Ok(Self {
            platform,
            release,
            package_root,
            working_dir,
            extra_args,
            max_attempts,
            manifest: PackageManifest::load_lenient(&manifest_path),
            env,
        })
    }
}

fn parse_max_attempts(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_ATTEMPTS);
    };

    let invalid = |reason: &str| ConfigError::InvalidInput {
        name: "max_attempts".to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(invalid("expected a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{"name": "demo"}"#).unwrap();
        dir
    }

    fn base_inputs(root: &std::path::Path) -> Vec<(String, String)> {
        vec![
            ("release".to_string(), "true".to_string()),
            ("package_root".to_string(), root.display().to_string()),
            ("gh_token".to_string(), "ghp_secret".to_string()),
            ("node_env".to_string(), "production".to_string()),
            ("publish_type".to_string(), "release".to_string()),
        ]
    }

    #[test]
    fn test_set_skips_empty_and_absent() {
        let mut env = PackagerEnv::new();
        env.set("csc_link", Some("cert"));
        env.set("CSC_LINK", Some(""));
        env.set::<&str>("CSC_LINK", None);
        assert_eq!(env.get("CSC_LINK"), Some("cert"));

        env.set::<&str>("APPLEID", None);
        assert_eq!(env.get("APPLEID"), None);
    }

    #[test]
    fn test_set_stringifies_values() {
        let mut env = PackagerEnv::new();
        env.set("adblock", Some(true));
        assert_eq!(env.get("ADBLOCK"), Some("true"));
        assert_eq!(env.names().collect::<Vec<_>>(), vec!["ADBLOCK"]);
    }

    #[test]
    fn test_linux_mapping() {
        let dir = app_dir();
        let inputs = Inputs::from_pairs(base_inputs(dir.path()));
        let config = ActionConfig::configure(&inputs, Platform::Linux).unwrap();

        assert!(config.release);
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.working_dir, dir.path());
        assert_eq!(config.env.get("GH_TOKEN"), Some("ghp_secret"));
        assert_eq!(config.env.get("NODE_ENV"), Some("production"));
        assert_eq!(config.env.get("PUBLISH_TYPE"), Some("release"));
        assert_eq!(config.env.get("ADBLOCK"), Some("true"));
        assert_eq!(config.env.get("CSC_LINK"), None);
        assert_eq!(config.manifest.name.as_deref(), Some("demo"));
    }

    #[test]
    fn test_release_only_for_literal_true() {
        let dir = app_dir();
        let mut pairs = base_inputs(dir.path());
        pairs[0].1 = "yes".to_string();
        let config = ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Linux).unwrap();
        assert!(!config.release);
    }

    #[test]
    fn test_mac_requires_apple_id() {
        let dir = app_dir();
        let inputs = Inputs::from_pairs(base_inputs(dir.path()));
        let err = ActionConfig::configure(&inputs, Platform::Mac).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInput { ref name } if name == "appleid"));

        let mut pairs = base_inputs(dir.path());
        pairs.push(("appleid".to_string(), "dev@example.com".to_string()));
        let err = ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Mac).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInput { ref name } if name == "appleidpass"));
    }

    #[test]
    fn test_mac_mapping() {
        let dir = app_dir();
        let mut pairs = base_inputs(dir.path());
        pairs.push(("appleid".to_string(), "dev@example.com".to_string()));
        pairs.push(("appleidpass".to_string(), "abcd-efgh".to_string()));
        pairs.push(("mac_certs".to_string(), "base64cert".to_string()));
        pairs.push(("mac_certs_password".to_string(), "pw".to_string()));
        pairs.push(("windows_certs".to_string(), "ignored".to_string()));

        let config = ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Mac).unwrap();
        assert_eq!(config.env.get("APPLEID"), Some("dev@example.com"));
        assert_eq!(config.env.get("APPLEIDPASS"), Some("abcd-efgh"));
        assert_eq!(config.env.get("CSC_LINK"), Some("base64cert"));
        assert_eq!(config.env.get("CSC_KEY_PASSWORD"), Some("pw"));
    }

    #[test]
    fn test_windows_mapping() {
        let dir = app_dir();
        let mut pairs = base_inputs(dir.path());
        pairs.push(("windows_certs".to_string(), "wincert".to_string()));
        pairs.push(("mac_certs".to_string(), "ignored".to_string()));

        let config =
            ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Windows).unwrap();
        assert_eq!(config.env.get("CSC_LINK"), Some("wincert"));
        assert_eq!(config.env.get("CSC_KEY_PASSWORD"), None);
        assert_eq!(config.env.get("APPLEID"), None);
    }

    #[test]
    fn test_app_root_overrides_working_dir() {
        let dir = app_dir();
        let mut pairs = base_inputs(dir.path());
        pairs.push(("app_root".to_string(), "/srv/legacy".to_string()));

        let config = ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Linux).unwrap();
        assert_eq!(config.working_dir, PathBuf::from("/srv/legacy"));
        assert_eq!(config.package_root, dir.path());
    }

    #[test]
    fn test_missing_manifest_checked_before_tokens() {
        let dir = tempfile::tempdir().unwrap();
        // gh_token is missing too, but the manifest check comes first
        let inputs = Inputs::from_pairs([
            ("release", "false".to_string()),
            ("package_root", dir.path().display().to_string()),
        ]);
        let err = ActionConfig::configure(&inputs, Platform::Linux).unwrap_err();
        assert!(matches!(err, ConfigError::ManifestNotFound { .. }));
    }

    #[test]
    fn test_each_required_input_is_enforced() {
        let dir = app_dir();
        for missing in ["release", "package_root", "gh_token", "node_env", "publish_type"] {
            let pairs = base_inputs(dir.path())
                .into_iter()
                .filter(|(name, _)| name != missing);
            let err =
                ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Linux).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingInput { ref name } if name == missing),
                "expected missing {missing}, got {err}"
            );
        }
    }

    #[test]
    fn test_max_attempts_parsing() {
        assert_eq!(parse_max_attempts(None).unwrap(), 1);
        assert_eq!(parse_max_attempts(Some("3")).unwrap(), 3);
        assert_eq!(parse_max_attempts(Some(" 2 ")).unwrap(), 2);
        assert!(parse_max_attempts(Some("0")).is_err());
        assert!(parse_max_attempts(Some("-1")).is_err());
        assert!(parse_max_attempts(Some("three")).is_err());
        assert!(parse_max_attempts(Some("2.5")).is_err());
    }

    #[test]
    fn test_args_kept_but_unused() {
        let dir = app_dir();
        let mut pairs = base_inputs(dir.path());
        pairs.push(("args".to_string(), "--x64".to_string()));

        let config = ActionConfig::configure(&Inputs::from_pairs(pairs), Platform::Linux).unwrap();
        assert_eq!(config.extra_args.as_deref(), Some("--x64"));
        assert!(config.env.iter().all(|(_, value)| value != "--x64"));
    }
}
