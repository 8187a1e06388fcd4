//! Action inputs.
//!
//! The CI runner passes every `with:` value of a workflow step as an
//! `INPUT_<NAME>` environment variable. They are captured once, at startup,
//! into an immutable [`Inputs`] set; nothing reads the environment afterwards.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::ConfigError;

/// Prefix the CI runner puts in front of every input variable
pub const INPUT_PREFIX: &str = "INPUT_";

/// Immutable set of action inputs, keyed by the name after `INPUT_`
///
/// Keys are stored exactly as found; lookups uppercase the input name, so
/// `release` resolves to `INPUT_RELEASE` and never to `INPUT_release`.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: HashMap<String, String>,
    /// Inputs whose value is not valid Unicode, with a lossy rendering
    non_unicode: HashMap<String, String>,
}

impl Inputs {
    /// Capture all `INPUT_*` variables from the process environment
    pub fn from_env() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Capture `INPUT_*` variables from raw `(variable, value)` pairs
    ///
    /// Values that are not valid Unicode are remembered so that reading them
    /// reports an invalid input rather than a missing one.
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut inputs = Self::default();
        for (key, value) in vars {
            let key = match key.into_string() {
                Ok(key) => key,
                Err(key) => {
                    log::debug!("Skipping non-Unicode variable name {:?}", key);
                    continue;
                }
            };
            let Some(name) = key.strip_prefix(INPUT_PREFIX) else {
                continue;
            };
            match value.into_string() {
                Ok(value) => {
                    inputs.values.insert(name.to_string(), value);
                }
                Err(value) => {
                    log::debug!("Input {} has a non-Unicode value", key);
                    inputs
                        .non_unicode
                        .insert(name.to_string(), value.to_string_lossy().into_owned());
                }
            }
        }
        inputs
    }

    /// Build an input set from `(variable, value)` pairs, keeping only `INPUT_*` ones
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.into();
                key.strip_prefix(INPUT_PREFIX)
                    .map(|name| (name.to_string(), value.into()))
            })
            .collect();
        Self {
            values,
            non_unicode: HashMap::new(),
        }
    }

    /// Build an input set from `(input name, value)` pairs, without the prefix
    ///
    /// Names are uppercased, as the CI runner does when it exports inputs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_uppercase(), value.into()))
            .collect();
        Self {
            values,
            non_unicode: HashMap::new(),
        }
    }

    /// Read `INPUT_<NAME>`, failing when `required` and absent or empty
    pub fn read(&self, name: &str, required: bool) -> Result<Option<&str>, ConfigError> {
        let key = name.to_uppercase();
        if let Some(value) = self.non_unicode.get(&key) {
            return Err(ConfigError::InvalidInput {
                name: name.to_string(),
                value: value.clone(),
                reason: "value is not valid Unicode".to_string(),
            });
        }

        let value = self
            .values
            .get(&key)
            .map(String::as_str)
            .filter(|value| !value.is_empty());
        match value {
            None if required => Err(ConfigError::MissingInput {
                name: name.to_string(),
            }),
            value => Ok(value),
        }
    }

    /// Read an optional input; empty values count as absent
    pub fn optional(&self, name: &str) -> Result<Option<&str>, ConfigError> {
        self.read(name, false)
    }

    /// Read a required input
    pub fn required(&self, name: &str) -> Result<&str, ConfigError> {
        self.read(name, true)?.ok_or_else(|| ConfigError::MissingInput {
            name: name.to_string(),
        })
    }
}
