//! Environment lookup sources.
//!
//! Resolution reads variables through [`EnvSource`] rather than the global
//! process environment, so callers and tests can supply their own values.

use super::ConfigError;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::path::Path;

/// Database host override.
pub const DB_HOST: &str = "DB_HOST";
/// Database name override.
pub const DB_NAME: &str = "DB_NAME";
/// Database user override.
pub const DB_USER: &str = "DB_USER";
/// Database password override.
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` when it is unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment.
///
/// Values that are not valid Unicode are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Two sources consulted in order.
///
/// The fallback is asked only when the primary value is unset or empty.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn get(&self, key: &str) -> Option<String> {
        non_empty(&self.primary, key).or_else(|| self.fallback.get(key))
    }
}

/// Looks up `key`, treating an empty value the same as an unset one.
pub(crate) fn non_empty(env: &impl EnvSource, key: &str) -> Option<String> {
    env.get(key).filter(|value| !value.is_empty())
}

/// Parse a dotenv file into a map without touching the process environment.
///
/// Later assignments of the same key replace earlier ones.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<HashMap<String, String>, ConfigError> {
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path.as_ref())? {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}
