//! Application parameter resolution.
//!
//! Display settings are fixed literals. Database settings come from the
//! `DB_HOST`, `DB_NAME`, `DB_USER` and `DB_PASSWORD` variables, falling back
//! to built-in defaults when a variable is unset or empty.

mod database;
mod display;
pub mod env;
mod error;
mod render;

pub use database::DatabaseConfig;
pub use display::DisplaySettings;
pub use env::{EnvSource, Layered, ProcessEnv, read_env_file};
pub use error::ConfigError;
pub use render::{OutputFormat, render};

use serde::Serialize;

/// Every parameter key, in the order [`AppParameters::entries`] yields them.
pub const KEYS: [&str; 7] = [
    "showServerInfo",
    "timeZone",
    "currency",
    "dbHost",
    "dbName",
    "dbUser",
    "dbPassword",
];

/// Resolved application parameters.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppParameters {
    #[serde(flatten)]
    display: DisplaySettings,
    #[serde(flatten)]
    database: DatabaseConfig,
}

impl AppParameters {
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    /// Look up a parameter by its key, e.g. `"dbHost"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "showServerInfo" => self.display.show_server_info(),
            "timeZone" => self.display.time_zone(),
            "currency" => self.display.currency(),
            "dbHost" => self.database.host(),
            "dbName" => self.database.name(),
            "dbUser" => self.database.user(),
            "dbPassword" => self.database.password(),
            _ => return None,
        };
        Some(value)
    }

    /// All `(key, value)` pairs in [`KEYS`] order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        KEYS.into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// Copy with the database password masked, for printing.
    pub fn redacted(&self) -> Self {
        Self {
            display: self.display.clone(),
            database: self.database.redacted(),
        }
    }
}

/// Resolve parameters from `vars`.
///
/// A database variable set to a non-empty string is used verbatim; otherwise
/// the default applies. Display settings ignore the environment.
pub fn resolve(vars: &impl EnvSource) -> AppParameters {
    let pick = |key: &str, default: &str| {
        env::non_empty(vars, key).unwrap_or_else(|| default.to_string())
    };

    AppParameters {
        display: DisplaySettings::default(),
        database: DatabaseConfig {
            host: pick(env::DB_HOST, database::DEFAULT_HOST),
            name: pick(env::DB_NAME, database::DEFAULT_NAME),
            user: pick(env::DB_USER, database::DEFAULT_USER),
            password: pick(env::DB_PASSWORD, database::DEFAULT_PASSWORD),
        },
    }
}

/// Resolve parameters from the live process environment.
pub fn resolve_from_process() -> AppParameters {
    resolve(&ProcessEnv)
}
