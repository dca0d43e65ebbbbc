//! Database connection parameters.

use serde::Serialize;
use std::fmt;

pub(crate) const DEFAULT_HOST: &str = "localhost";
pub(crate) const DEFAULT_NAME: &str = "cafedb";
pub(crate) const DEFAULT_USER: &str = "cafeuser";
// Local development credential. Deployments must set DB_PASSWORD.
pub(crate) const DEFAULT_PASSWORD: &str = "CafeUserPassword123!";

pub(crate) const REDACTED: &str = "[REDACTED]";

/// Connection parameters handed to the database client.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    #[serde(rename = "dbHost")]
    pub(crate) host: String,
    #[serde(rename = "dbName")]
    pub(crate) name: String,
    #[serde(rename = "dbUser")]
    pub(crate) user: String,
    #[serde(rename = "dbPassword")]
    pub(crate) password: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            name: DEFAULT_NAME.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Host name, optionally with a `:port` suffix.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// True when the built-in development password is in use, whether by
    /// fallback or because it was set explicitly.
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_PASSWORD
    }

    /// MySQL connection URL with user, password and database name percent-encoded.
    pub fn connection_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            urlencoding::encode(&self.name)
        )
    }

    pub(crate) fn redacted(&self) -> Self {
        Self {
            password: REDACTED.to_string(),
            ..self.clone()
        }
    }
}
