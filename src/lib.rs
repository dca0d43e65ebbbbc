//! Application parameters for the café site.
//!
//! Display settings are fixed; database connection parameters are taken
//! from `DB_*` environment variables with built-in fallbacks.

pub mod cli;
pub mod config;

pub use config::{
    AppParameters, ConfigError, DatabaseConfig, DisplaySettings, EnvSource, Layered, OutputFormat,
    ProcessEnv, resolve, resolve_from_process,
};
