//! Text renderings of resolved parameters for operators.

use super::{AppParameters, ConfigError};
use std::borrow::Cow;
use std::fmt::Write;
use std::str::FromStr;

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    /// One `key=value` line per parameter, quoted so dotenv parsers read it back.
    Env,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "env" => Ok(Self::Env),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render `params` as-is. Call [`AppParameters::redacted`] first to hide the password.
pub fn render(params: &AppParameters, format: OutputFormat) -> Result<String, ConfigError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(params)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(params)?),
        OutputFormat::Env => {
            let mut out = String::new();
            for (key, value) in params.entries() {
                // Writing to a String cannot fail.
                let _ = writeln!(out, "{}={}", key, env_value(value));
            }
            Ok(out)
        }
    }
}

/// Quote `value` for a dotenv line when it holds anything beyond plain characters.
///
/// Double-quoted values escape `\\`, `"`, `$` and newlines the way dotenvy reads them.
fn env_value(value: &str) -> Cow<'_, str> {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_-./:@!%+,".contains(c));
    if plain {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
