//! Command-line handling for the `cafe-config` binary.

use crate::config::{
    self, AppParameters, ConfigError, EnvSource, Layered, OutputFormat, read_env_file,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Env file read when `--env-file` is not given. Missing is fine.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub env_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub reveal_secrets: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    ///
    /// Accepts `--flag=value` and `--flag value`. Anything unrecognised is an error.
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };

            match flag.as_str() {
                "--env-file" => {
                    let path = value_for(&flag, inline, &mut args)?;
                    parsed.env_file = Some(PathBuf::from(path));
                }
                "--format" => {
                    parsed.format = value_for(&flag, inline, &mut args)?.parse()?;
                }
                "--reveal-secrets" if inline.is_none() => parsed.reveal_secrets = true,
                _ => {
                    let original = match inline {
                        Some(value) => format!("{}={}", flag, value),
                        None => flag.clone(),
                    };
                    return Err(ConfigError::UnknownArgument(original));
                }
            }
        }

        Ok(parsed)
    }
}

fn value_for(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, ConfigError> {
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

/// Variables from env files, used beneath the process environment.
///
/// An explicit `--env-file` replaces `implicit` entirely and must exist.
/// Otherwise `implicit` is read when present.
pub fn file_vars(
    explicit: Option<&Path>,
    implicit: &Path,
) -> Result<HashMap<String, String>, ConfigError> {
    match explicit {
        Some(path) => read_env_file(path),
        None if implicit.is_file() => read_env_file(implicit),
        None => Ok(HashMap::new()),
    }
}

/// Resolve parameters for `args`. `process` takes precedence over file values.
pub fn resolve_params(
    args: &Args,
    process: &impl EnvSource,
    implicit_env_file: &Path,
) -> Result<AppParameters, ConfigError> {
    let files = file_vars(args.env_file.as_deref(), implicit_env_file)?;
    Ok(config::resolve(&Layered::new(process, files)))
}

/// Render `params` for output, masking the password unless secrets are revealed.
pub fn render_params(args: &Args, params: &AppParameters) -> Result<String, ConfigError> {
    if args.reveal_secrets {
        config::render(params, args.format)
    } else {
        config::render(&params.redacted(), args.format)
    }
}
