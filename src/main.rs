use cafe_config::cli::{self, Args, DEFAULT_ENV_FILE};
use cafe_config::config::{AppParameters, ConfigError, ProcessEnv};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

fn log_resolved(params: &AppParameters) {
    let db = params.database();
    info!(host = %db.host(), database = %db.name(), user = %db.user(), "Parameters resolved");

    if db.uses_default_password() {
        warn!("the built-in development database password is in use; set DB_PASSWORD");
    }
}

fn run() -> Result<String, ConfigError> {
    let args = Args::parse(env::args().skip(1))?;
    debug!(?args, "Arguments parsed");

    // Env files are layered beneath the process environment, never loaded into it.
    let params = cli::resolve_params(&args, &ProcessEnv, Path::new(DEFAULT_ENV_FILE))?;
    log_resolved(&params);

    cli::render_params(&args, &params)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to resolve parameters: {}", e);
            ExitCode::FAILURE
        }
    }
}
