use std::path::{Path, PathBuf};

use alfred_feedback::Feedback;
use clap::{Parser, Subcommand};
use shorthand_core::{Candidate, Config, ConfigError, config, render};

#[derive(Debug, Parser)]
#[command(author, version, about = "GitHub shorthand workflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a script-filter query and print Alfred feedback JSON.
    Complete {
        /// Raw query from the launcher: mode indicator plus input text.
        #[arg(long, default_value = "")]
        query: String,
        /// Config file path override.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Runtime,
}

#[derive(Debug)]
struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
        }
    }

    fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Runtime => 1,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            eprintln!("error: {}", error.message);
            std::process::exit(error.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, AppError> {
    let home = std::env::var("HOME").unwrap_or_default();
    let env_config = std::env::var(config::CONFIG_PATH_ENV).ok();
    run_with(cli, &home, env_config.as_deref())
}

fn run_with(cli: Cli, home: &str, env_config: Option<&str>) -> Result<String, AppError> {
    match cli.command {
        Commands::Complete { query, config } => {
            let path = shorthand_core::resolve_config_path(config, env_config, home);

            // A config failure is feedback, not an abort: the launcher shows
            // the error row and the process still exits cleanly.
            let feedback = match Config::load(&path, home) {
                Ok(config) => shorthand_core::build_feedback(&config, &query),
                Err(error) => config_error_feedback(&path, &error),
            };

            feedback.to_json().map_err(|error| {
                AppError::runtime(format!("failed to serialize feedback: {error}"))
            })
        }
    }
}

fn config_error_feedback(path: &Path, error: &ConfigError) -> Feedback {
    render::feedback(&[Candidate::error(
        format!("Error loading {}", path.display()),
        error.to_string(),
    )])
}
