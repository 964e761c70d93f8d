//! # validate-schemas entry point
//!
//! Parses the (optional) flags, sets up tracing on stderr, locates the
//! repository root and runs the fixed validation list.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lore_cli::validate::run_validate;
use lore_cli::{resolve_repo_root, LogFormat};

/// Validate the reference examples in docs/schemas/examples against their
/// JSON Schemas.
///
/// Exits 0 when every example validates, 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "validate-schemas", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log event format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Repository root containing docs/schemas. Discovered from the current
    /// directory when omitted.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match cli.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }

    let repo_root = cli.root.unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        resolve_repo_root(&cwd).unwrap_or_else(|| {
            tracing::warn!("Could not locate docs/schemas; using current directory");
            cwd
        })
    });

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    match run_validate(&repo_root) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
