//! Entry point for the translation table editor.

use std::io::{
    self,
    Write,
};
use std::process::ExitCode;

use clap::Parser;
use locale_store::cli::{
    self,
    Cli,
};
use tracing_subscriber::EnvFilter;

/// Runs one command; any failure becomes a non-zero exit code.
fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();
    match cli::run(&args, &mut out, &mut input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            let _ = writeln!(io::stderr(), "error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
