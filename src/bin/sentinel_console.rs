//!
//! sentinel console binary
//! -----------------------
//! Command-line entry point for signing in, signing out and inspecting the navigation a
//! role can see. Configuration comes from `SENTINEL_*` environment variables, overridden
//! by flags.

use std::env;
use std::process::ExitCode;

use sentinel_console::cli::{self, Command};
use sentinel_console::config::ConsoleConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber with env filter if provided; warnings by default so
    // command output stays clean.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let inv = match cli::parse_args(&args, ConsoleConfig::from_env()) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, cli::USAGE);
            return ExitCode::from(e.exit_code() as u8);
        }
    };
    tracing::debug!(target: "sentinel::cli", "state_dir={} latency_ms={}", inv.config.state_dir.display(), inv.config.sign_in_latency.as_millis());

    if matches!(inv.command, Command::Login { .. }) {
        eprintln!("signing in...");
    }
    match cli::execute(&inv).await {
        Ok(out) => {
            if !out.is_empty() { println!("{}", out); }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
