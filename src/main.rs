//! Keyforge — a random password generator with a Gemini-backed assistant.
//!
//! This file is the application entry point. It is kept small and is
//! responsible only for:
//!
//! - Loading `.env` and installing the log subscriber
//! - Parsing CLI arguments
//! - Dispatching subcommands
//!
//! Command implementations live in `commands/`, terminal helpers in `ui.rs`.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod assistant;
mod cli;
mod commands;
mod config;
mod password;
mod ui;

fn main() {
    let dotenv_path = config::init();

    // Logs go to stderr so stdout carries only passwords and answers.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match dotenv_path {
        Some(path) => debug!(path = %path.display(), "loaded .env file"),
        None => debug!("no .env file loaded"),
    }

    let cli = cli::Cli::parse();
    commands::dispatch(cli);
}
