//! Command dispatch layer for Keyforge.
//!
//! This module maps parsed CLI commands to their implementations. Each
//! command lives in its own file and exposes a single `run()` function.

use crate::cli::{Cli, Commands};

pub mod about;
pub mod ask;
pub mod gen_pw;

pub fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Gen(args) => gen_pw::run(args),
        Commands::Ask { prompt } => ask::run(prompt),
        Commands::About => about::run(),
    }
}
