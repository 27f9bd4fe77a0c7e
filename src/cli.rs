//! Command-line interface definitions for Keyforge.
//!
//! This module describes how users interact with the program from the
//! terminal. It contains no application logic.

use clap::{Args, Parser, Subcommand};

use crate::password::{MAX_LENGTH, MIN_LENGTH};

#[derive(Parser)]
#[command(
    name = "keyforge",
    version,
    about = "Generate random passwords and ask Gemini AI questions",
    long_about = r#"
Keyforge generates random passwords from the character classes you pick
and forwards free-text questions to Google's Gemini model.

Typical usage:
  keyforge gen
  keyforge gen --length 20 --uppercase --numbers --special
  keyforge ask "What makes a password strong?"

The assistant reads GEMINI_API_KEY from the environment (a .env file in
the working directory is loaded automatically).
"#,
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random password
    ///
    /// Lowercase letters are always used. Each flag adds one more
    /// character class. Characters are drawn independently, so a
    /// requested class is not guaranteed to appear.
    Gen(GenArgs),

    /// Ask Gemini AI a question
    ///
    /// The words of PROMPT are joined with spaces. Without a prompt, a
    /// single line is read from standard input.
    Ask {
        /// Question to send
        prompt: Vec<String>,
    },

    /// Show information about Keyforge and password resources
    About,
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Length of the generated password
    #[arg(
        short,
        long,
        default_value_t = 12,
        value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64)
    )]
    pub length: u8,

    /// Include uppercase letters (A–Z)
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include numbers (0–9)
    #[arg(short, long)]
    pub numbers: bool,

    /// Include special characters (ASCII punctuation)
    #[arg(short, long)]
    pub special: bool,

    /// Copy the generated password to the clipboard for 10 seconds
    #[arg(short, long)]
    pub copy: bool,

    /// Seed the generator for reproducible output (never use for real secrets)
    #[arg(long)]
    pub seed: Option<u64>,
}
