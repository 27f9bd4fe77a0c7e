//! Environment-backed configuration.
//!
//! Nothing here is cached: every getter reads the process environment at
//! call time, so a key exported after startup is still picked up.

use std::env;
use std::path::PathBuf;

use dotenv::dotenv;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const MODEL: &str = "gemini-2.0-flash";

/// Load `.env` from the working directory (or a parent), if there is one.
/// Variables already set in the environment win.
pub fn init() -> Option<PathBuf> {
    dotenv().ok()
}

/// The Gemini credential as set. Blank values are passed through.
pub fn api_key() -> Option<String> {
    env::var(API_KEY_VAR).ok()
}

/// Base URL of the Generative Language API.
pub fn api_base() -> String {
    env::var(API_BASE_VAR)
        .ok()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}
