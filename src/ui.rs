//! User interaction helpers for Keyforge.
//!
//! This module centralizes terminal I/O, prompting, and clipboard
//! interactions. No generation or network logic should live here.

use std::io::{self, BufRead, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Print `prompt` and read one line from standard input, without the
/// trailing newline. Returns an empty string on EOF.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    read_line_from(io::stdin().lock())
}

fn read_line_from<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut s = String::new();
    reader.read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("could not write to clipboard: {0}")]
    Write(String),
}

/// Put `secret` on the clipboard and wipe it once `hold` has elapsed.
///
/// The wipe only happens if the clipboard still holds `secret`; anything
/// copied in the meantime is left alone. The returned handle finishes after
/// the wipe. Join it before exiting: on X11 the contents vanish with the
/// owning process.
pub fn copy_then_clear(secret: &str, hold: Duration) -> Result<JoinHandle<()>, ClipboardError> {
    open_clipboard()?
        .set_contents(secret.to_string())
        .map_err(|e| ClipboardError::Write(e.to_string()))?;
    debug!(secs = hold.as_secs(), "password copied to clipboard");

    let secret = Zeroizing::new(secret.to_string());
    Ok(thread::spawn(move || {
        thread::sleep(hold);
        if let Err(e) = clear_if_unchanged(&secret) {
            warn!(error = %e, "could not clear clipboard");
        }
    }))
}

fn clear_if_unchanged(secret: &str) -> Result<(), ClipboardError> {
    let mut ctx = open_clipboard()?;
    let current = ctx.get_contents().ok().map(Zeroizing::new);

    if !still_holds(current.as_deref().map(String::as_str), secret) {
        debug!("clipboard changed since copy, leaving it");
        return Ok(());
    }

    ctx.set_contents(String::new())
        .map_err(|e| ClipboardError::Write(e.to_string()))?;
    debug!("clipboard cleared");
    Ok(())
}

fn open_clipboard() -> Result<ClipboardContext, ClipboardError> {
    ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

fn still_holds(current: Option<&str>, secret: &str) -> bool {
    current == Some(secret)
}
