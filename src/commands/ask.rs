//! Ask the Gemini assistant a question.

use tracing::{debug, error};

use crate::{assistant, ui};

pub fn run(words: Vec<String>) {
    let prompt = if words.is_empty() {
        match ui::prompt_line("Ask anything: ") {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "failed to read prompt");
                return;
            }
        }
    } else {
        words.join(" ")
    };

    if prompt.trim().is_empty() {
        debug!("blank prompt, nothing to ask");
        return;
    }

    println!("{}", assistant::ask(&prompt));
}
