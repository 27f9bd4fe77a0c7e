//! Generate a random password.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::cli::GenArgs;
use crate::password::{self, PasswordRequest};
use crate::ui;

const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

pub fn run(args: GenArgs) {
    let request = PasswordRequest {
        length: usize::from(args.length),
        include_uppercase: args.uppercase,
        include_numbers: args.numbers,
        include_special: args.special,
    };
    debug!(?request, seeded = args.seed.is_some(), "generating password");

    let pwd = match args.seed {
        Some(seed) => password::generate_password_with(&request, &mut StdRng::seed_from_u64(seed)),
        None => password::generate_password(&request),
    };

    println!("{}", pwd);
    eprintln!("✅ Password generated!");

    if args.copy {
        match ui::copy_then_clear(&pwd, CLIPBOARD_HOLD) {
            Ok(handle) => {
                eprintln!("Copied to clipboard; clearing in {} seconds.", CLIPBOARD_HOLD.as_secs());
                let _ = handle.join();
            }
            Err(e) => eprintln!("Failed to copy to clipboard: {}", e),
        }
    }
}
