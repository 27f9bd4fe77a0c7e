//! Random password generation.
//!
//! A password is a sequence of characters drawn independently and
//! uniformly, with replacement, from the union of the enabled character
//! classes. Lowercase letters are always part of the alphabet.
//!
//! There is no per-class guarantee: enabling digits does not mean the
//! output contains a digit. Length bounds are the caller's concern.

use rand::Rng;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// All 32 printable ASCII punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Options for a single generated password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl PasswordRequest {
    /// The characters eligible for every position, in class order:
    /// lowercase, uppercase, digits, punctuation.
    pub fn alphabet(&self) -> String {
        let mut charset = String::from(LOWERCASE);
        if self.include_uppercase {
            charset.push_str(UPPERCASE);
        }
        if self.include_numbers {
            charset.push_str(DIGITS);
        }
        if self.include_special {
            charset.push_str(PUNCTUATION);
        }
        charset
    }
}

/// Generate a password using the thread-local, OS-seeded RNG.
pub fn generate_password(request: &PasswordRequest) -> String {
    generate_password_with(request, &mut rand::thread_rng())
}

/// Generate a password drawing from `rng`.
///
/// The alphabet always holds the lowercase letters, so every one of the
/// `length` positions gets a character.
pub fn generate_password_with<R: Rng + ?Sized>(request: &PasswordRequest, rng: &mut R) -> String {
    let alphabet: Vec<char> = request.alphabet().chars().collect();

    (0..request.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
