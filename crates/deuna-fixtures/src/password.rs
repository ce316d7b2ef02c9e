//! Random password generation for synthetic test users.
//!
//! Character-based with configurable charsets. At least one character from
//! each enabled class is guaranteed, the rest is drawn from the combined
//! pool, and the result is Fisher-Yates shuffled. All randomness comes from
//! `OsRng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::FixtureError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum allowed password length.
pub const MIN_PASSWORD_LENGTH: usize = 1;

/// Maximum allowed password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"@#$%&?|!(){}<>=*+-_:;,.";
const SPACE: &[u8] = b" ";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character classes a generated password draws from.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharsetConfig {
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols.
    pub symbols: bool,
    /// Include the space character.
    pub space: bool,
}

impl CharsetConfig {
    /// Letters and digits only. What the signup flows under test accept.
    #[must_use]
    pub const fn alphanumeric() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            space: false,
        }
    }

    fn classes(&self) -> impl Iterator<Item = &'static [u8]> + '_ {
        [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
            (self.space, SPACE),
        ]
        .into_iter()
        .filter_map(|(enabled, set)| enabled.then_some(set))
    }
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random password of `length` characters from `charsets`.
///
/// # Errors
///
/// Returns [`FixtureError::PasswordGeneration`] if:
/// - `length` is outside [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`]
/// - No charset is enabled
/// - `length` is less than the number of enabled charsets
pub fn generate_password(length: usize, charsets: &CharsetConfig) -> Result<String, FixtureError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(FixtureError::PasswordGeneration(format!(
            "length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {length}"
        )));
    }

    let mut rng = rand::rngs::OsRng;
    let mut pool: Vec<u8> = Vec::new();
    let mut chars: Vec<u8> = Vec::with_capacity(length);

    for set in charsets.classes() {
        pool.extend_from_slice(set);
        chars.push(set[rng.gen_range(0..set.len())]);
    }

    if pool.is_empty() {
        return Err(FixtureError::PasswordGeneration(
            "at least one charset must be enabled".to_string(),
        ));
    }

    if length < chars.len() {
        return Err(FixtureError::PasswordGeneration(format!(
            "length ({length}) must be at least {} to include one character from each enabled charset",
            chars.len()
        )));
    }

    for _ in chars.len()..length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    chars.shuffle(&mut rng);

    String::from_utf8(chars)
        .map_err(|e| FixtureError::PasswordGeneration(format!("non-ASCII output: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
