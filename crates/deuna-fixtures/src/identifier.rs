//! Checksummed 10-digit national identifiers.
//!
//! An identifier is 9 random base digits followed by one check digit.
//! The check digit uses a Luhn variant: digits at even positions (0, 2, 4,
//! 6, 8, counted from the most significant digit) are doubled and reduced
//! by 9 when the result exceeds 9; odd positions are taken as-is. The check
//! digit is `(10 - total mod 10) mod 10`.
//!
//! Downstream validators use the same parity convention, so it must not
//! change.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

// ── Constants ───────────────────────────────────────────────────────

/// Number of random base digits.
pub const BASE_DIGITS: usize = 9;

/// Total identifier length (base digits + check digit).
pub const IDENTIFIER_LEN: usize = 10;

/// Exclusive upper bound of the random base (`10^9`).
pub const BASE_MODULUS: u32 = 1_000_000_000;

/// Largest multiple of [`BASE_MODULUS`] representable in a `u32`.
/// Draws at or above it are rejected to keep the base uniform.
const REJECTION_ZONE: u32 = 4_000_000_000;

// ── Types ───────────────────────────────────────────────────────────

/// A 10-character decimal identifier whose last digit is the check digit
/// of the first nine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChecksummedIdentifier(String);

impl ChecksummedIdentifier {
    /// Build the identifier for a known base value.
    ///
    /// The base is zero-padded to exactly [`BASE_DIGITS`] digits before the
    /// checksum pass, so `5` becomes `"000000005"`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidIdentifier`] if `base >= 10^9`.
    pub fn from_base(base: u32) -> Result<Self, FixtureError> {
        if base >= BASE_MODULUS {
            return Err(FixtureError::InvalidIdentifier(format!(
                "base {base} does not fit in {BASE_DIGITS} digits"
            )));
        }

        let padded = format!("{base:0>BASE_DIGITS$}");
        let mut digits = [0u8; BASE_DIGITS];
        for (slot, byte) in digits.iter_mut().zip(padded.bytes()) {
            *slot = byte.wrapping_sub(b'0');
        }

        let check = check_digit(&digits);
        Ok(Self(format!("{padded}{check}")))
    }

    /// Parse and validate an identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidIdentifier`] if the input is not
    /// exactly [`IDENTIFIER_LEN`] ASCII digits or the check digit does not
    /// match.
    pub fn parse(input: &str) -> Result<Self, FixtureError> {
        let bytes = input.as_bytes();
        if bytes.len() != IDENTIFIER_LEN {
            return Err(FixtureError::InvalidIdentifier(format!(
                "expected {IDENTIFIER_LEN} digits, got {} characters",
                input.chars().count()
            )));
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(FixtureError::InvalidIdentifier(
                "identifier must contain only ASCII digits".to_owned(),
            ));
        }

        let mut base = [0u8; BASE_DIGITS];
        for (slot, byte) in base.iter_mut().zip(bytes) {
            *slot = byte.wrapping_sub(b'0');
        }

        let expected = check_digit(&base);
        let actual = bytes[BASE_DIGITS].wrapping_sub(b'0');
        if expected != actual {
            return Err(FixtureError::InvalidIdentifier(format!(
                "check digit mismatch: expected {expected}, got {actual}"
            )));
        }

        Ok(Self(input.to_owned()))
    }

    /// The full 10-digit identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9 base digits.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.0[..BASE_DIGITS]
    }

    /// The trailing check digit as a number.
    #[must_use]
    pub fn check(&self) -> u8 {
        self.0.as_bytes()[BASE_DIGITS].wrapping_sub(b'0')
    }

    /// Consume the identifier, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ChecksummedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChecksummedIdentifier {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChecksummedIdentifier {
    type Error = FixtureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ChecksummedIdentifier> for String {
    fn from(id: ChecksummedIdentifier) -> Self {
        id.0
    }
}

// ── Checksum ────────────────────────────────────────────────────────

/// Contribution of one base digit to the running total.
#[allow(clippy::arithmetic_side_effects)]
const fn contribution(index: usize, digit: u32) -> u32 {
    if index % 2 == 0 {
        let doubled = digit * 2;
        if doubled > 9 {
            doubled - 9
        } else {
            doubled
        }
    } else {
        digit
    }
}

/// Compute the check digit for 9 base digit values (each `0..=9`).
#[must_use]
pub fn check_digit(base: &[u8; BASE_DIGITS]) -> u8 {
    let total: u32 = base
        .iter()
        .enumerate()
        .map(|(index, &digit)| contribution(index, u32::from(digit)))
        .sum();

    // (10 - r) is in 1..=10 for r in 0..=9, so the final value is < 10.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    let check = ((10 - total % 10) % 10) as u8;
    check
}

// ── Generation ──────────────────────────────────────────────────────

/// Draw a base uniformly in `[0, 10^9)` by rejection sampling over `u32`.
fn draw_base<R: RngCore + ?Sized>(rng: &mut R) -> Result<u32, FixtureError> {
    loop {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| FixtureError::RandomSource(e.to_string()))?;
        let candidate = u32::from_le_bytes(buf);
        if candidate < REJECTION_ZONE {
            #[allow(clippy::arithmetic_side_effects)]
            let base = candidate % BASE_MODULUS;
            return Ok(base);
        }
    }
}

/// Generate an identifier from the given random source.
///
/// # Errors
///
/// Returns [`FixtureError::RandomSource`] if the generator fails.
pub fn generate_identifier_with<R: RngCore + ?Sized>(
    rng: &mut R,
) -> Result<ChecksummedIdentifier, FixtureError> {
    let base = draw_base(rng)?;
    ChecksummedIdentifier::from_base(base)
}

/// Generate an identifier using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`FixtureError::RandomSource`] if the OS random source fails.
pub fn generate_identifier() -> Result<ChecksummedIdentifier, FixtureError> {
    generate_identifier_with(&mut OsRng)
}

/// Returns `true` if `input` is a well-formed identifier with a matching
/// check digit.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    ChecksummedIdentifier::parse(input).is_ok()
}

// ── Tests ───────────────────────────────────────────────────────────
