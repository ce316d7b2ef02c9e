//! Error types for `deuna-fixtures`.

use thiserror::Error;

/// Errors produced by fixture generators.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The OS random source failed to produce bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// Identifier is malformed or its check digit does not match.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Public key could not be decoded (bad base64, bad DER, not RSA).
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// RSA-OAEP encryption failed (message too long for the key).
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Password generation failure (invalid parameters).
    #[error("password generation error: {0}")]
    PasswordGeneration(String),
}
