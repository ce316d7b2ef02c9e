//! RSA-OAEP encryption of already-serialized payloads.
//!
//! The padding scheme is fixed: OAEP with SHA-1 as both the label hash and
//! the MGF1 hash, empty label. Public keys arrive as base64 (standard
//! alphabet, no PEM armor) of a DER `SubjectPublicKeyInfo`.

use data_encoding::BASE64;
use rand::rngs::OsRng;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Oaep, RsaPublicKey};

use crate::error::FixtureError;

/// Decode a base64 DER `SubjectPublicKeyInfo` into an RSA public key.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidKeyMaterial`] if the input is not valid
/// base64 or does not hold an RSA public key.
pub fn decode_public_key(base64_der: &str) -> Result<RsaPublicKey, FixtureError> {
    let der = BASE64
        .decode(base64_der.trim().as_bytes())
        .map_err(|e| FixtureError::InvalidKeyMaterial(format!("base64 decode failed: {e}")))?;

    RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| FixtureError::InvalidKeyMaterial(format!("not an RSA public key: {e}")))
}

/// Encrypt `message` for the holder of `base64_der_public_key` and return
/// the ciphertext as standard base64.
///
/// # Errors
///
/// - [`FixtureError::InvalidKeyMaterial`] if the key cannot be decoded.
/// - [`FixtureError::Encryption`] if the message is too long for the key
///   (OAEP-SHA1 allows `k - 42` bytes for a `k`-byte modulus).
pub fn encrypt_oaep_sha1(message: &str, base64_der_public_key: &str) -> Result<String, FixtureError> {
    let public_key = decode_public_key(base64_der_public_key)?;

    let ciphertext = public_key
        .encrypt(&mut OsRng, Oaep::new::<sha1::Sha1>(), message.as_bytes())
        .map_err(|e| FixtureError::Encryption(e.to_string()))?;

    Ok(BASE64.encode(&ciphertext))
}
