//! `deuna-fixtures` — Pure test-data generators for Deuna load tests.
//!
//! Zero network, zero async, zero logging. Everything here is local
//! computation over the OS CSPRNG and embedded word lists.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod identifier;

pub mod encryption;

pub mod identity;

pub mod password;

pub use encryption::encrypt_oaep_sha1;
pub use error::FixtureError;
pub use identifier::{
    check_digit, generate_identifier, generate_identifier_with, is_valid, ChecksummedIdentifier,
    BASE_DIGITS, IDENTIFIER_LEN,
};
pub use identity::{address, city, first_name, last_name, person, street, username, Address, Person};
pub use password::{
    generate_password, CharsetConfig, DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH,
};
