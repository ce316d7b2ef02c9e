#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! The plain-value surface load-test scripts call.

use std::time::Duration;

use data_encoding::BASE64;
use deuna_loadkit::{ChecksummedIdentifier, Deuna, MIN_SCRIPT_PASSWORD_LENGTH};
use deuna_otp::{LogQuery, LogStore, OtpConfig, OtpError, RawLogEvent};
use deuna_sql::SqlConfig;
use rand::rngs::OsRng;
use rsa::pkcs8::EncodePublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};

struct FixedLogStore(Result<Vec<&'static str>, ()>);

impl LogStore for FixedLogStore {
    fn filter_log_events(&self, _query: &LogQuery) -> Result<Vec<RawLogEvent>, OtpError> {
        match &self.0 {
            Ok(lines) => Ok(lines.iter().copied().map(RawLogEvent::new).collect()),
            Err(()) => Err(OtpError::Timeout(Duration::from_secs(10))),
        }
    }
}

fn deuna(lines: Vec<&'static str>) -> Deuna<FixedLogStore> {
    Deuna::new(
        FixedLogStore(Ok(lines)),
        OtpConfig::default(),
        SqlConfig::default(),
    )
}

const OTP_LINE: &str =
    r#"{"trackingId": "{\"dynamicData\":{\"otp\":482913},\"metadata\":{\"phoneNumber\":\"0987654321\"}}"}"#;

#[test]
fn get_otp_maps_every_outcome_to_a_string() {
    assert_eq!(deuna(vec![OTP_LINE]).get_otp("0987654321"), "482913");
    assert_eq!(deuna(vec![]).get_otp("0987654321"), "123456");
    assert_eq!(deuna(vec!["garbage 0987654321"]).get_otp("0987654321"), "0");

    let unreachable = Deuna::new(
        FixedLogStore(Err(())),
        OtpConfig::default(),
        SqlConfig::default(),
    );
    assert_eq!(unreachable.get_otp("0987654321"), "");
}

#[test]
fn generated_identifiers_validate() {
    let deuna = deuna(vec![]);
    for _ in 0..200 {
        let id = deuna.generate_identifier();
        assert_eq!(id.len(), 10);
        assert!(ChecksummedIdentifier::parse(&id).is_ok(), "{id}");
    }
}

#[test]
fn identity_helpers_return_non_empty_values() {
    let deuna = deuna(vec![]);
    assert!(!deuna.first_name().is_empty());
    assert!(!deuna.last_name().is_empty());
    assert!(!deuna.city().is_empty());

    let username = deuna.username();
    assert!(username.len() > 4);
    assert!(username[username.len() - 4..].bytes().all(|b| b.is_ascii_digit()));

    let street = deuna.street();
    assert!(street.split(' ').next().unwrap().parse::<u16>().is_ok(), "{street}");
}

#[test]
fn password_has_requested_length_up_to_the_maximum() {
    let deuna = deuna(vec![]);
    let password = deuna.password(16);
    assert_eq!(password.len(), 16);
    assert!(password.bytes().all(|b| b.is_ascii_alphanumeric()));

    assert_eq!(deuna.password(500), "");
}

#[test]
fn short_password_requests_are_raised_to_the_minimum() {
    let deuna = deuna(vec![]);
    for requested in 0..MIN_SCRIPT_PASSWORD_LENGTH {
        let password = deuna.password(requested);
        assert_eq!(password.len(), MIN_SCRIPT_PASSWORD_LENGTH, "requested {requested}");
        assert!(password.bytes().all(|b| b.is_ascii_alphanumeric()));
    }
    assert_eq!(deuna.password(MIN_SCRIPT_PASSWORD_LENGTH + 1).len(), 6);
}

#[test]
fn encrypt_yields_one_modulus_of_base64_or_empty() {
    let private_key = RsaPrivateKey::new(&mut OsRng, 1024).unwrap();
    let der = RsaPublicKey::from(&private_key).to_public_key_der().unwrap();
    let public_b64 = BASE64.encode(der.as_bytes());

    let deuna = deuna(vec![]);
    let ciphertext = deuna.encrypt(r#"{"pin":"1234"}"#, &public_b64);
    assert_eq!(BASE64.decode(ciphertext.as_bytes()).unwrap().len(), 128);

    assert_eq!(deuna.encrypt("hello", "not a key"), "");
}

#[test]
fn execute_statement_without_connection_string_is_false() {
    let deuna = deuna(vec![]);
    assert!(!deuna.execute_statement(
        "DELETE FROM users WHERE phone = $1",
        &[serde_json::json!("0987654321")],
    ));
}
