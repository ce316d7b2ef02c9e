#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for checksummed identifiers.

use deuna_fixtures::identifier::{
    check_digit, generate_identifier_with, is_valid, ChecksummedIdentifier, BASE_DIGITS,
    BASE_MODULUS, IDENTIFIER_LEN,
};
use proptest::prelude::*;
use rand::rngs::mock::StepRng;

fn digits_of(id: &str) -> [u8; BASE_DIGITS] {
    let mut base = [0u8; BASE_DIGITS];
    for (slot, byte) in base.iter_mut().zip(id.bytes()) {
        *slot = byte - b'0';
    }
    base
}

proptest! {
    /// Every identifier is 10 digits and its last digit is the check
    /// digit of the first nine.
    #[test]
    fn identifier_carries_its_own_check_digit(base in 0u32..BASE_MODULUS) {
        let id = ChecksummedIdentifier::from_base(base).unwrap();
        prop_assert_eq!(id.as_str().len(), IDENTIFIER_LEN);
        prop_assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(check_digit(&digits_of(id.base())), id.check());
        prop_assert!(is_valid(id.as_str()));
    }

    /// The base digits are the zero-padded decimal rendering of the base.
    #[test]
    fn base_is_zero_padded(base in 0u32..BASE_MODULUS) {
        let id = ChecksummedIdentifier::from_base(base).unwrap();
        prop_assert_eq!(id.base(), format!("{base:09}"));
    }

    /// Same base always produces the same check digit.
    #[test]
    fn checksum_is_deterministic(base in 0u32..BASE_MODULUS) {
        let a = ChecksummedIdentifier::from_base(base).unwrap();
        let b = ChecksummedIdentifier::from_base(base).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Generation from any accepted draw yields a valid identifier.
    #[test]
    fn generation_from_arbitrary_draws_is_valid(draw in 0u32..4_000_000_000) {
        let mut rng = StepRng::new(u64::from(draw), 0);
        let id = generate_identifier_with(&mut rng).unwrap();
        prop_assert_eq!(id.base(), format!("{:09}", draw % BASE_MODULUS));
        prop_assert!(is_valid(id.as_str()));
    }

    /// Changing the check digit always breaks validation.
    #[test]
    fn wrong_check_digit_never_validates(base in 0u32..BASE_MODULUS, delta in 1u8..10) {
        let id = ChecksummedIdentifier::from_base(base).unwrap();
        let wrong = (id.check() + delta) % 10;
        let tampered = format!("{}{wrong}", id.base());
        prop_assert!(!is_valid(&tampered));
    }
}
