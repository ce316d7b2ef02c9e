//! Check-digit Known Answer Tests.
//!
//! Each vector was worked by hand: even positions (0, 2, 4, 6, 8) doubled
//! and reduced by 9 above 9, odd positions as-is, check = (10 - t % 10) % 10.

use deuna_fixtures::identifier::{check_digit, is_valid, ChecksummedIdentifier};

// (base, expected identifier)
const VECTORS: [(u32, &str); 10] = [
    // 2+2+6+4+1+6+5+8+9 = 43 -> 7
    (123_456_789, "1234567897"),
    (0, "0000000000"),
    // index 8: 5*2 = 10 -> 1, total 1 -> 9
    (5, "0000000059"),
    // 5*9 + 4*9 = 81 -> 9
    (999_999_999, "9999999999"),
    // 2+7+2+2+6+4+1+6+5 = 35 -> 5
    (171_234_567, "1712345675"),
    // 0+1+0+2+0+3+0+4+0 = 10 -> 0
    (10_203_040, "0102030400"),
    // 9+8+5+6+1+4+6+2+2 = 43 -> 7
    (987_654_321, "9876543217"),
    // 2 -> 8
    (100_000_000, "1000000008"),
    // 2 -> 8
    (1, "0000000018"),
    // 1+5+1+5+1+5+1+5+1 = 25 -> 5
    (555_555_555, "5555555555"),
];

#[test]
fn from_base_matches_vectors() {
    for (base, expected) in &VECTORS {
        let id = ChecksummedIdentifier::from_base(*base).unwrap();
        assert_eq!(id.as_str(), *expected, "mismatch for base {base}");
        assert!(is_valid(expected), "{expected} should validate");
    }
}

#[test]
fn check_digit_over_raw_digits() {
    assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 7);
    assert_eq!(check_digit(&[9, 8, 7, 6, 5, 4, 3, 2, 1]), 7);
    assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 5]), 9);
}

#[test]
fn single_digit_corruption_is_detected() {
    for (_, expected) in &VECTORS {
        let mut bytes = expected.as_bytes().to_vec();
        bytes[9] = if bytes[9] == b'9' { b'0' } else { bytes[9] + 1 };
        let corrupted = String::from_utf8(bytes).unwrap();
        assert!(!is_valid(&corrupted), "{corrupted} should not validate");
    }
}
