//! Synthetic identity data: names, usernames, and postal addresses.
//!
//! Values are drawn uniformly from the embedded word lists in
//! [`wordlist`] with `OsRng`. Nothing here is meant to be unique across a
//! run; pair it with [`crate::identifier`] when uniqueness matters.

pub mod wordlist;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest house number produced by [`street`].
const MAX_HOUSE_NUMBER: u16 = 9999;

/// A synthetic person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// A synthetic postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// House number, street name and suffix, e.g. `"1420 Amazonas Avenue"`.
    pub street: String,
    pub city: String,
}

fn pick(list: &'static [&'static str]) -> &'static str {
    list.choose(&mut OsRng).copied().unwrap_or_default()
}

/// A random given name.
#[must_use]
pub fn first_name() -> String {
    pick(wordlist::first_names()).to_owned()
}

/// A random family name.
#[must_use]
pub fn last_name() -> String {
    pick(wordlist::last_names()).to_owned()
}

/// A username: a family name followed by four random digits, e.g.
/// `"Zambrano0427"`.
#[must_use]
pub fn username() -> String {
    let suffix: u16 = OsRng.gen_range(0..10_000);
    format!("{}{suffix:04}", pick(wordlist::last_names()))
}

/// A random city name.
#[must_use]
pub fn city() -> String {
    pick(wordlist::cities()).to_owned()
}

/// A random street line: house number, street name and suffix.
#[must_use]
pub fn street() -> String {
    let number: u16 = OsRng.gen_range(1..=MAX_HOUSE_NUMBER);
    format!(
        "{number} {} {}",
        pick(wordlist::street_names()),
        pick(wordlist::street_suffixes())
    )
}

/// A random address.
#[must_use]
pub fn address() -> Address {
    Address {
        street: street(),
        city: city(),
    }
}

/// A random person. The username is built from an independently drawn
/// family name, as the signup flows under test do not correlate them.
#[must_use]
pub fn person() -> Person {
    Person {
        first_name: first_name(),
        last_name: last_name(),
        username: username(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_come_from_word_lists() {
        for _ in 0..20 {
            assert!(wordlist::first_names().contains(&first_name().as_str()));
            assert!(wordlist::last_names().contains(&last_name().as_str()));
            assert!(wordlist::cities().contains(&city().as_str()));
        }
    }

    #[test]
    fn username_is_last_name_plus_four_digits() {
        for _ in 0..20 {
            let name = username();
            let (prefix, digits) = name.split_at(name.len() - 4);
            assert!(
                wordlist::last_names().contains(&prefix),
                "unexpected prefix in {name}"
            );
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "bad suffix in {name}");
        }
    }

    #[test]
    fn street_has_number_name_and_suffix() {
        for _ in 0..20 {
            let line = street();
            let (number, rest) = line.split_once(' ').unwrap();
            let number: u16 = number.parse().unwrap();
            assert!((1..=MAX_HOUSE_NUMBER).contains(&number));

            let (name, suffix) = rest.rsplit_once(' ').unwrap();
            assert!(wordlist::street_names().contains(&name), "bad name in {line}");
            assert!(wordlist::street_suffixes().contains(&suffix), "bad suffix in {line}");
        }
    }

    #[test]
    fn address_and_person_are_populated() {
        let a = address();
        assert!(!a.street.is_empty());
        assert!(!a.city.is_empty());

        let p = person();
        assert!(!p.first_name.is_empty());
        assert!(!p.last_name.is_empty());
        assert!(p.username.len() > 4);
    }

    #[test]
    fn person_serializes_camel_case() {
        let p = Person {
            first_name: "Sofia".into(),
            last_name: "Vega".into(),
            username: "Vega0042".into(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["firstName"], "Sofia");
        assert_eq!(json["username"], "Vega0042");
    }
}
