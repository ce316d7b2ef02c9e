//! Embedded word lists for synthetic identities.
//!
//! Each list is embedded at compile time via `include_str!` (one entry per
//! line) and parsed once on first access using `OnceLock`.

use std::sync::OnceLock;

const FIRST_NAMES_RAW: &str = include_str!("wordlists/first_names.txt");
const LAST_NAMES_RAW: &str = include_str!("wordlists/last_names.txt");
const CITIES_RAW: &str = include_str!("wordlists/cities.txt");
const STREET_NAMES_RAW: &str = include_str!("wordlists/street_names.txt");
const STREET_SUFFIXES_RAW: &str = include_str!("wordlists/street_suffixes.txt");

static FIRST_NAMES: OnceLock<Box<[&'static str]>> = OnceLock::new();
static LAST_NAMES: OnceLock<Box<[&'static str]>> = OnceLock::new();
static CITIES: OnceLock<Box<[&'static str]>> = OnceLock::new();
static STREET_NAMES: OnceLock<Box<[&'static str]>> = OnceLock::new();
static STREET_SUFFIXES: OnceLock<Box<[&'static str]>> = OnceLock::new();

fn parse(raw: &'static str) -> Box<[&'static str]> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .into_boxed_slice()
}

/// Given names.
#[must_use]
pub fn first_names() -> &'static [&'static str] {
    FIRST_NAMES.get_or_init(|| parse(FIRST_NAMES_RAW))
}

/// Family names.
#[must_use]
pub fn last_names() -> &'static [&'static str] {
    LAST_NAMES.get_or_init(|| parse(LAST_NAMES_RAW))
}

/// City names.
#[must_use]
pub fn cities() -> &'static [&'static str] {
    CITIES.get_or_init(|| parse(CITIES_RAW))
}

/// Street names (without number or suffix).
#[must_use]
pub fn street_names() -> &'static [&'static str] {
    STREET_NAMES.get_or_init(|| parse(STREET_NAMES_RAW))
}

/// Street type suffixes.
#[must_use]
pub fn street_suffixes() -> &'static [&'static str] {
    STREET_SUFFIXES.get_or_init(|| parse(STREET_SUFFIXES_RAW))
}
