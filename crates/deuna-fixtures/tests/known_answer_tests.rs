#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Known-answer vectors for the fixture generators.

mod kat_vectors;
