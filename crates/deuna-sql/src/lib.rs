//! `deuna-sql` — setup and cleanup statements for Deuna load tests.
//!
//! Scenarios seed and clear rows in the PostgreSQL store under test with
//! parameterized statements. Parameters arrive as loosely typed values and
//! are bound to whatever column type the server expects.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod executor;
pub mod param;

pub use config::SqlConfig;
pub use error::SqlError;
pub use executor::SqlExecutor;
pub use param::SqlParam;
