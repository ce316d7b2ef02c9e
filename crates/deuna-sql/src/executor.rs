//! Statement execution.
//!
//! Every call opens its own connection, runs one statement and closes the
//! connection again. Load-test setup and cleanup run a handful of
//! statements per scenario, so pooling is not worth the shared state.

use postgres::types::ToSql;
use postgres::{Client, NoTls};
use tracing::{debug, error, warn};

use crate::config::SqlConfig;
use crate::error::SqlError;
use crate::param::SqlParam;

#[derive(Debug, Clone, Default)]
pub struct SqlExecutor {
    config: SqlConfig,
}

impl SqlExecutor {
    #[must_use]
    pub const fn new(config: SqlConfig) -> Self {
        Self { config }
    }

    /// Executor configured from `PG_HOST`.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Config`] if the environment cannot be read.
    pub fn from_env() -> Result<Self, SqlError> {
        Ok(Self::new(SqlConfig::from_env()?))
    }

    #[must_use]
    pub const fn config(&self) -> &SqlConfig {
        &self.config
    }

    /// Run `statement` with positional `params` (`$1`, `$2`, …) and return
    /// the number of affected rows. Result rows of a query are discarded.
    ///
    /// # Errors
    ///
    /// - [`SqlError::NotConfigured`] if no connection string is set.
    /// - [`SqlError::Connect`] if the server cannot be reached.
    /// - [`SqlError::Execute`] if the statement or a parameter is rejected.
    pub fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, SqlError> {
        let dsn = self.config.connection_string()?;
        let mut client =
            Client::connect(dsn, NoTls).map_err(|e| SqlError::Connect(e.to_string()))?;

        let bound: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();
        let outcome = client
            .execute(statement, &bound)
            .map_err(|e| SqlError::Execute(e.to_string()));

        if let Err(e) = client.close() {
            warn!(error = %e, "closing database connection failed");
        }

        let rows = outcome?;
        debug!(rows, params = params.len(), "statement executed");
        Ok(rows)
    }

    /// [`execute`](Self::execute) reduced to a success flag. Failures are
    /// logged at error level and reported as `false`, never raised.
    ///
    /// An unreachable database does not end the process either: scripts
    /// that need to stop on a failed setup statement must check the
    /// returned flag themselves.
    #[must_use]
    pub fn execute_status(&self, statement: &str, params: &[SqlParam]) -> bool {
        match self.execute(statement, params) {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "statement execution failed");
                false
            }
        }
    }
}
