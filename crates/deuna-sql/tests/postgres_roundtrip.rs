#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Runs against a live server named by `PG_HOST`.
//!
//! `PG_HOST=postgres://… cargo test -p deuna-sql -- --ignored`

use deuna_sql::{SqlConfig, SqlExecutor, SqlParam};
use serde_json::json;

fn executor() -> SqlExecutor {
    SqlExecutor::new(SqlConfig::from_env().unwrap())
}

#[test]
#[ignore = "needs a PostgreSQL server in PG_HOST"]
fn seed_and_cleanup_cycle() {
    let sql = executor();
    assert!(sql.execute_status(
        "CREATE TABLE IF NOT EXISTS deuna_sql_roundtrip (id INT4 PRIMARY KEY, phone TEXT, score FLOAT8, active BOOL)",
        &[],
    ));
    sql.execute("DELETE FROM deuna_sql_roundtrip", &[]).unwrap();

    let params: Vec<SqlParam> = [json!(1), json!("0991234567"), json!(2.5), json!(true)]
        .into_iter()
        .map(SqlParam::from)
        .collect();
    let inserted = sql
        .execute(
            "INSERT INTO deuna_sql_roundtrip (id, phone, score, active) VALUES ($1, $2, $3, $4)",
            &params,
        )
        .unwrap();
    assert_eq!(inserted, 1);

    let deleted = sql
        .execute(
            "DELETE FROM deuna_sql_roundtrip WHERE phone = $1",
            &[SqlParam::from("0991234567")],
        )
        .unwrap();
    assert_eq!(deleted, 1);

    assert!(sql.execute_status("DROP TABLE deuna_sql_roundtrip", &[]));
}

#[test]
#[ignore = "needs a PostgreSQL server in PG_HOST"]
fn rejected_statement_reports_false() {
    assert!(!executor().execute_status("SELEC nonsense", &[]));
}
