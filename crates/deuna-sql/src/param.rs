//! Loosely typed statement parameters.
//!
//! Load-test scripts pass plain JSON values. [`SqlParam`] binds them to
//! whatever column type the server inferred for each placeholder:
//!
//! - integers narrow to `int2`/`int4`, widen to floats, and encode as
//!   `numeric` or `json`;
//! - floats encode as `float4`/`float8`, `numeric` or `json`;
//! - text binds to any text-like column and is parsed for `uuid`,
//!   `timestamp`, `timestamptz`, `date`, `json`/`jsonb`, `numeric`, the
//!   integer and float types and `bool`.
//!
//! Anything else, or a value that does not parse or fit, is refused before
//! the statement runs.

use std::error::Error;
use std::str::FromStr;

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use postgres::types::{IsNull, ToSql, Type};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One statement parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

type BindError = Box<dyn Error + Sync + Send>;
type BindResult = Result<IsNull, BindError>;

fn mismatch(kind: &str, ty: &Type) -> BindError {
    format!("cannot bind {kind} parameter to column of type {ty}").into()
}

impl SqlParam {
    /// Short name of the variant, for error messages and log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

fn bind_bool(v: bool, ty: &Type, out: &mut BytesMut) -> BindResult {
    match *ty {
        Type::BOOL => v.to_sql(ty, out),
        Type::JSON | Type::JSONB => serde_json::Value::Bool(v).to_sql(ty, out),
        _ => Err(mismatch("boolean", ty)),
    }
}

#[allow(clippy::cast_precision_loss)]
fn bind_int(v: i64, ty: &Type, out: &mut BytesMut) -> BindResult {
    match *ty {
        Type::INT2 => i16::try_from(v)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v)?.to_sql(ty, out),
        Type::INT8 => v.to_sql(ty, out),
        Type::FLOAT4 => (v as f32).to_sql(ty, out),
        Type::FLOAT8 => (v as f64).to_sql(ty, out),
        Type::NUMERIC => Decimal::from(v).to_sql(ty, out),
        Type::JSON | Type::JSONB => serde_json::Value::from(v).to_sql(ty, out),
        _ => Err(mismatch("integer", ty)),
    }
}

fn bind_float(v: f64, ty: &Type, out: &mut BytesMut) -> BindResult {
    match *ty {
        #[allow(clippy::cast_possible_truncation)]
        Type::FLOAT4 => (v as f32).to_sql(ty, out),
        Type::FLOAT8 => v.to_sql(ty, out),
        Type::NUMERIC => Decimal::from_f64(v)
            .ok_or_else(|| format!("{v} does not fit in a numeric column"))?
            .to_sql(ty, out),
        Type::JSON | Type::JSONB => serde_json::Value::from(v).to_sql(ty, out),
        _ => Err(mismatch("float", ty)),
    }
}

fn bind_text(v: &str, ty: &Type, out: &mut BytesMut) -> BindResult {
    if <&str as ToSql>::accepts(ty) {
        return v.to_sql(ty, out);
    }
    match *ty {
        Type::UUID => Uuid::parse_str(v.trim())?.to_sql(ty, out),
        Type::TIMESTAMPTZ => parse_timestamptz(v.trim())?.to_sql(ty, out),
        Type::TIMESTAMP => parse_timestamp(v.trim())?.to_sql(ty, out),
        Type::DATE => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")?.to_sql(ty, out),
        Type::JSON | Type::JSONB => serde_json::from_str::<serde_json::Value>(v)?.to_sql(ty, out),
        Type::NUMERIC => Decimal::from_str(v.trim())?.to_sql(ty, out),
        Type::INT2 => v.trim().parse::<i16>()?.to_sql(ty, out),
        Type::INT4 => v.trim().parse::<i32>()?.to_sql(ty, out),
        Type::INT8 => v.trim().parse::<i64>()?.to_sql(ty, out),
        Type::FLOAT4 => v.trim().parse::<f32>()?.to_sql(ty, out),
        Type::FLOAT8 => v.trim().parse::<f64>()?.to_sql(ty, out),
        Type::BOOL => v.trim().parse::<bool>()?.to_sql(ty, out),
        _ => Err(mismatch("text", ty)),
    }
}

/// RFC 3339, or `YYYY-MM-DD HH:MM:SS[.fff]` (space or `T`) read as UTC.
fn parse_timestamp(v: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    DateTime::parse_from_rfc3339(v)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(v, "%Y-%m-%dT%H:%M:%S%.f"))
}

fn parse_timestamptz(v: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(v)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| parse_timestamp(v).map(|naive| Utc.from_utc_datetime(&naive)))
}

impl ToSql for SqlParam {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> BindResult {
        match self {
            Self::Null => Ok(IsNull::Yes),
            Self::Bool(v) => bind_bool(*v, ty, out),
            Self::Int(v) => bind_int(*v, ty, out),
            Self::Float(v) => bind_float(*v, ty, out),
            Self::Text(v) => bind_text(v, ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn to_sql_checked(&self, ty: &Type, out: &mut BytesMut) -> BindResult {
        self.to_sql(ty, out)
    }
}

impl From<serde_json::Value> for SqlParam {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::Text(n.to_string())),
            Value::String(s) => Self::Text(s),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Text(other.to_string()),
        }
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl<T: Into<Self>> From<Option<T>> for SqlParam {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
