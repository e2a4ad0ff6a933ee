// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL executor backed by `sqlx::PgPool`.
//!
//! Enabled by the `postgres` feature. The sqlx runtime (`runtime-tokio`,
//! `runtime-async-std`, ...) is left for the application to choose.
//!
//! ```rust,ignore
//! use fastsql::{BaseDao, DaoConfig, postgres::PgExecutor};
//! use sqlx::PgPool;
//!
//! let pool = PgPool::connect(&database_url).await?;
//! let dao = BaseDao::<Order, _>::new(PgExecutor::new(pool), DaoConfig::default())?;
//! ```
//!
//! # Column decoding
//!
//! | PostgreSQL type | [`Value`] |
//! |-----------------|-----------|
//! | `BOOL` | `Bool` |
//! | `INT2`, `INT4`, `INT8` | `Int` |
//! | `FLOAT4`, `FLOAT8` | `Float` |
//! | `TEXT`, `VARCHAR`, `BPCHAR`, `NAME`, `CHAR` | `Text` |
//! | `BYTEA` | `Bytes` |
//! | `UUID` | `Uuid` (feature `uuid`) |
//! | `TIMESTAMPTZ`, `TIMESTAMP` | `Timestamp` (feature `chrono`) |
//!
//! Any other column type fails with `sqlx::Error::ColumnDecode`; cast it in
//! the query (`total::float8`).

use async_trait::async_trait;
use sqlx::{
    Column, PgPool, Postgres, Row as _, TypeInfo, ValueRef,
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgArguments, PgRow, PgTypeInfo, types::Oid},
    query::Query
};

use crate::{
    error::ValidationError,
    executor::SqlExecutor,
    params::{Params, Row},
    placeholder::{BoundSql, PlaceholderStyle, rewrite},
    value::Value
};

/// Error reported by [`PgExecutor`].
#[derive(Debug, thiserror::Error)]
pub enum PgExecutorError {
    /// Database or driver failure.
    #[error(transparent)]
    Sql(#[from] sqlx::Error),

    /// Statement parameters did not match its placeholders.
    #[error(transparent)]
    Placeholder(#[from] ValidationError)
}

/// [`SqlExecutor`] over a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool
}

impl PgExecutor {
    /// Create an executor using `pool`.
    pub const fn new(pool: PgPool) -> Self {
        Self {
            pool
        }
    }

    /// Get reference to the underlying pool.
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    type Error = PgExecutorError;

    async fn execute(&self, sql: &str, params: &Params) -> Result<u64, Self::Error> {
        let BoundSql {
            sql,
            values
        } = rewrite(sql, params, PlaceholderStyle::Numbered)?;
        let result = bind_all(sqlx::query(&sql), values)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Runs every parameter set inside one transaction.
    async fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>, Self::Error> {
        let mut tx = self.pool.begin().await?;
        let mut counts = Vec::with_capacity(batch.len());
        for params in batch {
            let BoundSql {
                sql,
                values
            } = rewrite(sql, params, PlaceholderStyle::Numbered)?;
            let result = bind_all(sqlx::query(&sql), values)
                .execute(&mut *tx)
                .await?;
            counts.push(result.rows_affected());
        }
        tx.commit().await?;
        Ok(counts)
    }

    async fn query(&self, sql: &str, params: &Params) -> Result<Vec<Row>, Self::Error> {
        let BoundSql {
            sql,
            values
        } = rewrite(sql, params, PlaceholderStyle::Numbered)?;
        let rows = bind_all(sqlx::query(&sql), values)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?)
    }

    async fn query_scalar(&self, sql: &str, params: &Params) -> Result<i64, Self::Error> {
        let BoundSql {
            sql,
            values
        } = rewrite(sql, params, PlaceholderStyle::Numbered)?;
        let row = bind_all(sqlx::query(&sql), values)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>(0)?)
    }
}

/// `NULL` sent without a parameter type so the server infers it from
/// context.
struct UntypedNull;

impl sqlx::Type<Postgres> for UntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

impl sqlx::Encode<'_, Postgres> for UntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    values: Vec<Value>
) -> Query<'q, Postgres, PgArguments> {
    for value in values {
        query = match value {
            Value::Null => query.bind(UntypedNull),
            Value::Bool(v) => query.bind(v),
            Value::Int(v) => query.bind(v),
            Value::Float(v) => query.bind(v),
            Value::Text(v) => query.bind(v),
            Value::Bytes(v) => query.bind(v),
            #[cfg(feature = "uuid")]
            Value::Uuid(v) => query.bind(v),
            #[cfg(feature = "chrono")]
            Value::Timestamp(v) => query.bind(v)
        };
    }
    query
}

fn decode_row(row: &PgRow) -> Result<Row, sqlx::Error> {
    let mut out = Row::with_capacity(row.len());
    for (index, column) in row.columns().iter().enumerate() {
        let value = if row.try_get_raw(index)?.is_null() {
            Value::Null
        } else {
            decode_value(row, index, column.type_info().name())?
        };
        out.push(column.name(), value);
    }
    Ok(out)
}

fn decode_value(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "BOOL" => Value::Bool(row.try_get(index)?),
        "INT2" => Value::Int(i64::from(row.try_get::<i16, _>(index)?)),
        "INT4" => Value::Int(i64::from(row.try_get::<i32, _>(index)?)),
        "INT8" => Value::Int(row.try_get(index)?),
        "FLOAT4" => Value::Float(f64::from(row.try_get::<f32, _>(index)?)),
        "FLOAT8" => Value::Float(row.try_get(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CHAR" => Value::Text(row.try_get(index)?),
        "BYTEA" => Value::Bytes(row.try_get(index)?),
        #[cfg(feature = "uuid")]
        "UUID" => Value::Uuid(row.try_get(index)?),
        #[cfg(feature = "chrono")]
        "TIMESTAMPTZ" => Value::Timestamp(row.try_get(index)?),
        #[cfg(feature = "chrono")]
        "TIMESTAMP" => Value::Timestamp(row.try_get::<chrono::NaiveDateTime, _>(index)?.and_utc()),
        other => {
            return Err(sqlx::Error::ColumnDecode {
                index:  index.to_string(),
                source: format!("unsupported column type {other}").into()
            });
        }
    };
    Ok(value)
}
