// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The statement execution seam.
//!
//! A DAO never talks to a driver directly. It hands finished SQL and
//! [`Params`] to a [`SqlExecutor`] and awaits one call at a time. Executors own
//! connections, transactions and placeholder rewriting (see
//! [`placeholder`](crate::placeholder)).
//!
//! # Implementing
//!
//! ```rust,ignore
//! use fastsql_core::{Params, Row, SqlExecutor, async_trait};
//!
//! struct MyExecutor { /* pool */ }
//!
//! #[async_trait]
//! impl SqlExecutor for MyExecutor {
//!     type Error = MyError;
//!
//!     async fn execute(&self, sql: &str, params: &Params) -> Result<u64, MyError> { ... }
//!     async fn query(&self, sql: &str, params: &Params) -> Result<Vec<Row>, MyError> { ... }
//!     async fn query_scalar(&self, sql: &str, params: &Params) -> Result<i64, MyError> { ... }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::params::{Params, Row};

/// Runs SQL statements for a DAO.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Error reported by the store.
    ///
    /// DAO operations return it unchanged inside
    /// [`DaoError::Store`](crate::DaoError::Store).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run a mutation and return the number of affected rows.
    async fn execute(&self, sql: &str, params: &Params) -> Result<u64, Self::Error>;

    /// Run one mutation per parameter set.
    ///
    /// Returns one affected-row count per set, in order. The default runs
    /// the sets sequentially through [`execute`](Self::execute) and stops at
    /// the first failure; executors with native batching should override it.
    async fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>, Self::Error> {
        let mut counts = Vec::with_capacity(batch.len());
        for params in batch {
            counts.push(self.execute(sql, params).await?);
        }
        Ok(counts)
    }

    /// Run a query and return all rows.
    async fn query(&self, sql: &str, params: &Params) -> Result<Vec<Row>, Self::Error>;

    /// Run a query returning a single integer, such as `COUNT(*)`.
    async fn query_scalar(&self, sql: &str, params: &Params) -> Result<i64, Self::Error>;
}

#[async_trait]
impl<T: SqlExecutor + ?Sized> SqlExecutor for Arc<T> {
    type Error = T::Error;

    async fn execute(&self, sql: &str, params: &Params) -> Result<u64, Self::Error> {
        (**self).execute(sql, params).await
    }

    async fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>, Self::Error> {
        (**self).execute_batch(sql, batch).await
    }

    async fn query(&self, sql: &str, params: &Params) -> Result<Vec<Row>, Self::Error> {
        (**self).query(sql, params).await
    }

    async fn query_scalar(&self, sql: &str, params: &Params) -> Result<i64, Self::Error> {
        (**self).query_scalar(sql, params).await
    }
}
