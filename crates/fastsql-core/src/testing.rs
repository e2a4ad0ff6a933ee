// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory executor for tests.
//!
//! [`RecordingExecutor`] records every statement it receives and answers
//! from scripted queues. Nothing is parsed or stored.
//!
//! | Call | Answer when the queue is empty |
//! |------|--------------------------------|
//! | `execute` | `1` affected row |
//! | `execute_batch` | `1` per parameter set |
//! | `query` | no rows |
//! | `query_scalar` | `0` |

use std::{
    collections::VecDeque,
    io,
    sync::{Mutex, MutexGuard, PoisonError}
};

use async_trait::async_trait;

use crate::{
    executor::SqlExecutor,
    params::{Params, Row}
};

/// Executor method a [`Call`] went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// [`SqlExecutor::execute`].
    Execute,
    /// [`SqlExecutor::execute_batch`].
    ExecuteBatch,
    /// [`SqlExecutor::query`].
    Query,
    /// [`SqlExecutor::query_scalar`].
    QueryScalar
}

/// One recorded executor call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Method used.
    pub kind:   CallKind,
    /// SQL text as received.
    pub sql:    String,
    /// Parameter sets; exactly one except for batches.
    pub params: Vec<Params>
}

#[derive(Debug, Default)]
struct State {
    calls:    Vec<Call>,
    affected: VecDeque<u64>,
    rows:     VecDeque<Vec<Row>>,
    scalars:  VecDeque<i64>,
    failure:  Option<String>
}

/// Executor that records statements and replays scripted results.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    state: Mutex<State>
}

impl RecordingExecutor {
    /// Create an executor with empty queues.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue an affected-row count for the next mutation.
    #[must_use]
    pub fn with_affected(self, affected: u64) -> Self {
        self.state().affected.push_back(affected);
        self
    }

    /// Queue the rows for the next query.
    #[must_use]
    pub fn with_rows(self, rows: Vec<Row>) -> Self {
        self.state().rows.push_back(rows);
        self
    }

    /// Queue the result of the next scalar query.
    #[must_use]
    pub fn with_scalar(self, scalar: i64) -> Self {
        self.state().scalars.push_back(scalar);
        self
    }

    /// Fail every call from now on with `message`.
    #[must_use]
    pub fn failing(self, message: impl Into<String>) -> Self {
        self.state().failure = Some(message.into());
        self
    }

    /// Queue an affected-row count on a shared executor.
    pub fn push_affected(&self, affected: u64) {
        self.state().affected.push_back(affected);
    }

    /// Queue rows on a shared executor.
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.state().rows.push_back(rows);
    }

    /// Queue a scalar result on a shared executor.
    pub fn push_scalar(&self, scalar: i64) {
        self.state().scalars.push_back(scalar);
    }

    /// Every call received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// SQL text of every call received so far.
    #[must_use]
    pub fn statements(&self) -> Vec<String> {
        self.state().calls.iter().map(|c| c.sql.clone()).collect()
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    fn answer<T>(
        &self,
        kind: CallKind,
        sql: &str,
        params: Vec<Params>,
        reply: impl FnOnce(&mut State) -> T
    ) -> Result<T, io::Error> {
        let mut state = self.state();
        state.calls.push(Call {
            kind,
            sql: sql.to_owned(),
            params
        });
        if let Some(message) = &state.failure {
            return Err(io::Error::other(message.clone()));
        }
        Ok(reply(&mut state))
    }
}

#[async_trait]
impl SqlExecutor for RecordingExecutor {
    type Error = io::Error;

    async fn execute(&self, sql: &str, params: &Params) -> Result<u64, io::Error> {
        self.answer(CallKind::Execute, sql, vec![params.clone()], |s| {
            s.affected.pop_front().unwrap_or(1)
        })
    }

    async fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>, io::Error> {
        self.answer(CallKind::ExecuteBatch, sql, batch.to_vec(), |s| {
            batch
                .iter()
                .map(|_| s.affected.pop_front().unwrap_or(1))
                .collect()
        })
    }

    async fn query(&self, sql: &str, params: &Params) -> Result<Vec<Row>, io::Error> {
        self.answer(CallKind::Query, sql, vec![params.clone()], |s| {
            s.rows.pop_front().unwrap_or_default()
        })
    }

    async fn query_scalar(&self, sql: &str, params: &Params) -> Result<i64, io::Error> {
        self.answer(CallKind::QueryScalar, sql, vec![params.clone()], |s| {
            s.scalars.pop_front().unwrap_or(0)
        })
    }
}
