// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fastsql_core::prelude::*;
//! ```

pub use crate::{
    BaseDao, ConfigError, DaoConfig, DaoError, DaoHooks, Dialect, Entity, HookFlags,
    NamingStrategy, PageResult, Params, Row, RowMapper, SqlExecutor, ValidationError, Value,
    async_trait, params
};
