// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core runtime for fastsql.
//!
//! This crate holds everything `#[derive(Entity)]` generated code relies on,
//! plus the generic DAO built on top of it. It can be used standalone with
//! manual [`Entity`] implementations.
//!
//! # Overview
//!
//! - [`Entity`] - Field metadata of a persisted type
//! - [`EntityDescriptor`] - Resolved, cached table and column mapping
//! - [`BaseDao`] - CRUD, count and pagination for any entity
//! - [`SqlExecutor`] - The seam to the database driver
//! - [`Dialect`] - MySQL, PostgreSQL or Oracle pagination
//! - [`DaoHooks`] - Callbacks around single-entity mutations
//! - [`prelude`] - Convenient re-exports
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  resolve once   ┌───────────────────┐
//! │ Entity impl  │ ───────────────►│ EntityDescriptor  │ (Arc, immutable)
//! └──────────────┘                 └─────────┬─────────┘
//!                                            │
//! ┌──────────────┐  statement + page builders│
//! │   BaseDao    │ ◄─────────────────────────┘
//! └──────┬───────┘
//!        │ sql + Params
//!        ▼
//! ┌──────────────┐
//! │ SqlExecutor  │  PgExecutor (feature `postgres`) or your own
//! └──────────────┘
//! ```
//!
//! # Features
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `postgres` | [`postgres::PgExecutor`] over `sqlx::PgPool` |
//! | `uuid` | `Value::Uuid` and `uuid::Uuid` fields |
//! | `chrono` | `Value::Timestamp` and `DateTime<Utc>` fields |
//! | `serde` | Deserializable [`DaoConfig`], serializable [`PageResult`] |
//! | `testing` | [`testing::RecordingExecutor`] |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod dao;
pub mod descriptor;
pub mod dialect;
pub mod entity;
pub mod error;
pub mod executor;
pub mod hooks;
pub mod mapper;
pub mod naming;
pub mod page;
pub mod params;
pub mod placeholder;
pub mod prelude;
pub mod statement;
pub mod value;

#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub mod postgres;

#[cfg(any(test, feature = "testing"))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;

#[cfg(test)]
mod fixtures;

/// Re-export async_trait for executor and hook implementations.
pub use async_trait::async_trait;
pub use config::DaoConfig;
pub use dao::{BaseDao, DaoResult};
pub use descriptor::{EntityDescriptor, FieldDescriptor};
pub use dialect::Dialect;
pub use entity::{Entity, FieldSpec};
pub use error::{ConfigError, DaoError, ValidationError};
pub use executor::SqlExecutor;
pub use hooks::{DaoHooks, DefaultHooks, HookFlags};
pub use mapper::{FieldRowMapper, RowMapper};
pub use naming::NamingStrategy;
pub use page::{PageRequest, PageResult};
pub use params::{Params, Row};
pub use value::{FromValue, ToValue, Value, ValueError};
