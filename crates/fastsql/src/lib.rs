// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # fastsql
//!
//! One crate, all features. Re-exports:
//! - [`Entity`] derive macro from `fastsql-derive-impl`
//! - All types from `fastsql-core` ([`BaseDao`], [`DaoConfig`],
//!   [`PageResult`], [`SqlExecutor`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fastsql::prelude::*;
//!
//! #[derive(Entity, Debug, Default)]
//! #[entity(table = "orders")]
//! pub struct Order {
//!     #[id]
//!     pub order_id: Option<i64>,
//!     pub customer_email: Option<String>,
//!     pub total: Option<f64>
//! }
//!
//! let dao = BaseDao::<Order, _>::new(executor, DaoConfig::new(Dialect::MySql))?;
//! dao.insert_selective(&order).await?;
//!
//! // SELECT * FROM orders WHERE total > ? LIMIT 20,10
//! let page = dao.select_page_where("total > ?", 3, 10, params![100.0]).await?;
//! ```

pub use fastsql_core::*;
pub use fastsql_derive_impl::Entity;

/// Convenient re-exports, including the derive macro.
pub mod prelude {
    pub use fastsql_core::prelude::*;
    pub use fastsql_derive_impl::Entity;
}
