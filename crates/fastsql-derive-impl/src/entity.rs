// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/        → Attribute parsing (EntityDef, FieldDef)
//! └── metadata.rs   → impl fastsql_core::Entity
//! ```
//!
//! # Generated Code
//!
//! For an entity like:
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(table = "orders")]
//! pub struct Order {
//!     #[id]
//!     pub order_id: Option<i64>,
//!     pub total: Option<f64>,
//! }
//! ```
//!
//! The macro generates:
//!
//! ```rust,ignore
//! impl ::fastsql_core::Entity for Order {
//!     type Id = i64;
//!     const ENTITY_NAME: &'static str = "Order";
//!     const TABLE_NAME: Option<&'static str> = Some("orders");
//!
//!     fn field_specs() -> Vec<::fastsql_core::FieldSpec<Self>> {
//!         vec![
//!             FieldSpec::new("orderId", true, |e| e.order_id.to_value(), |e, v| ...)
//!                 .with_column("order_id"),
//!             FieldSpec::new("total", false, |e| e.total.to_value(), |e, v| ...)
//!                 .with_column("total"),
//!         ]
//!     }
//! }
//! ```

mod metadata;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => metadata::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
