// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Procedural macros for fastsql.
//!
//! Use the `fastsql` crate, which re-exports the derive together with the
//! runtime it expands to.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive field metadata for the generic DAO.
///
/// Implements `fastsql_core::Entity` for a struct with named fields. Every
/// field except those marked `#[field(skip)]` is persisted; its name is the
/// lower camel case form of the Rust field name (`order_id` becomes
/// `orderId`) and its column the underscore form (`order_id`).
///
/// # Entity Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `table` | No | naming strategy of the DAO | Database table name |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Primary key. Without it, a field named `id` is the key. |
/// | `#[field(skip)]` | Not persisted. The field keeps its `Default` value when rows are mapped. |
///
/// The key type becomes `Entity::Id` with any `Option` removed, so an
/// `Option<i64>` key is looked up with an `i64`.
///
/// # Example
///
/// ```rust,ignore
/// use fastsql::Entity;
///
/// #[derive(Debug, Default, Entity)]
/// #[entity(table = "orders")]
/// pub struct Order {
///     #[id]
///     pub order_id: Option<i64>,
///     pub customer_email: Option<String>,
///     pub total: Option<f64>,
///     #[field(skip)]
///     pub cached_label: String
/// }
/// ```
///
/// # Errors
///
/// Compilation fails for enums, unions, tuple and unit structs, structs with
/// no key, several `#[id]` fields, or a skipped key.
#[proc_macro_derive(Entity, attributes(entity, id, field))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
