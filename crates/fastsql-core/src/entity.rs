// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The [`Entity`] trait: field metadata a DAO needs to build statements.
//!
//! Usually derived:
//!
//! ```rust,ignore
//! #[derive(Debug, Default, Entity)]
//! #[entity(table = "orders")]
//! pub struct Order {
//!     #[id]
//!     pub order_id: Option<i64>,
//!     pub customer_email: Option<String>,
//!     pub total: Option<f64>
//! }
//! ```
//!
//! A manual implementation lists one [`FieldSpec`] per persisted field:
//!
//! ```rust
//! use fastsql_core::{Entity, FieldSpec, FromValue, ToValue};
//!
//! #[derive(Debug, Default)]
//! struct Tag {
//!     id:   Option<i64>,
//!     name: Option<String>
//! }
//!
//! impl Entity for Tag {
//!     type Id = i64;
//!     const ENTITY_NAME: &'static str = "Tag";
//!
//!     fn field_specs() -> Vec<FieldSpec<Self>> {
//!         vec![
//!             FieldSpec::<Self>::new(
//!                 "id",
//!                 true,
//!                 |t| t.id.to_value(),
//!                 |t, v| {
//!                     t.id = FromValue::from_value(v)?;
//!                     Ok(())
//!                 }
//!             ),
//!             FieldSpec::<Self>::new(
//!                 "name",
//!                 false,
//!                 |t| t.name.to_value(),
//!                 |t, v| {
//!                     t.name = FromValue::from_value(v)?;
//!                     Ok(())
//!                 }
//!             ),
//!         ]
//!     }
//! }
//!
//! assert_eq!(Tag::field_specs().len(), 2);
//! ```

use std::fmt;

use crate::value::{ToValue, Value, ValueError};

/// Reads a field as a [`Value`].
pub type Getter<E> = fn(&E) -> Value;

/// Writes a [`Value`] into a field.
pub type Setter<E> = fn(&mut E, Value) -> Result<(), ValueError>;

/// A typed record persisted in one table.
pub trait Entity: Sized + Send + Sync + fmt::Debug + 'static {
    /// Primary key type, without the `Option` wrapper.
    type Id: ToValue + fmt::Debug + Send + Sync;

    /// Type name, used for error messages and derived table names.
    const ENTITY_NAME: &'static str;

    /// Explicit table name. `None` lets the DAO's naming strategy decide.
    const TABLE_NAME: Option<&'static str> = None;

    /// Persisted fields in declaration order.
    fn field_specs() -> Vec<FieldSpec<Self>>;
}

/// One declared field of an [`Entity`].
pub struct FieldSpec<E> {
    /// Field name as written in the struct.
    pub name:        &'static str,
    /// Explicit column name. `None` derives it from [`name`](Self::name).
    pub column:      Option<&'static str>,
    /// Marked as primary key.
    pub primary_key: bool,
    /// Accessor.
    pub get:         Getter<E>,
    /// Mutator.
    pub set:         Setter<E>
}

impl<E> FieldSpec<E> {
    /// Create a field spec.
    pub const fn new(name: &'static str, primary_key: bool, get: Getter<E>, set: Setter<E>) -> Self {
        Self {
            name,
            column: None,
            primary_key,
            get,
            set
        }
    }

    /// Map the field to an explicit column instead of the underscore form of
    /// its name.
    #[must_use]
    pub const fn with_column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }
}

impl<E> Clone for FieldSpec<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FieldSpec<E> {}

impl<E> fmt::Debug for FieldSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("primary_key", &self.primary_key)
            .finish_non_exhaustive()
    }
}
