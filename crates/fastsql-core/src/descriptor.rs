// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved entity metadata.
//!
//! [`EntityDescriptor::resolve`] turns the [`FieldSpec`]s declared by an
//! [`Entity`] into the table name, column names and key information every
//! statement is built from. A DAO resolves its descriptor once at
//! construction and shares it behind an `Arc`.
//!
//! # Layout
//!
//! ```text
//! fields:             [ key | f1 | f2 | ... ]
//!                       ^     ^^^^^^^^^^^^^
//!               primary_key   fields_without_key
//! ```
//!
//! Non-key fields keep their declaration order.

use std::fmt;

use crate::{
    entity::{Entity, FieldSpec, Getter, Setter},
    error::ConfigError,
    naming::{NamingStrategy, camel_to_underline, underline_to_camel_first_lower},
    value::{Value, ValueError}
};

/// Field name that marks the primary key when no field carries `#[id]`.
const CONVENTIONAL_KEY: &str = "id";

/// Metadata of one persisted field.
pub struct FieldDescriptor<E> {
    name:        &'static str,
    column:      String,
    primary_key: bool,
    get:         Getter<E>,
    set:         Setter<E>
}

impl<E> FieldDescriptor<E> {
    /// Field name as written in the struct.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Check if this is the primary key.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Read the field from an entity.
    pub fn value(&self, entity: &E) -> Value {
        (self.get)(entity)
    }

    /// Write a value into the field of an entity.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when the value does not fit the field type.
    pub fn set_value(&self, entity: &mut E, value: Value) -> Result<(), ValueError> {
        (self.set)(entity, value)
    }
}

impl<E> fmt::Debug for FieldDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("primary_key", &self.primary_key)
            .finish_non_exhaustive()
    }
}

/// Resolved, immutable metadata of an entity type.
pub struct EntityDescriptor<E> {
    entity_name: &'static str,
    table_name:  String,
    fields:      Vec<FieldDescriptor<E>>
}

impl<E: Entity> EntityDescriptor<E> {
    /// Resolve the descriptor of `E`.
    ///
    /// The table name is `E::TABLE_NAME` when set, otherwise derived from
    /// `E::ENTITY_NAME` by `naming`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `E` declares no fields, no or several
    /// primary keys, or two fields with the same name or column.
    pub fn resolve(naming: &NamingStrategy) -> Result<Self, ConfigError> {
        let table_name = E::TABLE_NAME.map_or_else(
            || naming.table_name(E::ENTITY_NAME),
            ToOwned::to_owned
        );
        let descriptor = Self::from_specs(E::ENTITY_NAME, table_name, E::field_specs())?;
        tracing::debug!(
            entity = descriptor.entity_name,
            table = %descriptor.table_name,
            key = descriptor.primary_key().name,
            fields = descriptor.fields.len(),
            "resolved entity descriptor"
        );
        Ok(descriptor)
    }
}

impl<E> EntityDescriptor<E> {
    fn from_specs(
        entity_name: &'static str,
        table_name: String,
        specs: Vec<FieldSpec<E>>
    ) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::NoFields {
                entity: entity_name
            });
        }

        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|s| s.name == spec.name) {
                return Err(ConfigError::DuplicateField {
                    entity: entity_name,
                    field:  spec.name
                });
            }
        }

        let marked: Vec<usize> = specs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.primary_key)
            .map(|(i, _)| i)
            .collect();
        let key_index = match marked.as_slice() {
            [index] => *index,
            [] => specs
                .iter()
                .position(|s| s.name == CONVENTIONAL_KEY)
                .ok_or(ConfigError::MissingPrimaryKey {
                    entity: entity_name
                })?,
            _ => {
                return Err(ConfigError::MultiplePrimaryKeys {
                    entity: entity_name,
                    fields: marked.iter().map(|&i| specs[i].name).collect()
                });
            }
        };

        let mut fields = Vec::with_capacity(specs.len());
        fields.push(Self::from_spec(specs[key_index], true));
        fields.extend(
            specs
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != key_index)
                .map(|(_, s)| Self::from_spec(*s, false))
        );

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.column == field.column) {
                return Err(ConfigError::DuplicateColumn {
                    entity: entity_name,
                    column: field.column.clone()
                });
            }
        }

        Ok(Self {
            entity_name,
            table_name,
            fields
        })
    }

    fn from_spec(spec: FieldSpec<E>, primary_key: bool) -> FieldDescriptor<E> {
        FieldDescriptor {
            name: spec.name,
            column: spec
                .column
                .map_or_else(|| camel_to_underline(spec.name), ToOwned::to_owned),
            primary_key,
            get: spec.get,
            set: spec.set
        }
    }

    /// Entity type name.
    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    /// Table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// All fields, key first.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<E>] {
        &self.fields
    }

    /// The primary key field.
    #[must_use]
    pub fn primary_key(&self) -> &FieldDescriptor<E> {
        &self.fields[0]
    }

    /// All fields except the key, in declaration order.
    #[must_use]
    pub fn fields_without_key(&self) -> &[FieldDescriptor<E>] {
        &self.fields[1..]
    }

    /// Find a field by its name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<E>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find the field for a column label.
    ///
    /// Matches the column name ignoring ASCII case, or the field name the
    /// label translates to (`order_id` and `orderId` both find `orderId`).
    #[must_use]
    pub fn field_by_column(&self, column: &str) -> Option<&FieldDescriptor<E>> {
        self.fields
            .iter()
            .find(|f| f.column.eq_ignore_ascii_case(column))
            .or_else(|| {
                let camel = underline_to_camel_first_lower(column);
                self.fields.iter().find(|f| f.name == camel)
            })
    }

    /// Primary key value of an entity.
    pub fn key_value(&self, entity: &E) -> Value {
        self.primary_key().value(entity)
    }
}

impl<E> fmt::Debug for EntityDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("entity_name", &self.entity_name)
            .field("table_name", &self.table_name)
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Order, Tag};

    fn spec(name: &'static str, primary_key: bool) -> FieldSpec<Tag> {
        FieldSpec::<Tag>::new(name, primary_key, |_| Value::Null, |_, _| Ok(()))
    }

    #[test]
    fn key_comes_first() {
        let descriptor = EntityDescriptor::<Order>::resolve(&NamingStrategy::default()).unwrap();
        assert_eq!(descriptor.table_name(), "orders");
        assert_eq!(descriptor.primary_key().name(), "orderId");
        assert_eq!(descriptor.primary_key().column(), "order_id");
        assert!(descriptor.fields()[0].is_primary_key());

        let rest: Vec<&str> = descriptor.fields_without_key().iter().map(|f| f.column()).collect();
        assert_eq!(rest, ["customer_email", "total", "note"]);
        assert!(descriptor.fields_without_key().iter().all(|f| !f.is_primary_key()));
    }

    #[test]
    fn key_found_by_convention() {
        let descriptor = EntityDescriptor::<Tag>::resolve(&NamingStrategy::default()).unwrap();
        assert_eq!(descriptor.primary_key().name(), "id");
        assert_eq!(descriptor.fields().len(), 2);
    }

    #[test]
    fn table_name_from_naming_strategy() {
        let descriptor = EntityDescriptor::<Tag>::resolve(&NamingStrategy::PluralSnakeCase).unwrap();
        assert_eq!(descriptor.table_name(), "tags");
        let descriptor =
            EntityDescriptor::<Tag>::resolve(&NamingStrategy::Prefixed("t_".into())).unwrap();
        assert_eq!(descriptor.table_name(), "t_tag");
    }

    #[test]
    fn explicit_table_ignores_strategy() {
        let descriptor = EntityDescriptor::<Order>::resolve(&NamingStrategy::PluralSnakeCase).unwrap();
        assert_eq!(descriptor.table_name(), "orders");
    }

    #[test]
    fn key_declared_last_moves_to_front() {
        let descriptor = EntityDescriptor::from_specs(
            "Tag",
            "tag".into(),
            vec![spec("label", false), spec("createdAt", false), spec("tagId", true)]
        )
        .unwrap();
        let names: Vec<&str> = descriptor.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["tagId", "label", "createdAt"]);
    }

    #[test]
    fn rejects_missing_key() {
        let err = EntityDescriptor::from_specs("Tag", "tag".into(), vec![spec("label", false)])
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingPrimaryKey { entity: "Tag" });
    }

    #[test]
    fn rejects_several_keys() {
        let err = EntityDescriptor::from_specs(
            "Tag",
            "tag".into(),
            vec![spec("a", true), spec("b", false), spec("c", true)]
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MultiplePrimaryKeys {
                entity: "Tag",
                fields: vec!["a", "c"]
            }
        );
    }

    #[test]
    fn rejects_empty_entity() {
        let err = EntityDescriptor::<Tag>::from_specs("Tag", "tag".into(), Vec::new()).unwrap_err();
        assert_eq!(err, ConfigError::NoFields { entity: "Tag" });
    }

    #[test]
    fn rejects_duplicates() {
        let err = EntityDescriptor::from_specs(
            "Tag",
            "tag".into(),
            vec![spec("id", false), spec("label", false), spec("label", false)]
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateField {
                entity: "Tag",
                field:  "label"
            }
        );

        let err = EntityDescriptor::from_specs(
            "Tag",
            "tag".into(),
            vec![spec("id", false), spec("tagName", false), spec("tag_name", false)]
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateColumn {
                entity: "Tag",
                column: "tag_name".into()
            }
        );
    }

    #[test]
    fn explicit_column_is_kept() {
        let descriptor = EntityDescriptor::from_specs(
            "Tag",
            "tag".into(),
            vec![
                spec("id", false),
                spec("addressLine2", false).with_column("address_line_2")
            ]
        )
        .unwrap();
        let line = descriptor.field("addressLine2").unwrap();
        assert_eq!(line.column(), "address_line_2");
        assert_eq!(
            descriptor.field_by_column("ADDRESS_LINE_2").map(|f| f.name()),
            Some("addressLine2")
        );
    }

    #[test]
    fn field_lookup_by_column() {
        let descriptor = EntityDescriptor::<Order>::resolve(&NamingStrategy::default()).unwrap();
        assert_eq!(
            descriptor.field_by_column("customer_email").map(|f| f.name()),
            Some("customerEmail")
        );
        assert_eq!(
            descriptor.field_by_column("CUSTOMER_EMAIL").map(|f| f.name()),
            Some("customerEmail")
        );
        assert_eq!(
            descriptor.field_by_column("customerEmail").map(|f| f.name()),
            Some("customerEmail")
        );
        assert!(descriptor.field_by_column("missing").is_none());
        assert!(descriptor.field("total").is_some());
    }

    #[test]
    fn key_value_reads_entity() {
        let descriptor = EntityDescriptor::<Order>::resolve(&NamingStrategy::default()).unwrap();
        let order = Order {
            order_id: Some(42),
            ..Order::default()
        };
        assert_eq!(descriptor.key_value(&order), Value::Int(42));
        assert!(descriptor.key_value(&Order::default()).is_unset());
    }
}
