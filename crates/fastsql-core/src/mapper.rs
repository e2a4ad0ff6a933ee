// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row materialization.

use crate::{
    descriptor::EntityDescriptor,
    entity::Entity,
    params::Row,
    value::ValueError
};

/// Turns one result row into an entity.
pub trait RowMapper<E>: Send + Sync {
    /// Map a row.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when a column value does not fit its field.
    fn map_row(&self, descriptor: &EntityDescriptor<E>, row: Row) -> Result<E, ValueError>;
}

/// Default mapper: starts from `E::default()` and writes each column into
/// the field it names.
///
/// A column matches a field by column name (ignoring case) or by its lower
/// camel case form. Columns without a field, such as Oracle's `RN`, are
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRowMapper;

impl<E: Entity + Default> RowMapper<E> for FieldRowMapper {
    fn map_row(&self, descriptor: &EntityDescriptor<E>, row: Row) -> Result<E, ValueError> {
        let mut entity = E::default();
        for (column, value) in row {
            if let Some(field) = descriptor.field_by_column(&column) {
                field.set_value(&mut entity, value)?;
            }
        }
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::{Order, order},
        naming::NamingStrategy,
        value::Value
    };

    fn descriptor() -> EntityDescriptor<Order> {
        EntityDescriptor::resolve(&NamingStrategy::default()).unwrap()
    }

    #[test]
    fn maps_matching_columns() {
        let row = Row::new()
            .with("ORDER_ID", 7_i64)
            .with("customer_email", "a@b.c")
            .with("total", 12.5)
            .with("RN", 1_i64);
        let mapped = FieldRowMapper.map_row(&descriptor(), row).unwrap();
        assert_eq!(mapped, order(Some(7), Some("a@b.c"), Some(12.5)));
    }

    #[test]
    fn accepts_camel_case_labels() {
        let row = Row::new().with("orderId", 3_i64).with("customerEmail", "x@y.z");
        let mapped = FieldRowMapper.map_row(&descriptor(), row).unwrap();
        assert_eq!(mapped.order_id, Some(3));
        assert_eq!(mapped.customer_email.as_deref(), Some("x@y.z"));
    }

    #[test]
    fn null_columns_stay_none() {
        let row = Row::new().with("order_id", 1_i64).with("note", Value::Null);
        let mapped = FieldRowMapper.map_row(&descriptor(), row).unwrap();
        assert_eq!(mapped.note, None);
    }

    #[test]
    fn type_mismatch_is_reported() {
        let row = Row::new().with("order_id", "not a number");
        assert!(matches!(
            FieldRowMapper.map_row(&descriptor(), row),
            Err(ValueError::TypeMismatch { .. })
        ));
    }
}
