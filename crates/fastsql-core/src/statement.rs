// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL statement builders.
//!
//! Pure functions from an [`EntityDescriptor`] (and an entity or key) to SQL
//! text. Entity values are bound by field name, so a builder never formats a
//! value into the statement.
//!
//! | Builder | Statement |
//! |---------|-----------|
//! | [`insert`] | `INSERT INTO t(c1,c2) VALUES(:f1,:f2)` |
//! | [`insert_selective`] | same, non-null fields only |
//! | [`update`] | `UPDATE t SET c2=:f2 WHERE key=:key` |
//! | [`update_selective`] | same, non-null fields only |
//! | [`update_columns`] | same, listed columns only |
//! | [`delete_by_id`] | `DELETE FROM t WHERE key=:key` |
//! | [`delete_where`] | `DELETE FROM t [WHERE cond]` |
//! | [`select_by_id`] | `SELECT * FROM t WHERE key=:key` |
//! | [`select_where`] | `SELECT * FROM t [WHERE cond]` |
//! | [`count_where`] | `SELECT COUNT(*) FROM t [WHERE cond]` |

use crate::{
    descriptor::{EntityDescriptor, FieldDescriptor},
    error::ValidationError,
    params::Params,
    value::Value
};

/// SQL text with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL text with `:name` placeholders.
    pub sql:    String,
    /// Values for the placeholders.
    pub params: Params
}

/// Insert every field, binding `NULL` for unset ones.
pub fn insert<E>(descriptor: &EntityDescriptor<E>, entity: &E) -> Statement {
    let fields: Vec<&FieldDescriptor<E>> = descriptor.fields().iter().collect();
    insert_fields(descriptor, entity, &fields)
}

/// Insert the non-null fields only.
///
/// The key is part of the statement when it is set.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyFieldSet`] when no non-key field is
/// non-null.
pub fn insert_selective<E>(
    descriptor: &EntityDescriptor<E>,
    entity: &E
) -> Result<Statement, ValidationError> {
    let fields: Vec<&FieldDescriptor<E>> = descriptor
        .fields()
        .iter()
        .filter(|f| !f.value(entity).is_null())
        .collect();
    if !fields.iter().any(|f| !f.is_primary_key()) {
        return Err(ValidationError::EmptyFieldSet {
            entity:    descriptor.entity_name(),
            operation: "insert"
        });
    }
    Ok(insert_fields(descriptor, entity, &fields))
}

fn insert_fields<E>(
    descriptor: &EntityDescriptor<E>,
    entity: &E,
    fields: &[&FieldDescriptor<E>]
) -> Statement {
    let columns: Vec<&str> = fields.iter().map(|f| f.column()).collect();
    let placeholders: Vec<String> = fields.iter().map(|f| format!(":{}", f.name())).collect();
    Statement {
        sql:    format!(
            "INSERT INTO {}({}) VALUES({})",
            descriptor.table_name(),
            columns.join(","),
            placeholders.join(",")
        ),
        params: bind(entity, fields)
    }
}

/// Update every non-key field by primary key.
///
/// # Errors
///
/// Returns [`ValidationError::MissingPrimaryKeyValue`] when the key is unset.
pub fn update<E>(descriptor: &EntityDescriptor<E>, entity: &E) -> Result<Statement, ValidationError> {
    require_key(descriptor, entity)?;
    let fields: Vec<&FieldDescriptor<E>> = descriptor.fields_without_key().iter().collect();
    Ok(update_fields(descriptor, entity, &fields))
}

/// Update the non-null non-key fields by primary key.
///
/// # Errors
///
/// - [`ValidationError::MissingPrimaryKeyValue`] when the key is unset
/// - [`ValidationError::EmptyFieldSet`] when every non-key field is null
pub fn update_selective<E>(
    descriptor: &EntityDescriptor<E>,
    entity: &E
) -> Result<Statement, ValidationError> {
    require_key(descriptor, entity)?;
    let fields: Vec<&FieldDescriptor<E>> = descriptor
        .fields_without_key()
        .iter()
        .filter(|f| !f.value(entity).is_null())
        .collect();
    if fields.is_empty() {
        return Err(ValidationError::EmptyFieldSet {
            entity:    descriptor.entity_name(),
            operation: "update"
        });
    }
    Ok(update_fields(descriptor, entity, &fields))
}

/// Update exactly the listed columns by primary key.
///
/// Columns are matched like result columns: by column name ignoring case, or
/// by field name. A column listed twice is set once.
///
/// # Errors
///
/// - [`ValidationError::EmptyColumnList`] when `columns` is empty
/// - [`ValidationError::MissingPrimaryKeyValue`] when the key is unset
/// - [`ValidationError::UnknownColumn`] for a column the entity lacks
/// - [`ValidationError::PrimaryKeyColumn`] when the key column is listed
pub fn update_columns<E>(
    descriptor: &EntityDescriptor<E>,
    entity: &E,
    columns: &[&str]
) -> Result<Statement, ValidationError> {
    if columns.is_empty() {
        return Err(ValidationError::EmptyColumnList {
            entity: descriptor.entity_name()
        });
    }
    require_key(descriptor, entity)?;

    let mut fields: Vec<&FieldDescriptor<E>> = Vec::with_capacity(columns.len());
    for column in columns {
        let field = descriptor
            .field_by_column(column)
            .ok_or_else(|| ValidationError::UnknownColumn {
                entity: descriptor.entity_name(),
                column: (*column).to_owned()
            })?;
        if field.is_primary_key() {
            return Err(ValidationError::PrimaryKeyColumn {
                entity: descriptor.entity_name(),
                column: (*column).to_owned()
            });
        }
        if !fields.iter().any(|f| f.name() == field.name()) {
            fields.push(field);
        }
    }
    Ok(update_fields(descriptor, entity, &fields))
}

fn update_fields<E>(
    descriptor: &EntityDescriptor<E>,
    entity: &E,
    fields: &[&FieldDescriptor<E>]
) -> Statement {
    let key = descriptor.primary_key();
    let assignments: Vec<String> = fields
        .iter()
        .map(|f| format!("{}=:{}", f.column(), f.name()))
        .collect();

    let mut bound: Vec<&FieldDescriptor<E>> = fields.to_vec();
    bound.push(key);
    Statement {
        sql:    format!(
            "UPDATE {} SET {} WHERE {}=:{}",
            descriptor.table_name(),
            assignments.join(","),
            key.column(),
            key.name()
        ),
        params: bind(entity, &bound)
    }
}

/// Delete one row by primary key.
pub fn delete_by_id<E>(descriptor: &EntityDescriptor<E>, id: Value) -> Statement {
    let key = descriptor.primary_key();
    Statement {
        sql:    format!(
            "DELETE FROM {} WHERE {}=:{}",
            descriptor.table_name(),
            key.column(),
            key.name()
        ),
        params: key_params(descriptor, id)
    }
}

/// Delete the rows matching a condition, or every row.
#[must_use]
pub fn delete_where<E>(descriptor: &EntityDescriptor<E>, condition: Option<&str>) -> String {
    with_condition(format!("DELETE FROM {}", descriptor.table_name()), condition)
}

/// Select one row by primary key.
pub fn select_by_id<E>(descriptor: &EntityDescriptor<E>, id: Value) -> Statement {
    let key = descriptor.primary_key();
    Statement {
        sql:    format!(
            "SELECT * FROM {} WHERE {}=:{}",
            descriptor.table_name(),
            key.column(),
            key.name()
        ),
        params: key_params(descriptor, id)
    }
}

/// Select the rows matching a condition, or every row.
#[must_use]
pub fn select_where<E>(descriptor: &EntityDescriptor<E>, condition: Option<&str>) -> String {
    with_condition(format!("SELECT * FROM {}", descriptor.table_name()), condition)
}

/// Count the rows matching a condition, or every row.
#[must_use]
pub fn count_where<E>(descriptor: &EntityDescriptor<E>, condition: Option<&str>) -> String {
    with_condition(format!("SELECT COUNT(*) FROM {}", descriptor.table_name()), condition)
}

/// Check a caller-supplied `WHERE` fragment.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyCondition`] when `condition` is empty or
/// whitespace.
pub fn require_condition<'a, E>(
    descriptor: &EntityDescriptor<E>,
    condition: &'a str,
    operation: &'static str
) -> Result<&'a str, ValidationError> {
    let condition = condition.trim();
    if condition.is_empty() {
        return Err(ValidationError::EmptyCondition {
            entity: descriptor.entity_name(),
            operation
        });
    }
    Ok(condition)
}

/// Parameters binding a key value under the key field's name.
pub fn key_params<E>(descriptor: &EntityDescriptor<E>, id: Value) -> Params {
    Params::Named(vec![(descriptor.primary_key().name().to_owned(), id)])
}

fn with_condition(mut sql: String, condition: Option<&str>) -> String {
    if let Some(condition) = condition.map(str::trim).filter(|c| !c.is_empty()) {
        sql.push_str(" WHERE ");
        sql.push_str(condition);
    }
    sql
}

fn require_key<E>(descriptor: &EntityDescriptor<E>, entity: &E) -> Result<(), ValidationError> {
    if descriptor.key_value(entity).is_unset() {
        return Err(ValidationError::MissingPrimaryKeyValue {
            entity: descriptor.entity_name(),
            field:  descriptor.primary_key().name()
        });
    }
    Ok(())
}

fn bind<E>(entity: &E, fields: &[&FieldDescriptor<E>]) -> Params {
    Params::Named(
        fields
            .iter()
            .map(|f| (f.name().to_owned(), f.value(entity)))
            .collect()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::{Order, order},
        naming::NamingStrategy
    };

    fn descriptor() -> EntityDescriptor<Order> {
        EntityDescriptor::resolve(&NamingStrategy::default()).unwrap()
    }

    #[test]
    fn insert_binds_every_field() {
        let statement = insert(&descriptor(), &order(None, Some("a@b.c"), None));
        assert_eq!(
            statement.sql,
            "INSERT INTO orders(order_id,customer_email,total,note) \
             VALUES(:orderId,:customerEmail,:total,:note)"
        );
        assert_eq!(statement.params.len(), 4);
        assert_eq!(statement.params.named_value("orderId"), Some(&Value::Null));
        assert_eq!(
            statement.params.named_value("customerEmail"),
            Some(&Value::Text("a@b.c".into()))
        );
    }

    #[test]
    fn insert_selective_skips_nulls() {
        let statement = insert_selective(&descriptor(), &order(None, Some("a@b.c"), Some(3.0))).unwrap();
        assert_eq!(
            statement.sql,
            "INSERT INTO orders(customer_email,total) VALUES(:customerEmail,:total)"
        );
    }

    #[test]
    fn insert_selective_keeps_set_key() {
        let statement = insert_selective(&descriptor(), &order(Some(9), None, Some(3.0))).unwrap();
        assert_eq!(statement.sql, "INSERT INTO orders(order_id,total) VALUES(:orderId,:total)");
        assert_eq!(statement.params.named_value("orderId"), Some(&Value::Int(9)));
    }

    #[test]
    fn insert_selective_needs_a_non_key_value() {
        let err = insert_selective(&descriptor(), &order(Some(1), None, None)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyFieldSet {
                entity:    "Order",
                operation: "insert"
            }
        );
        assert!(insert_selective(&descriptor(), &Order::default()).is_err());
    }

    #[test]
    fn update_sets_non_key_fields() {
        let statement = update(&descriptor(), &order(Some(5), Some("a@b.c"), None)).unwrap();
        assert_eq!(
            statement.sql,
            "UPDATE orders SET customer_email=:customerEmail,total=:total,note=:note \
             WHERE order_id=:orderId"
        );
        assert_eq!(statement.params.named_value("total"), Some(&Value::Null));
        assert_eq!(statement.params.named_value("orderId"), Some(&Value::Int(5)));
    }

    #[test]
    fn update_requires_key() {
        let err = update(&descriptor(), &order(None, Some("a@b.c"), None)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingPrimaryKeyValue {
                entity: "Order",
                field:  "orderId"
            }
        );
        assert!(update_selective(&descriptor(), &order(None, Some("x"), None)).is_err());
        assert!(update_columns(&descriptor(), &order(None, Some("x"), None), &["total"]).is_err());
    }

    #[test]
    fn update_selective_skips_nulls() {
        let statement = update_selective(&descriptor(), &order(Some(5), None, Some(2.5))).unwrap();
        assert_eq!(statement.sql, "UPDATE orders SET total=:total WHERE order_id=:orderId");
        assert_eq!(statement.params.len(), 2);

        let err = update_selective(&descriptor(), &order(Some(5), None, None)).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyFieldSet { operation: "update", .. }));
    }

    #[test]
    fn update_columns_sets_listed_columns() {
        let entity = order(Some(5), Some("a@b.c"), Some(2.5));
        let statement =
            update_columns(&descriptor(), &entity, &["total", "customerEmail", "TOTAL"]).unwrap();
        assert_eq!(
            statement.sql,
            "UPDATE orders SET total=:total,customer_email=:customerEmail WHERE order_id=:orderId"
        );
    }

    #[test]
    fn update_columns_rejects_bad_lists() {
        let entity = order(Some(5), Some("a@b.c"), None);
        assert_eq!(
            update_columns(&descriptor(), &entity, &[]).unwrap_err(),
            ValidationError::EmptyColumnList { entity: "Order" }
        );
        assert_eq!(
            update_columns(&descriptor(), &entity, &["colour"]).unwrap_err(),
            ValidationError::UnknownColumn {
                entity: "Order",
                column: "colour".into()
            }
        );
        assert_eq!(
            update_columns(&descriptor(), &entity, &["note", "order_id"]).unwrap_err(),
            ValidationError::PrimaryKeyColumn {
                entity: "Order",
                column: "order_id".into()
            }
        );
    }

    #[test]
    fn key_statements() {
        let d = descriptor();
        let statement = delete_by_id(&d, Value::Int(3));
        assert_eq!(statement.sql, "DELETE FROM orders WHERE order_id=:orderId");
        assert_eq!(statement.params.named_value("orderId"), Some(&Value::Int(3)));

        let statement = select_by_id(&d, Value::Int(3));
        assert_eq!(statement.sql, "SELECT * FROM orders WHERE order_id=:orderId");
    }

    #[test]
    fn conditional_statements() {
        let d = descriptor();
        assert_eq!(delete_where(&d, None), "DELETE FROM orders");
        assert_eq!(delete_where(&d, Some("total < ?")), "DELETE FROM orders WHERE total < ?");
        assert_eq!(select_where(&d, Some("  ")), "SELECT * FROM orders");
        assert_eq!(
            select_where(&d, Some("note IS NULL")),
            "SELECT * FROM orders WHERE note IS NULL"
        );
        assert_eq!(count_where(&d, None), "SELECT COUNT(*) FROM orders");
        assert_eq!(count_where(&d, Some("total > 0")), "SELECT COUNT(*) FROM orders WHERE total > 0");
    }

    #[test]
    fn blank_conditions_are_rejected() {
        let d = descriptor();
        assert_eq!(require_condition(&d, " total > 0\n", "count_where"), Ok("total > 0"));
        assert_eq!(
            require_condition(&d, " \t", "delete_where"),
            Err(ValidationError::EmptyCondition {
                entity:    "Order",
                operation: "delete_where"
            })
        );
    }
}
