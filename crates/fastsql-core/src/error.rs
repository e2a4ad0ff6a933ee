// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types.
//!
//! | Type | Raised | Meaning |
//! |------|--------|---------|
//! | [`ConfigError`] | DAO construction | Entity or DAO set up wrongly, fatal |
//! | [`ValidationError`] | Before any SQL is sent | Caller passed unusable input |
//! | [`DaoError::Cardinality`] | After a single-row query | Condition matched several rows |
//! | [`DaoError::Store`] | Executor | Passed through unchanged |
//!
//! Zero rows for a single-row lookup is not an error: those operations return
//! `Ok(None)`.

use crate::value::ValueError;

/// Fatal configuration error raised while constructing a DAO.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No field is marked as primary key and none is named `id`.
    #[error("entity `{entity}` has no primary key field; mark one with #[id] or name it `id`")]
    MissingPrimaryKey {
        /// Entity type name.
        entity: &'static str
    },

    /// More than one field is marked as primary key.
    #[error("entity `{entity}` marks several primary key fields: {}", .fields.join(", "))]
    MultiplePrimaryKeys {
        /// Entity type name.
        entity: &'static str,
        /// Names of the marked fields.
        fields: Vec<&'static str>
    },

    /// The entity declares no fields at all.
    #[error("entity `{entity}` declares no fields")]
    NoFields {
        /// Entity type name.
        entity: &'static str
    },

    /// Two fields share a name.
    #[error("entity `{entity}` declares field `{field}` twice")]
    DuplicateField {
        /// Entity type name.
        entity: &'static str,
        /// Repeated field name.
        field:  &'static str
    },

    /// Two fields map to the same column.
    #[error("entity `{entity}` maps several fields to column `{column}`")]
    DuplicateColumn {
        /// Entity type name.
        entity: &'static str,
        /// Shared column name.
        column: String
    },

    /// Dialect name not recognized.
    #[error("unknown SQL dialect `{0}`; expected mysql, postgresql or oracle")]
    UnknownDialect(String)
}

/// Caller input rejected before any statement reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Update-family call on an entity whose primary key is not set.
    #[error("`{entity}` primary key `{field}` must be set")]
    MissingPrimaryKeyValue {
        /// Entity type name.
        entity: &'static str,
        /// Primary key field name.
        field:  &'static str
    },

    /// Selective statement with nothing to write.
    #[error("`{entity}` has no non-null fields to {operation}")]
    EmptyFieldSet {
        /// Entity type name.
        entity:    &'static str,
        /// Statement kind (`insert` / `update`).
        operation: &'static str
    },

    /// Conditional statement called with a blank condition.
    #[error("`{entity}` {operation} needs a non-blank condition")]
    EmptyCondition {
        /// Entity type name.
        entity:    &'static str,
        /// Operation name (`delete_where`, `select_where`, ...).
        operation: &'static str
    },

    /// `update_columns` called without columns.
    #[error("`{entity}` update needs at least one column")]
    EmptyColumnList {
        /// Entity type name.
        entity: &'static str
    },

    /// Column not mapped by the entity.
    #[error("`{entity}` has no column `{column}`")]
    UnknownColumn {
        /// Entity type name.
        entity: &'static str,
        /// Requested column.
        column: String
    },

    /// Attempt to overwrite the primary key column by name.
    #[error("`{entity}` primary key column `{column}` cannot be updated")]
    PrimaryKeyColumn {
        /// Entity type name.
        entity: &'static str,
        /// Primary key column.
        column: String
    },

    /// Page number below 1.
    #[error("page number must be at least 1, got {0}")]
    InvalidPageNumber(i64),

    /// Page size below 1.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(i64),

    /// Page window beyond the representable row range.
    #[error("page {page_number} of size {page_size} overflows the row offset")]
    PageOffsetOverflow {
        /// Requested page.
        page_number: i64,
        /// Requested size.
        page_size:   i64
    },

    /// `:name` placeholder without a value.
    #[error("no value bound for named parameter `:{0}`")]
    MissingNamedParameter(String),

    /// Number of `?` placeholders differs from the number of values.
    #[error("statement has {placeholders} positional placeholders but {supplied} values were bound")]
    PositionalCountMismatch {
        /// `?` occurrences in the statement.
        placeholders: usize,
        /// Values supplied.
        supplied:     usize
    }
}

/// Error returned by DAO operations.
///
/// `S` is the executor's error type; store failures are carried through
/// without wrapping their content.
#[derive(Debug, thiserror::Error)]
pub enum DaoError<S> {
    /// Input rejected before execution.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A single-row lookup matched more than one row.
    #[error("unique lookup on `{table}` returned {rows} rows")]
    Cardinality {
        /// Queried table.
        table: String,
        /// Rows returned.
        rows:  usize
    },

    /// A result row could not be mapped into the entity.
    #[error("cannot map row into `{entity}`: {source}")]
    Mapping {
        /// Entity type name.
        entity: &'static str,
        /// Conversion failure.
        #[source]
        source: ValueError
    },

    /// Failure reported by the executor.
    #[error(transparent)]
    Store(S)
}

impl<S> DaoError<S> {
    /// Check if this is a validation error.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a cardinality violation.
    pub const fn is_cardinality(&self) -> bool {
        matches!(self, Self::Cardinality { .. })
    }

    /// Check if this came from the executor.
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Get the executor error, if this is one.
    pub fn into_store(self) -> Option<S> {
        match self {
            Self::Store(e) => Some(e),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_messages() {
        let err = ConfigError::MultiplePrimaryKeys {
            entity: "Order",
            fields: vec!["id", "code"]
        };
        assert_eq!(
            err.to_string(),
            "entity `Order` marks several primary key fields: id, code"
        );
        assert_eq!(
            ConfigError::UnknownDialect("db2".into()).to_string(),
            "unknown SQL dialect `db2`; expected mysql, postgresql or oracle"
        );
    }

    #[test]
    fn dao_error_kinds() {
        let err: DaoError<std::io::Error> = ValidationError::InvalidPageSize(0).into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "page size must be at least 1, got 0");

        let err: DaoError<std::io::Error> = DaoError::Cardinality {
            table: "orders".into(),
            rows:  2
        };
        assert!(err.is_cardinality());
        assert!(!err.is_store());
    }

    #[test]
    fn store_error_passes_through() {
        let err: DaoError<std::io::Error> =
            DaoError::Store(std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "connection reset");
        assert!(err.is_store());
        assert_eq!(
            err.into_store().map(|e| e.to_string()),
            Some("connection reset".to_string())
        );
    }
}
