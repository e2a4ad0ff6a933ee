// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement parameters and result rows.
//!
//! Statements produced by the DAO bind entity fields by name (`:orderId`).
//! Caller-supplied conditions may use either style:
//!
//! ```rust
//! use fastsql_core::{Params, params};
//!
//! // `name = ? AND age > ?`
//! let positional = params!["wang", 23];
//! assert_eq!(positional.len(), 2);
//!
//! // `name = :name AND age > :age`
//! let named = params! { "name" => "wang", "age" => 23 };
//! assert!(named.named_value("age").is_some());
//!
//! assert!(params![].is_empty());
//! assert_eq!(params![], Params::None);
//! ```

use crate::value::Value;

/// Parameters bound to one statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Params {
    /// No parameters.
    #[default]
    None,

    /// Values for `?` placeholders, in order.
    Positional(Vec<Value>),

    /// Values for `:name` placeholders.
    Named(Vec<(String, Value)>)
}

impl Params {
    /// Create positional parameters.
    #[must_use]
    pub fn positional<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Create named parameters.
    #[must_use]
    pub fn named<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>
    {
        Self::Named(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up a named parameter.
    ///
    /// Returns `None` for positional parameters or an unknown name.
    #[must_use]
    pub fn named_value(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Named(pairs) => pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None
        }
    }

    /// Number of bound values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Positional(values) => values.len(),
            Self::Named(pairs) => pairs.len()
        }
    }

    /// Check if no value is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build [`Params`] from a list of values or `name => value` pairs.
///
/// Values go through [`ToValue`](crate::ToValue), so anything an entity field
/// can hold is accepted.
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::None
    };
    ($($name:literal => $value:expr),+ $(,)?) => {
        $crate::Params::Named(::std::vec![
            $((::std::string::String::from($name), $crate::ToValue::to_value(&$value))),+
        ])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Params::Positional(::std::vec![$($crate::ToValue::to_value(&$value)),+])
    };
}

/// One result row: column names with their values, in select order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Value)>
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new()
        }
    }

    /// Create an empty row with room for `capacity` columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity)
        }
    }

    /// Append a column.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Look up a column, ignoring ASCII case.
    ///
    /// Some databases report column labels in upper case.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, v)| v)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|(k, v)| (k.into(), v)).collect()
        }
    }
}
