// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Placeholder rewriting for executors.
//!
//! The DAO emits `:name` placeholders and accepts caller conditions with
//! either `:name` or `?`. Drivers speak one fixed style, so an executor
//! rewrites the statement once and binds the values in the resulting order.
//!
//! ```rust
//! use fastsql_core::{params, placeholder::{PlaceholderStyle, rewrite}};
//!
//! let bound = rewrite(
//!     "SELECT * FROM orders WHERE customer_id=:customerId AND total > :min",
//!     &params! { "customerId" => 7, "min" => 100 },
//!     PlaceholderStyle::Numbered
//! )
//! .unwrap();
//!
//! assert_eq!(bound.sql, "SELECT * FROM orders WHERE customer_id=$1 AND total > $2");
//! assert_eq!(bound.values.len(), 2);
//! ```
//!
//! Quoted literals (`'...'`, `"..."`) and PostgreSQL casts (`::int`) are
//! copied verbatim.

use crate::{error::ValidationError, params::Params, value::Value};

/// Placeholder syntax understood by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
    /// `$1, $2, ...` (PostgreSQL). A repeated name reuses its number.
    Numbered,

    /// `?` (MySQL, SQLite, JDBC-style drivers). A repeated name is bound
    /// again at each occurrence.
    Question,

    /// `:1, :2, ...` (Oracle). A repeated name reuses its number.
    ColonNumbered
}

/// A statement rewritten for a driver, with values in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundSql {
    /// Statement text in the target style.
    pub sql:    String,
    /// Values in bind order.
    pub values: Vec<Value>
}

/// Rewrite `:name` and `?` placeholders into `style`.
///
/// # Errors
///
/// - [`ValidationError::MissingNamedParameter`] for a `:name` without value
/// - [`ValidationError::PositionalCountMismatch`] when the number of `?`
///   differs from the number of positional values
pub fn rewrite(
    sql: &str,
    params: &Params,
    style: PlaceholderStyle
) -> Result<BoundSql, ValidationError> {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut values = Vec::with_capacity(params.len());
    let mut numbered: Vec<(&str, usize)> = Vec::new();
    let mut positional_seen = 0usize;

    let bytes = sql.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b'\'' | b'"' => {
                let end = sql[i + 1..].find(c as char).map_or(sql.len(), |p| i + 1 + p + 1);
                out.push_str(&sql[i..end]);
                i = end;
            }
            b':' if bytes.get(i + 1) == Some(&b':') => {
                out.push_str("::");
                i += 2;
            }
            b':' if bytes.get(i + 1).is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_') => {
                let start = i + 1;
                let end = sql[start..]
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                    .map_or(sql.len(), |p| start + p);
                let name = &sql[start..end];
                let value = params
                    .named_value(name)
                    .ok_or_else(|| ValidationError::MissingNamedParameter(name.to_owned()))?;

                if style == PlaceholderStyle::Question {
                    values.push(value.clone());
                    out.push('?');
                } else {
                    let index = match numbered.iter().find(|(n, _)| *n == name) {
                        Some((_, index)) => *index,
                        None => {
                            values.push(value.clone());
                            numbered.push((name, values.len()));
                            values.len()
                        }
                    };
                    push_numbered(&mut out, style, index);
                }
                i = end;
            }
            b'?' => {
                let value = match params {
                    Params::Positional(list) => list.get(positional_seen),
                    _ => None
                };
                positional_seen += 1;
                let Some(value) = value else {
                    return Err(ValidationError::PositionalCountMismatch {
                        placeholders: count_question_marks(sql),
                        supplied:     positional_len(params)
                    });
                };
                values.push(value.clone());
                if style == PlaceholderStyle::Question {
                    out.push('?');
                } else {
                    push_numbered(&mut out, style, values.len());
                }
                i += 1;
            }
            _ => {
                let next = sql[i..]
                    .find(['\'', '"', ':', '?'])
                    .map_or(sql.len(), |p| if p == 0 { i + 1 } else { i + p });
                out.push_str(&sql[i..next]);
                i = next;
            }
        }
    }

    if positional_seen != positional_len(params) && matches!(params, Params::Positional(_)) {
        return Err(ValidationError::PositionalCountMismatch {
            placeholders: positional_seen,
            supplied:     positional_len(params)
        });
    }

    Ok(BoundSql {
        sql: out,
        values
    })
}

fn push_numbered(out: &mut String, style: PlaceholderStyle, index: usize) {
    let prefix = if style == PlaceholderStyle::ColonNumbered {
        ':'
    } else {
        '$'
    };
    out.push(prefix);
    out.push_str(&index.to_string());
}

fn positional_len(params: &Params) -> usize {
    match params {
        Params::Positional(values) => values.len(),
        _ => 0
    }
}

fn count_question_marks(sql: &str) -> usize {
    let mut count = 0;
    let mut quote: Option<char> = None;
    for ch in sql.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(ch),
            (None, '?') => count += 1,
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn named_to_numbered_reuses_index() {
        let bound = rewrite(
            "UPDATE t SET a=:a, b=:b WHERE a=:a",
            &params! { "a" => 1, "b" => 2 },
            PlaceholderStyle::Numbered
        )
        .unwrap();
        assert_eq!(bound.sql, "UPDATE t SET a=$1, b=$2 WHERE a=$1");
        assert_eq!(bound.values, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn named_to_question_repeats_value() {
        let bound = rewrite(
            "SELECT * FROM t WHERE a=:a OR b=:a",
            &params! { "a" => 5 },
            PlaceholderStyle::Question
        )
        .unwrap();
        assert_eq!(bound.sql, "SELECT * FROM t WHERE a=? OR b=?");
        assert_eq!(bound.values, vec![Value::Int(5), Value::Int(5)]);
    }

    #[test]
    fn positional_to_numbered() {
        let bound = rewrite(
            "SELECT * FROM t WHERE name=? AND age>?",
            &params!["wang", 23],
            PlaceholderStyle::Numbered
        )
        .unwrap();
        assert_eq!(bound.sql, "SELECT * FROM t WHERE name=$1 AND age>$2");
        assert_eq!(bound.values, vec![Value::Text("wang".into()), Value::Int(23)]);
    }

    #[test]
    fn colon_numbered_for_oracle() {
        let bound = rewrite(
            "SELECT * FROM t WHERE id=:id",
            &params! { "id" => 9 },
            PlaceholderStyle::ColonNumbered
        )
        .unwrap();
        assert_eq!(bound.sql, "SELECT * FROM t WHERE id=:1");
    }

    #[test]
    fn literals_and_casts_are_untouched() {
        let bound = rewrite(
            "SELECT ':x', \"a?b\", created_at::date FROM t WHERE id=:id",
            &params! { "id" => 1 },
            PlaceholderStyle::Numbered
        )
        .unwrap();
        assert_eq!(bound.sql, "SELECT ':x', \"a?b\", created_at::date FROM t WHERE id=$1");
        assert_eq!(bound.values.len(), 1);
    }

    #[test]
    fn missing_named_value() {
        let err = rewrite("SELECT * FROM t WHERE id=:id", &Params::None, PlaceholderStyle::Numbered)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingNamedParameter("id".into()));
    }

    #[test]
    fn too_few_positional_values() {
        let err = rewrite("a=? AND b=?", &params![1], PlaceholderStyle::Question).unwrap_err();
        assert_eq!(
            err,
            ValidationError::PositionalCountMismatch {
                placeholders: 2,
                supplied:     1
            }
        );
    }

    #[test]
    fn too_many_positional_values() {
        let err = rewrite("a=?", &params![1, 2], PlaceholderStyle::Question).unwrap_err();
        assert_eq!(
            err,
            ValidationError::PositionalCountMismatch {
                placeholders: 1,
                supplied:     2
            }
        );
    }

    #[test]
    fn plain_statement() {
        let bound = rewrite("DELETE FROM t", &Params::None, PlaceholderStyle::Numbered).unwrap();
        assert_eq!(bound.sql, "DELETE FROM t");
        assert!(bound.values.is_empty());
    }
}
