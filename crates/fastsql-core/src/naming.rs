// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier translation between field names and column names.
//!
//! Field names are written in lower camel case (`orderId`) or, as Rust
//! fields usually are, already in underscore case (`order_id`). Column names
//! are always lowercase words joined by underscores.
//!
//! | Input | [`camel_to_underline`] | [`underline_to_camel_first_lower`] |
//! |-------|------------------------|------------------------------------|
//! | `orderId` | `order_id` | `orderId` |
//! | `order_id` | `order_id` | `orderId` |
//! | `id` | `id` | `id` |
//!
//! [`NamingStrategy`] derives a table name from an entity type name when the
//! entity does not declare one explicitly.

/// Convert a lower-camel-case identifier into underscore case.
///
/// Every uppercase letter after the first character starts a new word.
/// Input already in underscore case is returned unchanged.
///
/// ```rust
/// use fastsql_core::naming::camel_to_underline;
///
/// assert_eq!(camel_to_underline("orderId"), "order_id");
/// assert_eq!(camel_to_underline("order_id"), "order_id");
/// assert_eq!(camel_to_underline("OrderItem"), "order_item");
/// ```
#[must_use]
pub fn camel_to_underline(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert an underscore-case identifier into lower camel case.
///
/// Input already in lower camel case is returned unchanged.
///
/// ```rust
/// use fastsql_core::naming::underline_to_camel_first_lower;
///
/// assert_eq!(underline_to_camel_first_lower("order_id"), "orderId");
/// assert_eq!(underline_to_camel_first_lower("orderId"), "orderId");
/// ```
#[must_use]
pub fn underline_to_camel_first_lower(identifier: &str) -> String {
    let camel = underline_to_camel(identifier);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new()
    }
}

/// Convert an underscore-case identifier into upper camel case.
///
/// ```rust
/// use fastsql_core::naming::underline_to_camel_first_upper;
///
/// assert_eq!(underline_to_camel_first_upper("order_item"), "OrderItem");
/// ```
#[must_use]
pub fn underline_to_camel_first_upper(identifier: &str) -> String {
    let camel = underline_to_camel(identifier);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new()
    }
}

fn underline_to_camel(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut upper_next = false;
    for c in identifier.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Strategy deriving a table name from an entity type name.
///
/// Only consulted when the entity does not declare its table explicitly
/// (`#[entity(table = "...")]`).
///
/// | Strategy | `OrderItem` |
/// |----------|-------------|
/// | [`SnakeCase`](Self::SnakeCase) | `order_item` |
/// | [`PluralSnakeCase`](Self::PluralSnakeCase) | `order_items` |
/// | [`Prefixed`](Self::Prefixed)`("t_")` | `t_order_item` |
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NamingStrategy {
    /// Underscore-case type name.
    #[default]
    SnakeCase,

    /// Underscore-case type name with the last word pluralized.
    PluralSnakeCase,

    /// Underscore-case type name behind a fixed prefix.
    Prefixed(String),

    /// Caller-supplied conversion.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(&str) -> String)
}

impl NamingStrategy {
    /// Derive the table name for an entity type name.
    ///
    /// ```rust
    /// use fastsql_core::naming::NamingStrategy;
    ///
    /// assert_eq!(NamingStrategy::SnakeCase.table_name("OrderItem"), "order_item");
    /// assert_eq!(NamingStrategy::PluralSnakeCase.table_name("Category"), "categories");
    /// ```
    #[must_use]
    pub fn table_name(&self, entity_name: &str) -> String {
        match self {
            Self::SnakeCase => camel_to_underline(entity_name),
            Self::PluralSnakeCase => pluralize(&camel_to_underline(entity_name)),
            Self::Prefixed(prefix) => format!("{prefix}{}", camel_to_underline(entity_name)),
            Self::Custom(convert) => convert(entity_name)
        }
    }
}

fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{stem}ies");
    }
    if word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{word}es");
    }
    format!("{word}s")
}
