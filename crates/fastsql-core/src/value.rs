// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamically typed bind values.
//!
//! Every field of an entity is read into a [`Value`] before it is bound to a
//! statement, and every column of a result row arrives as a [`Value`] before
//! it is written back into a field. [`ToValue`] and [`FromValue`] connect the
//! two worlds; the derive macro calls them for each field.
//!
//! # Supported Types
//!
//! | Rust | Variant | Feature |
//! |------|---------|---------|
//! | `bool` | `Bool` | |
//! | `i8`..`i64`, `u8`..`u32` | `Int` | |
//! | `f32`, `f64` | `Float` | |
//! | `String`, `&str` | `Text` | |
//! | `Vec<u8>` | `Bytes` | |
//! | `uuid::Uuid` | `Uuid` | `uuid` |
//! | `chrono::DateTime<Utc>` | `Timestamp` | `chrono` |
//! | `Option<T>` | `Null` when `None` | |

use std::fmt;

/// A single bind parameter or result column value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL `NULL`.
    #[default]
    Null,

    /// Boolean.
    Bool(bool),

    /// Any integer that fits into `i64`.
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text.
    Text(String),

    /// Raw bytes.
    Bytes(Vec<u8>),

    /// UUID.
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),

    /// Timestamp with time zone, normalized to UTC.
    #[cfg(feature = "chrono")]
    Timestamp(chrono::DateTime<chrono::Utc>)
}

impl Value {
    /// Check if this is SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value counts as "not set" for a primary key.
    ///
    /// `NULL` and empty text are unset; everything else, including `0`, is
    /// set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false
        }
    }

    /// Name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            #[cfg(feature = "uuid")]
            Self::Uuid(_) => "uuid",
            #[cfg(feature = "chrono")]
            Self::Timestamp(_) => "timestamp"
        }
    }

    /// Integer content, if any.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None
        }
    }

    /// Text content, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "'{v}'"),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            #[cfg(feature = "uuid")]
            Self::Uuid(v) => write!(f, "{v}"),
            #[cfg(feature = "chrono")]
            Self::Timestamp(v) => write!(f, "{}", v.to_rfc3339())
        }
    }
}

/// Error converting a [`Value`] into a Rust type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The value has a different type than the target.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Target type description.
        expected: &'static str,
        /// Variant name of the value actually found.
        found:    &'static str
    },

    /// The value does not fit into the target type.
    #[error("value {value} is out of range for {target}")]
    OutOfRange {
        /// Rendered value.
        value:  String,
        /// Target type name.
        target: &'static str
    },

    /// `NULL` for a field that is not an `Option`.
    #[error("unexpected NULL for non-nullable {target}")]
    UnexpectedNull {
        /// Target type name.
        target: &'static str
    },

    /// Text that does not parse into the target type.
    #[error("cannot parse {value:?} as {target}")]
    Parse {
        /// Offending text.
        value:  String,
        /// Target type name.
        target: &'static str
    }
}

impl ValueError {
    fn mismatch(expected: &'static str, found: &Value) -> Self {
        if found.is_null() {
            Self::UnexpectedNull {
                target: expected
            }
        } else {
            Self::TypeMismatch {
                expected,
                found: found.kind()
            }
        }
    }
}

/// Conversion of a Rust value into a bind [`Value`].
pub trait ToValue {
    /// Produce the bind value.
    fn to_value(&self) -> Value;
}

/// Conversion of a result [`Value`] into a Rust value.
pub trait FromValue: Sized {
    /// Consume the value, converting it.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the value has an incompatible type or does
    /// not fit.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some)
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

macro_rules! int_value {
    ($($ty:ty),* $(,)?) => {$(
        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::Int(v) => <$ty>::try_from(v).map_err(|_| ValueError::OutOfRange {
                        value:  v.to_string(),
                        target: stringify!($ty)
                    }),
                    other => Err(ValueError::mismatch(stringify!($ty), &other))
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                v.to_value()
            }
        }
    )*};
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            // TINYINT(1) columns come back as integers
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            other => Err(ValueError::mismatch("bool", &other))
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) => Ok(v),
            #[allow(clippy::cast_precision_loss)]
            Value::Int(v) => Ok(v as f64),
            other => Err(ValueError::mismatch("f64", &other))
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(ValueError::mismatch("text", &other))
        }
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(v) => Ok(v),
            other => Err(ValueError::mismatch("bytes", &other))
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "uuid")]
impl ToValue for uuid::Uuid {
    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

#[cfg(feature = "uuid")]
impl FromValue for uuid::Uuid {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::Text(v) => uuid::Uuid::parse_str(&v).map_err(|_| ValueError::Parse {
                value:  v,
                target: "uuid"
            }),
            other => Err(ValueError::mismatch("uuid", &other))
        }
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Self::Uuid(v)
    }
}

#[cfg(feature = "chrono")]
impl ToValue for chrono::DateTime<chrono::Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

#[cfg(feature = "chrono")]
impl FromValue for chrono::DateTime<chrono::Utc> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Timestamp(v) => Ok(v),
            Value::Text(v) => chrono::DateTime::parse_from_rfc3339(&v)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .map_err(|_| ValueError::Parse {
                    value:  v,
                    target: "timestamp"
                }),
            other => Err(ValueError::mismatch("timestamp", &other))
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        Self::Timestamp(v)
    }
}
