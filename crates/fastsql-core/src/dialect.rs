// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Supported SQL dialects.
//!
//! The dialect only changes how a page of rows is selected (see
//! [`build_rows_query`](crate::page::build_rows_query)) and which placeholder
//! style a driver expects. Everything else the DAO emits is portable.
//!
//! | Dialect | Accepted names | Pagination |
//! |---------|----------------|------------|
//! | [`MySql`](Dialect::MySql) | `mysql`, `mariadb` | `LIMIT offset,size` |
//! | [`PostgreSql`](Dialect::PostgreSql) | `postgresql`, `postgres`, `pg` | `LIMIT size OFFSET offset` |
//! | [`Oracle`](Dialect::Oracle) | `oracle` | `ROWNUM` window |

use std::{fmt, str::FromStr};

use crate::{error::ConfigError, placeholder::PlaceholderStyle};

/// SQL dialect, fixed per DAO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(try_from = "String"))]
pub enum Dialect {
    /// MySQL and MariaDB.
    MySql,

    /// PostgreSQL.
    #[default]
    PostgreSql,

    /// Oracle.
    Oracle
}

impl Dialect {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Oracle => "oracle"
        }
    }

    /// Placeholder style of the usual driver for this dialect.
    #[must_use]
    pub const fn placeholder_style(self) -> PlaceholderStyle {
        match self {
            Self::MySql => PlaceholderStyle::Question,
            Self::PostgreSql => PlaceholderStyle::Numbered,
            Self::Oracle => PlaceholderStyle::ColonNumbered
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "oracle" => Ok(Self::Oracle),
            _ => Err(ConfigError::UnknownDialect(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
