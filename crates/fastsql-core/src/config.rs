// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DAO configuration.
//!
//! ```rust
//! use fastsql_core::{DaoConfig, Dialect, HookFlags, NamingStrategy};
//!
//! let config = DaoConfig::new(Dialect::MySql)
//!     .with_hooks(HookFlags::ALL)
//!     .with_naming(NamingStrategy::PluralSnakeCase);
//!
//! assert_eq!(config.dialect, Dialect::MySql);
//! ```
//!
//! With the `serde` feature the configuration loads from any serde format;
//! missing keys take their defaults:
//!
//! ```toml
//! dialect = "mysql"
//! naming = "plural_snake_case"
//!
//! [hooks]
//! before_insert = true
//! ```

use crate::{dialect::Dialect, hooks::HookFlags, naming::NamingStrategy};

/// Settings fixed for the lifetime of a DAO.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct DaoConfig {
    /// SQL dialect used for pagination.
    pub dialect: Dialect,
    /// Enabled hooks.
    pub hooks:   HookFlags,
    /// Table naming for entities without an explicit table.
    pub naming:  NamingStrategy
}

impl DaoConfig {
    /// Configuration for `dialect` with default hooks and naming.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Replace the hook flags.
    #[must_use]
    pub fn with_hooks(mut self, hooks: HookFlags) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replace the naming strategy.
    #[must_use]
    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }
}
