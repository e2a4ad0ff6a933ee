// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle hooks around single-entity mutations.
//!
//! | Operation | Before | After |
//! |-----------|--------|-------|
//! | `insert`, `insert_selective` | `before_insert` | `after_insert` |
//! | `update`, `update_selective`, `update_columns` | `before_update` | `after_update` |
//! | `delete_one_by_id` | `before_delete` | `after_delete` |
//!
//! Bulk deletes (`delete_all`, `delete_where`, `delete_in_batch`) run no
//! hooks. Which hooks run at all is decided by [`HookFlags`] in the DAO
//! configuration: after-hooks are on by default, before-hooks off.
//!
//! # Usage
//!
//! ```rust,ignore
//! struct Audit;
//!
//! #[async_trait]
//! impl DaoHooks<Order> for Audit {
//!     async fn after_insert(&self, order: &Order, affected: u64) {
//!         tracing::info!(?order.order_id, affected, "order stored");
//!     }
//! }
//!
//! let dao = BaseDao::<Order, _>::new(executor, DaoConfig::default())?.with_hooks(Audit);
//! ```

use async_trait::async_trait;

use crate::entity::Entity;

/// Callbacks invoked around single-entity mutations.
///
/// Hooks observe; they cannot veto or fail an operation. Every method has a
/// default. The default after-hooks log a warning when the statement
/// affected no row.
#[async_trait]
pub trait DaoHooks<E: Entity>: Send + Sync {
    /// Called before an insert statement is sent.
    async fn before_insert(&self, _entity: &E) {}

    /// Called after an insert with the affected row count.
    async fn after_insert(&self, _entity: &E, affected: u64) {
        if affected < 1 {
            tracing::warn!(entity = E::ENTITY_NAME, affected, "insert affected no rows");
        }
    }

    /// Called before an update statement is sent.
    async fn before_update(&self, _entity: &E) {}

    /// Called after an update with the affected row count.
    async fn after_update(&self, _entity: &E, affected: u64) {
        if affected < 1 {
            tracing::warn!(entity = E::ENTITY_NAME, affected, "update affected no rows");
        }
    }

    /// Called before a delete by primary key.
    async fn before_delete(&self, _id: &E::Id) {}

    /// Called after a delete by primary key with the affected row count.
    async fn after_delete(&self, id: &E::Id, affected: u64) {
        if affected < 1 {
            tracing::warn!(entity = E::ENTITY_NAME, ?id, affected, "delete affected no rows");
        }
    }
}

/// Hooks with every default behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl<E: Entity> DaoHooks<E> for DefaultHooks {}

/// Which hooks a DAO invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct HookFlags {
    /// Run `before_insert`.
    pub before_insert: bool,
    /// Run `after_insert`.
    pub after_insert:  bool,
    /// Run `before_update`.
    pub before_update: bool,
    /// Run `after_update`.
    pub after_update:  bool,
    /// Run `before_delete`.
    pub before_delete: bool,
    /// Run `after_delete`.
    pub after_delete:  bool
}

impl HookFlags {
    /// Every hook enabled.
    pub const ALL: Self = Self {
        before_insert: true,
        after_insert:  true,
        before_update: true,
        after_update:  true,
        before_delete: true,
        after_delete:  true
    };

    /// Every hook disabled.
    pub const NONE: Self = Self {
        before_insert: false,
        after_insert:  false,
        before_update: false,
        after_update:  false,
        before_delete: false,
        after_delete:  false
    };
}

impl Default for HookFlags {
    fn default() -> Self {
        Self {
            after_insert: true,
            after_update: true,
            after_delete: true,
            ..Self::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_after_hooks_only() {
        let flags = HookFlags::default();
        assert!(flags.after_insert && flags.after_update && flags.after_delete);
        assert!(!flags.before_insert && !flags.before_update && !flags.before_delete);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_flags_deserialize() {
        let flags: HookFlags = serde_json::from_str(r#"{"before_insert": true}"#).unwrap();
        assert!(flags.before_insert);
        assert!(flags.after_insert);
        assert!(!flags.before_delete);
    }
}
