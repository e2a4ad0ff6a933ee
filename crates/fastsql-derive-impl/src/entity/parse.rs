// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for entity definitions.
//!
//! | Module | Parses |
//! |--------|--------|
//! | [`entity`] | `#[entity(...)]` and struct shape, key resolution |
//! | [`field`] | `#[id]`, `#[field(...)]` |

mod entity;
mod field;

pub use entity::EntityDef;
pub use field::FieldDef;
