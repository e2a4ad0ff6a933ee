// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fastsql::Entity;

/// No `#[id]` marker: the field named `id` is the key.
#[derive(Entity, Debug, Default)]
pub struct OrderItem {
    pub sku: Option<String>,
    pub id: Option<i64>,
    pub quantity: Option<i32>,
}

fn main() {
    assert_eq!(<OrderItem as Entity>::ENTITY_NAME, "OrderItem");
    assert!(<OrderItem as Entity>::TABLE_NAME.is_none());

    let specs = <OrderItem as Entity>::field_specs();
    let keys: Vec<&str> = specs.iter().filter(|s| s.primary_key).map(|s| s.name).collect();
    assert_eq!(keys, ["id"]);
}
