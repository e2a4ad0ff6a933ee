// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fastsql::{Entity, EntityDescriptor, NamingStrategy};

#[derive(Entity, Debug, Default)]
#[entity(table = "orders")]
pub struct Order {
    #[id]
    pub order_id: Option<i64>,
    pub customer_email: Option<String>,
    pub total: Option<f64>,
}

fn main() {
    let descriptor = EntityDescriptor::<Order>::resolve(&NamingStrategy::default()).unwrap();
    assert_eq!(descriptor.table_name(), "orders");
    assert_eq!(descriptor.primary_key().column(), "order_id");
    assert_eq!(descriptor.fields().len(), 3);
}
