// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written entities shared by unit tests.

use crate::{Entity, FieldSpec, FromValue, ToValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub order_id:       Option<i64>,
    pub customer_email: Option<String>,
    pub total:          Option<f64>,
    pub note:           Option<String>
}

impl Entity for Order {
    type Id = i64;
    const ENTITY_NAME: &'static str = "Order";
    const TABLE_NAME: Option<&'static str> = Some("orders");

    fn field_specs() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::<Self>::new(
                "orderId",
                true,
                |e| e.order_id.to_value(),
                |e, v| {
                    e.order_id = FromValue::from_value(v)?;
                    Ok(())
                }
            ),
            FieldSpec::<Self>::new(
                "customerEmail",
                false,
                |e| e.customer_email.to_value(),
                |e, v| {
                    e.customer_email = FromValue::from_value(v)?;
                    Ok(())
                }
            ),
            FieldSpec::<Self>::new(
                "total",
                false,
                |e| e.total.to_value(),
                |e, v| {
                    e.total = FromValue::from_value(v)?;
                    Ok(())
                }
            ),
            FieldSpec::<Self>::new(
                "note",
                false,
                |e| e.note.to_value(),
                |e, v| {
                    e.note = FromValue::from_value(v)?;
                    Ok(())
                }
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub id:   Option<String>,
    pub name: Option<String>
}

impl Entity for Tag {
    type Id = String;
    const ENTITY_NAME: &'static str = "Tag";

    fn field_specs() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::<Self>::new(
                "id",
                false,
                |e| e.id.to_value(),
                |e, v| {
                    e.id = FromValue::from_value(v)?;
                    Ok(())
                }
            ),
            FieldSpec::<Self>::new(
                "name",
                false,
                |e| e.name.to_value(),
                |e, v| {
                    e.name = FromValue::from_value(v)?;
                    Ok(())
                }
            ),
        ]
    }
}

pub fn order(id: Option<i64>, email: Option<&str>, total: Option<f64>) -> Order {
    Order {
        order_id:       id,
        customer_email: email.map(ToOwned::to_owned),
        total,
        note:           None
    }
}
