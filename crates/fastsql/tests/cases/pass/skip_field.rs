// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fastsql::{Entity, ToValue, Value};

#[derive(Entity, Debug, Default)]
#[entity(table = "users")]
pub struct User {
    pub id: i64,
    pub display_name: Option<String>,
    #[field(skip)]
    pub session_cache: Vec<String>,
}

fn main() {
    let specs = <User as Entity>::field_specs();
    let names: Vec<&str> = specs.iter().map(|s| s.name).collect();
    assert_eq!(names, ["id", "displayName"]);

    let mut user = User::default();
    (specs[1].set)(&mut user, "Ada".to_value()).unwrap();
    assert_eq!((specs[1].get)(&user), Value::Text("Ada".to_owned()));
}
