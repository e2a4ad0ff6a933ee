// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use fastsql::Entity;
use uuid::Uuid;

#[derive(Entity, Debug, Default)]
#[entity(table = "sessions")]
pub struct Session {
    #[id]
    pub session_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub r#type: Option<String>,
}

fn key(id: &<Session as Entity>::Id) -> Uuid {
    *id
}

fn main() {
    let id = Uuid::new_v4();
    assert_eq!(key(&id), id);

    let specs = <Session as Entity>::field_specs();
    let names: Vec<&str> = specs.iter().map(|s| s.name).collect();
    assert_eq!(names, ["sessionId", "createdAt", "type"]);
}
