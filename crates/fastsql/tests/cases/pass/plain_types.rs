// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fastsql::{BaseDao, DaoConfig, Entity, SqlExecutor};

#[derive(Entity, Debug, Default)]
#[entity(table = "counters")]
pub struct Counter {
    #[id]
    pub name: String,
    pub hits: i64,
    pub enabled: bool,
    pub payload: Vec<u8>,
}

fn build<X: SqlExecutor>(executor: X) -> BaseDao<Counter, X> {
    BaseDao::new(executor, DaoConfig::default()).unwrap()
}

fn main() {
    let _ = build::<std::sync::Arc<dyn SqlExecutor<Error = std::io::Error>>>;
}
