// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fastsql::Entity;

#[derive(Entity)]
pub struct Pair {
    #[id]
    pub left: i64,
    #[id]
    pub right: i64,
}

fn main() {}
