// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use fastsql::Entity;

#[derive(Entity)]
pub struct Item(i64, String);

fn main() {}
