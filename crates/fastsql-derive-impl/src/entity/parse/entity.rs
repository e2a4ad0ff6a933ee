// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | DAO naming strategy | Database table name |

use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

use super::FieldDef;

/// Field name treated as the key when no field is marked `#[id]`.
const CONVENTIONAL_KEY: &str = "id";

/// Entity-level attributes parsed from `#[entity(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity))]
pub struct EntityAttrs {
    /// Struct identifier (e.g., `Order`).
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Explicit table name.
    #[darling(default)]
    pub table: Option<String>
}

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Explicit table name.
    pub table: Option<String>,

    /// Persisted fields in declaration order (skipped fields removed).
    pub fields: Vec<FieldDef>,

    /// Index of the key in `fields`.
    pub id_field_index: usize
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, a union, a tuple or a unit struct
    /// - No field marked `#[id]` and none named `id`
    /// - Several fields marked `#[id]`
    /// - The key field marked `#[field(skip)]`
    /// - Invalid attribute values
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Entity requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let attrs = EntityAttrs::from_derive_input(input)?;

        let marked: Vec<&FieldDef> = fields.iter().filter(|f| f.is_id).collect();
        if let Some(second) = marked.get(1) {
            return Err(
                darling::Error::custom("Entity must have exactly one field with #[id] attribute")
                    .with_span(&second.ident)
            );
        }
        if let Some(key) = marked.first()
            && key.skip
        {
            return Err(
                darling::Error::custom("#[id] field cannot be #[field(skip)]").with_span(&key.ident)
            );
        }

        let fields: Vec<FieldDef> = fields.into_iter().filter(|f| !f.skip).collect();
        let id_field_index = fields
            .iter()
            .position(|f| f.is_id)
            .or_else(|| fields.iter().position(|f| f.ident == CONVENTIONAL_KEY))
            .ok_or_else(|| {
                darling::Error::custom(
                    "Entity must have a primary key: mark a field with #[id] or name it `id`"
                )
                .with_span(&input.ident)
            })?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table: attrs.table,
            fields,
            id_field_index
        })
    }

    /// Get the entity name identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the entity name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Get the primary key field.
    #[must_use]
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_field_index]
    }
}
