// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[id]` | Marks the primary key |
//! | `#[field(skip)]` | Excludes the field from every statement |

use convert_case::{Case, Casing};
use syn::{Field, Ident, Meta, Type, ext::IdentExt};

/// Field definition with its parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `order_id`).
    pub ident: Ident,

    /// Field type (e.g., `Option<i64>`).
    pub ty: Type,

    /// Marked with `#[id]`.
    pub is_id: bool,

    /// Marked with `#[field(skip)]`.
    pub skip: bool
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - The field has no identifier (tuple struct field)
    /// - `#[field(...)]` contains an unknown option
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut is_id = false;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("field") {
                let Meta::List(list) = &attr.meta else {
                    return Err(darling::Error::custom("expected #[field(skip)]").with_span(attr));
                };
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unknown field option; expected `skip`"))
                    }
                })?;
            }
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            is_id,
            skip
        })
    }

    /// Get the field identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Persisted field name: the identifier in lower camel case.
    ///
    /// `order_id` becomes `orderId`.
    #[must_use]
    pub fn field_name(&self) -> String {
        self.ident.unraw().to_string().to_case(Case::Camel)
    }

    /// Column name: the identifier as written, without a raw prefix.
    ///
    /// Emitted explicitly because camel case does not keep digit-only words
    /// apart (`address_line_2` and `address_line2` share `addressLine2`).
    #[must_use]
    pub fn column(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Type inside `Option<T>`, or the type itself.
    #[must_use]
    pub fn value_type(&self) -> &Type {
        crate::utils::types::option_inner(&self.ty).unwrap_or(&self.ty)
    }
}
