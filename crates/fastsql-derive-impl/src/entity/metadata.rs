// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl fastsql_core::Entity` generation.
//!
//! Each persisted field becomes one `FieldSpec` with a getter and a setter.
//! Both are non-capturing closures coerced to the `fn` pointers `FieldSpec`
//! stores.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef};

/// Generate the `Entity` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let name = entity.name();
    let entity_name = entity.name_str();
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    let id_type = entity.id_field().value_type();
    let table_name = match &entity.table {
        Some(table) => quote! { ::core::option::Option::Some(#table) },
        None => quote! { ::core::option::Option::None }
    };

    let specs = entity
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| field_spec(field, index == entity.id_field_index));

    quote! {
        #[automatically_derived]
        impl #impl_generics ::fastsql_core::Entity for #name #ty_generics #where_clause {
            type Id = #id_type;
            const ENTITY_NAME: &'static str = #entity_name;
            const TABLE_NAME: ::core::option::Option<&'static str> = #table_name;

            fn field_specs() -> ::std::vec::Vec<::fastsql_core::FieldSpec<Self>> {
                ::std::vec![#(#specs),*]
            }
        }
    }
}

fn field_spec(field: &FieldDef, primary_key: bool) -> TokenStream {
    let ident = field.name();
    let field_name = field.field_name();
    let column = field.column();

    quote! {
        ::fastsql_core::FieldSpec::<Self>::new(
            #field_name,
            #primary_key,
            |entity: &Self| ::fastsql_core::ToValue::to_value(&entity.#ident),
            |entity: &mut Self,
             value: ::fastsql_core::Value|
             -> ::core::result::Result<(), ::fastsql_core::ValueError> {
                entity.#ident = ::fastsql_core::FromValue::from_value(value)?;
                ::core::result::Result::Ok(())
            }
        )
        .with_column(#column)
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn expand(input: DeriveInput) -> String {
        generate(&EntityDef::from_derive_input(&input).unwrap()).to_string()
    }

    #[test]
    fn key_type_drops_option() {
        let out = expand(syn::parse_quote! {
            #[entity(table = "orders")]
            pub struct Order {
                #[id]
                pub order_id: Option<i64>,
                pub total: Option<f64>
            }
        });
        assert!(out.contains("type Id = i64"));
        assert!(out.contains("Some (\"orders\")"));
        assert!(out.contains("\"orderId\" , true"));
        assert!(out.contains("\"total\" , false"));
        assert!(out.contains("with_column (\"order_id\")"));
    }

    #[test]
    fn digit_words_keep_their_column() {
        let out = expand(syn::parse_quote! {
            pub struct Address {
                pub id: i64,
                pub address_line_2: Option<String>,
                pub sha256_hash: Option<String>
            }
        });
        assert!(out.contains("\"addressLine2\""));
        assert!(out.contains("with_column (\"address_line_2\")"));
        assert!(out.contains("with_column (\"sha256_hash\")"));
    }

    #[test]
    fn table_defaults_to_none() {
        let out = expand(syn::parse_quote! {
            pub struct Tag {
                pub id: String,
                pub label: Option<String>
            }
        });
        assert!(out.contains("type Id = String"));
        assert!(out.contains("Option :: None"));
        assert!(out.contains("\"Tag\""));
    }

    #[test]
    fn skipped_fields_have_no_spec() {
        let out = expand(syn::parse_quote! {
            pub struct Tag {
                pub id: i64,
                #[field(skip)]
                pub cache: String
            }
        });
        assert!(!out.contains("\"cache\""));
    }
}
