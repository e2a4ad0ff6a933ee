// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type inspection helpers.

use syn::{GenericArgument, PathArguments, Type};

/// Get `T` from `Option<T>`.
///
/// Matches `Option`, `std::option::Option` and `core::option::Option` by
/// their last path segment. Returns `None` for any other type.
///
/// # Example
///
/// ```rust,ignore
/// let ty: Type = parse_quote!(Option<i64>);
/// assert!(option_inner(&ty).is_some());
/// ```
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::parse_quote;

    use super::*;

    #[test]
    fn unwraps_option() {
        let ty: Type = parse_quote!(Option<i64>);
        let inner = option_inner(&ty).unwrap();
        assert_eq!(quote!(#inner).to_string(), "i64");

        let ty: Type = parse_quote!(::std::option::Option<String>);
        let inner = option_inner(&ty).unwrap();
        assert_eq!(quote!(#inner).to_string(), "String");
    }

    #[test]
    fn leaves_other_types() {
        let ty: Type = parse_quote!(i64);
        assert!(option_inner(&ty).is_none());
        let ty: Type = parse_quote!(Vec<Option<i64>>);
        assert!(option_inner(&ty).is_none());
    }
}
