//! Derive macros of the `must` suite.
//!
//! For now only `#[derive(NeverNil)]` is available, enrolling a user type
//! into the closed nilness-classification set of `must-nil` as plain data.

#![warn(
    missing_docs,
    unused_crate_dependencies,
    unused_macro_rules,
    clippy::missing_docs_in_private_items,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unwrap_used
)]

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implement `Nilness` for a type that is plain data: `KIND` is `Plain` and
/// `is_nil` always answers `false`.
///
/// The generated impl names `::must_nil`, so that crate must be a direct
/// dependency of the deriving crate.
///
/// ```ignore
/// #[derive(Debug, PartialEq, NeverNil)]
/// struct Point { x: i64, y: i64 }
/// ```
#[proc_macro_derive(NeverNil)]
pub fn never_nil(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).into()
}

/// Build the `Nilness` impl, carrying the deriving type's generics over.
fn expand(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics ::must_nil::Nilness for #name #ty_generics #where_clause {
            const KIND: ::must_nil::NilKind = ::must_nil::NilKind::Plain;

            #[inline]
            fn is_nil(&self) -> bool {
                false
            }
        }
    }
}
