//! `Scalar` trait implementation generation for wrapper types.
//!
//! The wrapper reports the wrapped primitive's kind, so coercion parses the
//! primitive and the generated `from_value` casts it into the named type.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Generate a delegating `Scalar` implementation for a single-field wrapper.
pub(crate) fn generate_scalar_impl(
    input: &DeriveInput,
    member: &syn::Member,
    inner: &syn::Type,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics #krate::Scalar for #ident #ty_generics #where_clause {
            const KIND: #krate::Kind = <#inner as #krate::Scalar>::KIND;

            fn from_value(value: #krate::Value) -> ::core::option::Option<Self> {
                <#inner as #krate::Scalar>::from_value(value).map(|inner| Self { #member: inner })
            }

            fn is_zero(&self) -> bool {
                <#inner as #krate::Scalar>::is_zero(&self.#member)
            }
        }
    }
}
