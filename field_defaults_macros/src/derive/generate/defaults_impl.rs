//! `Defaults` trait implementation generation.
//!
//! Emits the runtime glue that wires a user struct into the walker: the
//! static descriptor table, the record name, and the `field_mut` dispatch.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive::parse::ParsedInput;

use super::accessors::accessor_arm;
use super::descriptors::descriptor_tokens;

/// Generate the `Defaults` trait implementation for `input`.
pub(crate) fn generate_defaults_impl(
    input: &DeriveInput,
    parsed: &ParsedInput,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let descriptors = parsed
        .fields
        .iter()
        .zip(&parsed.roles)
        .map(|(field, role)| descriptor_tokens(field, role, krate));
    let arms = parsed
        .fields
        .iter()
        .zip(&parsed.roles)
        .enumerate()
        .filter_map(|(index, (field, role))| accessor_arm(index, field, role, krate));

    quote! {
        impl #impl_generics #krate::Defaults for #ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            fn descriptors(&self) -> &'static [#krate::FieldDescriptor] {
                const DESCRIPTORS: &[#krate::FieldDescriptor] = &[
                    #( #descriptors ),*
                ];
                DESCRIPTORS
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<#krate::FieldMut<'_>> {
                match index {
                    #( #arms )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
