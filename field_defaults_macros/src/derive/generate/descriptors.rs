//! Field descriptor table generation.
//!
//! Every named field gets a descriptor, in declaration order, whether or not
//! it carries a default. The runtime walker decides candidacy from the
//! descriptor alone.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;

use crate::derive::parse::{FieldRole, NESTED_MARKER, indirection};

/// Source-level field name with any `r#` prefix removed.
pub(crate) fn field_name(field: &syn::Field) -> String {
    field
        .ident
        .as_ref()
        .map_or_else(String::new, |ident| ident.unraw().to_string())
}

/// Renders one `FieldDescriptor` constructor chain.
pub(crate) fn descriptor_tokens(
    field: &syn::Field,
    role: &FieldRole,
    krate: &TokenStream,
) -> TokenStream {
    let name = field_name(field);
    let ty = field.ty.to_token_stream().to_string();
    let (pointer, _) = indirection(&field.ty);

    let mut chain = quote! { #krate::FieldDescriptor::new(#name, #ty) };
    match role {
        FieldRole::Skipped => {}
        FieldRole::Terminal(text) => chain.extend(quote! { .with_default(#text) }),
        FieldRole::Nested => chain.extend(quote! { .with_default(#NESTED_MARKER).structural() }),
        FieldRole::Flatten => chain.extend(quote! { .embedded().structural() }),
    }
    if pointer.is_indirect() {
        chain.extend(quote! { .indirect() });
    }
    chain
}
