//! Slot accessor generation.
//!
//! Each candidate field becomes one `match` arm in the generated
//! `field_mut`. Pointer-like fields are bound to a fresh default target
//! before the slot is handed out, so nested writes land in the new value.
//! Records allocated that way are handed out as `FieldMut::Allocated`.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{FieldRole, Indirection, indirection, unsupported_kind};

/// Place expression yielding `&mut Pointee` for the field.
fn place(ident: &syn::Ident, pointer: Indirection) -> TokenStream {
    match pointer {
        Indirection::Direct => quote! { &mut self.#ident },
        Indirection::Boxed => quote! { &mut *self.#ident },
        Indirection::Optional => quote! {
            self.#ident.get_or_insert_with(::core::default::Default::default)
        },
        Indirection::OptionalBoxed => quote! {
            &mut **self.#ident.get_or_insert_with(::core::default::Default::default)
        },
    }
}

/// Renders the `field_mut` arm for a candidate field, or `None` when the
/// walker never asks for this field.
pub(crate) fn accessor_arm(
    index: usize,
    field: &syn::Field,
    role: &FieldRole,
    krate: &TokenStream,
) -> Option<TokenStream> {
    if !role.is_candidate() {
        return None;
    }
    let ident = field.ident.as_ref()?;
    let (pointer, pointee) = indirection(&field.ty);
    let slot = unsupported_kind(pointee).map_or_else(
        || {
            let target = place(ident, pointer);
            match role {
                FieldRole::Nested | FieldRole::Flatten => match pointer {
                    Indirection::Optional | Indirection::OptionalBoxed => quote! {
                        if self.#ident.is_none() {
                            #krate::FieldMut::Allocated(#target)
                        } else {
                            #krate::FieldMut::Record(#target)
                        }
                    },
                    Indirection::Direct | Indirection::Boxed => {
                        quote! { #krate::FieldMut::Record(#target) }
                    }
                },
                FieldRole::Terminal(_) | FieldRole::Skipped => {
                    quote! { #krate::FieldMut::Scalar(#target) }
                }
            }
        },
        |kind| quote! { #krate::FieldMut::Unsupported { kind: #kind } },
    );
    Some(quote! {
        #index => ::core::option::Option::Some(#slot),
    })
}
