//! Runtime crate path threaded through every generated item.
//!
//! Generated impls name `FieldDescriptor`, `FieldMut`, `Defaults` and
//! `Scalar` through one path. It is the absolute `::field_defaults` unless
//! `#[defaults(crate = "...")]` names an alias, which lets a facade crate
//! re-export the derives without its users depending on `field_defaults`
//! directly.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::field_defaults` when no override is present. When the user
/// specifies `#[defaults(crate = "...")]`, the returned tokens reference
/// types through the aliased dependency name instead.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::field_defaults }, |path| quote! { #path })
}
