//! Procedural macros for `field_defaults`.
//!
//! [`macro@Defaults`] turns `#[defaults(...)]` field attributes into a static
//! field descriptor table plus the mutable accessors the runtime walker
//! needs. [`macro@Scalar`] lets single-field wrapper types (`struct Port(u16);`)
//! take part in coercion as if they were the primitive they wrap.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;


/// Derive macro for `field_defaults::Defaults`.
///
/// Recognised field attributes:
///
/// - `#[defaults(value = "...")]` declares the textual default of a terminal
///   field. Integer, float and bool literals are accepted as well.
/// - `#[defaults(nested)]` marks a field whose type itself derives
///   `Defaults`; the walker recurses into it.
/// - `#[defaults(flatten)]` marks an embedded record that is always walked.
///
/// The struct-level `#[defaults(crate = "path")]` attribute points the
/// generated code at a renamed dependency.
#[proc_macro_derive(Defaults, attributes(defaults))]
pub fn derive_defaults(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand_defaults(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `field_defaults::Scalar` on single-field wrappers.
#[proc_macro_derive(Scalar, attributes(defaults))]
pub fn derive_scalar(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand_scalar(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
