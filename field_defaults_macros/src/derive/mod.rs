//! Expansion entry points for the derive macros.
//!
//! Parsing and code generation live in separate modules; this file wires
//! them together and resolves the runtime crate path once per expansion.

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;

/// Expands `#[derive(Defaults)]`.
pub(crate) fn expand_defaults(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.struct_attrs.crate_path.as_ref());
    Ok(generate::defaults_impl::generate_defaults_impl(
        input, &parsed, &krate,
    ))
}

/// Expands `#[derive(Scalar)]`.
pub(crate) fn expand_scalar(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (member, inner, struct_attrs) = parse::parse_wrapper(input)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    Ok(generate::scalar_impl::generate_scalar_impl(
        input, &member, &inner, &krate,
    ))
}
