//! Input parsing for the `Defaults` and `Scalar` derive macros.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors. Targets
//! that are not structs with named fields are rejected here, which is the
//! compile-time face of an invalid defaulting target.

use syn::{Data, DeriveInput, Fields};

use super::{FieldRole, StructAttrs, parse_field_role, parse_struct_attrs};

/// Everything the `Defaults` generator needs from the user's struct.
pub(crate) struct ParsedInput {
    pub fields: Vec<syn::Field>,
    pub roles: Vec<FieldRole>,
    pub struct_attrs: StructAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Returns the struct's named fields alongside the parsed struct attributes
/// and one [`FieldRole`] per field, in declaration order.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<ParsedInput, syn::Error> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "invalid defaults target: Defaults requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "invalid defaults target: Defaults can only be derived for structs",
            ));
        }
    };

    let roles = fields
        .iter()
        .map(parse_field_role)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParsedInput {
        fields,
        roles,
        struct_attrs,
    })
}

/// Locates the single wrapped field of a `Scalar` newtype.
///
/// Accepts `struct Port(u16);` and `struct Name { inner: String }`. The
/// returned member addresses the field in generated code.
pub(crate) fn parse_wrapper(
    input: &DeriveInput,
) -> Result<(syn::Member, syn::Type, StructAttrs), syn::Error> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Scalar can only be derived for single-field wrapper structs",
        ));
    };
    let mut iter = data.fields.iter();
    let (Some(field), None) = (iter.next(), iter.next()) else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "Scalar requires exactly one field",
        ));
    };
    let member = field.ident.clone().map_or_else(
        || syn::Member::Unnamed(syn::Index::from(0)),
        syn::Member::Named,
    );
    Ok((member, field.ty.clone(), struct_attrs))
}
