//! Parsing utilities for the `Defaults` and `Scalar` derive macros.
//!
//! Attribute parsing is strict: unknown keys and contradictory combinations
//! are reported with a span so mistakes surface at compile time instead of
//! silently leaving a field untouched.

use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, UnOp};

mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ParsedInput, parse_input, parse_wrapper};
use literals::lit_str;
pub(crate) use type_utils::{Indirection, indirection, unsupported_kind};

/// Textual default recorded for `#[defaults(nested)]` fields.
pub(crate) const NESTED_MARKER: &str = ".";

#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[defaults(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `field_defaults::`.
    pub crate_path: Option<syn::Path>,
}

/// How a single field takes part in defaulting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FieldRole {
    /// No `#[defaults(...)]` attribute; the walker leaves the field alone.
    Skipped,
    /// Terminal field coerced from the given text. Empty text behaves like
    /// [`FieldRole::Skipped`] at run time.
    Terminal(String),
    /// Record-typed field the walker recurses into.
    Nested,
    /// Embedded record, always walked.
    Flatten,
}

impl FieldRole {
    pub(crate) fn is_candidate(&self) -> bool {
        match self {
            Self::Skipped => false,
            Self::Terminal(text) => !text.is_empty(),
            Self::Nested | Self::Flatten => true,
        }
    }
}

#[derive(Default)]
struct RawFieldAttrs {
    value: Option<String>,
    nested: bool,
    flatten: bool,
}

/// Iterate all `#[defaults(...)]` attributes once and apply a callback.
fn parse_defaults_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("defaults")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &syn::meta::ParseNestedMeta, expected: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown defaults attribute `{key}`; expected {expected}"))
}

/// Extracts `#[defaults(...)]` metadata applied to a struct.
///
/// Only `crate = "..."` is recognised at struct level.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_defaults_attrs(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(unknown_key(meta, "`crate`"))
        }
    })?;
    Ok(out)
}

/// Renders the `value = ...` expression as default text.
///
/// Accepts string, integer, float and bool literals plus negated numeric
/// literals. Integer text keeps its base prefix so `value = 0x10` and
/// `value = "0x10"` describe the same default.
fn default_text(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => literal_text(lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: operand,
            ..
        }) => match operand.as_ref() {
            Expr::Lit(ExprLit {
                lit: lit @ (Lit::Int(_) | Lit::Float(_)),
                ..
            }) => Ok(format!("-{}", literal_text(lit)?)),
            other => Err(syn::Error::new_spanned(
                other,
                "only numeric literals may be negated in a default value",
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            "value must be a string, integer, float or bool literal",
        )),
    }
}

fn literal_text(lit: &Lit) -> syn::Result<String> {
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        Lit::Int(i) if i.suffix().is_empty() => Ok(i.to_string()),
        Lit::Float(f) if f.suffix().is_empty() => Ok(f.to_string()),
        Lit::Int(_) | Lit::Float(_) => Err(syn::Error::new_spanned(
            lit,
            "numeric defaults must not carry a type suffix; the field type decides the kind",
        )),
        other => Err(syn::Error::new_spanned(
            other,
            "value must be a string, integer, float or bool literal",
        )),
    }
}

fn apply_field_attr(meta: &syn::meta::ParseNestedMeta, out: &mut RawFieldAttrs) -> syn::Result<()> {
    if meta.path.is_ident("value") {
        if out.value.is_some() {
            return Err(meta.error("duplicate `value` attribute"));
        }
        let expr: Expr = meta.value()?.parse()?;
        out.value = Some(default_text(&expr)?);
        Ok(())
    } else if meta.path.is_ident("nested") {
        out.nested = true;
        Ok(())
    } else if meta.path.is_ident("flatten") {
        out.flatten = true;
        Ok(())
    } else {
        Err(unknown_key(meta, "`value`, `nested` or `flatten`"))
    }
}

/// Parses field-level `#[defaults(...)]` attributes into a [`FieldRole`].
///
/// `value` cannot be combined with `nested` or `flatten`: a record field is
/// either walked or parsed, never both.
pub(crate) fn parse_field_role(field: &syn::Field) -> Result<FieldRole, syn::Error> {
    let mut raw = RawFieldAttrs::default();
    parse_defaults_attrs(&field.attrs, |meta| apply_field_attr(meta, &mut raw))?;
    let annotated = field.attrs.iter().any(|a| a.path().is_ident("defaults"));
    match (raw.value, raw.nested, raw.flatten) {
        (None, false, false) if annotated => Err(syn::Error::new_spanned(
            field,
            "empty #[defaults()] attribute; expected `value`, `nested` or `flatten`",
        )),
        (None, false, false) => Ok(FieldRole::Skipped),
        (Some(text), false, false) => Ok(FieldRole::Terminal(text)),
        (None, true, false) => Ok(FieldRole::Nested),
        (None, _, true) => Ok(FieldRole::Flatten),
        (Some(_), _, _) => Err(syn::Error::new_spanned(
            field,
            "`value` cannot be combined with `nested` or `flatten`",
        )),
    }
}
