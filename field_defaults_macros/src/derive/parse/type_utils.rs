//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise pointer-like wrappers (`Option<T>`, `Box<T>`) and the field
//! types that have no coercion rule, such as function pointers and
//! collections.

use syn::{GenericArgument, PathArguments, Type};

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the final path segment, if `ty` is a path type.
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    p.path.segments.last()
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// The check is shallow: it inspects only the final path segment, so common
/// fully-qualified forms like `std::option::Option<T>` match. The function is
/// not recursive.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let last = last_segment(ty)?;
    if last.ident != wrapper {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

/// Returns the inner type if `ty` is `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Option")
}

/// Returns the inner type if `ty` is `Box<T>`.
pub(crate) fn box_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Box")
}

/// Pointer indirection between a field and the value the walker fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Indirection {
    /// The field holds the value directly.
    Direct,
    /// `Box<T>`: always bound, dereferenced in place.
    Boxed,
    /// `Option<T>`: allocated with `Default::default()` when empty.
    Optional,
    /// `Option<Box<T>>`: allocated when empty, then dereferenced.
    OptionalBoxed,
}

impl Indirection {
    pub(crate) const fn is_indirect(self) -> bool {
        !matches!(self, Self::Direct)
    }
}

/// Classifies `ty` and returns the pointee type the walker operates on.
pub(crate) fn indirection(ty: &Type) -> (Indirection, &Type) {
    if let Some(inner) = option_inner(ty) {
        return box_inner(inner).map_or((Indirection::Optional, inner), |pointee| {
            (Indirection::OptionalBoxed, pointee)
        });
    }
    box_inner(ty).map_or((Indirection::Direct, ty), |pointee| {
        (Indirection::Boxed, pointee)
    })
}

/// Names the kind of `ty` when it has no coercion rule.
///
/// Returns `None` for path types that may implement `Scalar` or `Defaults`;
/// the trait bounds on the generated code decide those at compile time.
pub(crate) fn unsupported_kind(ty: &Type) -> Option<&'static str> {
    match ty {
        Type::BareFn(_) => Some("function"),
        Type::Slice(_) => Some("slice"),
        Type::Array(_) => Some("array"),
        Type::Tuple(_) => Some("tuple"),
        Type::Reference(_) => Some("reference"),
        Type::Ptr(_) => Some("raw pointer"),
        Type::TraitObject(_) | Type::ImplTrait(_) => Some("trait object"),
        Type::Never(_) => Some("never"),
        Type::Paren(inner) => unsupported_kind(&inner.elem),
        Type::Group(inner) => unsupported_kind(&inner.elem),
        Type::Path(_) => {
            let ident = last_segment(ty)?.ident.to_string();
            match ident.as_str() {
                "Vec" | "VecDeque" | "LinkedList" => Some("sequence"),
                "HashMap" | "BTreeMap" => Some("map"),
                "HashSet" | "BTreeSet" | "BinaryHeap" => Some("set"),
                _ => None,
            }
        }
        _ => None,
    }
}
