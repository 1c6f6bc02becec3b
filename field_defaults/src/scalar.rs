//! Terminal field types.
//!
//! [`Scalar`] is implemented for every primitive the coercion layer
//! understands. Named wrappers such as `struct Port(u16);` implement it with
//! `#[derive(Scalar)]`, reusing the wrapped primitive's kind.

use std::num::FpCategory;

use crate::{Kind, Value};

/// A type that can be assigned from a coerced [`Value`].
pub trait Scalar: Sized {
    /// Kind the coercion layer parses default text into.
    const KIND: Kind;

    /// Converts a value of [`Self::KIND`] into `Self`.
    ///
    /// Returns `None` when `value` carries a different kind.
    fn from_value(value: Value) -> Option<Self>;

    /// Whether `self` is the kind's zero value (`0`, `false`, `""`).
    fn is_zero(&self) -> bool;
}

macro_rules! integer_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

macro_rules! float_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn is_zero(&self) -> bool {
                    self.classify() == FpCategory::Zero
                }
            }
        )*
    };
}

float_scalar! {
    f32 => F32,
    f64 => F64,
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(inner) => Some(inner),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Scalar for String {
    const KIND: Kind = Kind::Str;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(inner) => Some(inner),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Object-safe view of a terminal field used by the walker.
///
/// Implemented for every [`Scalar`]; generated code hands out
/// `&mut dyn ScalarField` slots.
pub trait ScalarField {
    /// Kind the slot expects.
    fn kind(&self) -> Kind;

    /// Whether the slot currently holds its kind's zero value.
    fn is_zero(&self) -> bool;

    /// Stores `value` in the slot.
    ///
    /// # Errors
    ///
    /// Returns the kind of `value` when the slot cannot hold it.
    fn assign(&mut self, value: Value) -> Result<(), Kind>;
}

impl<T: Scalar> ScalarField for T {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn is_zero(&self) -> bool {
        Scalar::is_zero(self)
    }

    fn assign(&mut self, value: Value) -> Result<(), Kind> {
        let kind = value.kind();
        if kind != T::KIND {
            return Err(kind);
        }
        T::from_value(value)
            .map(|converted| *self = converted)
            .ok_or(kind)
    }
}
