//! Error types produced by the defaulting engine.

use thiserror::Error;

use crate::Kind;

/// Convenience alias for results returned by this crate.
pub type DefaultsResult<T> = Result<T, DefaultsError>;

/// Errors that can occur while populating defaults or configuring tokens.
///
/// A failure leaves any fields assigned before it in place; callers should
/// treat the target as possibly partially populated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefaultsError {
    /// The walker was pointed at something that is not a record.
    #[error("invalid defaults target: `{ty}` is not a record")]
    InvalidTarget {
        /// Type name of the offending target.
        ty: &'static str,
    },

    /// A candidate field is declared but not reachable for mutation.
    #[error("field `{field}` of `{record}` cannot be set")]
    FieldNotSettable {
        /// Record declaring the field.
        record: &'static str,
        /// Field that could not be set.
        field: &'static str,
    },

    /// The field's type has no coercion rule.
    #[error("field `{field}` has unsupported kind `{kind}`")]
    UnsupportedKind {
        /// Field carrying the default.
        field: &'static str,
        /// Human-readable name of the unsupported kind.
        kind: &'static str,
    },

    /// The default text does not parse as the declared kind.
    #[error("invalid default value {text:?} for `{kind}`: {message}")]
    InvalidDefaultValue {
        /// Kind the text was coerced into.
        kind: Kind,
        /// Text after token substitution.
        text: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A token name does not match `^[A-Za-z0-9_]+$`.
    #[error("invalid token name {name:?}: names may only contain ASCII letters, digits and `_`")]
    InvalidTokenName {
        /// Rejected name.
        name: String,
    },

    /// A failure raised while defaulting the named field.
    #[error("field `{field}`: {source}")]
    Field {
        /// Field being defaulted when the failure occurred.
        field: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<DefaultsError>,
    },
}

impl DefaultsError {
    /// Annotates `source` with the field it was raised for.
    #[must_use]
    pub fn in_field(field: &'static str, source: Self) -> Self {
        Self::Field {
            field,
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, skipping field annotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_defaults::DefaultsError;
    /// let inner = DefaultsError::UnsupportedKind { field: "hook", kind: "function" };
    /// let err = DefaultsError::in_field("child", inner.clone());
    /// assert_eq!(err.root_cause(), &inner);
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Field { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// Dotted path of the fields annotated on the way to the root cause.
    ///
    /// Field names carried by the root cause itself (for instance the field
    /// of an [`DefaultsError::UnsupportedKind`]) are appended as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_defaults::DefaultsError;
    /// let inner = DefaultsError::UnsupportedKind { field: "hook", kind: "function" };
    /// let err = DefaultsError::in_field("child", inner);
    /// assert_eq!(err.field_path(), "child.hook");
    /// ```
    #[must_use]
    pub fn field_path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Field { field, source } => {
                    segments.push(*field);
                    current = source.as_ref();
                }
                Self::FieldNotSettable { field, .. } | Self::UnsupportedKind { field, .. } => {
                    segments.push(*field);
                    break;
                }
                _ => break,
            }
        }
        segments.join(".")
    }
}

#[cfg(test)]
mod tests;
