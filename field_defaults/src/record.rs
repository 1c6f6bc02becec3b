//! Record metadata and the trait the walker drives.
//!
//! `#[derive(Defaults)]` generates the [`Defaults`] impl: a static table of
//! [`FieldDescriptor`]s in declaration order and a `field_mut` dispatch that
//! hands out a [`FieldMut`] slot for every candidate field.

use crate::{DefaultsResult, Engine, ScalarField};

/// Static metadata for one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as written in the source, without any `r#` prefix.
    pub name: &'static str,
    /// Declared type, as written in the source.
    pub ty: &'static str,
    /// Textual default; empty when the field carries none.
    pub default: &'static str,
    /// Embedded record, walked regardless of its default.
    pub embedded: bool,
    /// Reached through `Option` and/or `Box`.
    pub indirect: bool,
    /// Record-typed: the walker recurses instead of coercing.
    pub structural: bool,
}

impl FieldDescriptor {
    /// A descriptor with no default and no flags.
    #[must_use]
    pub const fn new(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            ty,
            default: "",
            embedded: false,
            indirect: false,
            structural: false,
        }
    }

    /// Sets the textual default.
    #[must_use]
    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Marks the field as an embedded record.
    #[must_use]
    pub const fn embedded(self) -> Self {
        Self {
            embedded: true,
            ..self
        }
    }

    /// Marks the field as pointer-indirected.
    #[must_use]
    pub const fn indirect(self) -> Self {
        Self {
            indirect: true,
            ..self
        }
    }

    /// Marks the field as record-typed.
    #[must_use]
    pub const fn structural(self) -> Self {
        Self {
            structural: true,
            ..self
        }
    }

    /// Whether the walker visits this field: it has a non-empty default or
    /// is embedded.
    #[must_use]
    pub const fn is_candidate(&self) -> bool {
        !self.default.is_empty() || self.embedded
    }
}

/// Mutable access to one candidate field.
///
/// Pointer-like fields are already bound to a target when the slot is
/// handed out, so writes through it land in the record.
pub enum FieldMut<'a> {
    /// Terminal field coerced from text.
    Scalar(&'a mut dyn ScalarField),
    /// Nested or embedded record.
    Record(&'a mut dyn Defaults),
    /// Record that was just allocated into an empty `Option` to hand out
    /// this slot.
    Allocated(&'a mut dyn Defaults),
    /// Field whose type has no coercion rule.
    Unsupported {
        /// Human-readable kind, such as `"function"` or `"map"`.
        kind: &'static str,
    },
}

/// A record whose fields can be populated from declared defaults.
///
/// Usually derived:
///
/// ```
/// use field_defaults::Defaults;
///
/// #[derive(Default, Defaults)]
/// struct Server {
///     #[defaults(value = "0x1f90")]
///     port: u16,
///     #[defaults(value = "localhost")]
///     host: String,
/// }
///
/// let server = Server::defaulted()?;
/// assert_eq!(server.port, 8080);
/// assert_eq!(server.host, "localhost");
/// # Ok::<(), field_defaults::DefaultsError>(())
/// ```
pub trait Defaults {
    /// Fully qualified type name, used in diagnostics and to stop
    /// self-referential walks.
    fn record_name(&self) -> &'static str;

    /// Every declared field, in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Slot for the field at `index` in [`Defaults::descriptors`].
    ///
    /// Returns `None` for fields the record does not expose for mutation.
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Populates `self` through the process-wide [`Engine`].
    ///
    /// # Errors
    ///
    /// Returns the first failure met while walking the fields.
    fn populate_defaults(&mut self) -> DefaultsResult<()>
    where
        Self: Sized,
    {
        Engine::global().populate(self)
    }

    /// Builds `Self::default()` and populates it through the process-wide
    /// [`Engine`].
    ///
    /// # Errors
    ///
    /// Returns the first failure met while walking the fields.
    fn defaulted() -> DefaultsResult<Self>
    where
        Self: Sized + Default,
    {
        let mut record = Self::default();
        record.populate_defaults()?;
        Ok(record)
    }
}
