//! Populate struct fields from declared textual defaults.
//!
//! Fields are annotated with `#[defaults(...)]` and the [`Defaults`] derive
//! (from the companion `field_defaults_macros` crate) generates the
//! metadata the walker needs. Terminal fields are coerced from their
//! default text after `%name%` tokens are substituted; nested and embedded
//! records are walked recursively, allocating `Option` targets on the way.
//!
//! ```
//! use field_defaults::{Defaults, Scalar};
//!
//! #[derive(Default, Scalar)]
//! struct Port(u16);
//!
//! #[derive(Default, Defaults)]
//! struct Child {
//!     #[defaults(value = "20")]
//!     age: u8,
//! }
//!
//! #[derive(Default, Defaults)]
//! struct Parent {
//!     #[defaults(value = "0o17")]
//!     port: Port,
//!     #[defaults(value = "%uuid%")]
//!     id: String,
//!     #[defaults(nested)]
//!     child: Option<Box<Child>>,
//! }
//!
//! let parent = Parent::defaulted()?;
//! assert_eq!(parent.port.0, 15);
//! assert_eq!(parent.id.len(), 36);
//! assert_eq!(parent.child.map(|c| c.age), Some(20));
//! # Ok::<(), field_defaults::DefaultsError>(())
//! ```

pub use field_defaults_macros::{Defaults, Scalar};

mod coerce;
mod engine;
mod error;
mod kind;
mod record;
mod scalar;
mod tokens;
mod walker;

pub use coerce::coerce;
pub use engine::{Engine, EngineBuilder};
pub use error::{DefaultsError, DefaultsResult};
pub use kind::{Kind, Value};
pub use record::{Defaults, FieldDescriptor, FieldMut};
pub use scalar::{Scalar, ScalarField};
pub use tokens::{Rewrite, TokenDefinition, TokenRegistry};
pub use walker::Policy;

/// Populates `target` through [`Engine::global`].
///
/// # Errors
///
/// Returns the first failure met while walking the fields.
pub fn populate(target: &mut dyn Defaults) -> DefaultsResult<()> {
    Engine::global().populate(target)
}

/// Registers a batch of tokens with [`Engine::global`].
///
/// # Errors
///
/// Returns [`DefaultsError::InvalidTokenName`] and registers nothing when
/// any name is invalid.
pub fn configure<I, S>(tokens: I) -> DefaultsResult<()>
where
    I: IntoIterator<Item = (S, Rewrite)>,
    S: Into<String>,
{
    Engine::global().configure(tokens)
}

/// Registers a single token with [`Engine::global`].
///
/// # Errors
///
/// Returns [`DefaultsError::InvalidTokenName`] when `name` is invalid.
pub fn register<F>(name: impl Into<String>, rewrite: F) -> DefaultsResult<()>
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Engine::global().register(name, rewrite)
}
