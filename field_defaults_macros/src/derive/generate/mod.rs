//! Code generation entry points for the derive system.
//!
//! `descriptors` renders the static field table, `accessors` renders the
//! per-field slot expressions, and the `*_impl` modules assemble complete
//! trait implementations.

pub(crate) mod accessors;
pub(crate) mod defaults_impl;
pub(crate) mod descriptors;
pub(crate) mod scalar_impl;
