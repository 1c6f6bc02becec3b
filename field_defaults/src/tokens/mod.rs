//! Token substitution for textual defaults.
//!
//! A token is a `%name%` placeholder. Each registered token owns a rewrite
//! function that receives the matched placeholder and returns its
//! replacement. Registries are explicit objects; the process-wide one lives
//! inside [`Engine::global`](crate::Engine::global).

mod builtin;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use regex::{Captures, Regex};

use crate::{DefaultsError, DefaultsResult};

/// Rewrite function invoked with the matched `%name%` text.
pub type Rewrite = Arc<dyn Fn(&str) -> String + Send + Sync>;

fn validate_name(name: &str) -> DefaultsResult<()> {
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_');
    if valid {
        Ok(())
    } else {
        Err(DefaultsError::InvalidTokenName {
            name: name.to_owned(),
        })
    }
}

/// A registered token: its name, the `%name%` matcher and the rewrite.
#[derive(Clone)]
pub struct TokenDefinition {
    name: String,
    pattern: Regex,
    rewrite: Rewrite,
}

impl TokenDefinition {
    /// Builds a definition after checking `name` against `^[A-Za-z0-9_]+$`.
    ///
    /// # Errors
    ///
    /// Returns [`DefaultsError::InvalidTokenName`] for any other name.
    pub fn new(name: impl Into<String>, rewrite: Rewrite) -> DefaultsResult<Self> {
        let token: String = name.into();
        validate_name(&token)?;
        let pattern = Regex::new(&format!("%{}%", regex::escape(&token)))
            .map_err(|_| DefaultsError::InvalidTokenName {
                name: token.clone(),
            })?;
        Ok(Self {
            name: token,
            pattern,
            rewrite,
        })
    }

    /// Token name without the surrounding `%`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces every occurrence of this token in `text`.
    ///
    /// Returns `None` when the token does not occur.
    fn apply(&self, text: &str) -> Option<String> {
        let replaced = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            (self.rewrite)(caps.get(0).map_or("", |m| m.as_str()))
        });
        match replaced {
            Cow::Borrowed(_) => None,
            Cow::Owned(owned) => Some(owned),
        }
    }
}

impl fmt::Debug for TokenDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenDefinition")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("rewrite", &"<function>")
            .finish()
    }
}

/// Name-ordered set of token definitions behind a single-writer,
/// multiple-reader lock.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    definitions: RwLock<BTreeMap<String, TokenDefinition>>,
}

impl TokenRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `rand32`, `rand64` and
    /// `uuid` tokens.
    #[must_use]
    pub fn with_builtins() -> Self {
        let definitions = builtin::definitions()
            .into_iter()
            .filter_map(|(name, rewrite)| TokenDefinition::new(name, rewrite).ok())
            .map(|definition| (definition.name.clone(), definition))
            .collect();
        Self {
            definitions: RwLock::new(definitions),
        }
    }

    /// Registers a batch of tokens.
    ///
    /// Every name is validated before any entry is committed, so a rejected
    /// batch leaves the registry untouched. Re-registering a name replaces
    /// its rewrite function.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use field_defaults::{Rewrite, TokenRegistry};
    ///
    /// let registry = TokenRegistry::new();
    /// let greeting: Rewrite = Arc::new(|_: &str| "hi".to_owned());
    /// registry.configure([("greeting", greeting)])?;
    /// assert_eq!(registry.resolve("%greeting%, world"), "hi, world");
    /// # Ok::<(), field_defaults::DefaultsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DefaultsError::InvalidTokenName`] for the first name that is
    /// not made of ASCII letters, digits and `_`.
    pub fn configure<I, S>(&self, tokens: I) -> DefaultsResult<()>
    where
        I: IntoIterator<Item = (S, Rewrite)>,
        S: Into<String>,
    {
        let batch = tokens
            .into_iter()
            .map(|(name, rewrite)| TokenDefinition::new(name, rewrite))
            .collect::<DefaultsResult<Vec<_>>>()?;
        let mut definitions = self.definitions.write();
        for definition in batch {
            tracing::debug!(token = %definition.name, "registered default token");
            definitions.insert(definition.name.clone(), definition);
        }
        Ok(())
    }

    /// Registers a single token.
    ///
    /// # Errors
    ///
    /// Returns [`DefaultsError::InvalidTokenName`] when `name` is invalid.
    pub fn register<F>(&self, name: impl Into<String>, rewrite: F) -> DefaultsResult<()>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let shared: Rewrite = Arc::new(rewrite);
        self.configure([(name, shared)])
    }

    /// Rewrites every registered token occurring in `text`.
    ///
    /// Tokens are applied in name order. Rewrite functions run after the
    /// registry lock is released, so they may register tokens themselves.
    /// Text with no `%` is returned borrowed.
    #[must_use]
    pub fn resolve<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.contains('%') {
            return Cow::Borrowed(text);
        }
        let snapshot: Vec<TokenDefinition> = self.definitions.read().values().cloned().collect();
        let mut resolved = Cow::Borrowed(text);
        for definition in &snapshot {
            if let Some(replaced) = definition.apply(&resolved) {
                resolved = Cow::Owned(replaced);
            }
        }
        resolved
    }

    /// Whether a token called `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.read().contains_key(name)
    }

    /// Registered token names in resolution order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.definitions.read().keys().cloned().collect()
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.read().len()
    }

    /// Whether no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.read().is_empty()
    }
}
