//! Defaulting engine: a token registry paired with an assignment policy.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::walker::Walker;
use crate::{Defaults, DefaultsResult, Policy, Rewrite, TokenRegistry};

static GLOBAL: LazyLock<Engine> = LazyLock::new(|| Engine {
    tokens: TokenRegistry::with_builtins(),
    policy: Policy::ZeroOnly,
});

/// Populates records from their declared defaults.
///
/// # Examples
///
/// ```
/// use field_defaults::{Defaults, Engine, Policy};
///
/// #[derive(Default, Defaults)]
/// struct Greeting {
///     #[defaults(value = "%greeting%, world")]
///     text: String,
/// }
///
/// let engine = Engine::builder()
///     .policy(Policy::Overwrite)
///     .token("greeting", |_| "hi".to_owned())
///     .build()?;
/// let mut greeting = Greeting { text: "bye".to_owned() };
/// engine.populate(&mut greeting)?;
/// assert_eq!(greeting.text, "hi, world");
/// # Ok::<(), field_defaults::DefaultsError>(())
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    tokens: TokenRegistry,
    policy: Policy,
}

impl Engine {
    /// An engine with no tokens and the [`Policy::ZeroOnly`] policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The process-wide engine behind [`crate::populate`],
    /// [`crate::configure`] and [`Defaults::populate_defaults`].
    ///
    /// Created on first use with the built-in tokens and the
    /// [`Policy::ZeroOnly`] policy.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Token registry consulted before coercion.
    #[must_use]
    pub const fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// Assignment policy for terminal fields.
    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Registers a batch of tokens. See [`TokenRegistry::configure`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::DefaultsError::InvalidTokenName`] and registers
    /// nothing when any name is invalid.
    pub fn configure<I, S>(&self, tokens: I) -> DefaultsResult<()>
    where
        I: IntoIterator<Item = (S, Rewrite)>,
        S: Into<String>,
    {
        self.tokens.configure(tokens)
    }

    /// Registers a single token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DefaultsError::InvalidTokenName`] when `name` is
    /// invalid.
    pub fn register<F>(&self, name: impl Into<String>, rewrite: F) -> DefaultsResult<()>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.tokens.register(name, rewrite)
    }

    /// Walks `target` and assigns every candidate field from its default.
    ///
    /// Fields assigned before a failure keep their new values.
    ///
    /// # Errors
    ///
    /// Returns the first failure in declaration order, annotated with the
    /// path of fields leading to it.
    pub fn populate(&self, target: &mut dyn Defaults) -> DefaultsResult<()> {
        tracing::debug!(
            record = target.record_name(),
            policy = ?self.policy,
            "populating defaults"
        );
        Walker::new(&self.tokens, self.policy).walk(target)
    }
}

/// Builder for [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    policy: Policy,
    builtins: bool,
    tokens: Vec<(String, Rewrite)>,
}

impl EngineBuilder {
    /// Selects the assignment policy.
    #[must_use]
    pub const fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Includes the built-in `rand32`, `rand64` and `uuid` tokens.
    #[must_use]
    pub const fn builtin_tokens(mut self) -> Self {
        self.builtins = true;
        self
    }

    /// Adds a token. Names are validated by [`EngineBuilder::build`].
    #[must_use]
    pub fn token<F>(mut self, name: impl Into<String>, rewrite: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let shared: Rewrite = Arc::new(rewrite);
        self.tokens.push((name.into(), shared));
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DefaultsError::InvalidTokenName`] for the first
    /// invalid token name.
    pub fn build(self) -> DefaultsResult<Engine> {
        let tokens = if self.builtins {
            TokenRegistry::with_builtins()
        } else {
            TokenRegistry::new()
        };
        tokens.configure(self.tokens)?;
        Ok(Engine {
            tokens,
            policy: self.policy,
        })
    }
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tokens.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("EngineBuilder")
            .field("policy", &self.policy)
            .field("builtins", &self.builtins)
            .field("tokens", &names)
            .finish()
    }
}
