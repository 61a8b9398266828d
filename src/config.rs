//! Configuration surface.
//!
//! Four options, nothing else: `handlers`, `placeholders`, `skip_unknown`,
//! `no_cache`. Everything omitted falls back to the built-in tables in
//! [`defaults`](crate::defaults). Each setter returns `self` so a
//! configuration reads as one chain, terminated by [`Config::build`].

use std::collections::HashMap;

use crate::engine::ServePlaceholder;
use crate::placeholder::Placeholder;

/// A handler-table override: point an extension at a placeholder key, or
/// switch the extension off even when a built-in entry exists.
#[derive(Clone, Debug)]
pub(crate) enum HandlerOverride {
    Use(String),
    Disable,
}

/// Configuration for a [`ServePlaceholder`] engine.
///
/// ```rust
/// use standin::{Config, Placeholder};
///
/// let engine = Config::new()
///     .handler(".wasm", "json")
///     .disable(".map")
///     .placeholder("json", Placeholder::text("null", "application/json"))
///     .skip_unknown(true)
///     .build();
///
/// assert!(engine.respond_to_path("/pkg/app.wasm").is_handled());
/// assert!(!engine.respond_to_path("/app.js.map").is_handled());
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) handlers: HashMap<String, HandlerOverride>,
    pub(crate) placeholders: HashMap<String, Placeholder>,
    pub(crate) skip_unknown: bool,
    pub(crate) no_cache: bool,
}

impl Config {
    /// Empty override set: built-in tables, answer unknown extensions with
    /// the reserved default payload, suppress caching.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            placeholders: HashMap::new(),
            skip_unknown: false,
            no_cache: true,
        }
    }

    /// Maps `ext` (with leading dot, e.g. `".wasm"`) to a placeholder key.
    /// Replaces any built-in entry for the same extension.
    pub fn handler(mut self, ext: &str, key: &str) -> Self {
        self.handlers
            .insert(ext.to_ascii_lowercase(), HandlerOverride::Use(key.to_owned()));
        self
    }

    /// Removes `ext` from the resolved table, built-in entry included.
    /// Requests for it then follow the unknown-extension policy.
    pub fn disable(mut self, ext: &str) -> Self {
        self.handlers
            .insert(ext.to_ascii_lowercase(), HandlerOverride::Disable);
        self
    }

    /// Adds or replaces the payload behind `key`. Built-in keys (`"css"`,
    /// `"image"`, `"default"`, …) can be overridden like any other.
    pub fn placeholder(mut self, key: &str, placeholder: Placeholder) -> Self {
        self.placeholders.insert(key.to_owned(), placeholder);
        self
    }

    /// When `true`, requests whose extension has no resolved entry are
    /// deferred to the rest of the chain instead of answered with the
    /// reserved default payload. Defaults to `false`.
    pub fn skip_unknown(mut self, skip: bool) -> Self {
        self.skip_unknown = skip;
        self
    }

    /// When `true` (the default), every synthesized response carries
    /// cache-suppressing headers (`cache-control`, `pragma`, `expires`).
    /// When `false`, none of the three is set.
    pub fn no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    /// Resolves the registry and produces the engine.
    ///
    /// # Panics
    ///
    /// Panics if a placeholder carries a content type that is not a valid
    /// header value. Misconfiguration surfaces here, once, at setup —
    /// never during request handling.
    pub fn build(self) -> ServePlaceholder {
        ServePlaceholder::from_config(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
