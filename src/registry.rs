//! Resolved extension → payload lookup table.
//!
//! Built once from the default tables plus user overrides, then read-only
//! for the life of the engine. Payload bytes and the `content-type` header
//! value are materialized here so the per-request path is a single hash
//! probe with no encoding or parsing left to do.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderValue;
use tracing::warn;

use crate::config::{Config, HandlerOverride};
use crate::defaults;
use crate::placeholder::Placeholder;

/// A fully materialized response seed for one extension.
#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) body: Bytes,
    pub(crate) content_type: HeaderValue,
}

/// The resolved, immutable mapping consulted per request.
#[derive(Debug)]
pub(crate) struct Registry {
    entries: HashMap<String, Entry>,
    fallback: Option<Entry>,
}

impl Registry {
    /// Two-stage merge, then eager materialization.
    ///
    /// Stage one overlays user placeholders on the built-in payload table;
    /// stage two overlays user handler entries on the built-in extension
    /// table, where [`HandlerOverride::Disable`] deletes the extension
    /// outright. A handler left pointing at a key with no payload logs a
    /// warning and stays unregistered — that is the one configuration
    /// mistake that degrades instead of failing, so a typo in one entry
    /// cannot take request handling down.
    ///
    /// # Panics
    ///
    /// Panics if a placeholder's content type is not a valid header value.
    pub(crate) fn resolve(config: &Config) -> Self {
        let mut placeholders = defaults::placeholders();
        for (key, placeholder) in &config.placeholders {
            placeholders.insert(key.clone(), placeholder.clone());
        }

        let mut handlers = defaults::handlers();
        for (ext, entry) in &config.handlers {
            match entry {
                HandlerOverride::Use(key) => {
                    handlers.insert(ext.clone(), key.clone());
                }
                HandlerOverride::Disable => {
                    handlers.remove(ext);
                }
            }
        }

        let mut entries = HashMap::with_capacity(handlers.len());
        for (ext, key) in handlers {
            match materialize(&placeholders, &key) {
                Some(entry) => {
                    entries.insert(ext, entry);
                }
                None => {
                    warn!(extension = %ext, key = %key, "handler references a missing placeholder, extension left unregistered");
                }
            }
        }

        let fallback = materialize(&placeholders, defaults::FALLBACK_KEY);

        Self { entries, fallback }
    }

    /// Exact-match lookup. `ext` must be lowercase with its leading dot.
    pub(crate) fn lookup(&self, ext: &str) -> Option<&Entry> {
        self.entries.get(ext)
    }

    /// The reserved entry answering unknown extensions, if it resolved.
    pub(crate) fn fallback(&self) -> Option<&Entry> {
        self.fallback.as_ref()
    }
}

fn materialize(placeholders: &HashMap<String, Placeholder>, key: &str) -> Option<Entry> {
    let placeholder = placeholders.get(key)?;
    let content_type = HeaderValue::from_str(placeholder.content_type())
        .unwrap_or_else(|e| panic!("invalid content-type for placeholder `{key}`: {e}"));
    Some(Entry { body: placeholder.to_bytes(), content_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve() {
        let registry = Registry::resolve(&Config::new());
        let entry = registry.lookup(".json").unwrap();
        assert_eq!(entry.body.as_ref(), b"{}");
        assert_eq!(entry.content_type, "application/json");
        assert!(registry.fallback().is_some());
    }

    #[test]
    fn user_placeholder_wins_over_default() {
        let config = Config::new()
            .placeholder("json", Placeholder::text("null", "application/json"));
        let registry = Registry::resolve(&config);
        assert_eq!(registry.lookup(".json").unwrap().body.as_ref(), b"null");
    }

    #[test]
    fn user_handler_can_retarget_an_extension() {
        let config = Config::new().handler(".xml", "html");
        let registry = Registry::resolve(&config);
        let entry = registry.lookup(".xml").unwrap();
        assert_eq!(entry.body.as_ref(), b"<!-- page not found -->");
        assert_eq!(entry.content_type, "text/html");
    }

    #[test]
    fn disable_removes_a_default_entry() {
        let registry = Registry::resolve(&Config::new().disable(".css"));
        assert!(registry.lookup(".css").is_none());
        // Unrelated entries survive.
        assert!(registry.lookup(".js").is_some());
    }

    #[test]
    fn handler_extensions_are_lowercased_at_build() {
        let registry = Registry::resolve(&Config::new().handler(".WASM", "json"));
        assert!(registry.lookup(".wasm").is_some());
    }

    #[test]
    fn dangling_key_leaves_extension_unregistered() {
        let registry = Registry::resolve(&Config::new().handler(".xyz", "no-such-key"));
        assert!(registry.lookup(".xyz").is_none());
    }

    #[test]
    fn fallback_payload_can_be_overridden() {
        let config = Config::new()
            .placeholder("default", Placeholder::text("gone", "text/plain"));
        let registry = Registry::resolve(&config);
        let fallback = registry.fallback().unwrap();
        assert_eq!(fallback.body.as_ref(), b"gone");
        assert_eq!(fallback.content_type, "text/plain");
    }

    #[test]
    #[should_panic(expected = "invalid content-type")]
    fn invalid_content_type_fails_at_build() {
        let config = Config::new()
            .placeholder("bad", Placeholder::text("x", "broken\nvalue"))
            .handler(".bad", "bad");
        Registry::resolve(&config);
    }
}
