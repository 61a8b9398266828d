//! # standin
//!
//! Deterministic placeholder responses for asset requests nothing else
//! handled. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! When a page references an asset that no longer exists — a stale
//! `/app.js.map`, a `/favicon.ico` you never shipped — the request falls
//! through your routes and comes back as a generic 404 page. Browsers then
//! parse HTML where they expected CSS, log console errors, and retry.
//! standin sits at the end of the request chain and answers those requests
//! deterministically instead: a harmless canned body with the right content
//! type, picked by the path's file extension.
//!
//! Per request it makes exactly one decision:
//!
//! - **Handled** — the extension has a registered placeholder (or the
//!   unknown-extension default applies). standin forms the complete
//!   response: status 200, payload bytes, `content-type`,
//!   `content-length`, `connection: close`, and cache-suppressing headers
//!   unless disabled.
//! - **Deferred** — the extension is unregistered and `skip_unknown` is
//!   set. Your chain continues to whatever comes next.
//!
//! The lookup table is built once from built-in defaults plus your
//! overrides, then never mutated: request handling is pure and infallible.
//!
//! ## Quick start
//!
//! ```rust
//! use standin::{Config, Outcome, ServePlaceholder};
//!
//! // All defaults: answer everything, suppress caching.
//! let engine = ServePlaceholder::new();
//! assert!(engine.respond_to_path("/404.json").is_handled());
//!
//! // Or tuned: pass unknown extensions on, drop source-map requests back
//! // into the unknown bucket.
//! let engine = Config::new()
//!     .skip_unknown(true)
//!     .disable(".map")
//!     .build();
//!
//! // In your chain, after every real route has declined:
//! match engine.respond_to_path("/assets/logo.png") {
//!     Outcome::Handled(response) => {
//!         // send it — a 1×1 transparent GIF with image/gif
//!         assert_eq!(response.headers()["content-type"], "image/gif");
//!     }
//!     Outcome::Deferred => {
//!         // fall through to your 404
//!     }
//! }
//! ```
//!
//! Responses are plain [`http::Response`]s over
//! [`http_body_util::Full`]`<`[`bytes::Bytes`]`>`, so the engine drops into
//! any hyper-flavoured service without adapters — see `demos/basic.rs` for
//! a complete chain.

mod config;
mod defaults;
mod engine;
mod placeholder;
mod registry;

pub use config::Config;
pub use engine::{Outcome, ServePlaceholder};
pub use placeholder::Placeholder;
