//! Per-request dispatch: answer with a placeholder or defer to the chain.

use bytes::Bytes;
use http::header::{
    CACHE_CONTROL, CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, EXPIRES, PRAGMA,
};
use http::{HeaderValue, Request, Response, StatusCode};
use http_body_util::Full;
use tracing::debug;

use crate::config::Config;
use crate::registry::{Entry, Registry};

// ── Outcome ──────────────────────────────────────────────────────────────────

/// The engine's decision for one request.
///
/// "Pass to the next handler" is a value here, not a callback: the hosting
/// chain matches on the outcome and continues on [`Outcome::Deferred`],
/// instead of handing the engine a continuation to invoke.
#[derive(Debug)]
pub enum Outcome {
    /// The engine owns the response. The chain stops here.
    Handled(Response<Full<Bytes>>),
    /// The engine declines to answer. The next handler in the chain decides.
    Deferred,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// The synthesized response, if the request was handled.
    pub fn into_response(self) -> Option<Response<Full<Bytes>>> {
        match self {
            Self::Handled(response) => Some(response),
            Self::Deferred => None,
        }
    }
}

// ── ServePlaceholder ─────────────────────────────────────────────────────────

/// The placeholder engine: a resolved registry plus two policy flags.
///
/// Built once via [`Config::build`] (or [`ServePlaceholder::new`] for the
/// all-defaults form) and immutable afterwards. Every method takes `&self`
/// and touches no shared state, so one instance behind an `Arc` serves any
/// number of concurrent requests without coordination — from sync or async
/// callers alike.
///
/// ```rust
/// use standin::ServePlaceholder;
///
/// let engine = ServePlaceholder::new();
/// let response = engine
///     .respond_to_path("/missing/app.css")
///     .into_response()
///     .expect("css is in the built-in table");
/// assert_eq!(response.headers()["content-type"], "text/css");
/// ```
#[derive(Debug)]
pub struct ServePlaceholder {
    registry: Registry,
    skip_unknown: bool,
    no_cache: bool,
}

impl ServePlaceholder {
    /// Engine with the built-in tables and default policies.
    pub fn new() -> Self {
        Config::new().build()
    }

    pub(crate) fn from_config(config: Config) -> Self {
        Self {
            registry: Registry::resolve(&config),
            skip_unknown: config.skip_unknown,
            no_cache: config.no_cache,
        }
    }

    /// Decides one request. Only the URI path is read.
    pub fn respond_to<B>(&self, req: &Request<B>) -> Outcome {
        self.respond_to_path(req.uri().path())
    }

    /// Same decision from a bare path string, for chains that don't carry
    /// an [`http::Request`]. Query and fragment suffixes are ignored, so a
    /// raw request target behaves like its parsed path.
    pub fn respond_to_path(&self, path: &str) -> Outcome {
        if let Some(ext) = extension(path) {
            if let Some(entry) = self.registry.lookup(&ext) {
                debug!(extension = %ext, "serving placeholder");
                return Outcome::Handled(self.synthesize(entry));
            }
        }

        if self.skip_unknown {
            debug!(path, "no placeholder registered, deferring");
            return Outcome::Deferred;
        }

        match self.registry.fallback() {
            Some(entry) => {
                debug!(path, "serving default placeholder");
                Outcome::Handled(self.synthesize(entry))
            }
            // The reserved default payload was overridden away — behave
            // like `skip_unknown` rather than invent a body.
            None => Outcome::Deferred,
        }
    }

    /// Assembles the full response for one registry entry.
    ///
    /// Infallible: every header value below is either static or was
    /// validated when the registry was built.
    fn synthesize(&self, entry: &Entry) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(entry.body.clone()));
        *response.status_mut() = StatusCode::OK;

        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, entry.content_type.clone());
        headers.insert(CONTENT_LENGTH, HeaderValue::from(entry.body.len()));
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        if self.no_cache {
            headers.insert(
                CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            );
            headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
            headers.insert(EXPIRES, HeaderValue::from_static("0"));
        }

        response
    }
}

impl Default for ServePlaceholder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Extension extraction ─────────────────────────────────────────────────────

/// Extracts the dispatch key from a request path: the final segment's
/// suffix from its last dot onward, ASCII-lowercased.
///
/// A dot in first position starts a dotfile, not an extension, and a
/// segment without a dot has none — both resolve through the
/// unknown-extension policy. With multiple dots only the final suffix
/// counts (`app.min.js` → `.js`).
fn extension(path: &str) -> Option<String> {
    let path = match path.find(['?', '#']) {
        Some(i) => &path[..i],
        None => path,
    };
    let segment = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    match segment.rfind('.') {
        Some(i) if i > 0 => Some(segment[i..].to_ascii_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_takes_the_final_dot_suffix() {
        assert_eq!(extension("/assets/foo.json").as_deref(), Some(".json"));
        assert_eq!(extension("/a/b/app.min.js").as_deref(), Some(".js"));
        assert_eq!(extension("favicon.ico").as_deref(), Some(".ico"));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension("/FOO.JSON").as_deref(), Some(".json"));
        assert_eq!(extension("/foo.Json").as_deref(), Some(".json"));
    }

    #[test]
    fn dotless_and_malformed_paths_have_no_extension() {
        assert_eq!(extension("/no-idea"), None);
        assert_eq!(extension("/"), None);
        assert_eq!(extension(""), None);
    }

    #[test]
    fn dotfiles_have_no_extension() {
        assert_eq!(extension("/.hidden"), None);
        assert_eq!(extension("/.well-known"), None);
    }

    #[test]
    fn only_the_last_segment_counts() {
        // The dot lives in a parent segment, not the file name.
        assert_eq!(extension("/v1.2/status"), None);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(extension("/foo?bar.map"), None);
        assert_eq!(extension("/app.css?v=12").as_deref(), Some(".css"));
        assert_eq!(extension("/page#sec.tion"), None);
    }

    #[test]
    fn trailing_dot_is_not_a_registered_extension() {
        // `"foo."` carries the bare-dot suffix, which no table entry uses.
        assert_eq!(extension("/foo.").as_deref(), Some("."));
        assert!(ServePlaceholder::new()
            .respond_to_path("/foo.")
            .into_response()
            .is_some()); // falls through to the default payload
    }

    #[test]
    fn recognized_extension_is_handled_with_full_header_set() {
        let engine = ServePlaceholder::new();
        let response = engine.respond_to_path("/assets/foo.css").into_response().unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["content-type"], "text/css");
        assert_eq!(headers["content-length"], "21");
        assert_eq!(headers["connection"], "close");
        assert_eq!(headers["cache-control"], "no-cache, no-store, must-revalidate");
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
    }

    #[test]
    fn no_cache_false_omits_the_cache_header_trio() {
        let engine = Config::new().no_cache(false).build();
        let response = engine.respond_to_path("/assets/foo.css").into_response().unwrap();

        let headers = response.headers();
        assert!(headers.get("cache-control").is_none());
        assert!(headers.get("pragma").is_none());
        assert!(headers.get("expires").is_none());
        // The content headers are unconditional.
        assert_eq!(headers["content-type"], "text/css");
        assert_eq!(headers["connection"], "close");
    }

    #[test]
    fn unknown_extension_serves_the_default_payload() {
        let engine = ServePlaceholder::new();
        let response = engine.respond_to_path("/assets/foo.unknown").into_response().unwrap();

        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["content-length"], "2");
    }

    #[test]
    fn skip_unknown_defers_instead() {
        let engine = Config::new().skip_unknown(true).build();
        assert!(!engine.respond_to_path("/assets/foo.unknown").is_handled());
        assert!(!engine.respond_to_path("/no-extension").is_handled());
        // Registered extensions are still answered.
        assert!(engine.respond_to_path("/assets/foo.css").is_handled());
    }

    #[test]
    fn respond_to_reads_the_request_path() {
        let engine = ServePlaceholder::new();
        let req = Request::builder()
            .uri("/assets/foo.png?cache=no")
            .body(())
            .unwrap();

        let response = engine.respond_to(&req).into_response().unwrap();
        assert_eq!(response.headers()["content-type"], "image/gif");
    }
}
