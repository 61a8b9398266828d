//! Built-in handler and placeholder tables.
//!
//! The handler table maps an extension to a placeholder *key*; the
//! placeholder table maps that key to the payload itself. The indirection
//! lets many extensions share one payload (`.png`, `.ico`, `.svg` … all
//! serve the same blank image) and lets user configuration swap a payload
//! for a whole family of extensions in one entry.

use std::collections::HashMap;

use bytes::Bytes;

use crate::placeholder::Placeholder;

/// Placeholder key reserved for requests whose extension resolved to
/// nothing. Override `placeholders["default"]` to change what unknown
/// requests receive.
pub(crate) const FALLBACK_KEY: &str = "default";

/// A 1×1 transparent GIF — the smallest well-formed image every browser
/// accepts under any raster extension.
const BLANK_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0x21, 0xf9, 0x04, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x00, 0x02, 0x01, 0x44, 0x00, 0x3b,
];

/// A source map with no sources and no mappings.
const BLANK_SOURCE_MAP: &str =
    r#"{"version":3,"file":"","sources":[],"sourcesContent":[],"names":[],"mappings":";"}"#;

/// Extension → placeholder key. Extensions are lowercase and carry the
/// leading dot, exactly as the dispatch engine extracts them.
const HANDLERS: &[(&str, &str)] = &[
    (".css",   "css"),
    (".html",  "html"),
    (".htm",   "html"),
    (".js",    "js"),
    (".mjs",   "js"),
    (".json",  "json"),
    (".map",   "map"),
    (".txt",   "text"),
    (".text",  "text"),
    (".md",    "text"),
    (".ico",   "image"),
    (".gif",   "image"),
    (".jpg",   "image"),
    (".jpeg",  "image"),
    (".png",   "image"),
    (".svg",   "image"),
    (".webp",  "image"),
    (".woff",  "font"),
    (".woff2", "font"),
    (".ttf",   "font"),
    (".otf",   "font"),
    (".eot",   "font"),
];

pub(crate) fn handlers() -> HashMap<String, String> {
    HANDLERS
        .iter()
        .map(|&(ext, key)| (ext.to_owned(), key.to_owned()))
        .collect()
}

pub(crate) fn placeholders() -> HashMap<String, Placeholder> {
    let table = [
        ("css",       Placeholder::text("/* style not found */", "text/css")),
        ("html",      Placeholder::text("<!-- page not found -->", "text/html")),
        ("js",        Placeholder::text("/* script not found */", "application/javascript")),
        ("json",      Placeholder::text("{}", "application/json")),
        ("map",       Placeholder::text(BLANK_SOURCE_MAP, "application/json")),
        ("text",      Placeholder::text("", "text/plain")),
        ("image",     Placeholder::binary(Bytes::from_static(BLANK_GIF), "image/gif")),
        ("font",      Placeholder::binary(Bytes::new(), "font/woff")),
        (FALLBACK_KEY, Placeholder::text("{}", "application/json")),
    ];
    table.into_iter().map(|(key, p)| (key.to_owned(), p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_handler_key_has_a_placeholder() {
        let placeholders = placeholders();
        for (ext, key) in HANDLERS {
            assert!(placeholders.contains_key(*key), "{ext} points at missing key {key}");
        }
    }

    #[test]
    fn fallback_key_is_present() {
        assert!(placeholders().contains_key(FALLBACK_KEY));
    }

    #[test]
    fn handler_extensions_are_normalized() {
        for (ext, _) in HANDLERS {
            assert!(ext.starts_with('.'), "{ext} misses the leading dot");
            assert_eq!(*ext, ext.to_ascii_lowercase(), "{ext} is not lowercase");
        }
    }

    #[test]
    fn blank_gif_is_a_gif() {
        assert_eq!(&BLANK_GIF[..6], b"GIF89a");
    }
}
