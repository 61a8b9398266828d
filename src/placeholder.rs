//! Canned response payloads.

use bytes::Bytes;

/// A canned body plus the content type it is served with.
///
/// The text/binary split exists at configuration time only: the registry
/// encodes every payload to raw bytes once when it is built, so nothing is
/// re-encoded per request.
///
/// ```rust
/// use standin::Placeholder;
///
/// Placeholder::text("/* gone */", "text/css");
/// Placeholder::binary(vec![0x00, 0x01], "application/octet-stream");
/// ```
#[derive(Clone, Debug)]
pub enum Placeholder {
    /// A UTF-8 body with a textual content type.
    Text { body: String, content_type: String },
    /// Raw bytes with their intrinsic content type (images, fonts).
    Binary { body: Bytes, content_type: String },
}

impl Placeholder {
    /// Text payload.
    pub fn text(body: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self::Text { body: body.into(), content_type: content_type.into() }
    }

    /// Binary payload.
    pub fn binary(body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self::Binary { body: body.into(), content_type: content_type.into() }
    }

    pub(crate) fn content_type(&self) -> &str {
        match self {
            Self::Text { content_type, .. } | Self::Binary { content_type, .. } => content_type,
        }
    }

    /// Body as bytes. Text is encoded here, once; binary bodies are
    /// reference-counted, not copied.
    pub(crate) fn to_bytes(&self) -> Bytes {
        match self {
            Self::Text { body, .. } => Bytes::copy_from_slice(body.as_bytes()),
            Self::Binary { body, .. } => body.clone(),
        }
    }
}
