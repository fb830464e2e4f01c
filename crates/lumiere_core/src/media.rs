//! Image payloads sent alongside generation requests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// An inline image, base64-encoded for transport.
///
/// # Examples
///
/// ```
/// use lumiere_core::ImagePayload;
///
/// let image = ImagePayload::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(image.mime_type, "image/png");
/// assert_eq!(image.data, "iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// MIME type of the encoded image
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImagePayload {
    /// Encodes raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }
}

/// Maps an image file extension to its MIME type.
///
/// ```
/// use lumiere_core::mime_for_extension;
///
/// assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
/// assert_eq!(mime_for_extension("bmp"), None);
/// ```
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
