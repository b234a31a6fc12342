//! Background dog image names: listing filter, traversal guard and URLs.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static IMAGE_EXT_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)\.(png|jpg|jpeg|webp|gif)$").ok());

pub const IMAGE_LIST_ENDPOINT: &str = "/api/dog-images";
pub const IMAGE_ENDPOINT: &str = "/api/dog-image";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageNameError {
    #[error("image name is empty or escapes the image directory")]
    InvalidName,
    #[error("unsupported image format `{0}`")]
    UnsupportedFormat(String),
}

/// Response body of the image listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageList {
    #[serde(default)]
    pub images: Vec<String>,
}

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
}

/// MIME type for a supported image extension.
#[must_use]
pub fn image_mime_type(name: &str) -> Option<&'static str> {
    match extension(name)?.as_str() {
        ".png" => Some("image/png"),
        ".jpg" | ".jpeg" => Some("image/jpeg"),
        ".webp" => Some("image/webp"),
        ".gif" => Some("image/gif"),
        _ => None,
    }
}

/// Reject names that could escape the image directory or are not images.
///
/// # Errors
///
/// Returns [`ImageNameError::InvalidName`] for empty names or names containing
/// `..`, `/` or `\`, and [`ImageNameError::UnsupportedFormat`] for other extensions.
pub fn validate_image_name(name: &str) -> Result<&'static str, ImageNameError> {
    if name.is_empty() || name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(ImageNameError::InvalidName);
    }
    image_mime_type(name)
        .ok_or_else(|| ImageNameError::UnsupportedFormat(extension(name).unwrap_or_default()))
}

/// Keep image files only, sorted by name.
#[must_use]
pub fn filter_image_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let Some(re) = IMAGE_EXT_RE.as_ref() else {
        return Vec::new();
    };
    let mut images: Vec<String> = names
        .into_iter()
        .map(Into::into)
        .filter(|name| re.is_match(name))
        .collect();
    images.sort();
    images
}

/// URL that serves a single image, with the name percent-encoded.
#[must_use]
pub fn image_url(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*'
            | b'\'' | b'(' | b')' => encoded.push(char::from(byte)),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("{IMAGE_ENDPOINT}?name={encoded}")
}
