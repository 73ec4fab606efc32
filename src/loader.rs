//! Source reference resolution and image decoding.
//!
//! A photo can arrive as a remote URL, an embedded `data:` URL, or a local
//! file path. [`Loader`] turns any of the three into a decoded raster,
//! failing with [`LoadError`] when the bytes cannot be fetched or are not a
//! decodable image. Every call decodes fresh — there is no cache, no retry,
//! and no internal deadline; callers that need a time bound impose one
//! around the call.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, ImageReader};
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed data URL (expected data:<mime>;base64,<payload>)")]
    MalformedDataUrl,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A reference to a source image, before any bytes are touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// Remote image, fetched over HTTP(S).
    Url(String),
    /// Embedded `data:<mime>;base64,<payload>` image.
    DataUrl(String),
    /// Local file path.
    Path(PathBuf),
}

impl SourceRef {
    /// Classify a raw reference string.
    ///
    /// `data:` prefixes become [`SourceRef::DataUrl`], `http://`/`https://`
    /// become [`SourceRef::Url`], and anything else is treated as a local
    /// path.
    pub fn parse(raw: &str) -> SourceRef {
        if raw.starts_with("data:") {
            SourceRef::DataUrl(raw.to_string())
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            SourceRef::Url(raw.to_string())
        } else {
            SourceRef::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Url(url) => write!(f, "{}", url),
            // Payloads run to megabytes; show only the shape
            SourceRef::DataUrl(_) => write!(f, "data:<embedded>"),
            SourceRef::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves [`SourceRef`]s into decoded images.
pub struct Loader {
    client: reqwest::blocking::Client,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Load and decode the referenced image.
    ///
    /// The format is guessed from the bytes, so any decoder compiled into
    /// the binary (JPEG, PNG, WebP) is accepted regardless of extension.
    pub fn load(&self, source: &SourceRef) -> Result<DynamicImage, LoadError> {
        let bytes = match source {
            SourceRef::Url(url) => self.fetch(url)?,
            SourceRef::DataUrl(raw) => decode_data_url(raw)?,
            SourceRef::Path(path) => std::fs::read(path)?,
        };
        log::debug!("loaded {} bytes from {}", bytes.len(), source);

        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?;
        log::debug!(
            "decoded {} to {}x{}",
            source,
            image.width(),
            image.height()
        );
        Ok(image)
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        log::info!("fetching {}", url);
        let wrap = |source| LoadError::Fetch {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().map_err(wrap)?;
        let response = response.error_for_status().map_err(wrap)?;
        Ok(response.bytes().map_err(wrap)?.to_vec())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the base64 payload from a `data:` URL.
fn decode_data_url(raw: &str) -> Result<Vec<u8>, LoadError> {
    let body = raw.strip_prefix("data:").ok_or(LoadError::MalformedDataUrl)?;
    let (meta, payload) = body.split_once(',').ok_or(LoadError::MalformedDataUrl)?;
    if !meta.ends_with(";base64") {
        return Err(LoadError::MalformedDataUrl);
    }
    Ok(BASE64.decode(payload)?)
}
