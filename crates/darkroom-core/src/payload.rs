use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{DarkroomError, Result};

/// An encoded image: raw bytes plus the MIME type describing them.
///
/// This is the only image representation inside the session — base64 text
/// and `data:` URLs exist solely at external boundaries (the gateway wire
/// format and display locators) and are converted here.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    mime: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode a base64 payload as received from the gateway.
    pub fn from_base64(data: &str, mime: impl Into<String>) -> Result<Self> {
        let bytes = STANDARD
            .decode(data)
            .map_err(|e| DarkroomError::InvalidPayload(format!("bad base64 data: {e}")))?;
        Ok(Self::new(bytes, mime))
    }

    /// Encode the bytes as base64 for the gateway wire format.
    pub fn encode_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Render as a `data:<mime>;base64,<data>` locator.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.encode_base64())
    }

    /// Parse a `data:<mime>;base64,<data>` locator back into a payload.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| DarkroomError::InvalidPayload("missing data: scheme".into()))?;
        let (mime, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| DarkroomError::InvalidPayload("missing base64 marker".into()))?;
        if mime.is_empty() {
            return Err(DarkroomError::InvalidPayload("empty MIME type".into()));
        }
        Self::from_base64(data, mime)
    }
}

impl std::fmt::Debug for ImagePayload {
    // Avoid dumping megabytes of pixel data into logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime", &self.mime)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}
