//! Uploaded plan images

use serde::{Deserialize, Serialize};

use crate::errors::{PlanshotError, Result};

/// Image encodings the extraction service is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A photographed plan, held in memory for the duration of one run.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    name: String,
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap already-validated image bytes.
    ///
    /// # Errors
    /// Returns `PlanshotError::InvalidInput` when `bytes` is empty.
    pub fn new(name: impl Into<String>, format: ImageFormat, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if bytes.is_empty() {
            return Err(PlanshotError::InvalidInput(format!("image '{name}' is empty")));
        }
        Ok(Self { name, format, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// Image bytes are never useful in logs.
impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("name", &self.name)
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}
