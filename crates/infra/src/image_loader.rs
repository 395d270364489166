//! Loading plan photos from disk
//!
//! The format is sniffed from the file's magic bytes, not its extension, and
//! the header is read to make sure the file is a real image before it is
//! sent anywhere.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat as SniffedFormat, ImageReader};
use planshot_domain::{ImageFormat, ImageUpload, PlanshotError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// Read a JPEG or PNG file into an [`ImageUpload`].
///
/// # Errors
/// Returns `PlanshotError::InvalidInput` when the file is missing, empty,
/// not a JPEG/PNG, or has an unreadable header.
pub fn load_image(path: &Path) -> Result<ImageUpload> {
    let bytes = std::fs::read(path).map_err(|e| PlanshotError::from(InfraError::from(e)))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    image_from_bytes(name, bytes)
}

/// Validate in-memory bytes as a JPEG or PNG upload.
///
/// # Errors
/// See [`load_image`].
pub fn image_from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<ImageUpload> {
    let name = name.into();
    if bytes.is_empty() {
        return Err(PlanshotError::InvalidInput(format!("image '{name}' is empty")));
    }

    let format = match image::guess_format(&bytes) {
        Ok(SniffedFormat::Jpeg) => ImageFormat::Jpeg,
        Ok(SniffedFormat::Png) => ImageFormat::Png,
        Ok(other) => {
            return Err(PlanshotError::InvalidInput(format!(
                "image '{name}' is {other:?}; only JPEG and PNG are supported"
            )))
        }
        Err(_) => {
            return Err(PlanshotError::InvalidInput(format!(
                "'{name}' is not a recognised image; only JPEG and PNG are supported"
            )))
        }
    };

    let (width, height) = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| PlanshotError::from(InfraError::from(e)))?
        .into_dimensions()
        .map_err(|e| PlanshotError::InvalidInput(format!("image '{name}' is unreadable: {e}")))?;

    debug!(%name, ?format, width, height, size = bytes.len(), "loaded plan image");
    ImageUpload::new(name, format, bytes)
}
