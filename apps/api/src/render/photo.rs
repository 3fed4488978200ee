//! Profile photo preparation: stage, decode, normalize, resample, re-encode.
//!
//! The upload is staged in a scoped temp file that is removed when the guard
//! drops, on success and on every error path.

use std::io::Write;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;
use tracing::debug;

/// Edge length of the resampled square photo, in pixels.
pub const PHOTO_PIXELS: u32 = 280;
const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("photo upload is empty")]
    Empty,

    #[error("failed to stage photo: {0}")]
    Stage(#[from] std::io::Error),

    #[error("failed to process photo image: {0}")]
    Image(#[from] image::ImageError),
}

/// An RGB JPEG ready to embed as a `DCTDecode` image.
#[derive(Debug, Clone)]
pub struct EmbeddedPhoto {
    pub jpeg: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Prepares a photo using the system temp directory for staging.
pub fn prepare_photo(bytes: &[u8]) -> Result<EmbeddedPhoto, PhotoError> {
    prepare_photo_in(&std::env::temp_dir(), bytes)
}

/// Prepares a photo, staging the upload under `staging_dir`.
pub fn prepare_photo_in(staging_dir: &Path, bytes: &[u8]) -> Result<EmbeddedPhoto, PhotoError> {
    if bytes.is_empty() {
        return Err(PhotoError::Empty);
    }

    let mut staged = tempfile::Builder::new()
        .prefix("resume-photo-")
        .suffix(".upload")
        .tempfile_in(staging_dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    debug!("Staged {} photo bytes at {}", bytes.len(), staged.path().display());

    let staged_bytes = std::fs::read(staged.path())?;
    let decoded = image::load_from_memory(&staged_bytes)?;

    let rgb = decoded.to_rgb8();
    let resampled =
        image::imageops::resize(&rgb, PHOTO_PIXELS, PHOTO_PIXELS, FilterType::Triangle);

    let mut jpeg = Vec::new();
    DynamicImage::ImageRgb8(resampled)
        .write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY))?;

    Ok(EmbeddedPhoto {
        jpeg,
        width_px: PHOTO_PIXELS,
        height_px: PHOTO_PIXELS,
    })
}
