//! Local image preprocessing

use std::path::Path;

use image::imageops::FilterType;
use image::GrayImage;

use crate::error::{Error, Result};

/// Edge length of the preprocessed output.
pub const PREPROCESS_SIZE: u32 = 256;

/// Load an image from disk, resize it to 256x256, and convert it to
/// single-channel grayscale.
///
/// Resizing uses bilinear interpolation and ignores the source aspect
/// ratio; the output is always exactly [`PREPROCESS_SIZE`] square. A
/// missing or undecodable file yields [`Error::ImageLoad`].
pub fn preprocess_image(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|e| Error::image_load(path, e.to_string()))?;

    let resized = img.resize_exact(PREPROCESS_SIZE, PREPROCESS_SIZE, FilterType::Triangle);

    Ok(resized.into_luma8())
}
