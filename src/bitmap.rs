//! Conversion of image files into clipboard bitmap payloads.
//!
//! Clipboard image consumers expect a device-independent bitmap: the raw
//! `BITMAPINFOHEADER` plus pixel array, without the leading file header a
//! `.bmp` on disk carries. The payload here is produced by re-encoding the
//! decoded image as a 24-bit BMP and stripping that file header.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{BinderError, Result};

/// Length of the BITMAPFILEHEADER that precedes the DIB data in a BMP file.
pub const BMP_FILE_HEADER_LEN: usize = 14;

/// Length of the BITMAPINFOHEADER the payload starts with.
pub const DIB_INFO_HEADER_LEN: usize = 40;

/// Decode an image file and convert it to a DIB clipboard payload.
///
/// Any decodable format is accepted; the image is flattened to RGB first,
/// so alpha channels are dropped.
pub fn dib_from_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|err| {
        BinderError::image_decode(path.display().to_string(), err.to_string())
    })?;
    dib_payload(&image).map_err(|err| {
        BinderError::image_decode(path.display().to_string(), err.to_string())
    })
}

/// Re-encode a decoded image as 24-bit BMP and strip the file header.
pub fn dib_payload(image: &DynamicImage) -> std::result::Result<Vec<u8>, image::ImageError> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut encoded = Cursor::new(Vec::new());
    rgb.write_to(&mut encoded, ImageFormat::Bmp)?;

    let mut bmp = encoded.into_inner();
    bmp.drain(..BMP_FILE_HEADER_LEN);
    Ok(bmp)
}
