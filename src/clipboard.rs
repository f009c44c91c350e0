//! System clipboard access.
//!
//! Every operation constructs its own clipboard handle and drops it before
//! returning, so the clipboard is never held open across steps of a paste
//! sequence. Read failures stay inside this module: a clipboard holding no
//! text (or a non-text type) is a logged warning, not an error.

use std::path::Path;

use tracing::warn;

use crate::error::{BinderError, Result};

/// Read the Unicode text currently on the clipboard.
///
/// Returns `None` when the clipboard is empty, holds a non-text type, or
/// cannot be opened at all.
pub fn read_text() -> Option<String> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            warn!("cannot open clipboard: {err}");
            return None;
        }
    };

    match clipboard.get_text() {
        Ok(text) => Some(text),
        Err(err) => {
            warn!("cannot read clipboard text: {err}");
            None
        }
    }
}

/// Clear the clipboard and write the snapshot back if it holds text.
pub fn restore_text(snapshot: Option<String>) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| BinderError::clipboard(err.to_string()))?;

    clipboard
        .clear()
        .map_err(|err| BinderError::clipboard(err.to_string()))?;

    match snapshot {
        Some(text) if !text.is_empty() => clipboard
            .set_text(text)
            .map_err(|err| BinderError::clipboard(err.to_string())),
        _ => Ok(()),
    }
}

/// Decode an image file and place it on the clipboard as bitmap data.
pub fn write_image(path: impl AsRef<Path>) -> Result<()> {
    write_image_impl(path.as_ref())
}

#[cfg(target_os = "windows")]
fn write_image_impl(path: &Path) -> Result<()> {
    use clipboard_win::{formats, set_clipboard};

    // CF_DIB: device-independent bitmap without the BMP file header.
    const CF_DIB: u32 = 8;

    let payload = crate::bitmap::dib_from_file(path)?;
    set_clipboard(formats::RawData(CF_DIB), payload.as_slice())
        .map_err(|err| BinderError::clipboard(err.to_string()))
}

#[cfg(not(target_os = "windows"))]
fn write_image_impl(path: &Path) -> Result<()> {
    let image = image::open(path).map_err(|err| {
        BinderError::image_decode(path.display().to_string(), err.to_string())
    })?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| BinderError::clipboard(err.to_string()))?;
    clipboard
        .set_image(arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: rgba.into_raw().into(),
        })
        .map_err(|err| BinderError::clipboard(err.to_string()))
}
