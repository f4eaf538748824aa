// ABOUTME: Raster image adapter encoding `image` crate objects as PNG or JPEG
// ABOUTME: Validates the requested format before touching the network

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use once_cell::sync::OnceCell;

use crate::error::WcatError;
use crate::transport::{self, ContentType, Payload, Transport};

static DEFAULT_FORMAT: OnceCell<ImageFormat> = OnceCell::new();

/// Choose the process-wide encoding used when `show` is called without an
/// explicit format. Only `Png` and `Jpeg` are accepted; the first successful
/// call wins and later calls are ignored. Never set, the default is PNG.
pub fn set_default_format(format: ImageFormat) -> Result<(), WcatError> {
    content_type_for(format)?;
    let _ = DEFAULT_FORMAT.set(format);
    Ok(())
}

pub fn default_format() -> ImageFormat {
    *DEFAULT_FORMAT.get_or_init(|| ImageFormat::Png)
}

/// Encode `image` and send it to the default wcat server for display.
///
/// `format` falls back to [`default_format`] when `None`. Formats other than
/// PNG and JPEG are rejected before any request is made.
pub fn show(
    image: &DynamicImage,
    name: &str,
    format: Option<ImageFormat>,
) -> Result<(), WcatError> {
    show_with(transport::default_client(), image, name, format)
}

/// Same as [`show`] but delivering through an explicit transport.
pub fn show_with<T: Transport + ?Sized>(
    transport: &T,
    image: &DynamicImage,
    name: &str,
    format: Option<ImageFormat>,
) -> Result<(), WcatError> {
    let format = format.unwrap_or_else(default_format);
    let content_type = content_type_for(format)?;

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format)?;

    transport.post_file(Payload::Bytes(buffer.into_inner()), content_type, name);
    Ok(())
}

fn content_type_for(format: ImageFormat) -> Result<ContentType, WcatError> {
    match format {
        ImageFormat::Png => Ok(ContentType::Png),
        ImageFormat::Jpeg => Ok(ContentType::Jpeg),
        other => Err(WcatError::UnsupportedFormat(other)),
    }
}
