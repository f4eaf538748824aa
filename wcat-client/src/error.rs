// ABOUTME: Error types for the wcat client with caller-facing messages
// ABOUTME: Separates caller-input mistakes from wrapped-library serialization failures

use image::ImageFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WcatError {
    #[error("format must be JPEG or PNG")]
    UnsupportedFormat(ImageFormat),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to render chart: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WcatError {
    /// True for errors caused by the caller's own arguments, as opposed to
    /// failures inside a wrapped visualization library.
    pub fn is_input_error(&self) -> bool {
        matches!(self, WcatError::UnsupportedFormat(_))
    }
}
