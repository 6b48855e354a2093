//! Error types.

use thiserror::Error;

/// Message encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Message is empty or does not fit a version 1-M symbol in byte mode.
    #[error("invalid message length: {len} bytes, expected 1 to {max}")]
    InvalidLength {
        /// Length of the rejected message.
        len: usize,
        /// Largest length that fits.
        max: usize,
    },
}

/// Text translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    #[error("text contains characters that cannot be represented in {charset}")]
    Unmappable { charset: &'static str },
}

/// Raster output errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid module size {pixel}, expected 1 to {max} pixels")]
    InvalidPixelSize { pixel: u32, max: u32 },
}

/// Symbol scanning errors.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("QR code not found")]
    NotFound,

    #[error("QR code cannot be parsed: {reason}")]
    Decode { reason: String },
}
