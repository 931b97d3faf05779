//! 24-bit uncompressed BMP encoding.
//!
//! Use top-level [`crate::encode`] or [`crate::EncodeRequest`].

mod encode;
mod header;

pub use encode::{EncodeRequest, EncodedImage, encode};
pub use header::{DIB_HEADER_SIZE, FILE_HEADER_SIZE, PIXEL_DATA_OFFSET};
