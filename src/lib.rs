//! # bmpgen
//!
//! Uncompressed 24-bit BMP encoder with pluggable pixel sources.
//!
//! The encoder owns the byte layout: a 14-byte file header, a 40-byte
//! BITMAPINFOHEADER, then BGR rows stored bottom-to-top and padded to a
//! multiple of 4 bytes. Callers only supply a [`PixelSource`] that fills the
//! pixel buffer, or a per-pixel closure via [`source::from_fn`].
//!
//! ## Pixel sources
//!
//! - [`source::AsciiArt`] — pasted text art, one square block per character
//! - [`source::RandomPixelSource`] — uniform random noise (`random` feature)
//!
//! ## Persistence (`std` feature)
//!
//! [`save`] writes `image.bmp` plus decimal, hex and binary dumps of the same
//! bytes under `data/`. [`DumpFormat::parse`] reads a dump back.
//!
//! ## Non-Goals
//!
//! - Compressed, palette, 16-bit or 32-bit BMP variants
//! - Decoding
//!
//! ## Usage
//!
//! ```no_run
//! use bmpgen::{Bgr8, ImageDimensions, source};
//!
//! let mut gradient = source::from_fn(|row, col| Bgr8::new(col as u8, row as u8, 128));
//! let image = bmpgen::encode(ImageDimensions::new(256, 256), &mut gradient)?;
//! assert_eq!(&image.as_bytes()[..2], b"BM");
//!
//! # #[cfg(feature = "std")]
//! bmpgen::save(&image, "gradient")?;
//! # Ok::<(), bmpgen::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod dump;
mod error;
mod limits;
mod pixel;

pub mod bmp;
pub mod source;

#[cfg(feature = "std")]
mod persist;

// Re-exports
pub use bmp::{EncodeRequest, EncodedImage, encode};
pub use dump::DumpFormat;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use limits::Limits;
#[cfg(feature = "std")]
pub use persist::{DATA_DIR_NAME, IMAGE_FILE_NAME, SavedFiles, save};
pub use pixel::{BITS_PER_PIXEL, BYTES_PER_PIXEL, Bgr8, ImageDimensions, RowLayout};
pub use source::PixelSource;
