//! BMP encoder: uncompressed 24-bit BMP fed by a [`PixelSource`].

use alloc::vec::Vec;
use enough::{Stop, Unstoppable};

use super::header::{self, DIB_HEADER_SIZE, FILE_HEADER_SIZE, PIXEL_DATA_OFFSET};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{ImageDimensions, RowLayout};
use crate::source::PixelSource;

/// Builder for an encode operation.
///
/// ```
/// use bmpgen::{Bgr8, EncodeRequest, ImageDimensions, Limits, Unstoppable, source};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let mut red = source::from_fn(|_row, _col| Bgr8::new(255, 0, 0));
/// let image = EncodeRequest::new()
///     .with_limits(&limits)
///     .encode(ImageDimensions::new(2, 2), &mut red, Unstoppable)?;
/// assert_eq!(image.len(), 54 + 8 * 2);
/// # Ok::<(), bmpgen::BitmapError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject images exceeding `limits` before any pixel memory is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode a `dims`-sized image whose pixels come from `source`.
    pub fn encode<S: PixelSource + ?Sized>(
        &self,
        dims: ImageDimensions,
        source: &mut S,
        stop: impl Stop,
    ) -> Result<EncodedImage, BitmapError> {
        let layout = RowLayout::new(dims.validate()?)?;
        if let Some(limits) = self.limits {
            limits.check_layout(&layout)?;
        }
        let dims = layout.dimensions();
        let file_size = layout.file_size()?;

        let file_header =
            header::write_fields(&header::file_header_fields(file_size), FILE_HEADER_SIZE)?;
        let dib_header = header::write_fields(&header::dib_header_fields(dims), DIB_HEADER_SIZE)?;

        tracing::debug!(
            width = dims.width,
            height = dims.height,
            padded_row_bytes = layout.padded_row_bytes,
            file_size,
            "encoding 24-bit bitmap"
        );

        stop.check()?;

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(&file_header);
        out.extend_from_slice(&dib_header);
        out.resize(file_size, 0);

        let pixels = &mut out[PIXEL_DATA_OFFSET..];
        source.fill(pixels, &layout);
        clear_row_padding(pixels, &layout);

        stop.check()?;

        Ok(EncodedImage {
            bytes: out,
            dimensions: dims,
        })
    }
}

/// Encode a `dims`-sized image from `source` with no limits and no cancellation.
pub fn encode<S: PixelSource + ?Sized>(
    dims: ImageDimensions,
    source: &mut S,
) -> Result<EncodedImage, BitmapError> {
    EncodeRequest::new().encode(dims, source, Unstoppable)
}

fn clear_row_padding(pixels: &mut [u8], layout: &RowLayout) {
    if layout.padding_bytes() == 0 {
        return;
    }
    for row in pixels.chunks_exact_mut(layout.padded_row_bytes) {
        row[layout.raw_row_bytes..].fill(0);
    }
}

/// A complete BMP file: file header, descriptor header, then pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    dimensions: ImageDimensions,
}

impl EncodedImage {
    /// The whole file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    /// The 14-byte `BM` header.
    pub fn file_header(&self) -> &[u8] {
        &self.bytes[..FILE_HEADER_SIZE]
    }

    /// The 40-byte BITMAPINFOHEADER.
    pub fn descriptor_header(&self) -> &[u8] {
        &self.bytes[FILE_HEADER_SIZE..PIXEL_DATA_OFFSET]
    }

    /// Padded BGR rows, bottom row first.
    pub fn pixel_data(&self) -> &[u8] {
        &self.bytes[PIXEL_DATA_OFFSET..]
    }

    /// File header, descriptor header and pixel data, in file order.
    pub fn parts(&self) -> [&[u8]; 3] {
        [self.file_header(), self.descriptor_header(), self.pixel_data()]
    }
}

impl AsRef<[u8]> for EncodedImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
