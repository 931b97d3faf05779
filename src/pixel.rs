use crate::bmp::PIXEL_DATA_OFFSET;
use crate::error::BitmapError;

/// Bytes per pixel in the 24-bit BGR layout.
pub const BYTES_PER_PIXEL: usize = 3;

/// Bits per pixel written to the descriptor header.
pub const BITS_PER_PIXEL: u16 = 24;

/// Image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject zero-sized images.
    pub fn validate(self) -> Result<Self, BitmapError> {
        if self.width == 0 || self.height == 0 {
            return Err(BitmapError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// One pixel in BMP byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bgr8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr8 {
    pub const BLACK: Bgr8 = Bgr8::gray(0);
    pub const WHITE: Bgr8 = Bgr8::gray(255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }

    pub const fn gray(v: u8) -> Self {
        Self { b: v, g: v, r: v }
    }

    /// Bytes as stored in the pixel buffer.
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

/// Row geometry of the pixel buffer for a given image size.
///
/// Rows are stored bottom-to-top: buffer row 0 is the visually bottom row.
/// Each row holds `raw_row_bytes` of BGR triples followed by zero padding up
/// to `padded_row_bytes`, a multiple of 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    pub width: u32,
    pub height: u32,
    pub bytes_per_pixel: usize,
    pub raw_row_bytes: usize,
    pub padded_row_bytes: usize,
    pub pixel_data_size: usize,
}

impl RowLayout {
    /// Compute the layout, failing on arithmetic overflow.
    pub fn new(dims: ImageDimensions) -> Result<Self, BitmapError> {
        let ImageDimensions { width, height } = dims;
        let raw_row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        let padded_row_bytes = raw_row_bytes
            .checked_add(3)
            .map(|r| r & !3)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        let pixel_data_size = padded_row_bytes
            .checked_mul(height as usize)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            bytes_per_pixel: BYTES_PER_PIXEL,
            raw_row_bytes,
            padded_row_bytes,
            pixel_data_size,
        })
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    /// Length of the whole BMP file: both headers plus the pixel data.
    pub fn file_size(&self) -> Result<usize, BitmapError> {
        self.pixel_data_size
            .checked_add(PIXEL_DATA_OFFSET)
            .ok_or(BitmapError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Zero bytes appended to each row.
    pub fn padding_bytes(&self) -> usize {
        self.padded_row_bytes - self.raw_row_bytes
    }

    /// Buffer offset of the blue byte of pixel (`row`, `col`), `row` counted
    /// from the bottom.
    #[inline]
    pub fn pixel_offset(&self, row: usize, col: usize) -> usize {
        row * self.padded_row_bytes + col * self.bytes_per_pixel
    }

    /// Write one pixel into `buffer`.
    #[inline]
    pub fn put(&self, buffer: &mut [u8], row: usize, col: usize, color: Bgr8) {
        let off = self.pixel_offset(row, col);
        buffer[off..off + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
    }

    /// Read one pixel from `buffer`.
    #[inline]
    pub fn get(&self, buffer: &[u8], row: usize, col: usize) -> Bgr8 {
        let off = self.pixel_offset(row, col);
        Bgr8 {
            b: buffer[off],
            g: buffer[off + 1],
            r: buffer[off + 2],
        }
    }
}
