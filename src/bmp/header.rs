//! BMP file header and BITMAPINFOHEADER, described as field tables.
//!
//! Each field carries a declared byte width; values that do not fit are
//! rejected instead of truncated.

use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::pixel::{BITS_PER_PIXEL, ImageDimensions};

/// Size of the `BM` file header.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER descriptor.
pub const DIB_HEADER_SIZE: usize = 40;
/// Offset of the first pixel byte.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldValue {
    Ascii(&'static str),
    Unsigned(u64),
    Signed(i64),
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct HeaderField {
    pub name: &'static str,
    pub size: usize,
    pub value: FieldValue,
}

const fn field(name: &'static str, size: usize, value: FieldValue) -> HeaderField {
    HeaderField { name, size, value }
}

/// The 14-byte file header.
pub(crate) fn file_header_fields(file_size: usize) -> [HeaderField; 4] {
    use FieldValue::*;
    [
        field("signature", 2, Ascii("BM")),
        field("file_size", 4, Unsigned(file_size as u64)),
        field("reserved", 4, Unsigned(0)),
        field("data_offset", 4, Unsigned(PIXEL_DATA_OFFSET as u64)),
    ]
}

/// The 40-byte BITMAPINFOHEADER for an uncompressed 24-bit image.
pub(crate) fn dib_header_fields(dims: ImageDimensions) -> [HeaderField; 11] {
    use FieldValue::*;
    [
        field("header_size", 4, Unsigned(DIB_HEADER_SIZE as u64)),
        field("width", 4, Signed(i64::from(dims.width))),
        // positive = bottom-up
        field("height", 4, Signed(i64::from(dims.height))),
        field("planes", 2, Unsigned(1)),
        field("bit_count", 2, Unsigned(u64::from(BITS_PER_PIXEL))),
        field("compression", 4, Unsigned(0)),
        // may be 0 for BI_RGB
        field("size_image", 4, Unsigned(0)),
        field("pixels_per_meter_x", 4, Unsigned(0)),
        field("pixels_per_meter_y", 4, Unsigned(0)),
        field("colors_used", 4, Unsigned(0)),
        field("colors_important", 4, Unsigned(0)),
    ]
}

/// Serialize `fields` in order into a buffer of exactly `total` bytes.
pub(crate) fn write_fields(fields: &[HeaderField], total: usize) -> Result<Vec<u8>, BitmapError> {
    let mut out = Vec::with_capacity(total);
    for f in fields {
        f.write_to(&mut out)?;
    }
    if out.len() != total {
        return Err(BitmapError::FieldEncoding {
            field: fields.last().map_or("<none>", |f| f.name),
            reason: alloc::format!("header is {} bytes, expected {total}", out.len()),
        });
    }
    Ok(out)
}

impl HeaderField {
    fn write_to(&self, out: &mut Vec<u8>) -> Result<(), BitmapError> {
        match self.value {
            FieldValue::Ascii(s) => {
                if !s.is_ascii() || s.len() > self.size {
                    return Err(self.error(alloc::format!(
                        "text {s:?} does not fit in {} ASCII bytes",
                        self.size
                    )));
                }
                out.extend_from_slice(s.as_bytes());
                out.extend(core::iter::repeat_n(0u8, self.size - s.len()));
            }
            FieldValue::Unsigned(v) => match self.size {
                2 => {
                    let v = u16::try_from(v).map_err(|_| self.overflow(v))?;
                    out.extend_from_slice(&v.to_le_bytes());
                }
                4 => {
                    let v = u32::try_from(v).map_err(|_| self.overflow(v))?;
                    out.extend_from_slice(&v.to_le_bytes());
                }
                n => return Err(self.error(alloc::format!("unsupported field width {n}"))),
            },
            FieldValue::Signed(v) if v < 0 => {
                return Err(self.error(alloc::format!("negative value {v}")));
            }
            FieldValue::Signed(v) => match self.size {
                2 => {
                    let v = i16::try_from(v).map_err(|_| self.overflow(v))?;
                    out.extend_from_slice(&v.to_le_bytes());
                }
                4 => {
                    let v = i32::try_from(v).map_err(|_| self.overflow(v))?;
                    out.extend_from_slice(&v.to_le_bytes());
                }
                n => return Err(self.error(alloc::format!("unsupported field width {n}"))),
            },
        }
        Ok(())
    }

    fn overflow(&self, v: impl core::fmt::Display) -> BitmapError {
        self.error(alloc::format!("value {v} does not fit in {} bytes", self.size))
    }

    fn error(&self, reason: alloc::string::String) -> BitmapError {
        BitmapError::FieldEncoding {
            field: self.name,
            reason,
        }
    }
}
