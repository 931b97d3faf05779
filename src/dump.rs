//! Text dumps of encoded bytes.
//!
//! A dump holds one group per part (file header, descriptor header, pixel
//! data). Bytes within a group are comma-separated on one line; groups are
//! separated by a blank line.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::BitmapError;

/// How each byte is spelled in a dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DumpFormat {
    /// Base 10, no padding.
    Decimal,
    /// Two lowercase hex digits.
    Hex,
    /// Eight binary digits.
    Binary,
}

impl DumpFormat {
    pub const ALL: [DumpFormat; 3] = [DumpFormat::Decimal, DumpFormat::Hex, DumpFormat::Binary];

    /// File name used inside the `data/` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DumpFormat::Decimal => "decimal-int.txt",
            DumpFormat::Hex => "hex.txt",
            DumpFormat::Binary => "binary.txt",
        }
    }

    fn radix(self) -> u32 {
        match self {
            DumpFormat::Decimal => 10,
            DumpFormat::Hex => 16,
            DumpFormat::Binary => 2,
        }
    }

    fn write_byte(self, out: &mut String, byte: u8) {
        // writing to a String cannot fail
        let _ = match self {
            DumpFormat::Decimal => write!(out, "{byte}"),
            DumpFormat::Hex => write!(out, "{byte:02x}"),
            DumpFormat::Binary => write!(out, "{byte:08b}"),
        };
    }

    /// Render `parts` in order.
    pub fn render(self, parts: &[&[u8]]) -> String {
        let mut out = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            for (j, &byte) in part.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                self.write_byte(&mut out, byte);
            }
        }
        out
    }

    /// Read a dump back into its groups of bytes.
    pub fn parse(self, text: &str) -> Result<Vec<Vec<u8>>, BitmapError> {
        text.split("\n\n")
            .map(|group| {
                let group = group.trim();
                if group.is_empty() {
                    return Ok(Vec::new());
                }
                group
                    .split(',')
                    .map(|token| self.parse_byte(token.trim()))
                    .collect()
            })
            .collect()
    }

    fn parse_byte(self, token: &str) -> Result<u8, BitmapError> {
        let width_ok = match self {
            DumpFormat::Decimal => (1..=3).contains(&token.len()),
            DumpFormat::Hex => token.len() == 2,
            DumpFormat::Binary => token.len() == 8,
        };
        // from_str_radix alone would also take a leading sign
        let digits_ok = token.chars().all(|c| c.is_digit(self.radix()));
        if !width_ok || !digits_ok {
            return Err(BitmapError::InvalidInput(alloc::format!(
                "malformed {self:?} byte {token:?}"
            )));
        }
        u8::from_str_radix(token, self.radix()).map_err(|e| {
            BitmapError::InvalidInput(alloc::format!("malformed {self:?} byte {token:?}: {e}"))
        })
    }
}
