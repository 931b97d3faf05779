//! Text art to pixels.
//!
//! Every character becomes a `scale_factor`-sized square block. Characters in
//! the [`BackgroundSet`] are painted white, everything else black, which gives
//! a thresholded silhouette rather than shading.

use alloc::vec::Vec;

use super::{PixelSource, for_each_pixel};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{Bgr8, ImageDimensions, RowLayout};

/// Block size in pixels for each character.
pub const DEFAULT_SCALE_FACTOR: u32 = 10;

/// Characters treated as empty space.
pub const DEFAULT_BACKGROUND: &[char] = &[' ', '.', ',', ':', ';', '-', '_', '\'', '`'];

/// Set of characters rendered as white background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundSet {
    chars: Vec<char>,
}

impl BackgroundSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn color_of(&self, c: char) -> Bgr8 {
        if self.contains(c) {
            Bgr8::WHITE
        } else {
            Bgr8::BLACK
        }
    }
}

impl Default for BackgroundSet {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND.iter().copied())
    }
}

/// Rendering options for [`AsciiArt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiArtOptions {
    /// Pixels per character along each axis.
    pub scale_factor: u32,
    pub background: BackgroundSet,
}

impl Default for AsciiArtOptions {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            background: BackgroundSet::default(),
        }
    }
}

/// Pasted text art, ready to be used as a [`PixelSource`].
///
/// ```
/// use bmpgen::source::AsciiArt;
///
/// let art = AsciiArt::parse("##\n#")?;
/// let image = bmpgen::encode(art.dimensions()?, &mut art.clone())?;
/// assert_eq!(image.dimensions().width, 20);
/// assert_eq!(image.dimensions().height, 20);
/// # Ok::<(), bmpgen::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AsciiArt {
    /// Text lines, last line first so that index 0 is the bottom of the image.
    rows: Vec<Vec<char>>,
    longest: usize,
    options: AsciiArtOptions,
}

impl AsciiArt {
    /// Parse with the default scale factor and background set.
    pub fn parse(text: &str) -> Result<Self, BitmapError> {
        Self::with_options(text, AsciiArtOptions::default())
    }

    pub fn with_options(text: &str, options: AsciiArtOptions) -> Result<Self, BitmapError> {
        if text.trim().is_empty() {
            return Err(BitmapError::InvalidInput("no ASCII art provided".into()));
        }
        if options.scale_factor == 0 {
            return Err(BitmapError::InvalidInput(
                "scale factor must be at least 1".into(),
            ));
        }

        let mut rows: Vec<Vec<char>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        rows.reverse();
        let longest = rows.iter().map(Vec::len).max().unwrap_or(0);

        Ok(Self {
            rows,
            longest,
            options,
        })
    }

    /// Number of text lines, including a trailing empty one.
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Length in characters of the longest line.
    pub fn longest_line(&self) -> usize {
        self.longest
    }

    pub fn options(&self) -> &AsciiArtOptions {
        &self.options
    }

    /// Image size: one `scale_factor` square per character.
    pub fn dimensions(&self) -> Result<ImageDimensions, BitmapError> {
        let scale = u64::from(self.options.scale_factor);
        let to_px = |chars: usize| {
            u64::try_from(chars)
                .ok()
                .and_then(|c| c.checked_mul(scale))
                .and_then(|px| u32::try_from(px).ok())
        };
        match (to_px(self.longest), to_px(self.rows.len())) {
            (Some(width), Some(height)) => ImageDimensions::new(width, height).validate(),
            _ => Err(BitmapError::InvalidInput(alloc::format!(
                "{} lines of up to {} characters at scale {} overflow the image size",
                self.rows.len(),
                self.longest,
                scale
            ))),
        }
    }

    /// Like [`dimensions`](Self::dimensions), but also rejects art whose
    /// bitmap would exceed `limits`.
    pub fn dimensions_within(&self, limits: &Limits) -> Result<ImageDimensions, BitmapError> {
        Ok(limits.check(self.dimensions()?)?.dimensions())
    }

    /// Character behind pixel (`row`, `col`), `row` counted from the bottom.
    /// Positions past the end of a line or past the last line read as a space.
    pub fn char_at(&self, row: usize, col: usize) -> char {
        let scale = self.options.scale_factor as usize;
        self.rows
            .get(row / scale)
            .and_then(|line| line.get(col / scale))
            .copied()
            .unwrap_or(' ')
    }
}

impl PixelSource for AsciiArt {
    fn fill(&mut self, buffer: &mut [u8], layout: &RowLayout) {
        let background = &self.options.background;
        for_each_pixel(layout, |row, col| {
            let color = background.color_of(self.char_at(row, col));
            layout.put(buffer, row, col, color);
        });
    }
}
