//! Pixel sources: the capability the encoder calls to populate pixel data.
//!
//! A source receives the zeroed pixel buffer and its [`RowLayout`] and is
//! expected to write every `(row, col)` BGR triple. Cells it leaves alone stay
//! black, and row padding is cleared by the encoder afterwards.

mod ascii;
#[cfg(feature = "random")]
mod random;

pub use ascii::{
    AsciiArt, AsciiArtOptions, BackgroundSet, DEFAULT_BACKGROUND, DEFAULT_SCALE_FACTOR,
};
#[cfg(feature = "random")]
pub use random::RandomPixelSource;

use crate::pixel::{Bgr8, RowLayout};

/// Fills a bottom-to-top BGR pixel buffer.
pub trait PixelSource {
    /// Write pixels into `buffer`, which is exactly `layout.pixel_data_size` bytes.
    fn fill(&mut self, buffer: &mut [u8], layout: &RowLayout);
}

impl<F> PixelSource for F
where
    F: FnMut(&mut [u8], &RowLayout),
{
    fn fill(&mut self, buffer: &mut [u8], layout: &RowLayout) {
        self(buffer, layout)
    }
}

/// Per-pixel source built by [`from_fn`].
#[derive(Clone, Debug)]
pub struct FromFn<F> {
    f: F,
}

/// Source that asks `f(row, col)` for each pixel, `row` counted from the
/// bottom of the image. The caller never sees the byte layout.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(usize, usize) -> Bgr8,
{
    FromFn { f }
}

impl<F> PixelSource for FromFn<F>
where
    F: FnMut(usize, usize) -> Bgr8,
{
    fn fill(&mut self, buffer: &mut [u8], layout: &RowLayout) {
        for_each_pixel(layout, |row, col| {
            let color = (self.f)(row, col);
            layout.put(buffer, row, col, color);
        });
    }
}

/// Visit every `(row, col)` of the image, bottom row first.
pub(crate) fn for_each_pixel(layout: &RowLayout, mut visit: impl FnMut(usize, usize)) {
    for row in 0..layout.height as usize {
        for col in 0..layout.width as usize {
            visit(row, col);
        }
    }
}
