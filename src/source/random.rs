use rand::RngCore;
use rand::rngs::ThreadRng;

use super::{PixelSource, for_each_pixel};
use crate::pixel::RowLayout;

/// Uniformly random pixels: three independent bytes per pixel.
#[derive(Clone, Debug)]
pub struct RandomPixelSource<R> {
    rng: R,
}

impl RandomPixelSource<ThreadRng> {
    /// Source backed by the thread-local generator.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: RngCore> RandomPixelSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> PixelSource for RandomPixelSource<R> {
    fn fill(&mut self, buffer: &mut [u8], layout: &RowLayout) {
        for_each_pixel(layout, |row, col| {
            let off = layout.pixel_offset(row, col);
            self.rng
                .fill_bytes(&mut buffer[off..off + layout.bytes_per_pixel]);
        });
    }
}
