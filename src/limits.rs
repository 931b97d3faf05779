use crate::error::BitmapError;
use crate::pixel::{ImageDimensions, RowLayout};

/// Caps on the images an [`EncodeRequest`](crate::EncodeRequest) will build.
///
/// All fields default to `None` (no limit). Checks run against the computed
/// [`RowLayout`], before any pixel memory is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the encoded file: headers plus padded rows.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Compute the layout for `dims` and reject it if it exceeds any limit.
    pub fn check(&self, dims: ImageDimensions) -> Result<RowLayout, BitmapError> {
        let layout = RowLayout::new(dims.validate()?)?;
        self.check_layout(&layout)?;
        Ok(layout)
    }

    pub(crate) fn check_layout(&self, layout: &RowLayout) -> Result<(), BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: layout.width,
            height: layout.height,
        };
        let pixels = u64::from(layout.width)
            .checked_mul(u64::from(layout.height))
            .ok_or_else(too_large)?;
        let file_size = u64::try_from(layout.file_size()?).map_err(|_| too_large())?;

        let measured = [
            ("width", u64::from(layout.width), self.max_width),
            ("height", u64::from(layout.height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("encoded size in bytes", file_size, self.max_memory_bytes),
        ];
        for (what, actual, max) in measured {
            if let Some(max) = max.filter(|&max| actual > max) {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "{what} {actual} exceeds limit {max} for a {}x{} bitmap",
                    layout.width,
                    layout.height
                )));
            }
        }
        Ok(())
    }
}
