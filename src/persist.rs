//! Writing an encoded image and its dumps to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bmp::EncodedImage;
use crate::dump::DumpFormat;
use crate::error::BitmapError;

/// Name of the bitmap file inside the output directory.
pub const IMAGE_FILE_NAME: &str = "image.bmp";
/// Subdirectory holding the text dumps.
pub const DATA_DIR_NAME: &str = "data";

/// Paths written by [`save`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFiles {
    pub image: PathBuf,
    /// Decimal, hex and binary dumps, in that order.
    pub dumps: Vec<PathBuf>,
}

/// Write `image` to `<output_dir>/image.bmp` and its decimal, hex and binary
/// dumps to `<output_dir>/data/`, creating directories as needed.
///
/// Nothing is rolled back on failure: if a dump cannot be written the image
/// file stays in place.
pub fn save(image: &EncodedImage, output_dir: impl AsRef<Path>) -> Result<SavedFiles, BitmapError> {
    let output_dir = output_dir.as_ref();
    create_dir(output_dir)?;

    let image_path = output_dir.join(IMAGE_FILE_NAME);
    write_file(&image_path, image.as_bytes())?;
    tracing::info!(path = %image_path.display(), bytes = image.len(), "image written");

    let data_dir = output_dir.join(DATA_DIR_NAME);
    create_dir(&data_dir)?;

    let parts = image.parts();
    let mut dumps = Vec::with_capacity(DumpFormat::ALL.len());
    for format in DumpFormat::ALL {
        let path = data_dir.join(format.file_name());
        write_file(&path, format.render(&parts).as_bytes())?;
        tracing::debug!(path = %path.display(), ?format, "dump written");
        dumps.push(path);
    }
    tracing::info!(dir = %data_dir.display(), "image data written");

    Ok(SavedFiles {
        image: image_path,
        dumps,
    })
}

fn create_dir(path: &Path) -> Result<(), BitmapError> {
    fs::create_dir_all(path).map_err(|source| BitmapError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), BitmapError> {
    fs::write(path, contents).map_err(|source| BitmapError::Io {
        path: path.to_path_buf(),
        source,
    })
}
