#![no_main]
use bmpgen::source::{AsciiArt, AsciiArtOptions};
use bmpgen::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks a small scale factor, the rest is the art
    let Some((&scale, text)) = data.split_first() else {
        return;
    };
    let Ok(text) = core::str::from_utf8(text) else {
        return;
    };
    let options = AsciiArtOptions {
        scale_factor: u32::from(scale % 8),
        ..Default::default()
    };
    let Ok(mut art) = AsciiArt::with_options(text, options) else {
        return;
    };
    let Ok(dims) = art.dimensions() else { return };

    let limits = Limits {
        max_memory_bytes: Some(1 << 24),
        ..Default::default()
    };
    let Ok(image) = EncodeRequest::new()
        .with_limits(&limits)
        .encode(dims, &mut art, enough::Unstoppable)
    else {
        return;
    };

    let layout = RowLayout::new(dims).unwrap();
    assert_eq!(image.len(), 54 + layout.pixel_data_size);
    let file_size = u32::from_le_bytes(image.as_bytes()[2..6].try_into().unwrap());
    assert_eq!(file_size as usize, image.len());
    for row in image.pixel_data().chunks_exact(layout.padded_row_bytes) {
        assert!(row[..layout.raw_row_bytes].iter().all(|&b| b == 0 || b == 255));
        assert!(row[layout.raw_row_bytes..].iter().all(|&b| b == 0));
    }
});
