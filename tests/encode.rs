//! Encoder layout, header fields and failure modes.

use bmpgen::*;
use enough::StopReason;

fn u32_at(bytes: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(bytes[off..off + 4].try_into().unwrap())
}

fn i32_at(bytes: &[u8], off: usize) -> i32 {
    i32::from_le_bytes(bytes[off..off + 4].try_into().unwrap())
}

fn u16_at(bytes: &[u8], off: usize) -> u16 {
    u16::from_le_bytes(bytes[off..off + 2].try_into().unwrap())
}

fn checkerboard() -> impl PixelSource {
    source::from_fn(|row, col| {
        if (row + col) % 2 == 0 {
            Bgr8::new(200, 100, 50)
        } else {
            Bgr8::new(10, 20, 30)
        }
    })
}

// ── Layout ───────────────────────────────────────────────────────────

#[test]
fn output_length_matches_padded_layout() {
    for width in 1..=9u32 {
        for height in [1u32, 2, 5] {
            let image = encode(ImageDimensions::new(width, height), &mut checkerboard()).unwrap();
            let padded = (width as usize * 3).div_ceil(4) * 4;
            assert_eq!(image.len(), 54 + padded * height as usize, "{width}x{height}");
            assert_eq!(image.pixel_data().len(), padded * height as usize);
        }
    }
}

#[test]
fn row_layout_values() {
    let layout = RowLayout::new(ImageDimensions::new(5, 3)).unwrap();
    assert_eq!(layout.bytes_per_pixel, 3);
    assert_eq!(layout.raw_row_bytes, 15);
    assert_eq!(layout.padded_row_bytes, 16);
    assert_eq!(layout.padding_bytes(), 1);
    assert_eq!(layout.pixel_data_size, 48);
    assert_eq!(layout.pixel_offset(2, 4), 2 * 16 + 12);

    let aligned = RowLayout::new(ImageDimensions::new(4, 1)).unwrap();
    assert_eq!(aligned.padded_row_bytes, 12);
    assert_eq!(aligned.padding_bytes(), 0);
}

// ── Headers ──────────────────────────────────────────────────────────

#[test]
fn file_header_fields() {
    let image = encode(ImageDimensions::new(3, 2), &mut checkerboard()).unwrap();
    let bytes = image.as_bytes();
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(u32_at(bytes, 2) as usize, bytes.len());
    assert_eq!(u32_at(bytes, 6), 0);
    assert_eq!(u32_at(bytes, 10), 54);
    assert_eq!(image.file_header().len(), bmp::FILE_HEADER_SIZE);
}

#[test]
fn descriptor_header_fields() {
    let image = encode(ImageDimensions::new(7, 11), &mut checkerboard()).unwrap();
    let bytes = image.as_bytes();
    assert_eq!(image.descriptor_header().len(), bmp::DIB_HEADER_SIZE);
    assert_eq!(u32_at(bytes, 14), 40);
    assert_eq!(i32_at(bytes, 18), 7);
    assert_eq!(i32_at(bytes, 22), 11);
    assert_eq!(u16_at(bytes, 26), 1);
    assert_eq!(u16_at(bytes, 28), 24);
    for off in [30, 34, 38, 42, 46, 50] {
        assert_eq!(u32_at(bytes, off), 0, "field at offset {off}");
    }
}

#[test]
fn dimensions_roundtrip_through_header() {
    for (w, h) in [(1, 1), (640, 480), (1, 1000), (1000, 1)] {
        let image = encode(ImageDimensions::new(w, h), &mut |_: &mut [u8], _: &RowLayout| {})
            .unwrap();
        assert_eq!(i32_at(image.as_bytes(), 18), w as i32);
        assert_eq!(i32_at(image.as_bytes(), 22), h as i32);
        assert_eq!(image.dimensions(), ImageDimensions::new(w, h));
    }
}

#[test]
fn parts_concatenate_to_file() {
    let image = encode(ImageDimensions::new(2, 2), &mut checkerboard()).unwrap();
    let joined: Vec<u8> = image.parts().concat();
    assert_eq!(joined, image.as_bytes());
}

// ── Pixel data ───────────────────────────────────────────────────────

#[test]
fn pixels_are_bgr_bottom_up() {
    // bottom-left red, top-right blue
    let mut src = source::from_fn(|row, col| match (row, col) {
        (0, 0) => Bgr8::new(255, 0, 0),
        (1, 1) => Bgr8::new(0, 0, 255),
        _ => Bgr8::BLACK,
    });
    let image = encode(ImageDimensions::new(2, 2), &mut src).unwrap();
    let px = image.pixel_data();
    // row stride is 8 (6 bytes + 2 padding)
    assert_eq!(&px[0..3], &[0, 0, 255]);
    assert_eq!(&px[8 + 3..8 + 6], &[255, 0, 0]);
}

#[test]
fn padding_is_zero_even_if_source_writes_it() {
    let mut fill_all = |buf: &mut [u8], _: &RowLayout| buf.fill(0xAB);
    let image = encode(ImageDimensions::new(5, 4), &mut fill_all).unwrap();
    let layout = RowLayout::new(image.dimensions()).unwrap();
    for row in image.pixel_data().chunks_exact(layout.padded_row_bytes) {
        assert!(row[..layout.raw_row_bytes].iter().all(|&b| b == 0xAB));
        assert!(row[layout.raw_row_bytes..].iter().all(|&b| b == 0));
    }
}

#[test]
fn untouched_pixels_stay_black() {
    let mut noop = |_: &mut [u8], _: &RowLayout| {};
    let image = encode(ImageDimensions::new(3, 3), &mut noop).unwrap();
    assert!(image.pixel_data().iter().all(|&b| b == 0));
}

#[test]
fn source_sees_exact_buffer_and_layout() {
    let mut seen = None;
    let mut probe = |buf: &mut [u8], layout: &RowLayout| {
        seen = Some((buf.len(), *layout));
    };
    encode(ImageDimensions::new(6, 2), &mut probe).unwrap();
    let (len, layout) = seen.unwrap();
    assert_eq!(len, layout.pixel_data_size);
    assert_eq!(layout.width, 6);
    assert_eq!(layout.height, 2);
    assert_eq!(layout.padded_row_bytes, 20);
}

// ── Errors ───────────────────────────────────────────────────────────

#[test]
fn zero_width_or_height_rejected() {
    for (w, h) in [(0, 5), (5, 0), (0, 0)] {
        match encode(ImageDimensions::new(w, h), &mut checkerboard()) {
            Err(BitmapError::InvalidDimensions { width, height }) => {
                assert_eq!((width, height), (w, h));
            }
            other => panic!("expected InvalidDimensions, got {other:?}"),
        }
    }
}

#[test]
fn oversized_header_field_rejected_before_allocation() {
    let mut called = false;
    let mut src = |_: &mut [u8], _: &RowLayout| called = true;
    // 2^31 px wide does not fit the file size or the signed width field
    let result = encode(ImageDimensions::new(1 << 31, 1), &mut src);
    assert!(
        matches!(result, Err(BitmapError::FieldEncoding { .. })),
        "got {result:?}"
    );
    assert!(!called);
}

#[test]
fn cancelled_before_source_runs() {
    struct Cancelled;
    impl Stop for Cancelled {
        fn check(&self) -> Result<(), StopReason> {
            Err(StopReason::Cancelled)
        }
    }

    let mut called = false;
    let mut src = |_: &mut [u8], _: &RowLayout| called = true;
    let result = EncodeRequest::new().encode(ImageDimensions::new(2, 2), &mut src, Cancelled);
    assert!(
        matches!(result, Err(BitmapError::Cancelled(StopReason::Cancelled))),
        "got {result:?}"
    );
    assert!(!called);
}

#[test]
fn limits_reject_large() {
    let limits = Limits {
        max_pixels: Some(10),
        ..Default::default()
    };
    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode(ImageDimensions::new(4, 4), &mut checkerboard(), Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(60),
        ..Default::default()
    };
    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode(ImageDimensions::new(2, 2), &mut checkerboard(), Unstoppable);
    assert!(matches!(result, Err(BitmapError::LimitExceeded(_))));
}

#[test]
fn limits_allow_within_bounds() {
    let limits = Limits {
        max_width: Some(4),
        max_height: Some(4),
        ..Default::default()
    };
    let image = EncodeRequest::new()
        .with_limits(&limits)
        .encode(ImageDimensions::new(4, 4), &mut checkerboard(), Unstoppable)
        .unwrap();
    assert_eq!(image.len(), 54 + 12 * 4);
}

#[test]
fn limits_check_returns_layout() {
    let limits = Limits {
        max_memory_bytes: Some(70),
        ..Default::default()
    };
    // 2x2: rows of 6 bytes pad to 8, so 54 + 16 = 70
    let layout = limits.check(ImageDimensions::new(2, 2)).unwrap();
    assert_eq!(layout.padded_row_bytes, 8);
    assert_eq!(layout.file_size().unwrap(), 70);

    let tighter = Limits {
        max_memory_bytes: Some(69),
        ..Default::default()
    };
    assert!(matches!(
        tighter.check(ImageDimensions::new(2, 2)),
        Err(BitmapError::LimitExceeded(_))
    ));
    assert!(matches!(
        tighter.check(ImageDimensions::new(0, 2)),
        Err(BitmapError::InvalidDimensions { .. })
    ));
}

#[test]
fn limits_count_padded_rows_not_raw_pixels() {
    // 1x4: raw data is 12 bytes but each row pads to 4, so 54 + 16 = 70
    let limits = Limits {
        max_memory_bytes: Some(66),
        ..Default::default()
    };
    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode(ImageDimensions::new(1, 4), &mut checkerboard(), Unstoppable);
    assert!(matches!(result, Err(BitmapError::LimitExceeded(_))), "got {result:?}");
}

#[test]
fn limits_pixel_count_exceeds_u32() {
    // 10^10 pixels does not fit in u32; the check must not wrap
    let limits = Limits {
        max_pixels: Some(9_999_999_999),
        ..Default::default()
    };
    let result = limits.check(ImageDimensions::new(100_000, 100_000));
    match result {
        Err(BitmapError::LimitExceeded(msg)) => assert!(msg.contains("10000000000"), "{msg}"),
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}
