#![no_main]

// Validates scan_and_apply_mask against a per-pixel scalar model, for arbitrary pixel and
// mask contents and lengths that don't line up with any kernel's batch size.

use icon_alpha::{scan_and_apply_mask_safe, IconAlphaValidationError, ScanOutcome};
use icon_alpha_common::bgra::{Bgra8888, ALPHA_OFFSET, BYTES_PER_PIXEL};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub pixels: Vec<u8>,
    pub mask: Option<Vec<u8>>,
    pub pixel_count: u16,
    /// When set, clears every alpha byte so the mask pass is reached.
    pub strip_alpha: bool,
}

fuzz_target!(|input: Input| {
    let Input {
        mut pixels,
        mask,
        pixel_count,
        strip_alpha,
    } = input;
    let pixel_count = pixel_count as usize;

    if strip_alpha {
        for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[ALPHA_OFFSET] = 0;
        }
    }

    let original = pixels.clone();
    let result = scan_and_apply_mask_safe(&mut pixels, mask.as_deref(), pixel_count);

    let needed = pixel_count * BYTES_PER_PIXEL;
    if pixel_count == 0 || original.is_empty() {
        assert_eq!(result, Err(IconAlphaValidationError::EmptyInput));
        assert_eq!(pixels, original);
        return;
    }
    if original.len() < needed {
        assert!(matches!(
            result,
            Err(IconAlphaValidationError::PixelBufferTooSmall { .. })
        ));
        assert_eq!(pixels, original);
        return;
    }
    if let Some(mask) = &mask {
        if mask.len() < needed {
            assert!(matches!(
                result,
                Err(IconAlphaValidationError::MaskBufferTooSmall { .. })
            ));
            assert_eq!(pixels, original);
            return;
        }
    }

    let had_alpha = original[..needed]
        .chunks_exact(BYTES_PER_PIXEL)
        .any(|pixel| pixel[ALPHA_OFFSET] != 0);

    let expected = match (&mask, had_alpha) {
        (_, true) => ScanOutcome::HasAlpha,
        (None, false) => ScanOutcome::NoAlphaNoMask,
        (Some(_), false) => ScanOutcome::MaskApplied,
    };
    assert_eq!(result, Ok(expected));

    // Bytes past the processed range are never touched.
    assert_eq!(pixels[needed..], original[needed..]);

    match (expected, &mask) {
        (ScanOutcome::MaskApplied, Some(mask)) => {
            let processed = pixels[..needed].chunks_exact(BYTES_PER_PIXEL);
            let before = original[..needed].chunks_exact(BYTES_PER_PIXEL);
            for ((pixel, before), entry) in processed.zip(before).zip(mask.chunks_exact(4)) {
                let entry = Bgra8888::from_bytes([entry[0], entry[1], entry[2], entry[3]]);
                let expected_alpha = if entry.is_black_mask() { 0xFF } else { 0x00 };
                assert_eq!(pixel[..ALPHA_OFFSET], before[..ALPHA_OFFSET]);
                assert_eq!(pixel[ALPHA_OFFSET], expected_alpha);
            }
        }
        _ => assert_eq!(pixels, original),
    }
});
