#![no_main]

// Checks the dispatched scan agrees with a byte-by-byte search for a nonzero
// alpha, including when the only alpha byte sits in a kernel's leftover tail.

use icon_alpha::{has_alpha, scan_alpha_only};
use icon_alpha_common::bgra::{ALPHA_OFFSET, BYTES_PER_PIXEL};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub pixels: Vec<u8>,
    /// Index of a pixel whose alpha is forced nonzero, after all others are cleared.
    pub planted: Option<u16>,
}

fuzz_target!(|input: Input| {
    let Input { mut pixels, planted } = input;
    let pixel_count = pixels.len() / BYTES_PER_PIXEL;

    if let Some(index) = planted {
        for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[ALPHA_OFFSET] = 0;
        }
        if pixel_count > 0 {
            let index = index as usize % pixel_count;
            pixels[index * BYTES_PER_PIXEL + ALPHA_OFFSET] = 0x80;
        }
    }

    let expected = pixels
        .chunks_exact(BYTES_PER_PIXEL)
        .any(|pixel| pixel[ALPHA_OFFSET] != 0);

    assert_eq!(has_alpha(&pixels), expected);
    assert_eq!(
        unsafe { scan_alpha_only(pixels.as_ptr(), pixel_count) },
        expected
    );
});
