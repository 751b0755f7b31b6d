use crate::apply_mask::generic::apply_mask_generic;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use icon_alpha_common::bgra::{ALPHA_MASK, BYTES_PER_PIXEL, COLOR_MASK};

/// SSE2 mask application, 16 pixels per iteration.
///
/// # Safety
///
/// - `pixels` must be valid for reads and writes of `pixel_count * 4` bytes
/// - `mask` must be valid for reads of `pixel_count * 4` bytes
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn apply_mask(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    let mut pixel_ptr = pixels;
    let mut mask_ptr = mask;
    let mask_end = mask.add(pixel_count / 16 * 16 * BYTES_PER_PIXEL);

    let color_mask = _mm_set1_epi32(COLOR_MASK as i32);
    let alpha_mask = _mm_set1_epi32(ALPHA_MASK as i32);
    let zero = _mm_setzero_si128();

    while mask_ptr < mask_end {
        let mask0 = _mm_loadu_si128(mask_ptr as *const __m128i);
        let mask1 = _mm_loadu_si128(mask_ptr.add(16) as *const __m128i);
        let mask2 = _mm_loadu_si128(mask_ptr.add(32) as *const __m128i);
        let mask3 = _mm_loadu_si128(mask_ptr.add(48) as *const __m128i);
        mask_ptr = mask_ptr.add(64);

        let pixels0 = _mm_loadu_si128(pixel_ptr as *const __m128i);
        let pixels1 = _mm_loadu_si128(pixel_ptr.add(16) as *const __m128i);
        let pixels2 = _mm_loadu_si128(pixel_ptr.add(32) as *const __m128i);
        let pixels3 = _mm_loadu_si128(pixel_ptr.add(48) as *const __m128i);

        // 0xFFFFFFFF in every lane whose mask colour is black
        let black0 = _mm_cmpeq_epi32(_mm_and_si128(mask0, color_mask), zero);
        let black1 = _mm_cmpeq_epi32(_mm_and_si128(mask1, color_mask), zero);
        let black2 = _mm_cmpeq_epi32(_mm_and_si128(mask2, color_mask), zero);
        let black3 = _mm_cmpeq_epi32(_mm_and_si128(mask3, color_mask), zero);

        let out0 = _mm_or_si128(
            _mm_and_si128(pixels0, color_mask),
            _mm_and_si128(black0, alpha_mask),
        );
        let out1 = _mm_or_si128(
            _mm_and_si128(pixels1, color_mask),
            _mm_and_si128(black1, alpha_mask),
        );
        let out2 = _mm_or_si128(
            _mm_and_si128(pixels2, color_mask),
            _mm_and_si128(black2, alpha_mask),
        );
        let out3 = _mm_or_si128(
            _mm_and_si128(pixels3, color_mask),
            _mm_and_si128(black3, alpha_mask),
        );

        _mm_storeu_si128(pixel_ptr as *mut __m128i, out0);
        _mm_storeu_si128(pixel_ptr.add(16) as *mut __m128i, out1);
        _mm_storeu_si128(pixel_ptr.add(32) as *mut __m128i, out2);
        _mm_storeu_si128(pixel_ptr.add(48) as *mut __m128i, out3);
        pixel_ptr = pixel_ptr.add(64);
    }

    apply_mask_generic(pixel_ptr, mask_ptr, pixel_count % 16)
}
