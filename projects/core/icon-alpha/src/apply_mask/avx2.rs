use crate::apply_mask::generic::apply_mask_generic;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use icon_alpha_common::bgra::{ALPHA_MASK, BYTES_PER_PIXEL, COLOR_MASK};

/// AVX2 mask application, 32 pixels per iteration.
///
/// # Safety
///
/// - `pixels` must be valid for reads and writes of `pixel_count * 4` bytes
/// - `mask` must be valid for reads of `pixel_count * 4` bytes
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn apply_mask(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    let mut pixel_ptr = pixels;
    let mut mask_ptr = mask;
    let mask_end = mask.add(pixel_count / 32 * 32 * BYTES_PER_PIXEL);

    let color_mask = _mm256_set1_epi32(COLOR_MASK as i32);
    let alpha_mask = _mm256_set1_epi32(ALPHA_MASK as i32);
    let zero = _mm256_setzero_si256();

    while mask_ptr < mask_end {
        let mask0 = _mm256_loadu_si256(mask_ptr as *const __m256i);
        let mask1 = _mm256_loadu_si256(mask_ptr.add(32) as *const __m256i);
        let mask2 = _mm256_loadu_si256(mask_ptr.add(64) as *const __m256i);
        let mask3 = _mm256_loadu_si256(mask_ptr.add(96) as *const __m256i);
        mask_ptr = mask_ptr.add(128);

        let pixels0 = _mm256_loadu_si256(pixel_ptr as *const __m256i);
        let pixels1 = _mm256_loadu_si256(pixel_ptr.add(32) as *const __m256i);
        let pixels2 = _mm256_loadu_si256(pixel_ptr.add(64) as *const __m256i);
        let pixels3 = _mm256_loadu_si256(pixel_ptr.add(96) as *const __m256i);

        // 0xFFFFFFFF in every lane whose mask colour is black
        let black0 = _mm256_cmpeq_epi32(_mm256_and_si256(mask0, color_mask), zero);
        let black1 = _mm256_cmpeq_epi32(_mm256_and_si256(mask1, color_mask), zero);
        let black2 = _mm256_cmpeq_epi32(_mm256_and_si256(mask2, color_mask), zero);
        let black3 = _mm256_cmpeq_epi32(_mm256_and_si256(mask3, color_mask), zero);

        let out0 = _mm256_or_si256(
            _mm256_and_si256(pixels0, color_mask),
            _mm256_and_si256(black0, alpha_mask),
        );
        let out1 = _mm256_or_si256(
            _mm256_and_si256(pixels1, color_mask),
            _mm256_and_si256(black1, alpha_mask),
        );
        let out2 = _mm256_or_si256(
            _mm256_and_si256(pixels2, color_mask),
            _mm256_and_si256(black2, alpha_mask),
        );
        let out3 = _mm256_or_si256(
            _mm256_and_si256(pixels3, color_mask),
            _mm256_and_si256(black3, alpha_mask),
        );

        _mm256_storeu_si256(pixel_ptr as *mut __m256i, out0);
        _mm256_storeu_si256(pixel_ptr.add(32) as *mut __m256i, out1);
        _mm256_storeu_si256(pixel_ptr.add(64) as *mut __m256i, out2);
        _mm256_storeu_si256(pixel_ptr.add(96) as *mut __m256i, out3);
        pixel_ptr = pixel_ptr.add(128);
    }

    apply_mask_generic(pixel_ptr, mask_ptr, pixel_count % 32)
}
