use crate::apply_mask::generic::apply_mask_generic;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use icon_alpha_common::bgra::{ALPHA_MASK, BYTES_PER_PIXEL, COLOR_MASK};

/// AVX512 mask application, 64 pixels per iteration.
///
/// Black mask lanes are found with `vptestnmd` into a `k` register, which then drives a
/// masked OR of the alpha bits.
///
/// # Safety
///
/// - `pixels` must be valid for reads and writes of `pixel_count * 4` bytes
/// - `mask` must be valid for reads of `pixel_count * 4` bytes
#[target_feature(enable = "avx512f")]
pub(crate) unsafe fn apply_mask(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    let mut pixel_ptr = pixels;
    let mut mask_ptr = mask;
    let mask_end = mask.add(pixel_count / 64 * 64 * BYTES_PER_PIXEL);

    let color_mask = _mm512_set1_epi32(COLOR_MASK as i32);
    let alpha_mask = _mm512_set1_epi32(ALPHA_MASK as i32);

    while mask_ptr < mask_end {
        let mask0 = _mm512_loadu_si512(mask_ptr as *const _);
        let mask1 = _mm512_loadu_si512(mask_ptr.add(64) as *const _);
        let mask2 = _mm512_loadu_si512(mask_ptr.add(128) as *const _);
        let mask3 = _mm512_loadu_si512(mask_ptr.add(192) as *const _);
        mask_ptr = mask_ptr.add(256);

        let colors0 = _mm512_and_si512(_mm512_loadu_si512(pixel_ptr as *const _), color_mask);
        let colors1 =
            _mm512_and_si512(_mm512_loadu_si512(pixel_ptr.add(64) as *const _), color_mask);
        let colors2 =
            _mm512_and_si512(_mm512_loadu_si512(pixel_ptr.add(128) as *const _), color_mask);
        let colors3 =
            _mm512_and_si512(_mm512_loadu_si512(pixel_ptr.add(192) as *const _), color_mask);

        // Bit set for every lane whose mask colour is black
        let black0 = _mm512_testn_epi32_mask(mask0, color_mask);
        let black1 = _mm512_testn_epi32_mask(mask1, color_mask);
        let black2 = _mm512_testn_epi32_mask(mask2, color_mask);
        let black3 = _mm512_testn_epi32_mask(mask3, color_mask);

        let out0 = _mm512_mask_or_epi32(colors0, black0, colors0, alpha_mask);
        let out1 = _mm512_mask_or_epi32(colors1, black1, colors1, alpha_mask);
        let out2 = _mm512_mask_or_epi32(colors2, black2, colors2, alpha_mask);
        let out3 = _mm512_mask_or_epi32(colors3, black3, colors3, alpha_mask);

        _mm512_storeu_si512(pixel_ptr as *mut _, out0);
        _mm512_storeu_si512(pixel_ptr.add(64) as *mut _, out1);
        _mm512_storeu_si512(pixel_ptr.add(128) as *mut _, out2);
        _mm512_storeu_si512(pixel_ptr.add(192) as *mut _, out3);
        pixel_ptr = pixel_ptr.add(256);
    }

    apply_mask_generic(pixel_ptr, mask_ptr, pixel_count % 64)
}
