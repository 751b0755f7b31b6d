use crate::scan::generic::scan_alpha_generic;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use icon_alpha_common::bgra::{ALPHA_MASK, BYTES_PER_PIXEL};

/// AVX512 alpha scan.
///
/// Loads 64 pixels (256 bytes) per iteration and tests every 32-bit lane against the alpha
/// mask into a `k` register.
///
/// # Safety
///
/// - `pixels` must be valid for reads of `pixel_count * 4` bytes
#[target_feature(enable = "avx512f")]
pub(crate) unsafe fn scan_alpha(pixels: *const u8, pixel_count: usize) -> bool {
    let mut pixel_ptr = pixels;
    let batch_end = pixels.add(pixel_count / 64 * 64 * BYTES_PER_PIXEL);

    let alpha_mask = _mm512_set1_epi32(ALPHA_MASK as i32);

    while pixel_ptr < batch_end {
        let pixels0 = _mm512_loadu_si512(pixel_ptr as *const _);
        let pixels1 = _mm512_loadu_si512(pixel_ptr.add(64) as *const _);
        let pixels2 = _mm512_loadu_si512(pixel_ptr.add(128) as *const _);
        let pixels3 = _mm512_loadu_si512(pixel_ptr.add(192) as *const _);

        let combined = _mm512_or_si512(
            _mm512_or_si512(pixels0, pixels1),
            _mm512_or_si512(pixels2, pixels3),
        );

        if _mm512_test_epi32_mask(combined, alpha_mask) != 0 {
            return true;
        }
        pixel_ptr = pixel_ptr.add(64 * BYTES_PER_PIXEL);
    }

    scan_alpha_generic(pixel_ptr, pixel_count % 64)
}
