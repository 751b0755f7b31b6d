use crate::scan::generic::scan_alpha_generic;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use icon_alpha_common::bgra::{ALPHA_MASK, BYTES_PER_PIXEL};

/// AVX2 alpha scan.
///
/// Loads 32 pixels (128 bytes) per iteration into four registers, ORs them together and uses
/// `vptest` against the alpha mask.
///
/// # Safety
///
/// - `pixels` must be valid for reads of `pixel_count * 4` bytes
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn scan_alpha(pixels: *const u8, pixel_count: usize) -> bool {
    let mut pixel_ptr = pixels;
    let batch_end = pixels.add(pixel_count / 32 * 32 * BYTES_PER_PIXEL);

    let alpha_mask = _mm256_set1_epi32(ALPHA_MASK as i32);

    while pixel_ptr < batch_end {
        let pixels0 = _mm256_loadu_si256(pixel_ptr as *const __m256i);
        let pixels1 = _mm256_loadu_si256(pixel_ptr.add(32) as *const __m256i);
        let pixels2 = _mm256_loadu_si256(pixel_ptr.add(64) as *const __m256i);
        let pixels3 = _mm256_loadu_si256(pixel_ptr.add(96) as *const __m256i);

        let combined = _mm256_or_si256(
            _mm256_or_si256(pixels0, pixels1),
            _mm256_or_si256(pixels2, pixels3),
        );

        // testz returns 1 when (combined & alpha_mask) == 0
        if _mm256_testz_si256(combined, alpha_mask) == 0 {
            return true;
        }
        pixel_ptr = pixel_ptr.add(32 * BYTES_PER_PIXEL);
    }

    scan_alpha_generic(pixel_ptr, pixel_count % 32)
}
