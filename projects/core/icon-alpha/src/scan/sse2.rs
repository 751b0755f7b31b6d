use crate::scan::generic::scan_alpha_generic;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use icon_alpha_common::bgra::{ALPHA_MASK, BYTES_PER_PIXEL};

/// SSE2 alpha scan.
///
/// Loads 16 pixels (64 bytes) per iteration, ORs them into one register, keeps only the alpha
/// lanes and compares against zero.
///
/// # Safety
///
/// - `pixels` must be valid for reads of `pixel_count * 4` bytes
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn scan_alpha(pixels: *const u8, pixel_count: usize) -> bool {
    let mut pixel_ptr = pixels;
    let batch_end = pixels.add(pixel_count / 16 * 16 * BYTES_PER_PIXEL);

    let alpha_mask = _mm_set1_epi32(ALPHA_MASK as i32);
    let zero = _mm_setzero_si128();

    while pixel_ptr < batch_end {
        let pixels0 = _mm_loadu_si128(pixel_ptr as *const __m128i);
        let pixels1 = _mm_loadu_si128(pixel_ptr.add(16) as *const __m128i);
        let pixels2 = _mm_loadu_si128(pixel_ptr.add(32) as *const __m128i);
        let pixels3 = _mm_loadu_si128(pixel_ptr.add(48) as *const __m128i);

        let combined = _mm_or_si128(_mm_or_si128(pixels0, pixels1), _mm_or_si128(pixels2, pixels3));
        let alphas = _mm_and_si128(combined, alpha_mask);

        // All 16 bytes compare equal to zero only if every alpha lane is zero.
        if _mm_movemask_epi8(_mm_cmpeq_epi8(alphas, zero)) != 0xFFFF {
            return true;
        }
        pixel_ptr = pixel_ptr.add(16 * BYTES_PER_PIXEL);
    }

    scan_alpha_generic(pixel_ptr, pixel_count % 16)
}
