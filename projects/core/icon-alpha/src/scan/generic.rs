use icon_alpha_common::bgra::{ALPHA_OFFSET, BYTES_PER_PIXEL};
use multiversion::multiversion;

/// Portable alpha scan.
///
/// Checks 8 pixels at a time by ORing their alpha bytes, then finishes the remainder one
/// pixel at a time. Also used by the SIMD kernels to handle their tails.
///
/// # Safety
///
/// - `pixels` must be valid for reads of `pixel_count * 4` bytes
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) unsafe fn scan_alpha_generic(pixels: *const u8, pixel_count: usize) -> bool {
    unsafe {
        let mut pixel_ptr = pixels;
        let batch_end = pixels.add(pixel_count / 8 * 8 * BYTES_PER_PIXEL);
        let end = pixels.add(pixel_count * BYTES_PER_PIXEL);

        while pixel_ptr < batch_end {
            let alphas = *pixel_ptr.add(ALPHA_OFFSET)
                | *pixel_ptr.add(ALPHA_OFFSET + 4)
                | *pixel_ptr.add(ALPHA_OFFSET + 8)
                | *pixel_ptr.add(ALPHA_OFFSET + 12)
                | *pixel_ptr.add(ALPHA_OFFSET + 16)
                | *pixel_ptr.add(ALPHA_OFFSET + 20)
                | *pixel_ptr.add(ALPHA_OFFSET + 24)
                | *pixel_ptr.add(ALPHA_OFFSET + 28);
            if alphas != 0 {
                return true;
            }
            pixel_ptr = pixel_ptr.add(8 * BYTES_PER_PIXEL);
        }

        while pixel_ptr < end {
            if *pixel_ptr.add(ALPHA_OFFSET) != 0 {
                return true;
            }
            pixel_ptr = pixel_ptr.add(BYTES_PER_PIXEL);
        }

        false
    }
}
