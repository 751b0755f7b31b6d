use core::ptr::{read_unaligned, write_unaligned};
use icon_alpha_common::bgra::{ALPHA_MASK, COLOR_MASK};
use multiversion::multiversion;

/// Portable mask application, one pixel at a time.
///
/// # Safety
///
/// - `pixels` must be valid for reads and writes of `pixel_count * 4` bytes
/// - `mask` must be valid for reads of `pixel_count * 4` bytes
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) unsafe fn apply_mask_generic(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    unsafe {
        let mut pixel_ptr = pixels as *mut u32;
        let mut mask_ptr = mask as *const u32;
        let mask_end = mask_ptr.add(pixel_count);

        while mask_ptr < mask_end {
            let entry = u32::from_le(read_unaligned(mask_ptr));
            let pixel = u32::from_le(read_unaligned(pixel_ptr));

            let alpha = if entry & COLOR_MASK == 0 {
                ALPHA_MASK
            } else {
                0
            };
            write_unaligned(pixel_ptr, ((pixel & COLOR_MASK) | alpha).to_le());

            pixel_ptr = pixel_ptr.add(1);
            mask_ptr = mask_ptr.add(1);
        }
    }
}
