use crate::scan::generic::scan_alpha_generic;
use core::ptr::read_unaligned;
use icon_alpha_common::bgra::BYTES_PER_PIXEL;

/// Alpha lanes of two pixels read as a little-endian [`u64`].
const ALPHA_MASK_U64: u64 = 0xFF00_0000_FF00_0000;

/// Alpha scan using 64-bit general purpose registers.
///
/// Reads 8 pixels as four [`u64`] words per iteration and tests all alpha lanes at once.
///
/// # Safety
///
/// - `pixels` must be valid for reads of `pixel_count * 4` bytes
pub(crate) unsafe fn scan_alpha(pixels: *const u8, pixel_count: usize) -> bool {
    let mut pixel_ptr = pixels;
    let batch_end = pixels.add(pixel_count / 8 * 8 * BYTES_PER_PIXEL);

    while pixel_ptr < batch_end {
        let word0 = read_unaligned(pixel_ptr as *const u64);
        let word1 = read_unaligned(pixel_ptr.add(8) as *const u64);
        let word2 = read_unaligned(pixel_ptr.add(16) as *const u64);
        let word3 = read_unaligned(pixel_ptr.add(24) as *const u64);

        if u64::from_le(word0 | word1 | word2 | word3) & ALPHA_MASK_U64 != 0 {
            return true;
        }
        pixel_ptr = pixel_ptr.add(8 * BYTES_PER_PIXEL);
    }

    scan_alpha_generic(pixel_ptr, pixel_count % 8)
}
