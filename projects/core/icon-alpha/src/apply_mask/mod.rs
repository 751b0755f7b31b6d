//! # Mask Application Module
//!
//! Derives alpha for a BGRA buffer from a monochrome mask of the same size.
//!
//! ## Input Format
//!
//! ### Pixels (`pixels`)
//! - Type: `*mut u8`
//! - `pixel_count` pixels of 4 bytes each, in B, G, R, A order
//! - Only the alpha byte is written; blue, green and red are preserved
//!
//! ### Mask (`mask`)
//! - Type: `*const u8`
//! - `pixel_count` entries of 4 bytes each, in B, G, R, A order
//! - An entry is 'black' when its blue, green and red bytes are all zero. The mask's own
//!   alpha byte is ignored.
//!
//! ## Output
//!
//! ```ignore
//! Mask entry | Pixel alpha
//! -----------|------------
//! black      | 0xFF (opaque)
//! otherwise  | 0x00 (transparent)
//! ```
//!
//! Each kernel reads both buffers as little-endian [`u32`] lanes, builds an 'is black' lane
//! mask by comparing `mask & 0x00FFFFFF` to zero, and writes `(pixel & 0x00FFFFFF) |
//! (is_black & 0xFF000000)` back. Leftover pixels go through [`generic`].

pub(crate) mod generic;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

#[cfg(all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")))]
pub(crate) mod avx512;

/// Sets the alpha of each of the first `pixel_count` pixels from the matching mask entry,
/// using the best known implementation for the current CPU.
///
/// # Safety
///
/// - `pixels` must be valid for reads and writes of `pixel_count * 4` bytes
/// - `mask` must be valid for reads of `pixel_count * 4` bytes
/// - `pixels` and `mask` must not overlap
/// - No alignment is required
#[inline]
pub(crate) unsafe fn apply_mask(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        apply_mask_x86(pixels, mask, pixel_count)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        generic::apply_mask_generic(pixels, mask, pixel_count)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn apply_mask_x86(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        // Runtime feature detection
        #[cfg(feature = "nightly")]
        if icon_alpha_common::cpu_detect::has_avx512f() {
            avx512::apply_mask(pixels, mask, pixel_count);
            return;
        }

        if icon_alpha_common::cpu_detect::has_avx2() {
            avx2::apply_mask(pixels, mask, pixel_count);
            return;
        }

        if icon_alpha_common::cpu_detect::has_sse2() {
            sse2::apply_mask(pixels, mask, pixel_count);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        #[cfg(feature = "nightly")]
        if cfg!(target_feature = "avx512f") {
            avx512::apply_mask(pixels, mask, pixel_count);
            return;
        }

        if cfg!(target_feature = "avx2") {
            avx2::apply_mask(pixels, mask, pixel_count);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::apply_mask(pixels, mask, pixel_count);
            return;
        }
    }

    // Fallback to portable implementation
    generic::apply_mask_generic(pixels, mask, pixel_count)
}
