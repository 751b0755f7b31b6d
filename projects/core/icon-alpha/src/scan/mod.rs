//! # Alpha Scan Module
//!
//! This module answers a single question about a BGRA buffer: is any alpha byte nonzero?
//!
//! ## Input Format
//!
//! ### Pixels (`pixels`)
//! - Type: `*const u8`
//! - `pixel_count` pixels of 4 bytes each, in B, G, R, A order
//! - Only the alpha byte (offset 3) of each pixel is inspected
//!
//! ## Kernels
//!
//! Every kernel ORs a batch of pixels together, masks the alpha lanes, and bails out as soon
//! as a batch is nonzero. Batches are only an optimisation: every pixel in `[0, pixel_count)`
//! is looked at, and nothing past it is read. Leftover pixels that don't fill a batch go
//! through [`generic`].
//!
//! | Kernel       | Pixels per iteration |
//! |--------------|----------------------|
//! | `avx512`     | 64                   |
//! | `avx2`       | 32                   |
//! | `sse2`       | 16                   |
//! | `portable64` | 8                    |
//! | `generic`    | 8, then 1            |

pub(crate) mod generic;
pub(crate) mod portable64;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

#[cfg(all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")))]
pub(crate) mod avx512;

/// Returns `true` if any of the first `pixel_count` pixels has a nonzero alpha byte,
/// using the best known implementation for the current CPU.
///
/// # Safety
///
/// - `pixels` must be valid for reads of `pixel_count * 4` bytes
/// - No alignment is required
#[inline]
pub(crate) unsafe fn scan_alpha(pixels: *const u8, pixel_count: usize) -> bool {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        scan_alpha_x86(pixels, pixel_count)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable64::scan_alpha(pixels, pixel_count)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn scan_alpha_x86(pixels: *const u8, pixel_count: usize) -> bool {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        // Runtime feature detection
        #[cfg(feature = "nightly")]
        if icon_alpha_common::cpu_detect::has_avx512f() {
            return avx512::scan_alpha(pixels, pixel_count);
        }

        if icon_alpha_common::cpu_detect::has_avx2() {
            return avx2::scan_alpha(pixels, pixel_count);
        }

        if icon_alpha_common::cpu_detect::has_sse2() {
            return sse2::scan_alpha(pixels, pixel_count);
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        #[cfg(feature = "nightly")]
        if cfg!(target_feature = "avx512f") {
            return avx512::scan_alpha(pixels, pixel_count);
        }

        if cfg!(target_feature = "avx2") {
            return avx2::scan_alpha(pixels, pixel_count);
        }

        if cfg!(target_feature = "sse2") {
            return sse2::scan_alpha(pixels, pixel_count);
        }
    }

    // Fallback to portable implementation
    portable64::scan_alpha(pixels, pixel_count)
}
