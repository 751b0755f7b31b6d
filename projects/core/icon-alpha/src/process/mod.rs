//! Alpha scan and mask application over BGRA buffers.
//!
//! This module provides the raw, pointer based entry points. They follow the legacy contract:
//! a boolean result, with null pointers or a zero pixel count quietly treated as 'no alpha'.
//! Prefer the slice based functions in [`safe`], which validate buffer sizes and tell invalid
//! input apart from a legitimate 'no alpha' answer.
//!
//! ## Performance Characteristics
//!
//! Both passes run at memory bandwidth on modern x86 CPUs. The scan returns as soon as a
//! batch containing a nonzero alpha byte is found, so images with real alpha are usually
//! rejected within the first few cache lines.

mod outcome;

// Safe slice-based wrapper functions
pub mod safe;

pub use outcome::ScanOutcome;
pub use safe::{has_alpha, IconAlphaValidationError};

use likely_stable::unlikely;

/// Returns `true` if any of the first `pixel_count` pixels has a nonzero alpha byte.
///
/// Returns `false` if `pixels` is null, `pixel_count` is zero, or every alpha byte is zero.
/// The buffer is never modified.
///
/// # Safety
///
/// - `pixels` must be null, or valid for reads of `pixel_count * 4` bytes
/// - No alignment is required
///
/// # Examples
///
/// ```
/// use icon_alpha::scan_alpha_only;
///
/// let pixels = [0x10, 0x20, 0x30, 0x00, 0x10, 0x20, 0x30, 0x80];
/// assert!(unsafe { scan_alpha_only(pixels.as_ptr(), 2) });
/// assert!(!unsafe { scan_alpha_only(pixels.as_ptr(), 1) });
/// ```
#[inline]
pub unsafe fn scan_alpha_only(pixels: *const u8, pixel_count: usize) -> bool {
    if unlikely(pixels.is_null() || pixel_count == 0) {
        return false;
    }

    crate::scan::scan_alpha(pixels, pixel_count)
}

/// Scans the pixels for alpha and, if none is found, derives alpha from `mask_pixels`.
///
/// 1. If any alpha byte is nonzero, returns `true` and leaves `pixels` untouched.
/// 2. Otherwise, if `mask_pixels` is null, returns `false` and leaves `pixels` untouched.
/// 3. Otherwise sets every pixel's alpha to `0xFF` where the mask entry is black, and to
///    `0x00` elsewhere, then returns `false`. Colour bytes are never modified.
///
/// Returns `false` without touching either buffer if `pixels` is null or `pixel_count` is
/// zero.
///
/// # Safety
///
/// - `pixels` must be null, or valid for reads and writes of `pixel_count * 4` bytes
/// - `mask_pixels` must be null, or valid for reads of `pixel_count * 4` bytes
/// - `pixels` and `mask_pixels` must not overlap
/// - No alignment is required
///
/// # Examples
///
/// ```
/// use icon_alpha::scan_and_apply_mask;
///
/// let mut pixels = [0x00, 0x00, 0x00, 0x00, 0x10, 0x20, 0x30, 0x00];
/// let mask = [0x00, 0x00, 0x00, 0xAA, 0xFF, 0xFF, 0xFF, 0xAA];
///
/// let had_alpha = unsafe { scan_and_apply_mask(pixels.as_mut_ptr(), mask.as_ptr(), 2) };
/// assert!(!had_alpha);
/// assert_eq!(pixels, [0x00, 0x00, 0x00, 0xFF, 0x10, 0x20, 0x30, 0x00]);
/// ```
#[inline]
pub unsafe fn scan_and_apply_mask(
    pixels: *mut u8,
    mask_pixels: *const u8,
    pixel_count: usize,
) -> bool {
    if unlikely(pixels.is_null() || pixel_count == 0) {
        return false;
    }

    scan_and_apply_mask_unchecked(pixels, mask_pixels, pixel_count).has_alpha()
}

/// Sets the alpha of each of the first `pixel_count` pixels from `mask_pixels`, without
/// scanning for existing alpha first.
///
/// Black mask entries make the pixel opaque (`0xFF`); anything else makes it transparent
/// (`0x00`). Does nothing if either pointer is null or `pixel_count` is zero.
///
/// # Safety
///
/// - `pixels` must be null, or valid for reads and writes of `pixel_count * 4` bytes
/// - `mask_pixels` must be null, or valid for reads of `pixel_count * 4` bytes
/// - `pixels` and `mask_pixels` must not overlap
/// - No alignment is required
#[inline]
pub unsafe fn apply_mask(pixels: *mut u8, mask_pixels: *const u8, pixel_count: usize) {
    if unlikely(pixels.is_null() || mask_pixels.is_null() || pixel_count == 0) {
        return;
    }

    crate::apply_mask::apply_mask(pixels, mask_pixels, pixel_count);
}

/// Both phases of [`scan_and_apply_mask`], reporting which one decided the result.
///
/// # Safety
///
/// - `pixels` must be non-null and valid for reads and writes of `pixel_count * 4` bytes
/// - `mask_pixels` must be null, or valid for reads of `pixel_count * 4` bytes
/// - `pixels` and `mask_pixels` must not overlap
#[inline]
pub(crate) unsafe fn scan_and_apply_mask_unchecked(
    pixels: *mut u8,
    mask_pixels: *const u8,
    pixel_count: usize,
) -> ScanOutcome {
    if crate::scan::scan_alpha(pixels, pixel_count) {
        return ScanOutcome::HasAlpha;
    }

    if mask_pixels.is_null() {
        return ScanOutcome::NoAlphaNoMask;
    }

    crate::apply_mask::apply_mask(pixels, mask_pixels, pixel_count);
    ScanOutcome::MaskApplied
}
