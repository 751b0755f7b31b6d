//! Alpha scan and mask application for C API.
//!
//! This module provides C-compatible FFI functions for scanning BGRA icon pixels for alpha
//! and deriving alpha from a mask image.

use super::error::{IconAlphaErrorCode, IconAlphaOutcome, IconAlphaResult};
use crate::{apply_mask_safe, scan_alpha_only_safe, scan_and_apply_mask_safe};
use core::ffi::c_int;
use core::slice;

// =============================================================================
// Legacy C API Functions
// =============================================================================

/// Scan pixels for alpha and, if none is found, derive alpha from the mask.
///
/// # Parameters
/// - `pixels`: Pointer to BGRA pixel data (`pixel_count * 4` bytes)
/// - `mask_pixels`: Pointer to BGRA mask data (`pixel_count * 4` bytes), or null for no mask
/// - `pixel_count`: Number of pixels to process
///
/// # Returns
/// `1` if the pixels already carry alpha, `0` otherwise (including for a null `pixels` or a
/// zero `pixel_count`). When `0` is returned and `mask_pixels` is non-null, every pixel's
/// alpha has been replaced from the mask.
///
/// # Safety
/// - `pixels` must be null, or valid for reads and writes of `pixel_count * 4` bytes
/// - `mask_pixels` must be null, or valid for reads of `pixel_count * 4` bytes
/// - The two buffers must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn icon_scan_and_apply_mask(
    pixels: *mut u8,
    mask_pixels: *const u8,
    pixel_count: u32,
) -> c_int {
    c_int::from(unsafe {
        crate::scan_and_apply_mask(pixels, mask_pixels, pixel_count as usize)
    })
}

/// Scan pixels for alpha without modifying them.
///
/// # Parameters
/// - `pixels`: Pointer to BGRA pixel data (`pixel_count * 4` bytes)
/// - `pixel_count`: Number of pixels to scan
///
/// # Returns
/// `1` if any pixel has a nonzero alpha byte, `0` otherwise (including for a null `pixels`
/// or a zero `pixel_count`).
///
/// # Safety
/// - `pixels` must be null, or valid for reads of `pixel_count * 4` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn icon_scan_alpha_only(pixels: *const u8, pixel_count: u32) -> c_int {
    c_int::from(unsafe { crate::scan_alpha_only(pixels, pixel_count as usize) })
}

// =============================================================================
// Checked C API Functions
// =============================================================================

/// Scan pixels for alpha and, if none is found, derive alpha from the mask.
///
/// # Parameters
/// - `pixels`: Pointer to BGRA pixel data
/// - `pixels_len`: Length of the pixel buffer in bytes (at least `pixel_count * 4`)
/// - `mask_pixels`: Pointer to BGRA mask data, or null for no mask
/// - `mask_len`: Length of the mask buffer in bytes (at least `pixel_count * 4`; ignored
///   when `mask_pixels` is null)
/// - `pixel_count`: Number of pixels to process
///
/// # Returns
/// An [`IconAlphaResult`] whose `outcome` says whether alpha was found, the mask was applied,
/// or nothing was done. On error, neither buffer has been modified.
///
/// # Safety
/// - `pixels` must be valid for reads and writes of `pixels_len` bytes
/// - `mask_pixels` must be null, or valid for reads of `mask_len` bytes
/// - The two buffers must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn icon_alpha_scan_and_apply_mask_checked(
    pixels: *mut u8,
    pixels_len: usize,
    mask_pixels: *const u8,
    mask_len: usize,
    pixel_count: usize,
) -> IconAlphaResult {
    if pixels.is_null() {
        return IconAlphaResult::from_error_code(IconAlphaErrorCode::NullPixelsPointer);
    }

    let pixels = unsafe { slice::from_raw_parts_mut(pixels, pixels_len) };
    let mask = if mask_pixels.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts(mask_pixels, mask_len) })
    };

    scan_and_apply_mask_safe(pixels, mask, pixel_count).into()
}

/// Scan pixels for alpha without modifying them.
///
/// # Parameters
/// - `pixels`: Pointer to BGRA pixel data
/// - `pixels_len`: Length of the pixel buffer in bytes (at least `pixel_count * 4`)
/// - `pixel_count`: Number of pixels to scan
///
/// # Returns
/// An [`IconAlphaResult`] whose `outcome` is [`IconAlphaOutcome::HasAlpha`] if any pixel has
/// a nonzero alpha byte, and [`IconAlphaOutcome::NoAlphaNoMask`] otherwise.
///
/// # Safety
/// - `pixels` must be valid for reads of `pixels_len` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn icon_alpha_scan_alpha_only_checked(
    pixels: *const u8,
    pixels_len: usize,
    pixel_count: usize,
) -> IconAlphaResult {
    if pixels.is_null() {
        return IconAlphaResult::from_error_code(IconAlphaErrorCode::NullPixelsPointer);
    }

    let pixels = unsafe { slice::from_raw_parts(pixels, pixels_len) };
    match scan_alpha_only_safe(pixels, pixel_count) {
        Ok(true) => IconAlphaResult::success(IconAlphaOutcome::HasAlpha),
        Ok(false) => IconAlphaResult::success(IconAlphaOutcome::NoAlphaNoMask),
        Err(e) => e.into(),
    }
}

/// Derive alpha from the mask without scanning for existing alpha first.
///
/// # Parameters
/// - `pixels`: Pointer to BGRA pixel data
/// - `pixels_len`: Length of the pixel buffer in bytes (at least `pixel_count * 4`)
/// - `mask_pixels`: Pointer to BGRA mask data
/// - `mask_len`: Length of the mask buffer in bytes (at least `pixel_count * 4`)
/// - `pixel_count`: Number of pixels to process
///
/// # Returns
/// An [`IconAlphaResult`] with outcome [`IconAlphaOutcome::MaskApplied`] on success.
///
/// # Safety
/// - `pixels` must be valid for reads and writes of `pixels_len` bytes
/// - `mask_pixels` must be valid for reads of `mask_len` bytes
/// - The two buffers must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn icon_alpha_apply_mask_checked(
    pixels: *mut u8,
    pixels_len: usize,
    mask_pixels: *const u8,
    mask_len: usize,
    pixel_count: usize,
) -> IconAlphaResult {
    if pixels.is_null() {
        return IconAlphaResult::from_error_code(IconAlphaErrorCode::NullPixelsPointer);
    }
    if mask_pixels.is_null() {
        return IconAlphaResult::from_error_code(IconAlphaErrorCode::NullMaskPointer);
    }

    let pixels = unsafe { slice::from_raw_parts_mut(pixels, pixels_len) };
    let mask = unsafe { slice::from_raw_parts(mask_pixels, mask_len) };

    match apply_mask_safe(pixels, mask, pixel_count) {
        Ok(()) => IconAlphaResult::success(IconAlphaOutcome::MaskApplied),
        Err(e) => e.into(),
    }
}
