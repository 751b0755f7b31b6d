//! Safe slice-based alpha processing wrappers
//!
//! This module provides safe, slice-based wrapper functions around the unsafe
//! pointer-based functions in [`crate::process`]. These functions validate that every
//! buffer holds at least `pixel_count * 4` bytes before anything is read or written, and
//! report invalid input as an error rather than as 'no alpha'.

use crate::process::{scan_and_apply_mask_unchecked, ScanOutcome};
use core::ptr::null;
use icon_alpha_common::bgra::BYTES_PER_PIXEL;
use thiserror::Error;

/// Validation errors for alpha processing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconAlphaValidationError {
    /// The pixel count is zero, or the pixel buffer is empty.
    #[error("Empty input: pixel count is zero or the pixel buffer is empty")]
    EmptyInput,

    /// `pixel_count * 4` does not fit in a [`usize`].
    #[error("Pixel count {0} is too large to address")]
    PixelCountOverflow(usize),

    /// The pixel buffer is shorter than `pixel_count * 4` bytes.
    #[error("Pixel buffer too small: needed {needed}, got {actual}")]
    PixelBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },

    /// The mask buffer is shorter than `pixel_count * 4` bytes.
    #[error("Mask buffer too small: needed {needed}, got {actual}")]
    MaskBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}

/// Returns `true` if any of the first `pixel_count` pixels has a nonzero alpha byte.
///
/// # Parameters
///
/// - `pixels`: BGRA pixel data, at least `pixel_count * 4` bytes
/// - `pixel_count`: Number of pixels to scan
///
/// # Errors
///
/// - [`IconAlphaValidationError::EmptyInput`] if `pixel_count` is zero or `pixels` is empty
/// - [`IconAlphaValidationError::PixelCountOverflow`] if `pixel_count * 4` overflows
/// - [`IconAlphaValidationError::PixelBufferTooSmall`] if `pixels` is too short
///
/// # Examples
///
/// ```
/// use icon_alpha::scan_alpha_only_safe;
/// # use icon_alpha::IconAlphaValidationError;
///
/// # fn main() -> Result<(), IconAlphaValidationError> {
/// let pixels = [0x10, 0x20, 0x30, 0x00, 0x10, 0x20, 0x30, 0x80];
/// assert!(scan_alpha_only_safe(&pixels, 2)?);
/// assert!(!scan_alpha_only_safe(&pixels, 1)?);
/// # Ok(())
/// # }
/// ```
pub fn scan_alpha_only(
    pixels: &[u8],
    pixel_count: usize,
) -> Result<bool, IconAlphaValidationError> {
    validate_pixels(pixels.len(), pixel_count)?;

    // Safety: We've validated the pixel buffer holds `pixel_count` pixels
    Ok(unsafe { crate::scan::scan_alpha(pixels.as_ptr(), pixel_count) })
}

/// Scans the pixels for alpha and, if none is found, derives alpha from `mask`.
///
/// All buffer sizes are validated before either buffer is touched, so on error `pixels` is
/// always left unmodified.
///
/// # Parameters
///
/// - `pixels`: BGRA pixel data, at least `pixel_count * 4` bytes. Modified only when the
///   result is [`ScanOutcome::MaskApplied`].
/// - `mask`: Optional BGRA mask, at least `pixel_count * 4` bytes. Black entries make the
///   pixel opaque; anything else makes it transparent.
/// - `pixel_count`: Number of pixels to process
///
/// # Errors
///
/// - [`IconAlphaValidationError::EmptyInput`] if `pixel_count` is zero or `pixels` is empty
/// - [`IconAlphaValidationError::PixelCountOverflow`] if `pixel_count * 4` overflows
/// - [`IconAlphaValidationError::PixelBufferTooSmall`] if `pixels` is too short
/// - [`IconAlphaValidationError::MaskBufferTooSmall`] if `mask` is too short
///
/// # Examples
///
/// ```
/// use icon_alpha::{scan_and_apply_mask_safe, ScanOutcome};
/// # use icon_alpha::IconAlphaValidationError;
///
/// # fn main() -> Result<(), IconAlphaValidationError> {
/// let mut pixels = [0x10, 0x20, 0x30, 0x00];
/// let mask = [0x00, 0x00, 0x00, 0x00];
///
/// let outcome = scan_and_apply_mask_safe(&mut pixels, Some(&mask[..]), 1)?;
/// assert_eq!(outcome, ScanOutcome::MaskApplied);
/// assert_eq!(pixels, [0x10, 0x20, 0x30, 0xFF]);
/// # Ok(())
/// # }
/// ```
pub fn scan_and_apply_mask(
    pixels: &mut [u8],
    mask: Option<&[u8]>,
    pixel_count: usize,
) -> Result<ScanOutcome, IconAlphaValidationError> {
    let needed = validate_pixels(pixels.len(), pixel_count)?;
    if let Some(mask) = mask {
        validate_mask(mask.len(), needed)?;
    }

    let mask_ptr = mask.map_or(null(), <[u8]>::as_ptr);

    // Safety: Both buffers were validated to hold `pixel_count` pixels, and the borrow
    // checker guarantees they don't overlap.
    let outcome =
        unsafe { scan_and_apply_mask_unchecked(pixels.as_mut_ptr(), mask_ptr, pixel_count) };
    ltrace!("scan_and_apply_mask: {} pixels, {:?}", pixel_count, outcome);
    Ok(outcome)
}

/// Sets the alpha of each of the first `pixel_count` pixels from `mask`, without scanning
/// for existing alpha first.
///
/// Useful when the caller already knows the image has no alpha, for example from an earlier
/// call to [`scan_alpha_only`].
///
/// # Parameters
///
/// - `pixels`: BGRA pixel data, at least `pixel_count * 4` bytes
/// - `mask`: BGRA mask, at least `pixel_count * 4` bytes
/// - `pixel_count`: Number of pixels to process
///
/// # Errors
///
/// - [`IconAlphaValidationError::EmptyInput`] if `pixel_count` is zero or `pixels` is empty
/// - [`IconAlphaValidationError::PixelCountOverflow`] if `pixel_count * 4` overflows
/// - [`IconAlphaValidationError::PixelBufferTooSmall`] if `pixels` is too short
/// - [`IconAlphaValidationError::MaskBufferTooSmall`] if `mask` is too short
pub fn apply_mask(
    pixels: &mut [u8],
    mask: &[u8],
    pixel_count: usize,
) -> Result<(), IconAlphaValidationError> {
    let needed = validate_pixels(pixels.len(), pixel_count)?;
    validate_mask(mask.len(), needed)?;

    // Safety: Both buffers were validated to hold `pixel_count` pixels
    unsafe { crate::apply_mask::apply_mask(pixels.as_mut_ptr(), mask.as_ptr(), pixel_count) };
    Ok(())
}

/// Returns `true` if any whole pixel in `pixels` has a nonzero alpha byte.
///
/// The pixel count is `pixels.len() / 4`; trailing bytes that don't form a whole pixel are
/// ignored. An empty slice has no alpha.
///
/// # Examples
///
/// ```
/// use icon_alpha::has_alpha;
///
/// assert!(has_alpha(&[0x00, 0x00, 0x00, 0x01]));
/// assert!(!has_alpha(&[0x00, 0x00, 0x00, 0x00, 0xFF]));
/// assert!(!has_alpha(&[]));
/// ```
#[inline]
pub fn has_alpha(pixels: &[u8]) -> bool {
    let pixel_count = pixels.len() / BYTES_PER_PIXEL;
    if pixel_count == 0 {
        return false;
    }

    // Safety: `pixel_count` whole pixels fit in `pixels` by construction
    unsafe { crate::scan::scan_alpha(pixels.as_ptr(), pixel_count) }
}

/// Validates the pixel buffer and returns the number of bytes `pixel_count` pixels occupy.
fn validate_pixels(
    pixels_len: usize,
    pixel_count: usize,
) -> Result<usize, IconAlphaValidationError> {
    let result = if pixel_count == 0 || pixels_len == 0 {
        Err(IconAlphaValidationError::EmptyInput)
    } else {
        match pixel_count.checked_mul(BYTES_PER_PIXEL) {
            None => Err(IconAlphaValidationError::PixelCountOverflow(pixel_count)),
            Some(needed) if pixels_len < needed => {
                Err(IconAlphaValidationError::PixelBufferTooSmall {
                    needed,
                    actual: pixels_len,
                })
            }
            Some(needed) => Ok(needed),
        }
    };

    if let Err(error) = &result {
        ldebug!("rejected pixel buffer: {}", error);
    }
    result
}

fn validate_mask(mask_len: usize, needed: usize) -> Result<(), IconAlphaValidationError> {
    if mask_len < needed {
        let error = IconAlphaValidationError::MaskBufferTooSmall {
            needed,
            actual: mask_len,
        };
        ldebug!("rejected mask buffer: {}", error);
        return Err(error);
    }
    Ok(())
}
