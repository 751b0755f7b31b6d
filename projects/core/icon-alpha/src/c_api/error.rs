//! C API result types for alpha processing operations.

use crate::{IconAlphaValidationError, ScanOutcome};
use derive_enum_all_values::AllValues;

/// C-compatible error codes for alpha processing operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum IconAlphaErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Null pointer provided for the pixels parameter
    NullPixelsPointer = 1,
    /// Null pointer provided for a required mask parameter
    NullMaskPointer = 2,
    /// Pixel count is zero or the pixel buffer is empty
    EmptyInput = 3,
    /// `pixel_count * 4` does not fit in a `size_t`
    PixelCountOverflow = 4,
    /// Pixel buffer is shorter than `pixel_count * 4` bytes
    PixelBufferTooSmall = 5,
    /// Mask buffer is shorter than `pixel_count * 4` bytes
    MaskBufferTooSmall = 6,
}

/// C-compatible description of what a successful call found and did.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAlphaOutcome {
    /// No outcome; the call failed
    None = 0,
    /// The pixels carry alpha and were left untouched
    HasAlpha = 1,
    /// The pixels had no alpha; alpha was derived from the mask
    MaskApplied = 2,
    /// The pixels had no alpha and no mask was given; the pixels were left untouched
    NoAlphaNoMask = 3,
}

impl From<ScanOutcome> for IconAlphaOutcome {
    fn from(outcome: ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::HasAlpha => IconAlphaOutcome::HasAlpha,
            ScanOutcome::MaskApplied => IconAlphaOutcome::MaskApplied,
            ScanOutcome::NoAlphaNoMask => IconAlphaOutcome::NoAlphaNoMask,
        }
    }
}

/// C-compatible Result type for alpha processing operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAlphaResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: IconAlphaErrorCode,
    /// What the call found; [`IconAlphaOutcome::None`] unless `error_code` is `Success`
    pub outcome: IconAlphaOutcome,
}

impl IconAlphaResult {
    /// Create a success result
    pub const fn success(outcome: IconAlphaOutcome) -> Self {
        Self {
            error_code: IconAlphaErrorCode::Success,
            outcome,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: IconAlphaErrorCode) -> Self {
        Self {
            error_code,
            outcome: IconAlphaOutcome::None,
        }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, IconAlphaErrorCode::Success)
    }
}

impl From<IconAlphaValidationError> for IconAlphaErrorCode {
    fn from(error: IconAlphaValidationError) -> Self {
        match error {
            IconAlphaValidationError::EmptyInput => IconAlphaErrorCode::EmptyInput,
            IconAlphaValidationError::PixelCountOverflow(_) => {
                IconAlphaErrorCode::PixelCountOverflow
            }
            IconAlphaValidationError::PixelBufferTooSmall { .. } => {
                IconAlphaErrorCode::PixelBufferTooSmall
            }
            IconAlphaValidationError::MaskBufferTooSmall { .. } => {
                IconAlphaErrorCode::MaskBufferTooSmall
            }
        }
    }
}

impl From<IconAlphaValidationError> for IconAlphaResult {
    fn from(error: IconAlphaValidationError) -> Self {
        Self::from_error_code(error.into())
    }
}

impl From<Result<ScanOutcome, IconAlphaValidationError>> for IconAlphaResult {
    fn from(result: Result<ScanOutcome, IconAlphaValidationError>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome.into()),
            Err(e) => e.into(),
        }
    }
}
