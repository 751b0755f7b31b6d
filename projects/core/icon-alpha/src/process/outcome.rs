use derive_enum_all_values::AllValues;

/// What [`scan_and_apply_mask`] found and did.
///
/// The raw and C entry points collapse this to a single boolean (`true` only for
/// [`ScanOutcome::HasAlpha`]); the safe API returns it as is.
///
/// [`scan_and_apply_mask`]: crate::scan_and_apply_mask_safe
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum ScanOutcome {
    /// At least one pixel had a nonzero alpha byte. The buffer was left untouched.
    HasAlpha,
    /// No pixel had alpha, so alpha was derived from the mask for every pixel.
    MaskApplied,
    /// No pixel had alpha and no mask was supplied. The buffer was left untouched.
    NoAlphaNoMask,
}

impl ScanOutcome {
    /// Returns `true` if the original pixels carried alpha.
    ///
    /// This is the value the legacy boolean API returns.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, ScanOutcome::HasAlpha)
    }

    /// Returns `true` if the pixel buffer was written to.
    #[inline]
    pub const fn modified_pixels(self) -> bool {
        matches!(self, ScanOutcome::MaskApplied)
    }
}
