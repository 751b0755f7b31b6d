//! C API for alpha processing.
//!
//! Two families of exports are provided:
//!
//! - `icon_scan_and_apply_mask` and `icon_scan_alpha_only`: drop-in replacements for the
//!   legacy native helpers. They return `1` if alpha is present and `0` otherwise, and
//!   treat null pointers or a zero pixel count as 'no alpha'.
//! - `icon_alpha_*_checked`: take buffer lengths, validate them, and return an
//!   [`IconAlphaResult`] that separates invalid input from a legitimate 'no alpha' answer.

pub mod error;
pub mod scan;

pub use error::{IconAlphaErrorCode, IconAlphaOutcome, IconAlphaResult};
pub use scan::*;
