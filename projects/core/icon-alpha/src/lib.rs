#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
// Not yet in stable today, but will be in 1.89.0
#![allow(stable_features)]
#![cfg_attr(
    all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")),
    feature(stdarch_x86_avx512)
)]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod logging;

mod apply_mask;
mod scan;

/// Alpha scan and mask application over BGRA buffers.
pub mod process;

#[cfg(feature = "bench")]
pub mod bench;

/// C API functions (enabled with c-exports feature)
#[cfg(feature = "c-exports")]
pub mod c_api;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use icon_alpha_common::bgra::Bgra8888;
pub use process::{
    apply_mask, has_alpha, scan_alpha_only, scan_and_apply_mask, IconAlphaValidationError,
    ScanOutcome,
};
pub use process::safe::{
    apply_mask as apply_mask_safe, scan_alpha_only as scan_alpha_only_safe,
    scan_and_apply_mask as scan_and_apply_mask_safe,
};
