#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![cfg_attr(feature = "nightly", feature(allocator_api))]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod allocate;
pub mod bgra;
pub mod cpu_detect;
