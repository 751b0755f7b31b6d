//! Individual kernels, exported so benchmarks can compare them directly.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

pub unsafe fn scan_alpha_generic(pixels: *const u8, pixel_count: usize) -> bool {
    crate::scan::generic::scan_alpha_generic(pixels, pixel_count)
}

pub unsafe fn scan_alpha_portable64(pixels: *const u8, pixel_count: usize) -> bool {
    crate::scan::portable64::scan_alpha(pixels, pixel_count)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn scan_alpha_sse2(pixels: *const u8, pixel_count: usize) -> bool {
    crate::scan::sse2::scan_alpha(pixels, pixel_count)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn scan_alpha_avx2(pixels: *const u8, pixel_count: usize) -> bool {
    crate::scan::avx2::scan_alpha(pixels, pixel_count)
}

#[cfg(all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")))]
pub unsafe fn scan_alpha_avx512(pixels: *const u8, pixel_count: usize) -> bool {
    crate::scan::avx512::scan_alpha(pixels, pixel_count)
}

pub unsafe fn apply_mask_generic(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    crate::apply_mask::generic::apply_mask_generic(pixels, mask, pixel_count)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn apply_mask_sse2(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    crate::apply_mask::sse2::apply_mask(pixels, mask, pixel_count)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn apply_mask_avx2(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    crate::apply_mask::avx2::apply_mask(pixels, mask, pixel_count)
}

#[cfg(all(feature = "nightly", any(target_arch = "x86_64", target_arch = "x86")))]
pub unsafe fn apply_mask_avx512(pixels: *mut u8, mask: *const u8, pixel_count: usize) {
    crate::apply_mask::avx512::apply_mask(pixels, mask, pixel_count)
}
