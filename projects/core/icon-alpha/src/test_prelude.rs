//! Common test imports and utilities for icon-alpha tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from icon_alpha_common
pub use icon_alpha_common::bgra::{Bgra8888, ALPHA_OFFSET, BYTES_PER_PIXEL};
#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use icon_alpha_common::cpu_detect::*;

// Standard library imports commonly used in tests
pub use safe_allocator_api::RawAlloc;
pub use std::vec;
pub use std::vec::Vec;

/// Common type alias for alpha scan kernels.
pub(crate) type ScanFn = unsafe fn(*const u8, usize) -> bool;

/// Common type alias for mask application kernels.
pub(crate) type ApplyMaskFn = unsafe fn(*mut u8, *const u8, usize);

/// Allocates data with an alignment of 64 bytes.
pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    icon_alpha_common::allocate::allocate_align_64(num_bytes).unwrap()
}

/// Fills `data` with whole pixels whose colours follow a predictable pattern and whose
/// alpha is zero.
///
/// Reference byte ranges to make debugging easy:
/// blue: 0x00 - 0x3F, green: 0x40 - 0x7F, red: 0x80 - 0xBF
pub(crate) fn fill_pixels_without_alpha(data: &mut [u8]) {
    for (index, pixel) in data.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let step = (index % 0x40) as u8;
        pixel.copy_from_slice(&Bgra8888::new(step, 0x40 + step, 0x80 + step, 0).to_bytes());
    }
}

/// Fills `data` with mask entries cycling through black, white and 'barely white'
/// (a single red bit set). Every entry carries a junk alpha byte that must be ignored.
pub(crate) fn fill_test_mask(data: &mut [u8]) {
    for (index, entry) in data.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let value = match index % 3 {
            0 => Bgra8888::new(0x00, 0x00, 0x00, 0xAA),
            1 => Bgra8888::new(0xFF, 0xFF, 0xFF, 0xAA),
            _ => Bgra8888::new(0x00, 0x00, 0x01, 0x00),
        };
        entry.copy_from_slice(&value.to_bytes());
    }
}

/// Scalar reference for mask application.
pub(crate) fn reference_apply_mask(pixels: &mut [u8], mask: &[u8]) {
    for (pixel, entry) in pixels
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(mask.chunks_exact(BYTES_PER_PIXEL))
    {
        let entry = Bgra8888::from_bytes([entry[0], entry[1], entry[2], entry[3]]);
        pixel[ALPHA_OFFSET] = if entry.is_black_mask() { 0xFF } else { 0x00 };
    }
}

/// Non-zero alpha value used when planting alpha at `index`, so different positions see
/// different bit patterns.
fn planted_alpha(index: usize) -> u8 {
    1 + (index % 255) as u8
}

/// Tests a scan kernel against every pixel count up to `max_pixels`.
///
/// For each count, the buffer is scanned with no alpha at all, then with a single nonzero
/// alpha planted at every position in turn. A pixel just past the scanned range always has
/// alpha set, and must never be seen. Both 64-byte aligned and misaligned buffers are tested.
///
/// The `max_pixels` parameter should be at least twice the number of pixels processed in one
/// main loop iteration of the kernel being tested.
pub(crate) fn run_scan_test(scan_fn: ScanFn, max_pixels: usize, impl_name: &str) {
    for offset in [0_usize, 1] {
        for num_pixels in 0..=max_pixels {
            let mut buffer = allocate_align_64((num_pixels + 1) * BYTES_PER_PIXEL + offset);
            let data = &mut buffer.as_mut_slice()[offset..];
            fill_pixels_without_alpha(data);
            data[num_pixels * BYTES_PER_PIXEL + ALPHA_OFFSET] = 0xFF;

            assert!(
                !unsafe { scan_fn(data.as_ptr(), num_pixels) },
                "{impl_name} found alpha in {num_pixels} pixels without alpha (offset {offset})"
            );

            for index in 0..num_pixels {
                let alpha_index = index * BYTES_PER_PIXEL + ALPHA_OFFSET;
                data[alpha_index] = planted_alpha(index);
                assert!(
                    unsafe { scan_fn(data.as_ptr(), num_pixels) },
                    "{impl_name} missed alpha at pixel {index} of {num_pixels} (offset {offset})"
                );
                data[alpha_index] = 0;
            }
        }
    }
}

/// Tests a mask kernel against the scalar reference for every pixel count up to `max_pixels`.
///
/// Pixels start with arbitrary alpha values to prove the kernel overwrites alpha rather than
/// merging into it. The pixel just past the processed range must stay untouched. Both 64-byte
/// aligned and misaligned buffers are tested.
///
/// The `max_pixels` parameter should be at least twice the number of pixels processed in one
/// main loop iteration of the kernel being tested.
pub(crate) fn run_apply_mask_test(apply_fn: ApplyMaskFn, max_pixels: usize, impl_name: &str) {
    for offset in [0_usize, 1] {
        for num_pixels in 0..=max_pixels {
            let len = (num_pixels + 1) * BYTES_PER_PIXEL;
            let mut pixel_buffer = allocate_align_64(len + offset);
            let mut mask_buffer = allocate_align_64(len + offset);
            let pixels = &mut pixel_buffer.as_mut_slice()[offset..];
            let mask = &mut mask_buffer.as_mut_slice()[offset..];

            fill_pixels_without_alpha(pixels);
            for (index, pixel) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                pixel[ALPHA_OFFSET] = (index * 37) as u8;
            }
            fill_test_mask(mask);

            let mut expected: Vec<u8> = pixels.to_vec();
            reference_apply_mask(
                &mut expected[..num_pixels * BYTES_PER_PIXEL],
                &mask[..num_pixels * BYTES_PER_PIXEL],
            );

            unsafe { apply_fn(pixels.as_mut_ptr(), mask.as_ptr(), num_pixels) };

            assert_eq!(
                &pixels[..],
                &expected[..],
                "{impl_name} differs from reference for {num_pixels} pixels (offset {offset})"
            );
        }
    }
}

#[test]
fn validate_test_mask_generator() {
    let mut mask = [0_u8; 16];
    fill_test_mask(&mut mask);
    let expected: Vec<u8> = vec![
        0x00, 0x00, 0x00, 0xAA, // black
        0xFF, 0xFF, 0xFF, 0xAA, // white
        0x00, 0x00, 0x01, 0x00, // barely white
        0x00, 0x00, 0x00, 0xAA, // black
    ];
    assert_eq!(&mask[..], &expected[..]);
}

#[test]
fn validate_reference_matches_documented_example() {
    let mut pixels = [0x00, 0x00, 0x00, 0x00, 0x10, 0x20, 0x30, 0x00];
    let mask = [0x00, 0x00, 0x00, 0xAA, 0xFF, 0xFF, 0xFF, 0xAA];
    reference_apply_mask(&mut pixels, &mask);
    assert_eq!(pixels, [0x00, 0x00, 0x00, 0xFF, 0x10, 0x20, 0x30, 0x00]);
}
