//! Helpers for CPU feature detection without using std.
//!
//! These functions pick which alpha scan and mask kernels can run on the current CPU.
//! They are backed by the `cpufeatures` crate: the first call runs `cpuid` once, and every
//! subsequent call simply loads and compares a bool.

/// Checks if the CPU supports AVX512F (AVX-512 Foundation) instructions.
///
/// Only available with the `nightly` feature. The 512-bit kernels process 64 pixels
/// per loop iteration.
///
/// # Returns
/// `true` if the CPU supports AVX512F instructions, `false` otherwise.
#[inline]
#[cfg(feature = "nightly")]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_avx512f() -> bool {
    cpufeatures::new!(cpuid_avx512, "avx512f");
    cpuid_avx512::get()
}

/// Checks if the CPU supports AVX2 (Advanced Vector Extensions 2) instructions.
///
/// AVX2 provides 256-bit integer SIMD; the kernels using it process 32 pixels per
/// loop iteration.
///
/// # Returns
/// `true` if the CPU supports AVX2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_avx2() -> bool {
    cpufeatures::new!(cpuid_avx2, "avx2");
    cpuid_avx2::get()
}

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is available on virtually every x86-64 processor and forms the baseline SIMD
/// implementation.
///
/// # Returns
/// `true` if the CPU supports SSE2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}
