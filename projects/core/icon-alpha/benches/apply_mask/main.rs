use core::{alloc::Layout, hint::black_box, time::Duration};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use icon_alpha::bench::*;
#[allow(unused_imports)]
use icon_alpha_common::cpu_detect::*;
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

type ApplyMaskFn = unsafe fn(*mut u8, *const u8, usize);

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn bench_apply_mask(
    b: &mut criterion::Bencher,
    pixels: &mut RawAlloc,
    mask: &RawAlloc,
    pixel_count: usize,
    func: ApplyMaskFn,
) {
    b.iter(|| unsafe {
        func(
            black_box(pixels.as_mut_ptr()),
            black_box(mask.as_ptr()),
            black_box(pixel_count),
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Apply Mask (BGRA8888)");

    // 2048x2048 icon with a checkerboard mask.
    let pixel_count = 2048 * 2048;
    let size = pixel_count * 4;
    let mut pixels = allocate_align_64(size);
    let mut mask = allocate_align_64(size);
    for (index, pixel) in pixels.as_mut_slice().chunks_exact_mut(4).enumerate() {
        pixel.copy_from_slice(&[index as u8, (index >> 8) as u8, (index >> 16) as u8, 0]);
    }
    for (index, entry) in mask.as_mut_slice().chunks_exact_mut(4).enumerate() {
        let colour = if (index ^ (index / 2048)) & 1 == 0 { 0x00 } else { 0xFF };
        entry.copy_from_slice(&[colour, colour, colour, 0x00]);
    }

    // Both buffers are read, one is written.
    group.throughput(criterion::Throughput::Bytes(size as u64 * 2));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    #[allow(unused_mut)]
    let mut kernels: Vec<(&str, ApplyMaskFn)> = vec![("generic", apply_mask_generic)];

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            kernels.push(("sse2", apply_mask_sse2));
        }

        if has_avx2() {
            kernels.push(("avx2", apply_mask_avx2));
        }

        #[cfg(feature = "nightly")]
        if has_avx512f() {
            kernels.push(("avx512", apply_mask_avx512));
        }
    }

    for (name, func) in kernels {
        group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
            bench_apply_mask(b, &mut pixels, &mask, pixel_count, func)
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
