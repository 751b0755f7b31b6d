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

type ScanFn = unsafe fn(*const u8, usize) -> bool;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn bench_scan(b: &mut criterion::Bencher, pixels: &RawAlloc, pixel_count: usize, func: ScanFn) {
    b.iter(|| unsafe { func(black_box(pixels.as_ptr()), black_box(pixel_count)) });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scan Alpha (BGRA8888, no alpha)");

    // 2048x2048 icon; worst case for the scan as every pixel has to be read.
    let pixel_count = 2048 * 2048;
    let size = pixel_count * 4;
    let mut pixels = allocate_align_64(size);
    for (index, pixel) in pixels.as_mut_slice().chunks_exact_mut(4).enumerate() {
        pixel.copy_from_slice(&[index as u8, (index >> 8) as u8, (index >> 16) as u8, 0]);
    }

    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    #[allow(unused_mut)]
    let mut kernels: Vec<(&str, ScanFn)> = vec![
        ("generic", scan_alpha_generic),
        ("portable64", scan_alpha_portable64),
    ];

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_sse2() {
            kernels.push(("sse2", scan_alpha_sse2));
        }

        if has_avx2() {
            kernels.push(("avx2", scan_alpha_avx2));
        }

        #[cfg(feature = "nightly")]
        if has_avx512f() {
            kernels.push(("avx512", scan_alpha_avx512));
        }
    }

    for (name, func) in kernels {
        group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
            bench_scan(b, &pixels, pixel_count, func)
        });
    }

    group.bench_function("dispatched", |b| {
        b.iter(|| unsafe {
            icon_alpha::scan_alpha_only(black_box(pixels.as_ptr()), black_box(pixel_count))
        })
    });

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
