// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation.
//!
//! Measures the cost of:
//! - Stepping through pages, which also re-arms the auto-advance timer
//! - Re-paginating after a settled viewport resize

use clinic_showcase::carousel::{Carousel, CarouselOptions, ItemsPerPage, Message};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn options() -> CarouselOptions {
    CarouselOptions::new(ItemsPerPage::slideshow(), Duration::from_secs(5))
}

/// Benchmark next/previous navigation over a large item set.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let now = Instant::now();

    group.bench_function("next_previous", |b| {
        let mut carousel =
            Carousel::mount((0..240).collect::<Vec<u32>>(), options(), 1280.0, now).unwrap();
        b.iter(|| {
            carousel.update(Message::Next, now);
            carousel.update(Message::Previous, now);
            carousel.update(Message::Next, now);
            black_box(carousel.visible_items());
        });
    });

    group.finish();
}

/// Benchmark a debounced resize that changes the page size.
fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let start = Instant::now();
    let settled = start + Duration::from_secs(1);

    group.bench_function("resize_repaginate", |b| {
        b.iter(|| {
            let mut carousel =
                Carousel::mount((0..240).collect::<Vec<u32>>(), options(), 1280.0, start)
                    .unwrap();
            carousel.update(Message::ViewportResized(black_box(600.0)), start);
            carousel.update(Message::ResizePoll(settled), settled);
            black_box(carousel.page_count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_resize);
criterion_main!(benches);
