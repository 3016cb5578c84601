// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery store update path.
//!
//! Measures:
//! - Building the initial slot list
//! - Pure and in-place slot replacement
//! - Layout toggling

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::{
    DisplayRef, GalleryState, LayoutMode, LocalRefRegistry, PlaceholderSource, SlotId,
};
use std::hint::black_box;
use std::path::Path;

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_update");
    let placeholder = PlaceholderSource::default();

    group.bench_function("initialize_256", |b| {
        b.iter(|| black_box(GalleryState::initialize(black_box(256), &placeholder)));
    });

    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_update");
    let state = GalleryState::initialize(256, &PlaceholderSource::default());
    let reference = DisplayRef::new("blob:local-ref-1").unwrap();

    group.bench_function("replace_slot_image_pure", |b| {
        b.iter(|| black_box(state.replace_slot_image(SlotId::new(128), reference.clone())));
    });

    group.bench_function("apply_replace_with_registry", |b| {
        let mut state = state.clone();
        let mut registry = LocalRefRegistry::new();
        let path = Path::new("/photos/cat.png");
        b.iter(|| {
            let reference = registry.derive(path);
            if let Some(previous) = state.apply_replace(SlotId::new(128), reference) {
                if let Some(old) = previous.reference() {
                    registry.release(old);
                }
            }
        });
        black_box(&state);
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_update");
    let mut state = GalleryState::initialize(256, &PlaceholderSource::default());

    group.bench_function("toggle_layout", |b| {
        b.iter(|| {
            state.set_layout(LayoutMode::Feed);
            state.set_layout(LayoutMode::Grid);
            black_box(state.layout());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_initialize, bench_replace, bench_layout);
criterion_main!(benches);
