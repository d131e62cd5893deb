//! # Safe-Area Mapping Benchmark
//!
//! The dimensions-changed hook fires on every layout pass of the target, so
//! the skip path must stay trivially cheap.
//!
//! Run with: `cargo bench --package safezone_ui`

// Benchmarks don't need docs
#![allow(missing_docs)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use safezone_ui::{
    anchors_for, LayoutTree, Platform, Rect, Resolution, SafeAreaConfig, SafeAreaMapper,
    ScreenProvider, SimulatedScreen,
};

const RES: Resolution = Resolution::new(1170, 2532);

/// Benchmark: pure rect-to-anchor conversion.
fn bench_anchor_conversion(c: &mut Criterion) {
    let safe = Rect::new(0.0, 141.0, 1170.0, 2289.0);
    c.bench_function("anchors_for", |b| {
        b.iter(|| anchors_for(black_box(safe), black_box(RES)));
    });
}

/// Benchmark: recompute with an unchanged safe area (the hot path).
fn bench_skip_unchanged(c: &mut Criterion) {
    let screen = Arc::new(SimulatedScreen::new(Platform::Ios, RES));
    screen.set_safe_area(Rect::new(0.0, 141.0, 1170.0, 2289.0));
    let mut tree = LayoutTree::new(RES);
    let Ok(panel) = tree.add_node(tree.root(), "SafePanel") else {
        return;
    };
    let mut mapper = SafeAreaMapper::new(screen, SafeAreaConfig::default(), panel, Some(panel));
    black_box(mapper.on_attach(&mut tree).is_ok());

    c.bench_function("recompute_unchanged", |b| {
        b.iter(|| black_box(mapper.recompute(&mut tree).is_ok()));
    });
}

/// Benchmark: orientation flip, remapping on every iteration.
fn bench_remap_rotation(c: &mut Criterion) {
    let screen = Arc::new(SimulatedScreen::new(Platform::Ios, RES));
    screen.set_safe_area(Rect::new(0.0, 141.0, 1170.0, 2289.0));
    let mut tree = LayoutTree::new(RES);
    let Ok(panel) = tree.add_node(tree.root(), "SafePanel") else {
        return;
    };
    for i in 0..8 {
        black_box(tree.add_node(panel, format!("Row{i}")).is_ok());
    }
    let mut mapper =
        SafeAreaMapper::new(Arc::clone(&screen), SafeAreaConfig::default(), panel, Some(panel));

    c.bench_function("recompute_rotation", |b| {
        b.iter(|| {
            screen.rotate();
            tree.set_root_size(screen.current_resolution());
            let applied = mapper.recompute(&mut tree).is_ok();
            black_box(tree.take_dimension_changes().len());
            black_box(applied)
        });
    });
}

criterion_group!(
    benches,
    bench_anchor_conversion,
    bench_skip_unchanged,
    bench_remap_rotation
);
criterion_main!(benches);
