//! Layout benchmarks.

use boxgroup_core::{Alignment, Axes, Axis, NodeId, UVec2};
use boxgroup_decor::{Theme, ThemeCatalog};
use boxgroup_layout::{LayoutEngine, Placement};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DECORATIONS: [&str; 4] = ["Groove", "Ridge", "Inset", "Outset"];

/// An instrument-style front panel: a column of rows, each row a few
/// decorated boxes of stacked controls.
fn panel(rows: usize, boxes: usize, controls: usize) -> (LayoutEngine<ThemeCatalog>, NodeId) {
    let mut engine = LayoutEngine::new(ThemeCatalog::new(Theme::dark()));
    let root = engine.add_group(Axis::Vertical, UVec2::new(1200, 0));

    for r in 0..rows {
        let row = engine.add_group(Axis::Horizontal, UVec2::ZERO);
        for b in 0..boxes {
            let column = engine.add_group(Axis::Vertical, UVec2::ZERO);
            for c in 0..controls {
                let width = 40 + ((r + b + c) % 5) as u32 * 10;
                let control = engine.add_content(UVec2::new(width, 24));
                engine
                    .place(column, control, Placement::aligned(Alignment::Left))
                    .expect("control fits in its column");
            }
            let decoration = DECORATIONS[(r + b) % DECORATIONS.len()];
            engine
                .place(row, column, Placement::new().with_decoration(decoration))
                .expect("column fits in its row");
        }
        engine
            .place(root, row, Placement::new().with_border((0, 0, 4, 4)))
            .expect("row fits in the panel");
    }

    (engine, root)
}

fn build_small(c: &mut Criterion) {
    c.bench_function("build_small", |b| b.iter(|| panel(black_box(2), 3, 4)));
}

fn build_wide(c: &mut Criterion) {
    c.bench_function("build_wide", |b| b.iter(|| panel(black_box(6), 8, 6)));
}

fn expand_wide(c: &mut Criterion) {
    let (mut engine, root) = panel(6, 8, 6);
    c.bench_function("expand_wide", |b| {
        b.iter(|| engine.expand(black_box(root), Axes::BOTH).expect("panel expands"))
    });
}

criterion_group!(benches, build_small, build_wide, expand_wide);
criterion_main!(benches);
