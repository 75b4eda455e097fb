use bicaliper::{
    AnnotationSet, AnnotationTool, BidirectionalTool, CaliperOptions, HandleKey, Measurement,
    PixelSpacing, ViewTransform,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_set(count: usize) -> AnnotationSet {
    let mut set = AnnotationSet::new();

    for index in 0..count {
        let id = set.generate_id();
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        let origin = Vec2::new(column * 10.0, row * 10.0);

        let mut m = Measurement::new(id, origin);
        m.handles.end.position = origin + Vec2::new(8.0, 0.0);
        m.handles.perpendicular_start.position = origin + Vec2::new(4.0, 2.0);
        m.handles.perpendicular_end.position = origin + Vec2::new(4.0, -2.0);
        m.handles.perpendicular_start.locked = false;
        m.is_creating = false;
        m.update_diameters(PixelSpacing::uniform(1.0));
        set.insert(m);
    }

    set
}

fn bench_propose_move(c: &mut Criterion) {
    let tool = BidirectionalTool::new();
    let options = CaliperOptions::default();
    let spacing = PixelSpacing::uniform(1.0);

    let mut m = Measurement::new(1, Vec2::ZERO);
    m.handles.end.position = Vec2::new(100.0, 0.0);
    m.handles.perpendicular_start.position = Vec2::new(50.0, 25.0);
    m.handles.perpendicular_end.position = Vec2::new(50.0, -25.0);
    m.handles.perpendicular_start.locked = false;
    m.is_creating = false;
    m.update_diameters(spacing);

    c.bench_function("propose_move_long_axis", |b| {
        b.iter(|| {
            let outcome = tool.propose_move(
                black_box(&m),
                HandleKey::End,
                black_box(Vec2::new(150.0, 80.0)),
                spacing,
                &options,
            );
            black_box(outcome.is_accepted())
        })
    });

    c.bench_function("propose_move_short_axis", |b| {
        b.iter(|| {
            let outcome = tool.propose_move(
                black_box(&m),
                HandleKey::PerpendicularStart,
                black_box(Vec2::new(50.0, 55.0)),
                spacing,
                &options,
            );
            black_box(outcome.is_accepted())
        })
    });
}

fn bench_nearest_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_axis_handle");

    for count in [100usize, 1000, 10000] {
        let set = build_synthetic_set(count);
        let queries: Vec<Vec2> = (0..64)
            .map(|i| Vec2::new(((i * 13) % 1000) as f32 + 0.4, ((i * 7) % 100) as f32 + 0.6))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in &queries {
                    if set.nearest_axis_handle(black_box(*query)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let tool = BidirectionalTool::new();
    let options = CaliperOptions::default();
    let view = ViewTransform::identity();
    let set = build_synthetic_set(100);

    c.bench_function("hit_test_100_measurements", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for m in set.iter() {
                if tool
                    .hit_test(m, black_box(Vec2::new(42.0, 1.0)), &view, &options)
                    .is_some()
                {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_propose_move, bench_nearest_handle, bench_hit_test);
criterion_main!(benches);
