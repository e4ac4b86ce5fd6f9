use criterion::{criterion_group, criterion_main, Criterion};
use log_overlay::overlay::{OverlayController, OverlayGeometry, PanEvent, SpringSpec, Viewport};

fn bench_drag(c: &mut Criterion) {
    let mut controller = OverlayController::new(
        Viewport::new(390.0, 844.0),
        OverlayGeometry::default(),
        SpringSpec::default(),
    );
    c.bench_function("drag_1k_updates_and_snap", |b| {
        b.iter(|| {
            controller.handle(PanEvent::Start);
            for i in 0..1_000 {
                let t = i as f32;
                controller.handle(PanEvent::Update {
                    translation_x: (t * 0.37).sin() * 400.0,
                    translation_y: (t * 0.11).cos() * 900.0,
                });
            }
            controller.handle(PanEvent::End);
            while controller.tick(1.0 / 60.0) {}
        })
    });
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
