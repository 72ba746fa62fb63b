use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nocturne::{
    ChromaPlane, Engine, EngineConfig, Frame, GovernorState, PipelineParams, Plane,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

fn night_luma() -> Plane {
    let data = (0..WIDTH as usize * HEIGHT as usize)
        .map(|i| 0.05 + 0.25 * ((i * 2654435761) % 1000) as f32 / 1000.0)
        .collect();
    Plane::from_data(WIDTH, HEIGHT, data).unwrap()
}

fn bench_process_frame(c: &mut Criterion) {
    let mut engine = Engine::initialize(WIDTH, HEIGHT, EngineConfig::default()).unwrap();
    let luma = night_luma();
    let chroma = ChromaPlane::neutral(WIDTH, HEIGHT).unwrap();
    let params = PipelineParams::default();

    c.bench_function("process_frame 640x360", |b| {
        b.iter(|| {
            let rgb = engine
                .process_frame(Frame::new(black_box(&luma), &chroma, params))
                .unwrap();
            black_box(rgb.samples()[0]);
        })
    });
}

fn bench_process_frame_throttled(c: &mut Criterion) {
    let mut engine = Engine::initialize(WIDTH, HEIGHT, EngineConfig::default()).unwrap();
    assert_eq!(engine.submit_thermal(95.0), GovernorState::Throttled);

    let luma = night_luma();
    let chroma = ChromaPlane::neutral(WIDTH, HEIGHT).unwrap();
    let params = PipelineParams::default();

    c.bench_function("process_frame 640x360 throttled", |b| {
        b.iter(|| {
            let rgb = engine
                .process_frame(Frame::new(black_box(&luma), &chroma, params))
                .unwrap();
            black_box(rgb.samples()[0]);
        })
    });
}

criterion_group!(benches, bench_process_frame, bench_process_frame_throttled);
criterion_main!(benches);
