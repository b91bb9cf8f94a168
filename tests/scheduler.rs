use std::thread;

use fourierplot::{spirograph, CurveLook, CurveModel, Pipeline, PipelineSettings};

fn settings(steps_per_batch: usize, full_rotation_denominator: u64) -> PipelineSettings {
    PipelineSettings {
        steps_per_batch,
        full_rotation_denominator,
        producer_pacing_ms: 0,
        ..PipelineSettings::default()
    }
}

#[test]
fn batches_append_steps_per_batch_points_to_every_curve() {
    let mut pipeline = Pipeline::new(settings(25, 100)).unwrap();
    let a = pipeline.register(
        CurveModel::new().with_term(1.0, 1.0),
        CurveLook::default(),
    );
    let b = pipeline
        .register_spirograph(0.55, 0.45, CurveLook::default())
        .unwrap();
    let (mut scheduler, _render, _gate) = pipeline.split();

    scheduler.run_batches(4);

    assert_eq!(a.len(), 100);
    assert_eq!(b.len(), 100);
    assert_eq!(a.snapshot_lengths(), (100, 100, 100));
    let state = scheduler.state();
    assert_eq!(state.rotation(), 100);
    assert_eq!(state.batches_completed(), 4);
    assert!((state.theta() - 1.0).abs() < 1e-12);
}

#[test]
fn kth_point_is_sampled_at_k_over_denominator() {
    let model = spirograph(0.75, 0.35).unwrap();
    let mut pipeline = Pipeline::new(settings(10, 40)).unwrap();
    let trace = pipeline.register(model.clone(), CurveLook::default());
    let (mut scheduler, _render, _gate) = pipeline.split();

    scheduler.run_batches(7);

    let points = trace.points();
    assert_eq!(points.len(), 70);
    for (k, p) in points.iter().enumerate() {
        let want = model.evaluate(k as f64 / 40.0);
        assert!((p - want).norm() < 1e-12, "sample {k}");
    }
}

#[test]
fn counter_keeps_growing_past_one_rotation() {
    let mut pipeline = Pipeline::new(settings(30, 20)).unwrap();
    let trace = pipeline.register(CurveModel::new().with_term(1.0, 1.0), CurveLook::default());
    let (mut scheduler, _render, _gate) = pipeline.split();

    scheduler.run_batches(3);

    assert_eq!(scheduler.state().rotation(), 90);
    assert!((scheduler.state().theta() - 4.5).abs() < 1e-12);
    // theta = 1 lands on the starting point again; the trace still grows.
    let coords = trace.coords();
    assert_eq!(coords.len(), 90);
    assert!((coords[20][0] - coords[0][0]).abs() < 1e-12);
    assert!((coords[20][1] - coords[0][1]).abs() < 1e-12);
}

#[test]
fn readers_never_see_mismatched_coordinates() {
    let model = CurveModel::new()
        .with_term(2.0, 1.0)
        .with_term(-1.0, 2.0)
        .with_term(0.5, 3.0);
    let mut pipeline = Pipeline::new(settings(200, 1000)).unwrap();
    let trace = pipeline.register(model.clone(), CurveLook::default());
    let (mut scheduler, _render, _gate) = pipeline.split();

    let writer = thread::spawn(move || scheduler.run_batches(50));

    let mut reads = 0;
    loop {
        let done = writer.is_finished();
        let (xs, ys) = trace.xy();
        assert_eq!(xs.len(), ys.len());
        for (k, (x, y)) in xs.iter().zip(&ys).enumerate().step_by(97) {
            let want = model.evaluate(k as f64 / 1000.0);
            assert!((x - want.re).abs() < 1e-12 && (y - want.im).abs() < 1e-12);
        }
        let coords = trace.coords();
        assert!(coords.len() >= xs.len());
        reads += 1;
        if done {
            break;
        }
    }
    writer.join().unwrap();
    assert!(reads > 0);
    assert_eq!(trace.len(), 10_000);
}

#[test]
fn start_detaches_the_producer() {
    let mut pipeline = Pipeline::new(PipelineSettings {
        producer_pacing_ms: 1,
        ..settings(5, 100)
    })
    .unwrap();
    let trace = pipeline.register(CurveModel::new().with_term(1.0, 1.0), CurveLook::default());
    let (scheduler, render, _gate) = pipeline.split();

    scheduler.start().unwrap();
    assert!(render.state().is_producer_running());
    while trace.len() < 50 {
        thread::yield_now();
    }
    assert!(render.state().batches_completed() >= 10);
}
