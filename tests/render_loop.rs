use std::thread;

use eframe::egui;
use fourierplot::{
    CurveLook, CurveModel, InputGate, Pipeline, PipelineSettings, RenderLoop, RenderSurface,
    SampleScheduler, TickOutcome,
};

/// Records what the render loop asks for.
#[derive(Default)]
struct CountingSurface {
    clears: usize,
    /// `(curve, full line length)` drawn by the latest redraw.
    lines: Vec<(usize, usize)>,
    /// Points received per curve over all redraws.
    totals: Vec<usize>,
}

impl RenderSurface for CountingSurface {
    fn clear(&mut self) {
        self.clears += 1;
        self.lines.clear();
    }

    fn draw_line(&mut self, index: usize, new_points: &[[f64; 2]], _look: &CurveLook) {
        if self.totals.len() <= index {
            self.totals.resize(index + 1, 0);
        }
        self.totals[index] += new_points.len();
        self.lines.push((index, self.totals[index]));
    }
}

fn setup(manual: bool) -> (SampleScheduler, RenderLoop, InputGate) {
    let mut pipeline = Pipeline::new(PipelineSettings {
        steps_per_batch: 10,
        full_rotation_denominator: 100,
        producer_pacing_ms: 0,
        manual,
        ..PipelineSettings::default()
    })
    .unwrap();
    pipeline.register(CurveModel::new().with_term(1.0, 1.0), CurveLook::default());
    pipeline.register(CurveModel::new().with_term(0.5, -2.0), CurveLook::indexed(1));
    pipeline.split()
}

fn release(button: egui::PointerButton, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::PointerButton {
        pos: egui::pos2(10.0, 10.0),
        button,
        pressed: false,
        modifiers,
    }
}

fn ctrl_click() -> egui::Event {
    release(egui::PointerButton::Primary, egui::Modifiers::CTRL)
}

#[test]
fn continuous_mode_redraws_every_tick() {
    let (mut scheduler, mut render, _gate) = setup(false);
    let mut surface = CountingSurface::default();

    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert_eq!(surface.lines, vec![(0, 0), (1, 0)]);

    scheduler.run_batch();
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert_eq!(surface.lines, vec![(0, 10), (1, 10)]);

    scheduler.run_batches(2);
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert_eq!(surface.lines, vec![(0, 30), (1, 30)]);

    assert_eq!(surface.clears, 3);
    assert_eq!(render.redraw_count(), 3);
    assert_eq!(render.drawn_points(0), 30);
    assert_eq!(render.total_drawn_points(), 60);
}

#[test]
fn manual_mode_waits_for_the_gesture() {
    let (mut scheduler, mut render, _gate) = setup(true);
    let mut surface = CountingSurface::default();
    scheduler.run_batches(3);

    for _ in 0..5 {
        assert_eq!(render.tick(&mut surface), TickOutcome::AwaitingAdvance);
    }
    assert_eq!(render.redraw_count(), 0);
    assert_eq!(surface.clears, 0);
    assert!(surface.lines.is_empty());
}

#[test]
fn each_gesture_gives_exactly_one_redraw() {
    let (mut scheduler, mut render, gate) = setup(true);
    let mut surface = CountingSurface::default();
    scheduler.run_batch();

    assert!(gate.handle_event(&ctrl_click()));
    assert!(render.state().advance_requested());
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert!(!render.state().advance_requested());
    assert_eq!(render.tick(&mut surface), TickOutcome::AwaitingAdvance);
    assert_eq!(surface.lines, vec![(0, 10), (1, 10)]);

    scheduler.run_batch();
    gate.handle_event(&ctrl_click());
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert_eq!(render.tick(&mut surface), TickOutcome::AwaitingAdvance);
    assert_eq!(surface.lines, vec![(0, 20), (1, 20)]);
    assert_eq!(render.redraw_count(), 2);
}

#[test]
fn repeated_gestures_before_a_tick_collapse_into_one() {
    let (_scheduler, mut render, gate) = setup(true);
    let mut surface = CountingSurface::default();

    let events = [ctrl_click(), ctrl_click(), ctrl_click()];
    assert_eq!(gate.handle_events(&events), 3);
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert_eq!(render.tick(&mut surface), TickOutcome::AwaitingAdvance);
    assert_eq!(render.redraw_count(), 1);
}

#[test]
fn busy_tick_is_dropped_and_keeps_the_request() {
    let (_scheduler, mut render, gate) = setup(true);
    let mut surface = CountingSurface::default();
    gate.handle_event(&ctrl_click());

    let state = render.state().clone();
    {
        let _held = state.try_begin_render().unwrap();
        assert!(state.is_rendering());
        assert!(state.try_begin_render().is_none());
        assert_eq!(render.tick(&mut surface), TickOutcome::Busy);
        assert!(state.advance_requested());
        assert_eq!(surface.clears, 0);
    }

    assert!(!state.is_rendering());
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    assert!(!state.advance_requested());
    assert!(!state.is_rendering());
}

#[test]
fn continuous_mode_ignores_requests() {
    let (_scheduler, mut render, gate) = setup(false);
    let mut surface = CountingSurface::default();
    gate.handle_event(&ctrl_click());
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
    // Requests only matter in manual mode; continuous ticks leave the flag alone.
    assert!(render.state().advance_requested());
    assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
}

#[test]
fn looks_follow_registration_order() {
    let (_scheduler, render, _gate) = setup(false);
    assert_eq!(render.curve_count(), 2);
    assert_eq!(render.look(0), Some(&CurveLook::default()));
    assert_eq!(render.look(1), Some(&CurveLook::indexed(1)));
    assert_eq!(render.look(2), None);
}

#[test]
fn only_new_points_are_handed_to_the_surface() {
    let (mut scheduler, mut render, _gate) = setup(false);
    let mut surface = CountingSurface::default();

    for _ in 0..5 {
        scheduler.run_batch();
        render.tick(&mut surface);
        render.tick(&mut surface);
    }

    // Each sample crosses to the surface once, however many ticks ran.
    assert_eq!(surface.totals, vec![50, 50]);
    assert_eq!(render.redraw_count(), 10);
    assert_eq!(render.total_drawn_points(), 100);
}

#[test]
fn ticks_keep_up_with_a_running_producer() {
    let mut pipeline = Pipeline::new(PipelineSettings {
        steps_per_batch: 100,
        full_rotation_denominator: 1000,
        producer_pacing_ms: 0,
        ..PipelineSettings::default()
    })
    .unwrap();
    let a = pipeline.register(CurveModel::new().with_term(1.0, 1.0), CurveLook::default());
    let b = pipeline.register(
        CurveModel::new().with_term(2.0, 1.0).with_term(-1.0, 2.0),
        CurveLook::indexed(1),
    );
    let (mut scheduler, mut render, _gate) = pipeline.split();
    let mut surface = CountingSurface::default();

    let writer = thread::spawn(move || scheduler.run_batches(200));

    let mut last = (0, 0);
    loop {
        let done = writer.is_finished();
        assert_eq!(render.tick(&mut surface), TickOutcome::Redrawn);
        let now = (render.drawn_points(0), render.drawn_points(1));
        assert!(now.0 >= last.0 && now.1 >= last.1);
        assert!(now.0 <= a.len() && now.1 <= b.len());
        last = now;
        if done {
            break;
        }
    }
    writer.join().unwrap();

    // One more tick picks up anything appended after the last read.
    render.tick(&mut surface);
    assert_eq!(render.drawn_points(0), 20_000);
    assert_eq!(render.drawn_points(1), 20_000);
    assert_eq!(surface.totals, vec![a.len(), b.len()]);
}
