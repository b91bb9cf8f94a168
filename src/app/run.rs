//! Top-level entry point for running the visualizer as a native window.

use eframe::egui;
use log::{info, warn};

use crate::config::FourierConfig;
use crate::error::RunError;
use crate::pipeline::Pipeline;

use super::fourier_app::FourierApp;

/// Launch the visualizer in a native window.
///
/// This:
///
/// 1. validates `cfg`,
/// 2. splits the pipeline and starts the producer on a detached thread,
/// 3. opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed. The producer is not joined;
/// it ends with the process.
pub fn run_fourier(pipeline: Pipeline, mut cfg: FourierConfig) -> Result<(), RunError> {
    cfg.validate()?;
    if pipeline.is_empty() {
        warn!("no curves registered, the plot will stay empty");
    }
    let render_tick = pipeline.settings().render_tick();
    let manual = pipeline.settings().manual;

    let (scheduler, render, mut gate) = pipeline.split();
    gate.set_modifier(cfg.advance_modifier);
    scheduler.start()?;
    info!(
        "rendering every {:?} in {} mode",
        render_tick,
        if manual { "manual" } else { "continuous" }
    );

    let app = FourierApp::new(render, gate, render_tick, &cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.window_size;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }
    if opts.viewport.title.is_none() {
        opts.viewport = opts.viewport.clone().with_title(title.clone());
    }

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
