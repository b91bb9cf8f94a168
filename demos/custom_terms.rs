//! Example: A curve from explicit terms
//!
//! What it demonstrates
//! - Building a `CurveModel` term by term.
//! - Tuning the pipeline (smaller batches, faster pacing) and pinning the view.
//!
//! How to run
//! ```bash
//! cargo run --example custom_terms
//! ```

use egui::Color32;
use fourierplot::{
    run_fourier, CurveLook, CurveModel, FourierConfig, Pipeline, PipelineSettings, RunError,
    ViewBounds,
};

fn main() -> Result<(), RunError> {
    env_logger::init();

    let settings = PipelineSettings {
        steps_per_batch: 50,
        producer_pacing_ms: 20,
        ..PipelineSettings::default()
    };
    let mut pipeline = Pipeline::new(settings)?;

    let mut shape = CurveModel::new();
    shape
        .push_term(2.0, 1.0)
        .push_term(-1.0, 2.0)
        .push_term(0.5, 3.0);
    pipeline.register(shape, CurveLook::new(Color32::from_rgb(31, 119, 180), 1.5));

    let cfg = FourierConfig {
        title: "Custom terms".to_string(),
        fixed_view: Some(ViewBounds::symmetric(4.0)),
        ..FourierConfig::default()
    };
    run_fourier(pipeline, cfg)
}
