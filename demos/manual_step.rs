//! Example: Manual stepping
//!
//! What it demonstrates
//! - Manual mode: the plot only redraws when you release the left mouse button
//!   while holding Ctrl (Cmd on macOS). The producer keeps sampling meanwhile,
//!   so each step reveals everything computed since the previous one.
//!
//! How to run
//! ```bash
//! RUST_LOG=debug cargo run --example manual_step
//! ```

use fourierplot::{run_fourier, FourierConfig, Pipeline, PipelineSettings, Preset, RunError};

fn main() -> Result<(), RunError> {
    env_logger::init();

    let settings = PipelineSettings {
        manual: true,
        ..PipelineSettings::default()
    };
    let mut pipeline = Pipeline::new(settings)?;
    Preset::Simple.scene().register_into(&mut pipeline)?;

    run_fourier(pipeline, FourierConfig::default())
}
