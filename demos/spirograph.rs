//! Example: Three nested spirographs
//!
//! What it demonstrates
//! - Registering spirograph curves on a `Pipeline` with a color and line width each.
//! - Launching the window with `run_fourier`, which starts the producer thread.
//!
//! How to run
//! ```bash
//! cargo run --example spirograph
//! ```
//! The traces keep growing for as long as the window stays open.

use fourierplot::{
    run_fourier, spirograph, ConfigError, CurveLook, FourierConfig, Pipeline, PipelineSettings,
    RunError,
};

fn main() -> Result<(), RunError> {
    env_logger::init();

    let mut pipeline = Pipeline::new(PipelineSettings::default())?;
    // (outer gear radius, pen radius, color, width)
    let gears = [
        (0.55, 0.45, "black", 1.0),
        (0.75, 0.35, "orange", 0.5),
        (1.85, 1.75, "blue", 0.5),
    ];
    for (index, (gear, pen, color, width)) in gears.into_iter().enumerate() {
        let model = spirograph(gear, pen).map_err(|source| ConfigError::Curve { index, source })?;
        pipeline.register(model, CurveLook::parse(color, width)?);
    }

    run_fourier(pipeline, FourierConfig::default())
}
