//! fourierplot crate root: re-exports and module wiring.
//!
//! Draws complex Fourier sums (and spirographs, a three-term special case) as
//! traces that keep growing while a background thread samples them.
//!
//! - `curve`: curve models and the spirograph factory
//! - `data`: trace buffers, curve looks and modifier keys
//! - `pipeline`: producer, render loop, input gate and their shared state
//! - `scene`: scene files and built-in presets
//! - `config`: pipeline settings and window options
//! - `app`: egui/eframe window and the `run_fourier` entry point

pub mod app;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod scene;

// Public re-exports for a compact external API
pub use app::{run_fourier, FourierApp, PlotFrame};
pub use config::{FourierConfig, PipelineSettings, ViewBounds};
pub use curve::{spirograph, CurveModel, Point, Term};
pub use data::curve_look::{parse_color, CurveLook};
pub use data::gesture::Modifier;
pub use data::trace::CurveTrace;
pub use error::{ConfigError, CurveError, RunError};
pub use pipeline::{
    InputGate, Pipeline, PipelineState, RenderLoop, RenderSurface, SampleScheduler, TickOutcome,
};
pub use scene::{CurveSpec, Preset, Scene, SceneSettings};
