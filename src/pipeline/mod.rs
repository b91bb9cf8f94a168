//! The sampling / rendering pipeline.
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`state`]     | Flags and counters shared between the parts below |
//! | [`scheduler`] | Producer thread: evaluates curves and appends to traces |
//! | [`render`]    | Consumer: redraws traces on each UI tick |
//! | [`input`]     | Maps the advance gesture to a one-shot request |
//!
//! Curves are registered on a [`Pipeline`] during setup. [`Pipeline::split`]
//! then hands each part its own exclusive share of the state.

pub mod input;
pub mod render;
pub mod scheduler;
pub mod state;

pub use input::InputGate;
pub use render::{RenderLoop, RenderSurface, TickOutcome};
pub use scheduler::SampleScheduler;
pub use state::{PipelineState, RenderGuard};

use std::sync::Arc;

use crate::config::PipelineSettings;
use crate::curve::{spirograph, CurveModel};
use crate::data::curve_look::CurveLook;
use crate::data::trace::CurveTrace;
use crate::error::{ConfigError, CurveError};

use render::RenderedCurve;
use scheduler::ScheduledCurve;

struct Registered {
    model: Arc<CurveModel>,
    look: CurveLook,
    trace: Arc<CurveTrace>,
}

/// Setup-phase collection of curves plus the pipeline settings.
pub struct Pipeline {
    settings: PipelineSettings,
    curves: Vec<Registered>,
}

impl Pipeline {
    /// Create an empty pipeline; rejects unusable settings.
    pub fn new(settings: PipelineSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            settings,
            curves: Vec::new(),
        })
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Switch between continuous and manual redraw. Only possible before [`split`](Self::split).
    pub fn set_manual(&mut self, manual: bool) {
        self.settings.manual = manual;
    }

    /// Register a curve. Its trace starts empty and is returned for inspection.
    pub fn register(&mut self, model: CurveModel, look: CurveLook) -> Arc<CurveTrace> {
        let trace = Arc::new(CurveTrace::new());
        self.curves.push(Registered {
            model: Arc::new(model),
            look,
            trace: Arc::clone(&trace),
        });
        trace
    }

    /// Register a spirograph; fails before anything is registered if the geometry is invalid.
    pub fn register_spirograph(
        &mut self,
        gear_radius: f64,
        pen_radius: f64,
        look: CurveLook,
    ) -> Result<Arc<CurveTrace>, CurveError> {
        let model = spirograph(gear_radius, pen_radius)?;
        Ok(self.register(model, look))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Traces in registration order.
    pub fn traces(&self) -> Vec<Arc<CurveTrace>> {
        self.curves.iter().map(|c| Arc::clone(&c.trace)).collect()
    }

    /// End setup: produce the scheduler, render loop and input gate sharing one state.
    pub fn split(self) -> (SampleScheduler, RenderLoop, InputGate) {
        let state = Arc::new(PipelineState::new(
            self.settings.full_rotation_denominator,
            self.settings.manual,
        ));
        let (scheduled, rendered): (Vec<_>, Vec<_>) = self
            .curves
            .into_iter()
            .map(|c| {
                (
                    ScheduledCurve {
                        model: c.model,
                        trace: Arc::clone(&c.trace),
                    },
                    RenderedCurve::new(c.trace, c.look),
                )
            })
            .unzip();
        let scheduler = SampleScheduler::new(
            Arc::clone(&state),
            scheduled,
            self.settings.steps_per_batch,
            self.settings.producer_pacing(),
        );
        let render = RenderLoop::new(Arc::clone(&state), rendered);
        let gate = InputGate::new(state);
        (scheduler, render, gate)
    }
}
