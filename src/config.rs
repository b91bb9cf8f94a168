//! Configuration types for the Fourier visualizer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::gesture::Modifier;
use crate::error::ConfigError;

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline tunables
// ─────────────────────────────────────────────────────────────────────────────

/// Timing and sampling parameters of the producer/consumer pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Samples computed per producer batch. Default: `1000`.
    pub steps_per_batch: usize,
    /// Rotation-counter steps that make up `theta = 1`. Default: `1000`.
    pub full_rotation_denominator: u64,
    /// Sleep between producer batches, in milliseconds. Default: `100`.
    pub producer_pacing_ms: u64,
    /// Render tick interval, in milliseconds. Default: `10`.
    pub render_tick_ms: u64,
    /// Redraw only when the advance gesture is made. Default: `false`.
    pub manual: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            steps_per_batch: 1000,
            full_rotation_denominator: 1000,
            producer_pacing_ms: 100,
            render_tick_ms: 10,
            manual: false,
        }
    }
}

impl PipelineSettings {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_batch == 0 {
            return Err(ConfigError::invalid_setting(
                "steps_per_batch",
                "must be at least 1",
            ));
        }
        if self.full_rotation_denominator == 0 {
            return Err(ConfigError::invalid_setting(
                "full_rotation_denominator",
                "must be at least 1",
            ));
        }
        if self.render_tick_ms == 0 {
            return Err(ConfigError::invalid_setting(
                "render_tick_ms",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn producer_pacing(&self) -> Duration {
        Duration::from_millis(self.producer_pacing_ms)
    }

    pub fn render_tick(&self) -> Duration {
        Duration::from_millis(self.render_tick_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed plot bounds; when unset the plot follows the data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    /// Square bounds `[-half, half]` on both axes.
    pub fn symmetric(half: f64) -> Self {
        Self {
            x_min: -half,
            x_max: half,
            y_min: -half,
            y_max: half,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(ConfigError::invalid_setting(
                "fixed_view",
                format!("bounds must be finite with min < max, got {self:?}"),
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FourierConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Window and plot options for the front end.
///
/// Sampling and timing settings live on the [`Pipeline`](crate::pipeline::Pipeline)
/// itself (see [`PipelineSettings`]).
pub struct FourierConfig {
    // ── Input ────────────────────────────────────────────────────────────────
    /// Modifier that must be held while releasing the primary button to step
    /// in manual mode.
    pub advance_modifier: Modifier,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Initial inner window size in points.
    pub window_size: [f32; 2],
    /// Optional eframe native-window options (overrides `window_size`).
    pub native_options: Option<eframe::NativeOptions>,
    /// Use the dark egui theme. Default is light, so black curves are visible.
    pub dark_mode: bool,

    // ── Plot ─────────────────────────────────────────────────────────────────
    /// Keep one unit on the x axis the same length as one unit on the y axis.
    pub equal_aspect: bool,
    /// Pin the view to these bounds instead of following the data.
    pub fixed_view: Option<ViewBounds>,
    /// Show the status line (mode, theta, point counts).
    pub show_status: bool,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            advance_modifier: Modifier::Ctrl,

            title: "Complex Fourier".to_string(),
            window_size: [900.0, 900.0],
            native_options: None,
            dark_mode: false,

            equal_aspect: true,
            fixed_view: None,
            show_status: true,
        }
    }
}

impl FourierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [w, h] = self.window_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::invalid_setting(
                "window_size",
                format!("must be positive, got {w}x{h}"),
            ));
        }
        if let Some(view) = &self.fixed_view {
            view.validate()?;
        }
        Ok(())
    }
}
