//! Standalone application wrapper for the visualizer.
//!
//! [`FourierApp`] implements [`eframe::App`]. Every frame it
//!
//! 1. forwards pointer releases to the [`InputGate`],
//! 2. ticks the [`RenderLoop`] once `render_tick` has elapsed since the last tick,
//! 3. paints the retained [`PlotFrame`] with `egui_plot`.
//!
//! When the render loop skips a tick (manual mode, or busy) the previous frame
//! stays on screen.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoint, PlotPoints};
use log::debug;

use crate::config::{FourierConfig, ViewBounds};
use crate::data::curve_look::CurveLook;
use crate::pipeline::{InputGate, RenderLoop, RenderSurface, TickOutcome};

/// How often trace growth is reported at debug level.
const GROWTH_LOG_INTERVAL: Duration = Duration::from_secs(10);

// ─────────────────────────────────────────────────────────────────────────────
// PlotFrame – retained render surface
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FrameLine {
    pub name: String,
    pub points: Vec<PlotPoint>,
    pub look: CurveLook,
}

/// The lines produced by the most recent redraw.
///
/// This is the only render-side copy of the curve points. Each redraw appends
/// the tail the render loop hands over; painting borrows the buffers.
#[derive(Debug, Default)]
pub struct PlotFrame {
    lines: Vec<FrameLine>,
    drawn: usize,
}

impl PlotFrame {
    /// Lines of the current frame, in curve order.
    pub fn lines(&self) -> &[FrameLine] {
        &self.lines[..self.drawn]
    }
}

impl RenderSurface for PlotFrame {
    fn clear(&mut self) {
        self.drawn = 0;
    }

    fn draw_line(&mut self, index: usize, new_points: &[[f64; 2]], look: &CurveLook) {
        while self.lines.len() <= index {
            let n = self.lines.len();
            self.lines.push(FrameLine {
                name: format!("curve {}", n + 1),
                points: Vec::new(),
                look: *look,
            });
        }
        let line = &mut self.lines[index];
        line.points.extend(new_points.iter().map(|&[x, y]| PlotPoint::new(x, y)));
        line.look = *look;
        self.drawn = self.drawn.max(index + 1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FourierApp
// ─────────────────────────────────────────────────────────────────────────────

pub struct FourierApp {
    render: RenderLoop,
    gate: InputGate,
    frame: PlotFrame,

    render_tick: Duration,
    last_tick: Option<Instant>,
    last_outcome: Option<TickOutcome>,

    equal_aspect: bool,
    fixed_view: Option<ViewBounds>,
    show_status: bool,

    dark_mode: bool,
    visuals_applied: bool,

    last_growth_log: Instant,
}

impl FourierApp {
    pub fn new(
        render: RenderLoop,
        gate: InputGate,
        render_tick: Duration,
        cfg: &FourierConfig,
    ) -> Self {
        Self {
            render,
            gate,
            frame: PlotFrame::default(),
            render_tick,
            last_tick: None,
            last_outcome: None,
            equal_aspect: cfg.equal_aspect,
            fixed_view: cfg.fixed_view,
            show_status: cfg.show_status,
            dark_mode: cfg.dark_mode,
            visuals_applied: false,
            last_growth_log: Instant::now(),
        }
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    /// Tick the render loop if a full tick interval has passed.
    fn maybe_tick(&mut self, now: Instant) {
        let due = self
            .last_tick
            .map_or(true, |t| now.duration_since(t) >= self.render_tick);
        if !due {
            return;
        }
        self.last_tick = Some(now);
        self.last_outcome = Some(self.render.tick(&mut self.frame));
    }

    fn log_growth(&mut self, now: Instant) {
        if now.duration_since(self.last_growth_log) < GROWTH_LOG_INTERVAL {
            return;
        }
        self.last_growth_log = now;
        let state = self.render.state();
        debug!(
            "theta = {:.1}, {} batches, {} points on screen",
            state.theta(),
            state.batches_completed(),
            self.render.total_drawn_points()
        );
    }

    fn status_text(&self) -> String {
        let state = self.render.state();
        let mode = if state.is_manual() {
            format!("manual ({}+click to step)", self.gate.modifier())
        } else {
            "continuous".to_string()
        };
        format!(
            "{mode} | θ = {:.3} | points: {} | redraws: {}",
            state.theta(),
            self.render.total_drawn_points(),
            self.render.redraw_count()
        )
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("fourier_plot");
        if self.equal_aspect {
            plot = plot.data_aspect(1.0);
        }
        let fixed = self.fixed_view;
        let lines = self.frame.lines();
        plot.show(ui, |plot_ui| {
            if let Some(v) = fixed {
                plot_ui.set_plot_bounds_x(v.x_min..=v.x_max);
                plot_ui.set_plot_bounds_y(v.y_min..=v.y_max);
            }
            for line in lines {
                plot_ui.line(
                    Line::new(&line.name, PlotPoints::Borrowed(&line.points))
                        .color(line.look.color)
                        .width(line.look.width),
                );
            }
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for FourierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(if self.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.visuals_applied = true;
        }

        // Input first, so a gesture is honoured by this frame's tick.
        let events = ctx.input(|i| i.events.clone());
        self.gate.handle_events(&events);

        let now = Instant::now();
        self.maybe_tick(now);
        self.log_growth(now);

        if self.show_status {
            let status = self.status_text();
            egui::TopBottomPanel::bottom("fourier_status").show(ctx, |ui| {
                ui.label(status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_plot(ui);
        });

        ctx.request_repaint_after(self.render_tick);
    }
}
