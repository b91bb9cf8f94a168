//! RenderLoop: the consumer side of the pipeline.
//!
//! The UI calls [`RenderLoop::tick`] on a fixed wall-clock interval. A tick
//! either redraws every curve onto a [`RenderSurface`] or returns early:
//!
//! 1. a redraw is already in progress: the tick is dropped;
//! 2. manual mode without a pending advance request: nothing to do;
//! 3. manual mode with a pending request: the request is consumed;
//! 4. otherwise (and after 3) the surface is cleared and each curve is drawn
//!    from a length-clamped read of its trace.
//!
//! Surfaces are retained: the loop only remembers how many points of each
//! curve it has handed over and passes the tail that arrived since. The
//! surface keeps the one render-side copy of the line.

use std::sync::Arc;

use crate::data::curve_look::CurveLook;
use crate::data::trace::CurveTrace;

use super::state::PipelineState;

/// Something the render loop can draw curves onto.
pub trait RenderSurface {
    /// Start a redraw. Nothing is shown until lines are drawn again, but the
    /// points handed over by earlier redraws stay with the surface.
    fn clear(&mut self);

    /// Draw curve number `index`. `new_points` continue the line exactly where
    /// the previous redraw of this curve stopped; the full line is everything
    /// received for `index` so far.
    fn draw_line(&mut self, index: usize, new_points: &[[f64; 2]], look: &CurveLook);
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Another redraw held the rendering flag; nothing was touched.
    Busy,
    /// Manual mode and no advance was requested.
    AwaitingAdvance,
    /// All curves were redrawn.
    Redrawn,
}

pub(crate) struct RenderedCurve {
    pub(crate) trace: Arc<CurveTrace>,
    pub(crate) look: CurveLook,
    /// Points already handed to the surface. Traces only grow, so the next
    /// clamped read is this prefix plus whatever arrived since.
    drawn: usize,
}

impl RenderedCurve {
    pub(crate) fn new(trace: Arc<CurveTrace>, look: CurveLook) -> Self {
        Self {
            trace,
            look,
            drawn: 0,
        }
    }

    /// The clamped tail not yet handed to the surface.
    fn take_tail(&mut self) -> Vec<[f64; 2]> {
        let tail = self.trace.coords_from(self.drawn);
        self.drawn += tail.len();
        tail
    }
}

/// Reads traces and redraws them, gated by mode and the advance request.
pub struct RenderLoop {
    state: Arc<PipelineState>,
    curves: Vec<RenderedCurve>,
    redraws: u64,
}

impl RenderLoop {
    pub(crate) fn new(state: Arc<PipelineState>, curves: Vec<RenderedCurve>) -> Self {
        Self {
            state,
            curves,
            redraws: 0,
        }
    }

    pub fn state(&self) -> &Arc<PipelineState> {
        &self.state
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Number of completed redraws.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Points shown for curve `index` as of the last redraw.
    pub fn drawn_points(&self, index: usize) -> usize {
        self.curves.get(index).map_or(0, |c| c.drawn)
    }

    /// Total points shown across all curves as of the last redraw.
    pub fn total_drawn_points(&self) -> usize {
        self.curves.iter().map(|c| c.drawn).sum()
    }

    pub fn look(&self, index: usize) -> Option<&CurveLook> {
        self.curves.get(index).map(|c| &c.look)
    }

    /// Run one render tick against `surface`.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> TickOutcome {
        // The flag is claimed before the advance request is looked at, so a
        // dropped tick never consumes a request.
        let state = Arc::clone(&self.state);
        let Some(_rendering) = state.try_begin_render() else {
            return TickOutcome::Busy;
        };
        if state.is_manual() && !state.take_advance_request() {
            return TickOutcome::AwaitingAdvance;
        }

        surface.clear();
        for (index, curve) in self.curves.iter_mut().enumerate() {
            let tail = curve.take_tail();
            surface.draw_line(index, &tail, &curve.look);
        }
        self.redraws += 1;
        TickOutcome::Redrawn
    }
}
