//! Shared pipeline state.
//!
//! One `PipelineState` is shared (via `Arc`) between the producer, the render
//! loop and the input gate. Each field has exactly one writer:
//!
//! | Field               | Writer            | Readers            |
//! | ------------------- | ----------------- | ------------------ |
//! | rotation counter    | `SampleScheduler` | anyone             |
//! | batches completed   | `SampleScheduler` | anyone             |
//! | producer running    | `SampleScheduler` | anyone             |
//! | advance requested   | `InputGate` (set) | `RenderLoop` (take)|
//! | currently rendering | `RenderLoop`      | anyone             |
//!
//! The manual flag is fixed when the state is created.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug)]
pub struct PipelineState {
    full_rotation: u64,
    manual: bool,
    rotation: AtomicU64,
    batches: AtomicU64,
    producer_running: AtomicBool,
    advance_requested: AtomicBool,
    rendering: AtomicBool,
}

impl PipelineState {
    pub(crate) fn new(full_rotation: u64, manual: bool) -> Self {
        Self {
            full_rotation,
            manual,
            rotation: AtomicU64::new(0),
            batches: AtomicU64::new(0),
            producer_running: AtomicBool::new(false),
            advance_requested: AtomicBool::new(false),
            rendering: AtomicBool::new(false),
        }
    }

    // ── Producer-owned ───────────────────────────────────────────────────────

    /// Number of samples taken so far. Never reset.
    pub fn rotation(&self) -> u64 {
        self.rotation.load(Ordering::Acquire)
    }

    /// Denominator turning the rotation counter into `theta`.
    pub fn full_rotation(&self) -> u64 {
        self.full_rotation
    }

    /// Current parameter value: `rotation / full_rotation`. Grows without bound.
    pub fn theta(&self) -> f64 {
        self.rotation() as f64 / self.full_rotation as f64
    }

    pub fn batches_completed(&self) -> u64 {
        self.batches.load(Ordering::Acquire)
    }

    pub fn is_producer_running(&self) -> bool {
        self.producer_running.load(Ordering::Acquire)
    }

    pub(crate) fn publish_rotation(&self, value: u64) {
        self.rotation.store(value, Ordering::Release);
    }

    pub(crate) fn finish_batch(&self) {
        self.batches.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn mark_producer_running(&self) {
        self.producer_running.store(true, Ordering::Release);
    }

    // ── Mode / input ─────────────────────────────────────────────────────────

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn advance_requested(&self) -> bool {
        self.advance_requested.load(Ordering::Acquire)
    }

    pub(crate) fn request_advance(&self) {
        self.advance_requested.store(true, Ordering::Release);
    }

    /// Consume a pending advance request. Returns whether one was pending.
    pub(crate) fn take_advance_request(&self) -> bool {
        self.advance_requested.swap(false, Ordering::AcqRel)
    }

    // ── Render-owned ─────────────────────────────────────────────────────────

    pub fn is_rendering(&self) -> bool {
        self.rendering.load(Ordering::Acquire)
    }

    /// Claim the "currently rendering" flag.
    ///
    /// Returns `None` when a redraw is already in progress. The flag is released
    /// when the returned guard is dropped.
    pub fn try_begin_render(&self) -> Option<RenderGuard<'_>> {
        self.rendering
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RenderGuard { state: self })
    }
}

/// Holds the "currently rendering" flag set until dropped.
#[derive(Debug)]
pub struct RenderGuard<'a> {
    state: &'a PipelineState,
}

impl Drop for RenderGuard<'_> {
    fn drop(&mut self) {
        self.state.rendering.store(false, Ordering::Release);
    }
}
