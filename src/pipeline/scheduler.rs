//! SampleScheduler: the producer side of the pipeline.
//!
//! The scheduler starts out idle. [`SampleScheduler::start`] moves it onto its
//! own thread where it runs batches forever; there is no way back. Between
//! batches it sleeps for the configured pacing interval.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info, trace};

use crate::curve::CurveModel;
use crate::data::trace::CurveTrace;
use crate::error::RunError;

use super::state::PipelineState;

/// Name given to the producer thread.
pub const PRODUCER_THREAD_NAME: &str = "fourier-producer";

pub(crate) struct ScheduledCurve {
    pub(crate) model: Arc<CurveModel>,
    pub(crate) trace: Arc<CurveTrace>,
}

/// Advances the rotation counter and appends samples to every registered trace.
pub struct SampleScheduler {
    state: Arc<PipelineState>,
    curves: Vec<ScheduledCurve>,
    steps_per_batch: usize,
    pacing: Duration,
    counter: u64,
}

impl SampleScheduler {
    pub(crate) fn new(
        state: Arc<PipelineState>,
        curves: Vec<ScheduledCurve>,
        steps_per_batch: usize,
        pacing: Duration,
    ) -> Self {
        let counter = state.rotation();
        Self {
            state,
            curves,
            steps_per_batch,
            pacing,
            counter,
        }
    }

    pub fn state(&self) -> &Arc<PipelineState> {
        &self.state
    }

    pub fn steps_per_batch(&self) -> usize {
        self.steps_per_batch
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Compute one batch of samples.
    ///
    /// Sample `k` (counting from the first batch) is taken at
    /// `theta = k / full_rotation_denominator` for every curve.
    pub fn run_batch(&mut self) {
        let denom = self.state.full_rotation() as f64;
        for _ in 0..self.steps_per_batch {
            let theta = self.counter as f64 / denom;
            for curve in &self.curves {
                curve.trace.append(curve.model.evaluate(theta));
            }
            self.counter += 1;
            self.state.publish_rotation(self.counter);
        }
        self.state.finish_batch();
        trace!(
            "batch {} done, theta = {:.3}",
            self.state.batches_completed(),
            self.counter as f64 / denom
        );
    }

    /// Run `n` batches back to back on the calling thread, without pacing.
    pub fn run_batches(&mut self, n: usize) {
        for _ in 0..n {
            self.run_batch();
        }
    }

    /// Move the scheduler onto a detached background thread that runs forever.
    ///
    /// The join handle is dropped immediately, so the thread never keeps the
    /// process alive: returning from `main` ends it mid-sleep or mid-batch.
    pub fn start(self) -> Result<(), RunError> {
        let state = Arc::clone(&self.state);
        let handle = thread::Builder::new()
            .name(PRODUCER_THREAD_NAME.to_string())
            .spawn(move || self.run_forever())
            .map_err(RunError::Spawn)?;
        state.mark_producer_running();
        info!(
            "producer started on thread {:?}",
            handle.thread().name().unwrap_or(PRODUCER_THREAD_NAME)
        );
        drop(handle);
        Ok(())
    }

    fn run_forever(mut self) {
        debug!(
            "sampling {} curve(s), {} steps per batch, pacing {:?}",
            self.curves.len(),
            self.steps_per_batch,
            self.pacing
        );
        loop {
            self.run_batch();
            if !self.pacing.is_zero() {
                thread::sleep(self.pacing);
            }
        }
    }
}
