//! Native window front end.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`fourier_app`]   | [`FourierApp`] (eframe) and the retained [`PlotFrame`] surface |
//! | [`run`]           | Top-level [`run_fourier()`] entry point |

mod fourier_app;
mod run;

pub use fourier_app::{FourierApp, FrameLine, PlotFrame};
pub use run::run_fourier;
