//! Curve models: weighted sums of rotating complex exponentials.
//!
//! A [`CurveModel`] is an ordered list of [`Term`]s. Evaluating it at `theta`
//! (a fraction of a full rotation) yields
//!
//! ```text
//! z(theta) = Σ radius_i · exp(2πi · theta · frequency_i)
//! ```
//!
//! The spirograph is not a separate type: [`spirograph`] builds an ordinary
//! model pre-populated with the three gear terms.

use std::f64::consts::TAU;

use num::Complex;
use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// A point on the complex plane as produced by [`CurveModel::evaluate`].
pub type Point = Complex<f64>;

/// One rotating component: a radius and a frequency (negative frequencies rotate clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub radius: f64,
    pub frequency: f64,
}

impl Term {
    pub fn new(radius: f64, frequency: f64) -> Self {
        Self { radius, frequency }
    }

    /// Reject NaN or infinite radius and frequency.
    pub fn check(&self) -> Result<(), CurveError> {
        finite("radius", self.radius)?;
        finite("frequency", self.frequency)
    }

    /// Contribution of this term at `theta`.
    #[inline]
    pub fn evaluate(&self, theta: f64) -> Point {
        let (sin, cos) = (TAU * theta * self.frequency).sin_cos();
        Complex::new(self.radius * cos, self.radius * sin)
    }
}

/// A parametric curve defined by its terms.
///
/// Terms may only be added while setting up; once the model is handed to a
/// [`Pipeline`](crate::pipeline::Pipeline) it is shared immutably between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveModel {
    terms: Vec<Term>,
}

impl CurveModel {
    /// Create an empty model (evaluates to zero everywhere).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// Like [`from_terms`](Self::from_terms), but every term must be finite.
    pub fn try_from_terms<I>(terms: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = Term>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.check().map(|()| t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    /// Append a term. Order is kept for inspection; it does not change the value.
    pub fn push_term(&mut self, radius: f64, frequency: f64) -> &mut Self {
        self.terms.push(Term::new(radius, frequency));
        self
    }

    /// Builder-style variant of [`push_term`](Self::push_term).
    pub fn with_term(mut self, radius: f64, frequency: f64) -> Self {
        self.push_term(radius, frequency);
        self
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all terms at `theta`. Defined for every real `theta`.
    pub fn evaluate(&self, theta: f64) -> Point {
        self.terms.iter().map(|t| t.evaluate(theta)).sum()
    }
}

/// Build the three-term spirograph model for an outer gear of radius `gear_radius`
/// and a pen mounted at `pen_radius`:
///
/// `(1, 1)`, `(-gear_radius, 1)`, `(pen_radius, -1/gear_radius)`.
pub fn spirograph(gear_radius: f64, pen_radius: f64) -> Result<CurveModel, CurveError> {
    finite("gear_radius", gear_radius)?;
    finite("pen_radius", pen_radius)?;
    if gear_radius == 0.0 {
        return Err(CurveError::ZeroGearRadius);
    }
    Ok(CurveModel::new()
        .with_term(1.0, 1.0)
        .with_term(-gear_radius, 1.0)
        .with_term(pen_radius, -1.0 / gear_radius))
}

fn finite(name: &'static str, value: f64) -> Result<(), CurveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CurveError::NonFinite { name, value })
    }
}
