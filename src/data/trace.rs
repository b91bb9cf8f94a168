//! CurveTrace: the ever-growing buffer of evaluated points for one curve.
//!
//! The producer appends, the render loop reads. The complex points and their
//! real/imaginary coordinates live in three independently guarded sequences,
//! and each lock is only held for a single push or a single prefix copy. A
//! reader can therefore observe the sequences at different lengths for a
//! moment; every read accessor clamps to the shortest relevant sequence.
//! Because the buffers are append-only, any clamped prefix is stable: once
//! observed, it never changes.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::curve::Point;

#[inline]
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

#[inline]
fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Append-only point buffer shared between the producer and the render loop.
#[derive(Debug, Default)]
pub struct CurveTrace {
    points: RwLock<Vec<Point>>,
    xs: RwLock<Vec<f64>>,
    ys: RwLock<Vec<f64>>,
}

impl CurveTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `z` together with its real and imaginary parts.
    ///
    /// When this returns, all three sequences end with entries belonging to `z`
    /// (as seen by the writer). Concurrent readers may see the pushes land one
    /// sequence at a time.
    pub fn append(&self, z: Point) {
        write(&self.points).push(z);
        write(&self.xs).push(z.re);
        write(&self.ys).push(z.im);
    }

    /// Raw lengths `(complex, x, y)` at the moment of the call. Informational only.
    pub fn snapshot_lengths(&self) -> (usize, usize, usize) {
        let n = read(&self.points).len();
        let nx = read(&self.xs).len();
        let ny = read(&self.ys).len();
        (n, nx, ny)
    }

    /// Number of complete coordinate pairs currently readable.
    pub fn len(&self) -> usize {
        let xs = read(&self.xs);
        let ys = read(&self.ys);
        xs.len().min(ys.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first `min(len_x, len_y)` coordinate pairs.
    pub fn coords(&self) -> Vec<[f64; 2]> {
        self.coords_from(0)
    }

    /// Coordinate pairs from index `start` up to the clamped length.
    ///
    /// Returns an empty vector when `start` is at or past the readable end. The
    /// render loop uses this to pull only what arrived since its last redraw.
    pub fn coords_from(&self, start: usize) -> Vec<[f64; 2]> {
        let xs = read(&self.xs);
        let ys = read(&self.ys);
        let end = xs.len().min(ys.len());
        if start >= end {
            return Vec::new();
        }
        xs[start..end]
            .iter()
            .zip(&ys[start..end])
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// Separate real and imaginary sequences, both clamped to the same length.
    pub fn xy(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = read(&self.xs);
        let ys = read(&self.ys);
        let end = xs.len().min(ys.len());
        (xs[..end].to_vec(), ys[..end].to_vec())
    }

    /// The complex points, clamped to the shortest of the three sequences.
    pub fn points(&self) -> Vec<Point> {
        let end = self.len();
        let points = read(&self.points);
        points[..end.min(points.len())].to_vec()
    }

    /// Most recent complete coordinate pair, if any.
    pub fn last(&self) -> Option<[f64; 2]> {
        let xs = read(&self.xs);
        let ys = read(&self.ys);
        let end = xs.len().min(ys.len());
        end.checked_sub(1).map(|i| [xs[i], ys[i]])
    }
}
