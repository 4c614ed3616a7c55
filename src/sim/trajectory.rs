//! Reference trajectory generation
//!
//! A trajectory is an ordered, non-empty list of world-space points. The
//! controller walks it cyclically, so the last point is followed by the first.

use std::f64::consts::TAU;

use super::state::TrajectoryPoint;
use crate::polar_to_cartesian;

/// Sample `num_points` points evenly in angle around a circle at the origin.
///
/// Point `i` sits at angle `i / num_points * 2π`, so the first point is
/// always `(radius, 0)`.
pub fn generate_circular(radius: f64, num_points: usize) -> Vec<TrajectoryPoint> {
    (0..num_points)
        .map(|i| {
            let theta = i as f64 / num_points as f64 * TAU;
            polar_to_cartesian(radius, theta).into()
        })
        .collect()
}

/// Non-empty cyclic sequence of trajectory points
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Wrap a point list; `None` if it is empty
    pub fn new(points: Vec<TrajectoryPoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// Circular trajectory; `None` when `num_points` is zero
    pub fn circular(radius: f64, num_points: usize) -> Option<Self> {
        Self::new(generate_circular(radius, num_points))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with slices
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Point at `index`, wrapping past the end
    #[inline]
    pub fn point(&self, index: usize) -> TrajectoryPoint {
        self.points[index % self.points.len()]
    }

    /// Index following `index`, wrapping to 0 past the last point
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.points.len()
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }
}
