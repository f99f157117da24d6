//! Load Reducer
//!
//! Replaces a linearly varying line load by a single equivalent force: the
//! trapezoid area as magnitude, acting at a centroid along the span.
//!
//! ```text
//!              w_end
//!          ┌──┐
//!      ┌───┘  │          →        ↓ W
//!   ───┴──────┴───            ────┼────
//!   x_start  x_end                centroid
//! ```
//!
//! Two centroid rules are available. [`CentroidRule::Exact`] places the
//! resultant at the true trapezoid centroid. [`CentroidRule::TriangleFraction`]
//! always uses the 1/3 or 2/3 point of the span, which is only correct for a
//! triangle with one zero end (or, for a rectangle, never). It is kept so that
//! results from the original web form can be reproduced exactly.

use serde::{Deserialize, Serialize};

/// How the centroid of a trapezoidal load is located
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentroidRule {
    /// x_start + L·(w_start + 2·w_end) / (3·(w_start + w_end))
    #[default]
    Exact,
    /// x_start + L·(2/3 if w_end > w_start else 1/3)
    TriangleFraction,
}

impl CentroidRule {
    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CentroidRule::Exact => "Exact trapezoid centroid",
            CentroidRule::TriangleFraction => "Triangle fraction (legacy)",
        }
    }

    /// Fraction of the span, measured from `x_start`, at which the centroid sits
    fn fraction(&self, w_start: f64, w_end: f64) -> f64 {
        match self {
            CentroidRule::Exact => {
                let sum = w_start + w_end;
                if sum == 0.0 {
                    // Zero net force: the centroid carries nothing
                    0.5
                } else {
                    (w_start + 2.0 * w_end) / (3.0 * sum)
                }
            }
            CentroidRule::TriangleFraction => {
                if w_end > w_start {
                    2.0 / 3.0
                } else {
                    1.0 / 3.0
                }
            }
        }
    }
}

/// Equivalent point force of a distributed load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resultant {
    /// Total force (positive downward)
    pub magnitude: f64,
    /// Position of the line of action, measured from the left support
    pub centroid: f64,
}

impl Resultant {
    /// A concentrated force is its own resultant
    pub fn point(magnitude: f64, position: f64) -> Self {
        Resultant {
            magnitude,
            centroid: position,
        }
    }

    /// First moment of the force about x = 0
    #[inline]
    pub fn moment_about_origin(&self) -> f64 {
        self.magnitude * self.centroid
    }

    /// Moment of the force about a section at `x` (lever arm x − centroid)
    #[inline]
    pub fn moment_at(&self, x: f64) -> f64 {
        self.magnitude * (x - self.centroid)
    }
}

/// Reduce a trapezoidal load using the exact centroid.
///
/// # Example
/// ```
/// use beam_core::loads::reduce;
///
/// // Triangle rising from 0 to 6 over 3 m
/// let r = reduce(0.0, 6.0, 0.0, 3.0);
/// assert_eq!(r.magnitude, 9.0);
/// assert!((r.centroid - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn reduce(w_start: f64, w_end: f64, x_start: f64, x_end: f64) -> Resultant {
    reduce_with(CentroidRule::Exact, w_start, w_end, x_start, x_end)
}

/// Reduce a trapezoidal load with an explicit centroid rule.
///
/// A zero-length span gives a zero magnitude; its centroid is `x_start` and
/// must not be relied upon.
pub fn reduce_with(
    rule: CentroidRule,
    w_start: f64,
    w_end: f64,
    x_start: f64,
    x_end: f64,
) -> Resultant {
    let length = x_end - x_start;
    let magnitude = 0.5 * (w_start + w_end) * length;
    let centroid = if length == 0.0 {
        x_start
    } else {
        x_start + length * rule.fraction(w_start, w_end)
    };
    Resultant {
        magnitude,
        centroid,
    }
}
