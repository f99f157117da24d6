//! Beam loads
//!
//! The three load shapes a beam can carry, plus the reducer that turns a
//! distributed shape into a single equivalent force.
//!
//! # Overview
//!
//! - [`PointLoad`] - Concentrated force P at position a
//! - [`DistributedLoad`] - Constant intensity w over [x1, x2] (UDL)
//! - [`VaryingLoad`] - Intensity varying linearly over [x1, x2] (UVL)
//! - [`reduce`] / [`Resultant`] - Equivalent point force of a distribution
//!
//! All magnitudes are positive downward. Positions are measured from the
//! left support.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{CentroidRule, DistributedLoad, VaryingLoad};
//!
//! let udl = DistributedLoad::new(20.0, 0.0, 4.0);
//! assert_eq!(udl.resultant().magnitude, 80.0);
//!
//! let uvl = VaryingLoad::triangular(30.0, 2.0, 8.0);
//! let r = uvl.resultant(CentroidRule::Exact);
//! assert_eq!(r.magnitude, 90.0);
//! ```

pub mod reducer;

pub use reducer::{reduce, reduce_with, CentroidRule, Resultant};

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Concentrated force at a single position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLoad {
    /// Force magnitude P
    pub magnitude: f64,
    /// Distance a from the left support
    pub position: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(magnitude: f64, position: f64) -> Self {
        PointLoad {
            magnitude,
            position,
        }
    }

    /// The load as a resultant (no reduction needed)
    pub fn resultant(&self) -> Resultant {
        Resultant::point(self.magnitude, self.position)
    }

    /// Check finiteness and that the load sits on the beam
    pub fn validate(&self, field: &str, length: f64) -> BeamResult<()> {
        ensure_finite(&format!("{field}.magnitude"), self.magnitude)?;
        ensure_on_beam(&format!("{field}.position"), self.position, length)
    }
}

/// Uniformly distributed load (rectangular block)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributedLoad {
    /// Constant intensity w (force per unit length)
    pub intensity: f64,
    /// Span start x1
    pub start: f64,
    /// Span end x2
    pub end: f64,
}

impl DistributedLoad {
    /// Create a UDL of intensity `w` over [start, end]
    pub fn new(intensity: f64, start: f64, end: f64) -> Self {
        DistributedLoad {
            intensity,
            start,
            end,
        }
    }

    /// Loaded length x2 − x1
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Full resultant: w·(x2 − x1) at the midpoint
    pub fn resultant(&self) -> Resultant {
        Resultant {
            magnitude: self.intensity * self.span(),
            centroid: (self.start + self.end) / 2.0,
        }
    }

    /// Check finiteness, span ordering, and that the span lies on the beam
    pub fn validate(&self, field: &str, length: f64) -> BeamResult<()> {
        ensure_finite(&format!("{field}.intensity"), self.intensity)?;
        ensure_span(field, self.start, self.end, length)
    }
}

/// Linearly varying load (triangle or trapezoid)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaryingLoad {
    /// Intensity at the span start
    pub start_intensity: f64,
    /// Intensity at the span end
    pub end_intensity: f64,
    /// Span start x1
    pub start: f64,
    /// Span end x2
    pub end: f64,
}

impl VaryingLoad {
    /// Create a UVL going from `start_intensity` at `start` to
    /// `end_intensity` at `end`
    pub fn new(start_intensity: f64, end_intensity: f64, start: f64, end: f64) -> Self {
        VaryingLoad {
            start_intensity,
            end_intensity,
            start,
            end,
        }
    }

    /// Triangle rising from zero at `start` to `peak` at `end`
    pub fn triangular(peak: f64, start: f64, end: f64) -> Self {
        Self::new(0.0, peak, start, end)
    }

    /// Loaded length x2 − x1
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// True when the load has no length or no intensity anywhere
    pub fn is_empty(&self) -> bool {
        self.span() == 0.0 || (self.start_intensity == 0.0 && self.end_intensity == 0.0)
    }

    /// Intensity at position `x`, interpolated linearly along the span.
    ///
    /// Positions outside the span are clamped to the nearest end.
    pub fn intensity_at(&self, x: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return self.start_intensity;
        }
        let t = ((x - self.start) / span).clamp(0.0, 1.0);
        self.start_intensity + (self.end_intensity - self.start_intensity) * t
    }

    /// Full resultant over the whole span
    pub fn resultant(&self, rule: CentroidRule) -> Resultant {
        reduce_with(
            rule,
            self.start_intensity,
            self.end_intensity,
            self.start,
            self.end,
        )
    }

    /// Check finiteness, span ordering, and that the span lies on the beam
    pub fn validate(&self, field: &str, length: f64) -> BeamResult<()> {
        ensure_finite(&format!("{field}.start_intensity"), self.start_intensity)?;
        ensure_finite(&format!("{field}.end_intensity"), self.end_intensity)?;
        ensure_span(field, self.start, self.end, length)
    }
}

fn ensure_finite(field: &str, value: f64) -> BeamResult<()> {
    if !value.is_finite() {
        return Err(BeamError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

fn ensure_on_beam(field: &str, value: f64, length: f64) -> BeamResult<()> {
    ensure_finite(field, value)?;
    if value < 0.0 || value > length {
        return Err(BeamError::invalid_input(
            field,
            value.to_string(),
            format!("Position must lie within the beam [0, {length}]"),
        ));
    }
    Ok(())
}

fn ensure_span(field: &str, start: f64, end: f64, length: f64) -> BeamResult<()> {
    ensure_on_beam(&format!("{field}.start"), start, length)?;
    ensure_on_beam(&format!("{field}.end"), end, length)?;
    if start > end {
        return Err(BeamError::invalid_input(
            format!("{field}.start"),
            start.to_string(),
            format!("Span start must not exceed span end ({end})"),
        ));
    }
    Ok(())
}
