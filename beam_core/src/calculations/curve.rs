//! Sampled shear and moment diagrams.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Relative size below which a shear value counts as zero when looking for
/// sign changes
const ZERO_SHEAR_TOLERANCE: f64 = 1e-9;

/// Internal forces at one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// Section position from the left support
    pub position: f64,
    /// Shear force V(x)
    pub shear: f64,
    /// Bending moment M(x)
    pub moment: f64,
}

/// Ordered shear/moment samples over the span
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalForceCurve {
    pub samples: Vec<InternalForces>,
}

/// Extremes of a curve, for headline reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    /// Largest |V|
    pub max_shear: f64,
    pub max_shear_position: f64,
    /// Largest (most sagging) moment
    pub max_moment: f64,
    pub max_moment_position: f64,
    /// Smallest (most hogging) moment
    pub min_moment: f64,
    pub min_moment_position: f64,
    /// Positions where shear changes sign, linearly interpolated between
    /// samples. Moment extremes sit at these sections.
    pub shear_zero_crossings: Vec<f64>,
}

impl InternalForceCurve {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the curve has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples in position order
    pub fn iter(&self) -> impl Iterator<Item = &InternalForces> {
        self.samples.iter()
    }

    /// (position, shear) pairs, ready for plotting
    pub fn shear_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.position, s.shear)).collect()
    }

    /// (position, moment) pairs, ready for plotting
    pub fn moment_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.position, s.moment)).collect()
    }

    /// Fail on the first NaN or infinite shear or moment.
    ///
    /// The sweep itself never checks; overflow from huge inputs shows up here.
    pub fn check_finite(&self) -> BeamResult<()> {
        for s in &self.samples {
            if !s.shear.is_finite() {
                return Err(BeamError::non_finite("shear", s.position));
            }
            if !s.moment.is_finite() {
                return Err(BeamError::non_finite("moment", s.position));
            }
        }
        Ok(())
    }

    /// Extremes and shear sign changes, or `None` for an empty curve
    pub fn summary(&self) -> Option<CurveSummary> {
        let first = self.samples.first()?;
        let mut summary = CurveSummary {
            max_shear: first.shear.abs(),
            max_shear_position: first.position,
            max_moment: first.moment,
            max_moment_position: first.position,
            min_moment: first.moment,
            min_moment_position: first.position,
            shear_zero_crossings: Vec::new(),
        };

        for s in &self.samples[1..] {
            if s.shear.abs() > summary.max_shear {
                summary.max_shear = s.shear.abs();
                summary.max_shear_position = s.position;
            }
            if s.moment > summary.max_moment {
                summary.max_moment = s.moment;
                summary.max_moment_position = s.position;
            }
            if s.moment < summary.min_moment {
                summary.min_moment = s.moment;
                summary.min_moment_position = s.position;
            }
        }

        let tolerance = summary.max_shear * ZERO_SHEAR_TOLERANCE;
        let sign = |v: f64| {
            if v.abs() <= tolerance {
                0.0
            } else {
                v.signum()
            }
        };
        for pair in self.samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (sa, sb) = (sign(a.shear), sign(b.shear));
            if sa == 0.0 {
                continue;
            }
            if sb == 0.0 {
                summary.shear_zero_crossings.push(b.position);
            } else if sa != sb {
                let t = a.shear / (a.shear - b.shear);
                summary
                    .shear_zero_crossings
                    .push(a.position + t * (b.position - a.position));
            }
        }

        Some(summary)
    }
}

impl FromIterator<InternalForces> for InternalForceCurve {
    fn from_iter<I: IntoIterator<Item = InternalForces>>(iter: I) -> Self {
        InternalForceCurve {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(points: &[(f64, f64, f64)]) -> InternalForceCurve {
        points
            .iter()
            .map(|&(position, shear, moment)| InternalForces {
                position,
                shear,
                moment,
            })
            .collect()
    }

    #[test]
    fn test_summary_extremes() {
        let c = curve(&[
            (0.0, 40.0, 0.0),
            (1.0, 20.0, 30.0),
            (2.0, -10.0, 35.0),
            (3.0, -60.0, -5.0),
            (4.0, -60.0, 0.0),
        ]);
        let s = c.summary().unwrap();
        assert_eq!(s.max_shear, 60.0);
        assert_eq!(s.max_shear_position, 3.0);
        assert_eq!(s.max_moment, 35.0);
        assert_eq!(s.max_moment_position, 2.0);
        assert_eq!(s.min_moment, -5.0);
        assert_eq!(s.min_moment_position, 3.0);
        assert_eq!(s.shear_zero_crossings.len(), 1);
        assert_relative_eq!(s.shear_zero_crossings[0], 1.0 + 20.0 / 30.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_sample_counts_once() {
        let c = curve(&[(0.0, 5.0, 0.0), (1.0, 0.0, 2.5), (2.0, -5.0, 0.0)]);
        let s = c.summary().unwrap();
        assert_eq!(s.shear_zero_crossings, vec![1.0]);
    }

    #[test]
    fn test_unloaded_curve_has_no_crossings() {
        let c = curve(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        assert!(c.summary().unwrap().shear_zero_crossings.is_empty());
    }

    #[test]
    fn test_empty_summary() {
        assert!(InternalForceCurve::default().summary().is_none());
    }

    #[test]
    fn test_check_finite() {
        let ok = curve(&[(0.0, 1.0, 0.0)]);
        assert!(ok.check_finite().is_ok());

        let bad = curve(&[(0.0, 1.0, 0.0), (2.5, 1.0, f64::INFINITY)]);
        match bad.check_finite().unwrap_err() {
            BeamError::NonFiniteResult { quantity, position } => {
                assert_eq!(quantity, "moment");
                assert_eq!(position, 2.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_diagrams() {
        let c = curve(&[(0.0, 1.0, 0.0), (1.0, -1.0, 0.5)]);
        assert_eq!(c.shear_diagram(), vec![(0.0, 1.0), (1.0, -1.0)]);
        assert_eq!(c.moment_diagram(), vec![(0.0, 0.0), (1.0, 0.5)]);
    }
}
