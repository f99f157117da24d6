//! Support reactions from static equilibrium.
//!
//! Every load is replaced by its full resultant, then
//!
//! ```text
//! ΣM about A = 0  →  RB = Σ(Wᵢ·xᵢ) / L
//! ΣF = 0          →  RA = ΣWᵢ − RB
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::beam::BeamSpec;
use crate::errors::BeamResult;
use crate::settings::AnalysisSettings;

/// Support reactions, positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// RA, pin support at x = 0
    pub left: f64,
    /// RB, roller support at x = L
    pub right: f64,
}

impl Reactions {
    /// RA + RB
    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

/// Solve the reactions using default settings (exact centroids).
///
/// # Errors
/// Returns [`BeamError::InvalidInput`](crate::errors::BeamError::InvalidInput)
/// when the beam fails [`BeamSpec::validate`].
///
/// # Example
/// ```
/// use beam_core::beam::BeamSpec;
/// use beam_core::calculations::solve_reactions;
/// use beam_core::loads::PointLoad;
///
/// let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 3.0));
/// let r = solve_reactions(&spec).unwrap();
/// assert!((r.left - 70.0).abs() < 1e-9);
/// assert!((r.right - 30.0).abs() < 1e-9);
/// ```
pub fn solve_reactions(spec: &BeamSpec) -> BeamResult<Reactions> {
    solve_reactions_with(spec, &AnalysisSettings::default())
}

/// Solve the reactions with explicit settings
pub fn solve_reactions_with(spec: &BeamSpec, settings: &AnalysisSettings) -> BeamResult<Reactions> {
    spec.validate()?;

    let mut total_load = 0.0;
    let mut moment_about_a = 0.0;
    for load in spec.load_resultants(settings.centroid_rule) {
        trace!(
            label = %load.label,
            magnitude = load.resultant.magnitude,
            centroid = load.resultant.centroid,
            "load resultant"
        );
        total_load += load.resultant.magnitude;
        moment_about_a += load.resultant.moment_about_origin();
    }

    let right = moment_about_a / spec.length;
    let left = total_load - right;

    debug!(total_load, moment_about_a, left, right, "solved reactions");
    Ok(Reactions { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{CentroidRule, DistributedLoad, PointLoad, VaryingLoad};
    use crate::equations::{partial_uniform_reactions, point_load_reactions, varying_load_reactions};
    use approx::assert_relative_eq;

    fn specs() -> Vec<BeamSpec> {
        vec![
            BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0)),
            BeamSpec::new(6.0)
                .with_point_load(PointLoad::new(-40.0, 1.5))
                .with_udl(DistributedLoad::new(12.0, 0.5, 4.0)),
            BeamSpec::new(12.0)
                .with_point_load(PointLoad::new(50.0, 3.0))
                .with_udl(DistributedLoad::new(10.0, 0.0, 6.0))
                .with_uvl(0, VaryingLoad::triangular(12.0, 6.0, 9.0))
                .with_uvl(1, VaryingLoad::new(8.0, 4.0, 9.0, 12.0)),
            BeamSpec::new(7.5)
                .with_uvl(0, VaryingLoad::new(3.0, 9.0, 0.0, 7.5))
                .with_uvl(1, VaryingLoad::new(-2.0, 5.0, 1.0, 2.0)),
        ]
    }

    #[test]
    fn test_midspan_point_load() {
        let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0));
        let r = solve_reactions(&spec).unwrap();
        assert_relative_eq!(r.left, 50.0, epsilon = 1e-9);
        assert_relative_eq!(r.right, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_force_equilibrium() {
        for settings in [AnalysisSettings::default(), AnalysisSettings::legacy()] {
            for spec in specs() {
                let r = solve_reactions_with(&spec, &settings).unwrap();
                let total = spec.total_load(settings.centroid_rule);
                assert_relative_eq!(r.total(), total, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_moment_closure() {
        for settings in [AnalysisSettings::default(), AnalysisSettings::legacy()] {
            for spec in specs() {
                let r = solve_reactions_with(&spec, &settings).unwrap();
                let moment: f64 = spec
                    .load_resultants(settings.centroid_rule)
                    .iter()
                    .map(|l| l.resultant.moment_about_origin())
                    .sum();
                assert_relative_eq!(r.right * spec.length, moment, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_matches_superposed_closed_forms() {
        let spec = &specs()[2];
        let r = solve_reactions(spec).unwrap();

        let parts = [
            point_load_reactions(50.0, 3.0, 12.0),
            partial_uniform_reactions(10.0, 0.0, 6.0, 12.0),
            varying_load_reactions(0.0, 12.0, 6.0, 9.0, 12.0),
            varying_load_reactions(8.0, 4.0, 9.0, 12.0, 12.0),
        ];
        let left: f64 = parts.iter().map(|p| p.0).sum();
        let right: f64 = parts.iter().map(|p| p.1).sum();
        assert_relative_eq!(r.left, left, max_relative = 1e-9);
        assert_relative_eq!(r.right, right, max_relative = 1e-9);
    }

    #[test]
    fn test_legacy_trapezoid_reactions() {
        // 10 → 20 over [0, 3]: W = 45. Legacy centroid 2.0, exact 5/3.
        let spec = BeamSpec::new(10.0).with_uvl(0, VaryingLoad::new(10.0, 20.0, 0.0, 3.0));

        let legacy = solve_reactions_with(&spec, &AnalysisSettings::legacy()).unwrap();
        assert_relative_eq!(legacy.right, 9.0, epsilon = 1e-9);
        assert_relative_eq!(legacy.left, 36.0, epsilon = 1e-9);

        let exact = solve_reactions_with(
            &spec,
            &AnalysisSettings::default().with_centroid_rule(CentroidRule::Exact),
        )
        .unwrap();
        assert_relative_eq!(exact.right, 7.5, epsilon = 1e-9);
        assert_relative_eq!(exact.left, 37.5, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_span_uvl_is_noop() {
        let base = specs()[1].clone();
        let with_empty = base
            .clone()
            .with_uvl(0, VaryingLoad::new(50.0, 80.0, 4.0, 4.0));
        assert_eq!(
            solve_reactions(&base).unwrap(),
            solve_reactions(&with_empty).unwrap()
        );
    }

    #[test]
    fn test_invalid_length_rejected() {
        let err = solve_reactions(&BeamSpec::new(0.0)).unwrap_err();
        assert!(err.is_validation());
    }
}
