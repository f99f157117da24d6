//! # Beam Calculations
//!
//! The solver is split into its two steps plus the grid and curve helpers:
//!
//! - [`reactions`] - Support reactions from equilibrium
//! - [`sweep`] - Shear and moment at a sequence of sections
//! - [`grid`] - Sample positions along the span
//! - [`curve`] - The sampled diagrams and their extremes
//!
//! [`calculate`] runs all of them in order for a one-shot analysis.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::BeamSpec;
//! use beam_core::calculations::calculate;
//! use beam_core::loads::{DistributedLoad, PointLoad};
//! use beam_core::settings::AnalysisSettings;
//!
//! let spec = BeamSpec::new(10.0)
//!     .with_point_load(PointLoad::new(100.0, 5.0))
//!     .with_udl(DistributedLoad::new(20.0, 0.0, 10.0));
//!
//! // Add the load positions to the grid so the peak is sampled exactly
//! let settings = AnalysisSettings::default().with_critical_points();
//! let results = calculate(&spec, &settings).unwrap();
//!
//! assert_eq!(results.summary.max_moment_position, 5.0);
//! assert!((results.summary.max_moment - 500.0).abs() < 1e-6);
//! ```

pub mod curve;
pub mod grid;
pub mod reactions;
pub mod sweep;

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::beam::{BeamSpec, LoadResultant};
use crate::errors::{BeamError, BeamResult};
use crate::settings::AnalysisSettings;

// Re-export commonly used types
pub use curve::{CurveSummary, InternalForceCurve, InternalForces};
pub use reactions::{solve_reactions, solve_reactions_with, Reactions};
pub use sweep::{evaluate, evaluate_with, forces_at};

/// Everything one analysis produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Support reactions
    pub reactions: Reactions,
    /// Full resultant of each load used in the reaction solve
    pub loads: Vec<LoadResultant>,
    /// Extremes of the diagrams
    pub summary: CurveSummary,
    /// Sampled shear and moment
    pub curve: InternalForceCurve,
}

/// Validate, solve reactions, build the grid and sweep it.
///
/// The returned curve is not checked for finiteness; call
/// [`InternalForceCurve::check_finite`] before plotting.
pub fn calculate(spec: &BeamSpec, settings: &AnalysisSettings) -> BeamResult<AnalysisResults> {
    let _span = debug_span!("beam_analysis", length = spec.length).entered();

    settings.validate()?;
    let reactions = solve_reactions_with(spec, settings)?;
    let positions = grid::sample_positions(spec, settings)?;
    let curve = evaluate_with(spec, &reactions, &positions, settings)?;
    let summary = curve
        .summary()
        .ok_or_else(|| BeamError::invalid_samples("The sample grid is empty"))?;

    Ok(AnalysisResults {
        reactions,
        loads: spec.load_resultants(settings.centroid_rule),
        summary,
        curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{PointLoad, VaryingLoad};
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_grid() {
        let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0));
        let results = calculate(&spec, &AnalysisSettings::default()).unwrap();

        assert_eq!(results.curve.len(), 500);
        assert_eq!(results.curve.samples[0].position, 0.0);
        assert_eq!(results.curve.samples[499].position, 10.0);
        assert_relative_eq!(results.reactions.left, 50.0, epsilon = 1e-9);
        assert_relative_eq!(results.reactions.right, 50.0, epsilon = 1e-9);
        assert_relative_eq!(results.summary.max_shear, 50.0, epsilon = 1e-9);
        // 5.0 is not on a 500-point grid; the nearest samples straddle it
        assert!(results.summary.max_moment < 250.0);
        assert!(results.summary.max_moment > 249.0);
    }

    #[test]
    fn test_critical_points_catch_peak() {
        let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0));
        let settings = AnalysisSettings::default().with_critical_points();
        let results = calculate(&spec, &settings).unwrap();
        assert_relative_eq!(results.summary.max_moment, 250.0, epsilon = 1e-9);
        assert_relative_eq!(results.summary.max_moment_position, 5.0, epsilon = 1e-9);
        assert_eq!(results.summary.shear_zero_crossings.len(), 1);
    }

    #[test]
    fn test_critical_points_catch_off_grid_peak() {
        // Just past a node of the 500-point grid
        let (length, magnitude) = (10.0, 100.0);
        let a = length * 200.0 / 499.0 + 0.003;
        let spec = BeamSpec::new(length).with_point_load(PointLoad::new(magnitude, a));
        let results = calculate(&spec, &AnalysisSettings::default().with_critical_points()).unwrap();

        let exact = crate::equations::point_load_moment(magnitude, a, length, a);
        assert_eq!(results.summary.max_moment_position, a);
        assert_relative_eq!(results.summary.max_moment, exact, max_relative = 1e-12);
        assert!(results.curve.len() >= 500);
    }

    #[test]
    fn test_loads_listing() {
        let spec = BeamSpec::new(6.0).with_uvl(1, VaryingLoad::triangular(30.0, 0.0, 6.0));
        let results = calculate(&spec, &AnalysisSettings::default()).unwrap();
        assert_eq!(results.loads.len(), 4);
        assert_eq!(results.loads[3].label, "UVL 2");
        assert_relative_eq!(results.loads[3].resultant.magnitude, 90.0, epsilon = 1e-9);
        assert_relative_eq!(results.loads[3].resultant.centroid, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bad_settings_rejected() {
        let spec = BeamSpec::new(10.0);
        let err = calculate(&spec, &AnalysisSettings::default().with_sample_count(0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_results_serialize() {
        let spec = BeamSpec::new(4.0).with_point_load(PointLoad::new(10.0, 1.0));
        let results = calculate(&spec, &AnalysisSettings::default().with_sample_count(5)).unwrap();
        let json = serde_json::to_string(&results).unwrap();
        let back: AnalysisResults = serde_json::from_str(&json).unwrap();
        assert_eq!(results, back);
    }
}
