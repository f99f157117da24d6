//! Internal force sweep.
//!
//! Shear and moment at each section are built from scratch: the left
//! reaction, minus every load (or covered part of a load) at or left of the
//! section. No sample depends on another, so the result at a position is the
//! same whatever grid it was evaluated on.
//!
//! ```text
//! V(x) = RA − Σ Fᵢ(x)
//! M(x) = RA·x − Σ Fᵢ(x)·(x − cᵢ(x))
//! ```
//!
//! where Fᵢ(x), cᵢ(x) are the force and centroid of the part of load i lying
//! on [0, x].

use tracing::debug;

use super::curve::{InternalForceCurve, InternalForces};
use super::reactions::Reactions;
use crate::beam::BeamSpec;
use crate::errors::{BeamError, BeamResult};
use crate::loads::{reduce_with, DistributedLoad, Resultant, VaryingLoad};
use crate::settings::{AnalysisSettings, PartialProfile};

/// Evaluate shear and moment at `positions` with default settings.
///
/// `positions` must be finite, inside [0, L] and non-decreasing.
///
/// # Example
/// ```
/// use beam_core::beam::BeamSpec;
/// use beam_core::calculations::{evaluate, solve_reactions};
/// use beam_core::loads::PointLoad;
///
/// let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0));
/// let reactions = solve_reactions(&spec).unwrap();
/// let curve = evaluate(&spec, &reactions, &[0.0, 5.0, 10.0]).unwrap();
///
/// assert_eq!(curve.samples[1].moment, 250.0);
/// assert_eq!(curve.samples[2].shear, -50.0);
/// ```
pub fn evaluate(
    spec: &BeamSpec,
    reactions: &Reactions,
    positions: &[f64],
) -> BeamResult<InternalForceCurve> {
    evaluate_with(spec, reactions, positions, &AnalysisSettings::default())
}

/// Evaluate shear and moment at `positions` with explicit settings
pub fn evaluate_with(
    spec: &BeamSpec,
    reactions: &Reactions,
    positions: &[f64],
    settings: &AnalysisSettings,
) -> BeamResult<InternalForceCurve> {
    spec.validate()?;
    validate_positions(positions, spec.length)?;

    let curve: InternalForceCurve = positions
        .iter()
        .map(|&x| forces_at(spec, reactions, x, settings))
        .collect();

    debug!(
        samples = curve.len(),
        profile = ?settings.partial_profile,
        "evaluated internal forces"
    );
    Ok(curve)
}

/// Shear and moment at a single section
pub fn forces_at(
    spec: &BeamSpec,
    reactions: &Reactions,
    x: f64,
    settings: &AnalysisSettings,
) -> InternalForces {
    let mut shear = reactions.left;
    let mut moment = reactions.left * x;

    let point = &spec.point_load;
    if x >= point.position {
        shear -= point.magnitude;
        moment -= point.magnitude * (x - point.position);
    }

    let covered_loads = std::iter::once(covered_udl(&spec.udl, x)).chain(
        spec.uvls
            .iter()
            .map(|uvl| covered_uvl(uvl, x, settings)),
    );
    for part in covered_loads.flatten() {
        shear -= part.magnitude;
        moment -= part.moment_at(x);
    }

    InternalForces {
        position: x,
        shear,
        moment,
    }
}

/// Length of [start, end] lying at or left of `x`, if any
fn covered_length(start: f64, end: f64, x: f64) -> Option<f64> {
    if x < start {
        return None;
    }
    let covered = x.min(end) - start;
    (covered > 0.0).then_some(covered)
}

fn covered_udl(udl: &DistributedLoad, x: f64) -> Option<Resultant> {
    let covered = covered_length(udl.start, udl.end, x)?;
    Some(Resultant {
        magnitude: udl.intensity * covered,
        centroid: udl.start + covered / 2.0,
    })
}

fn covered_uvl(uvl: &VaryingLoad, x: f64, settings: &AnalysisSettings) -> Option<Resultant> {
    let covered = covered_length(uvl.start, uvl.end, x)?;
    let cut = uvl.start + covered;
    let end_intensity = match settings.partial_profile {
        PartialProfile::SpanEnds => uvl.end_intensity,
        PartialProfile::Interpolated => uvl.intensity_at(cut),
    };
    Some(reduce_with(
        settings.centroid_rule,
        uvl.start_intensity,
        end_intensity,
        uvl.start,
        cut,
    ))
}

/// Positions must be finite, on the beam and in non-decreasing order
fn validate_positions(positions: &[f64], length: f64) -> BeamResult<()> {
    if positions.is_empty() {
        return Err(BeamError::invalid_samples("At least one position is required"));
    }
    let mut previous = f64::NEG_INFINITY;
    for (i, &x) in positions.iter().enumerate() {
        if !x.is_finite() || x < 0.0 || x > length {
            return Err(BeamError::invalid_samples(format!(
                "Position {i} ({x}) lies outside the beam [0, {length}]"
            )));
        }
        if x < previous {
            return Err(BeamError::invalid_samples(format!(
                "Position {i} ({x}) is smaller than the one before it ({previous})"
            )));
        }
        previous = x;
    }
    Ok(())
}
