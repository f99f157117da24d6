//! Sample grids along the span.

use crate::beam::BeamSpec;
use crate::errors::{BeamError, BeamResult};
use crate::settings::{AnalysisSettings, MIN_SAMPLE_COUNT};

/// Offset either side of a critical point, as a fraction of the span
const CRITICAL_OFFSET: f64 = 0.001;

/// `count` evenly spaced positions from 0 to `length`, both ends exact
pub fn linspace(length: f64, count: usize) -> BeamResult<Vec<f64>> {
    if count < MIN_SAMPLE_COUNT {
        return Err(BeamError::invalid_samples(format!(
            "A grid needs at least {MIN_SAMPLE_COUNT} points, got {count}"
        )));
    }
    let last = count - 1;
    Ok((0..count)
        .map(|i| {
            if i == last {
                length
            } else {
                length * i as f64 / last as f64
            }
        })
        .collect())
}

/// Sample positions for an analysis.
///
/// Evenly spaced over [0, L]. With `include_critical_points`, every load
/// position and span boundary is added together with a point just before
/// and just after it, so the shear jump and the kinks show up sharply.
/// Critical points are always kept exactly; an even-grid node sitting right
/// next to one gives way to it, so the grid never shrinks below
/// `sample_count`.
pub fn sample_positions(spec: &BeamSpec, settings: &AnalysisSettings) -> BeamResult<Vec<f64>> {
    let grid = linspace(spec.length, settings.sample_count)?;
    if !settings.include_critical_points {
        return Ok(grid);
    }

    let epsilon = spec.length * CRITICAL_OFFSET;
    let interior = |x: f64| x > epsilon / 2.0 && x < spec.length - epsilon / 2.0;
    let mut critical: Vec<f64> = spec
        .critical_points()
        .into_iter()
        .flat_map(|point| [point - epsilon, point, point + epsilon])
        .filter(|&x| interior(x))
        .collect();
    critical.sort_by(f64::total_cmp);
    critical.dedup();

    // At most one node lies this close to any critical point
    let spacing = spec.length / (settings.sample_count - 1) as f64;
    let tolerance = (epsilon / 2.0).min(spacing / 2.0);
    let near_critical = |x: f64| {
        let i = critical.partition_point(|&c| c < x);
        [i.checked_sub(1), Some(i)]
            .into_iter()
            .flatten()
            .filter_map(|j| critical.get(j))
            .any(|&c| (c - x).abs() < tolerance)
    };

    let mut positions: Vec<f64> = grid.into_iter().filter(|&x| !near_critical(x)).collect();
    positions.extend_from_slice(&critical);
    positions.sort_by(f64::total_cmp);
    Ok(positions)
}
