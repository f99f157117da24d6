//! # Beam Specification
//!
//! A [`BeamSpec`] describes one simply-supported beam: pin at x = 0, roller at
//! x = L, carrying one point load, one UDL and two independent UVLs. Unused
//! loads are left at zero, which makes them contribute nothing.
//!
//! ```text
//!          P         w              w_start ╱│ w_end
//!          ↓     ↓↓↓↓↓↓↓↓          ┌──────╱  │
//!    ══════════════════════════════════════════
//!    △                                        △
//!   RA  ←──────────────── L ────────────────→ RB
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::BeamSpec;
//! use beam_core::loads::{PointLoad, DistributedLoad};
//!
//! let spec = BeamSpec::new(10.0)
//!     .with_point_load(PointLoad::new(100.0, 5.0))
//!     .with_udl(DistributedLoad::new(20.0, 0.0, 4.0));
//!
//! assert!(spec.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::{CentroidRule, DistributedLoad, PointLoad, Resultant, VaryingLoad};

/// Number of independent UVL segments a beam can carry
pub const UVL_COUNT: usize = 2;

/// Geometry and loading of a simply-supported beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span length L between supports
    pub length: f64,

    /// Concentrated load
    #[serde(default)]
    pub point_load: PointLoad,

    /// Uniformly distributed load
    #[serde(default)]
    pub udl: DistributedLoad,

    /// Uniformly varying loads
    #[serde(default)]
    pub uvls: [VaryingLoad; UVL_COUNT],
}

/// Full resultant of one load, labelled for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResultant {
    /// Which load this is ("Point load", "UDL", "UVL 1", "UVL 2")
    pub label: String,
    /// Equivalent force
    pub resultant: Resultant,
}

impl BeamSpec {
    /// Create an unloaded beam of the given length
    pub fn new(length: f64) -> Self {
        BeamSpec {
            length,
            point_load: PointLoad::default(),
            udl: DistributedLoad::default(),
            uvls: [VaryingLoad::default(); UVL_COUNT],
        }
    }

    /// Set the point load and return self (builder pattern)
    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.point_load = load;
        self
    }

    /// Set the UDL and return self (builder pattern)
    pub fn with_udl(mut self, load: DistributedLoad) -> Self {
        self.udl = load;
        self
    }

    /// Set the UVL in slot `index` (0 or 1) and return self (builder pattern)
    ///
    /// Indices past the last slot are ignored.
    pub fn with_uvl(mut self, index: usize, load: VaryingLoad) -> Self {
        if let Some(slot) = self.uvls.get_mut(index) {
            *slot = load;
        }
        self
    }

    /// Check every geometric precondition of the solver.
    ///
    /// Rejects a non-positive or non-finite length, a point load off the
    /// beam, and any span that is reversed or leaves [0, L].
    pub fn validate(&self) -> BeamResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(BeamError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be a positive finite number",
            ));
        }
        self.point_load.validate("point_load", self.length)?;
        self.udl.validate("udl", self.length)?;
        for (i, uvl) in self.uvls.iter().enumerate() {
            uvl.validate(&format!("uvls[{i}]"), self.length)?;
        }
        Ok(())
    }

    /// Full resultants of all four loads, in a fixed order
    pub fn load_resultants(&self, rule: CentroidRule) -> Vec<LoadResultant> {
        let mut out = Vec::with_capacity(2 + UVL_COUNT);
        out.push(LoadResultant {
            label: "Point load".to_string(),
            resultant: self.point_load.resultant(),
        });
        out.push(LoadResultant {
            label: "UDL".to_string(),
            resultant: self.udl.resultant(),
        });
        for (i, uvl) in self.uvls.iter().enumerate() {
            out.push(LoadResultant {
                label: format!("UVL {}", i + 1),
                resultant: uvl.resultant(rule),
            });
        }
        out
    }

    /// Sum of all load magnitudes
    pub fn total_load(&self, rule: CentroidRule) -> f64 {
        self.load_resultants(rule)
            .iter()
            .map(|l| l.resultant.magnitude)
            .sum()
    }

    /// Positions where a load acts, starts or ends (unsorted, may repeat)
    pub fn critical_points(&self) -> Vec<f64> {
        let mut points = vec![self.point_load.position, self.udl.start, self.udl.end];
        for uvl in &self.uvls {
            points.push(uvl.start);
            points.push(uvl.end);
        }
        points
    }
}
