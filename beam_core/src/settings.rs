//! # Analysis Settings
//!
//! Knobs that control how an analysis is carried out, loadable from a TOML
//! file. Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! sample_count = 500
//! centroid_rule = "exact"          # or "triangle_fraction"
//! partial_profile = "span_ends"    # or "interpolated"
//! include_critical_points = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::CentroidRule;

/// Default number of evenly spaced samples along the span
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Smallest grid that still contains both supports
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Intensity profile used for a UVL that is only partly left of a section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialProfile {
    /// Keep both end intensities and shrink the span to the covered part
    #[default]
    SpanEnds,
    /// Cut the trapezoid at the section, ending at the interpolated intensity
    Interpolated,
}

impl PartialProfile {
    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            PartialProfile::SpanEnds => "Span-end intensities",
            PartialProfile::Interpolated => "Interpolated cut",
        }
    }
}

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of evenly spaced sample positions, both supports included
    pub sample_count: usize,

    /// Centroid rule for trapezoidal loads
    pub centroid_rule: CentroidRule,

    /// Profile of partially covered UVLs during the sweep
    pub partial_profile: PartialProfile,

    /// Add load positions and span boundaries to the sample grid
    pub include_critical_points: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            centroid_rule: CentroidRule::default(),
            partial_profile: PartialProfile::default(),
            include_critical_points: false,
        }
    }
}

impl AnalysisSettings {
    /// Settings that reproduce the original web form: legacy centroid,
    /// span-end partial profile, plain 500-point grid.
    pub fn legacy() -> Self {
        AnalysisSettings {
            centroid_rule: CentroidRule::TriangleFraction,
            ..Self::default()
        }
    }

    /// Set the sample count and return self (builder pattern)
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Set the centroid rule and return self (builder pattern)
    pub fn with_centroid_rule(mut self, rule: CentroidRule) -> Self {
        self.centroid_rule = rule;
        self
    }

    /// Set the partial profile and return self (builder pattern)
    pub fn with_partial_profile(mut self, profile: PartialProfile) -> Self {
        self.partial_profile = profile;
        self
    }

    /// Enable critical-point refinement and return self (builder pattern)
    pub fn with_critical_points(mut self) -> Self {
        self.include_critical_points = true;
        self
    }

    /// Reject settings the grid builder cannot honour
    pub fn validate(&self) -> BeamResult<()> {
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(BeamError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                format!("At least {MIN_SAMPLE_COUNT} samples are required"),
            ));
        }
        Ok(())
    }

    /// Parse settings from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> BeamResult<Self> {
        let settings: AnalysisSettings =
            toml::from_str(text).map_err(|e| BeamError::config(origin, e.to_string()))?;
        settings
            .validate()
            .map_err(|e| BeamError::config(origin, e.to_string()))?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> BeamResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Render settings as TOML
    pub fn to_toml_string(&self) -> BeamResult<String> {
        toml::to_string_pretty(self).map_err(|e| BeamError::SerializationError {
            reason: e.to_string(),
        })
    }
}
