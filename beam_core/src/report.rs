//! # Analysis Report
//!
//! A self-describing JSON document bundling the input beam, the settings it
//! was solved with and the results. This is what the command-line tool
//! writes with `--format json`.
//!
//! ```text
//! AnalysisReport
//! ├── schema_version
//! ├── generated_at
//! ├── spec: BeamSpec
//! ├── settings: AnalysisSettings
//! └── results: AnalysisResults (reactions, loads, summary, curve)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::beam::BeamSpec;
use crate::calculations::{calculate, AnalysisResults};
use crate::errors::BeamResult;
use crate::settings::AnalysisSettings;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Input, settings and results of one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version (for readers of stored reports)
    pub schema_version: String,

    /// When the analysis was run
    pub generated_at: DateTime<Utc>,

    /// The analysed beam
    pub spec: BeamSpec,

    /// Settings used
    pub settings: AnalysisSettings,

    /// Solver output
    pub results: AnalysisResults,
}

impl AnalysisReport {
    /// Run an analysis and wrap it in a report.
    ///
    /// Fails on invalid input and on a non-finite curve.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::beam::BeamSpec;
    /// use beam_core::loads::PointLoad;
    /// use beam_core::report::AnalysisReport;
    /// use beam_core::settings::AnalysisSettings;
    ///
    /// let spec = BeamSpec::new(10.0).with_point_load(PointLoad::new(100.0, 5.0));
    /// let report = AnalysisReport::generate(spec, AnalysisSettings::default()).unwrap();
    /// assert!(report.to_json_pretty().unwrap().contains("\"schema_version\""));
    /// ```
    pub fn generate(spec: BeamSpec, settings: AnalysisSettings) -> BeamResult<Self> {
        let results = calculate(&spec, &settings)?;
        results.curve.check_finite()?;
        Ok(AnalysisReport {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            spec,
            settings,
            results,
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report previously written with [`to_json_pretty`](Self::to_json_pretty)
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
