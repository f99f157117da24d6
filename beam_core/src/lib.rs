//! # beam_core - Simply-Supported Beam Solver
//!
//! `beam_core` computes support reactions and shear/moment diagrams for a
//! simply-supported beam carrying a point load, a uniformly distributed load
//! and up to two linearly varying loads.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Validated up front**: Bad geometry is rejected before any computation
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::beam::BeamSpec;
//! use beam_core::calculations::{evaluate, solve_reactions};
//! use beam_core::calculations::grid::linspace;
//! use beam_core::loads::{PointLoad, VaryingLoad};
//!
//! let spec = BeamSpec::new(10.0)
//!     .with_point_load(PointLoad::new(100.0, 5.0))
//!     .with_uvl(0, VaryingLoad::triangular(20.0, 6.0, 10.0));
//!
//! let reactions = solve_reactions(&spec).unwrap();
//! let positions = linspace(spec.length, 500).unwrap();
//! let curve = evaluate(&spec, &reactions, &positions).unwrap();
//!
//! assert_eq!(curve.len(), 500);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam geometry and loading, validation
//! - [`loads`] - Load shapes and the load reducer
//! - [`calculations`] - Reactions, internal force sweep, sample grids
//! - [`equations`] - Closed-form reference formulas
//! - [`settings`] - Analysis settings (TOML)
//! - [`report`] - JSON analysis report
//! - [`errors`] - Structured error types

pub mod beam;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod report;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use beam::BeamSpec;
pub use calculations::{calculate, evaluate, solve_reactions, AnalysisResults, InternalForceCurve, Reactions};
pub use errors::{BeamError, BeamResult};
pub use settings::AnalysisSettings;
