//! # Reference Equations
//!
//! Closed-form expressions for single loads on a simply-supported beam.
//! Superposing them gives an independent check on the sampled shear and
//! moment curves.
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward
//! - **Reactions**: Positive upward
//! - **Moment**: Positive sagging
//! - **Shear**: Positive when left side moves up relative to right

pub mod beam;

pub use beam::{
    partial_uniform_moment,
    partial_uniform_reactions,
    partial_uniform_shear,
    point_load_moment,
    point_load_reactions,
    point_load_shear,
    varying_load_moment,
    varying_load_reactions,
    varying_load_shear,
};
