#![deny(missing_docs)]
#![doc = include_str!("../docs/sampler-api.md")]

//! Deterministic Poisson-disk-like point sampler for bounded n-dimensional
//! regions.

/// Caller-facing configuration schema, validation, and the radius heuristic.
pub mod config;
/// Deterministic seed derivation helpers for sampler batches.
pub mod determinism;
/// Distance evaluation under optional periodicity and boundary repulsion.
pub mod geometry;
/// The candidate-acceptance kernel and its public entry points.
pub mod sampler;

pub use config::{AxisBounds, ExtentSpec, Periodicity, ResolvedConfig, SamplerConfig};
pub use determinism::sampler_seed;
pub use geometry::{
    axis_separation, boundary_distance, distance_between, effective_distance,
    nearest_neighbor_distance,
};
pub use sampler::{DefaultSampler, Sampler};
