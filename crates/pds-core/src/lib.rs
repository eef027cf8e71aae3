#![deny(missing_docs)]
#![doc = "Core types, errors, and deterministic randomness shared by the pds sampler crates."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, PdsError};
pub use rng::{derive_substream_seed, RngHandle, ScriptedSource, UnitSource};

/// A point in the sampled region: one coordinate per configured axis.
///
/// Points produced by the sampler always carry exactly `dimensions`
/// coordinates, each inside its axis bounds. Manually injected points are
/// only shape-checked.
pub type Point = Vec<f64>;
