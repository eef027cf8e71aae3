use std::f64::consts::FRAC_PI_4;

use pds_core::{ErrorInfo, PdsError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters describing a sampling run.
///
/// Only `n` is mandatory; every other field falls back to the documented
/// default. The config is a loose, caller-facing form: call
/// [`SamplerConfig::resolve`] to validate it and obtain the immutable
/// [`ResolvedConfig`] the sampler operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Target number of generated points.
    pub n: usize,
    /// Number of coordinates per point.
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
    /// Bounded region to sample, one `(lower, upper)` pair per axis.
    /// Defaults to `[-1, 1]` on every axis. One-dimensional callers may
    /// supply a flat `[lower, upper]` pair instead of a nested list.
    #[serde(default)]
    pub extent: Option<ExtentSpec>,
    /// Wraparound flags: a single boolean for all axes or one per axis.
    #[serde(default)]
    pub periodic: Periodicity,
    /// Candidates attempted per point before falling back to the best seen.
    #[serde(default = "default_tries")]
    pub tries: usize,
    /// When true, candidates are additionally penalized for proximity to
    /// the extent's edges.
    #[serde(default)]
    pub repulsive_boundary: bool,
}

fn default_dimensions() -> usize {
    2
}

fn default_tries() -> usize {
    30
}

impl SamplerConfig {
    /// Creates a config targeting `n` points with every default applied.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            dimensions: default_dimensions(),
            extent: None,
            periodic: Periodicity::default(),
            tries: default_tries(),
            repulsive_boundary: false,
        }
    }

    /// Parses a config from its YAML representation.
    pub fn from_yaml_str(input: &str) -> Result<Self, PdsError> {
        serde_yaml::from_str(input).map_err(|err| {
            PdsError::Serde(ErrorInfo::new("config-yaml-parse", err.to_string()))
        })
    }

    /// Validates the config and fixes every derived quantity, including the
    /// separation radius.
    pub fn resolve(&self) -> Result<ResolvedConfig, PdsError> {
        if self.n == 0 {
            return Err(PdsError::Config(
                ErrorInfo::new("zero-target", "target point count must be positive")
                    .with_hint("set n to the number of points to generate"),
            ));
        }
        if self.dimensions == 0 {
            return Err(PdsError::config(
                "zero-dimensions",
                "dimensionality must be at least 1",
            ));
        }
        if self.tries == 0 {
            return Err(PdsError::Config(
                ErrorInfo::new("zero-tries", "try budget must be positive")
                    .with_hint("the default budget is 30 candidates per point"),
            ));
        }

        let axes = self.resolve_axes()?;
        let periodic = self.periodic.resolve(self.dimensions)?;
        let radius = separation_radius(&axes, self.n, self.dimensions);

        Ok(ResolvedConfig {
            n: self.n,
            dimensions: self.dimensions,
            axes,
            periodic,
            tries: self.tries,
            repulsive_boundary: self.repulsive_boundary,
            radius,
        })
    }

    fn resolve_axes(&self) -> Result<Vec<AxisBounds>, PdsError> {
        let pairs: Vec<[f64; 2]> = match &self.extent {
            None => vec![[-1.0, 1.0]; self.dimensions],
            Some(ExtentSpec::Flat(pair)) => {
                if self.dimensions != 1 {
                    return Err(PdsError::Config(
                        ErrorInfo::new("flat-extent-arity", "flat extent is only valid in 1-D")
                            .with_context("dimensions", self.dimensions.to_string())
                            .with_hint("nest the pair: [[lower, upper], ...], one per axis"),
                    ));
                }
                vec![*pair]
            }
            Some(ExtentSpec::PerAxis(pairs)) => {
                if pairs.len() != self.dimensions {
                    return Err(PdsError::Config(
                        ErrorInfo::new("extent-arity", "extent must list one pair per axis")
                            .with_context("dimensions", self.dimensions.to_string())
                            .with_context("extent_len", pairs.len().to_string()),
                    ));
                }
                pairs.clone()
            }
        };

        let mut axes = Vec::with_capacity(pairs.len());
        for (axis, [lower, upper]) in pairs.into_iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(PdsError::Config(
                    ErrorInfo::new("non-finite-bound", "extent bounds must be finite")
                        .with_context("axis", axis.to_string())
                        .with_context("lower", lower.to_string())
                        .with_context("upper", upper.to_string()),
                ));
            }
            if upper <= lower {
                return Err(PdsError::Config(
                    ErrorInfo::new("degenerate-span", "extent upper bound must exceed the lower")
                        .with_context("axis", axis.to_string())
                        .with_context("lower", lower.to_string())
                        .with_context("upper", upper.to_string()),
                ));
            }
            axes.push(AxisBounds { lower, upper });
        }
        Ok(axes)
    }
}

/// Flexible extent form accepted from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtentSpec {
    /// One `[lower, upper]` pair per axis.
    PerAxis(Vec<[f64; 2]>),
    /// A single flat `[lower, upper]` pair, valid for 1-D configs only.
    Flat([f64; 2]),
}

/// Wraparound flags accepted from callers, resolved once at construction so
/// distance evaluation never re-branches on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Periodicity {
    /// The same flag applied to every axis.
    Uniform(bool),
    /// One flag per axis.
    PerAxis(Vec<bool>),
}

impl Default for Periodicity {
    fn default() -> Self {
        Periodicity::Uniform(false)
    }
}

impl Periodicity {
    fn resolve(&self, dimensions: usize) -> Result<Vec<bool>, PdsError> {
        match self {
            Periodicity::Uniform(flag) => Ok(vec![*flag; dimensions]),
            Periodicity::PerAxis(flags) => {
                if flags.len() != dimensions {
                    return Err(PdsError::Config(
                        ErrorInfo::new("periodic-arity", "periodic flags must match the axis count")
                            .with_context("dimensions", dimensions.to_string())
                            .with_context("periodic_len", flags.len().to_string()),
                    ));
                }
                Ok(flags.clone())
            }
        }
    }
}

/// Closed lower/upper bounds of a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Lower bound of the axis.
    pub lower: f64,
    /// Upper bound of the axis.
    pub upper: f64,
}

impl AxisBounds {
    /// Length of the axis interval.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the coordinate lies within the axis interval.
    pub fn contains(&self, coordinate: f64) -> bool {
        coordinate >= self.lower && coordinate <= self.upper
    }
}

/// Validated, immutable configuration the sampler operates on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Target number of generated points.
    pub n: usize,
    /// Number of coordinates per point.
    pub dimensions: usize,
    /// Per-axis bounds, normalized from the caller-facing extent form.
    pub axes: Vec<AxisBounds>,
    /// Per-axis wraparound flags.
    pub periodic: Vec<bool>,
    /// Candidates attempted per point.
    pub tries: usize,
    /// Whether edge proximity penalizes candidates.
    pub repulsive_boundary: bool,
    /// Minimum-separation radius derived from `n`, the region's measure,
    /// and the dimensionality.
    pub radius: f64,
}

impl ResolvedConfig {
    /// Measure of the sampled region: the product of axis spans.
    pub fn measure(&self) -> f64 {
        self.axes.iter().map(AxisBounds::span).product()
    }
}

/// Separation radius heuristic: `(π/4) · (V/n)^(1/d)`.
///
/// Approximates the spacing of `n` evenly packed points in a region of
/// measure `V`. The constant is tuned empirically for 1, 2, and 3
/// dimensions; no spacing-quality claim is made for d >= 4.
fn separation_radius(axes: &[AxisBounds], n: usize, dimensions: usize) -> f64 {
    let measure: f64 = axes.iter().map(AxisBounds::span).product();
    FRAC_PI_4 * (measure / n as f64).powf(1.0 / dimensions as f64)
}
