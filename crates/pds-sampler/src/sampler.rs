use pds_core::{ErrorInfo, PdsError, Point, RngHandle, UnitSource};

use crate::config::{ResolvedConfig, SamplerConfig};
use crate::determinism;
use crate::geometry;

/// Sampler over the default deterministic RNG handle.
pub type DefaultSampler = Sampler<RngHandle>;

/// Generates `n` approximately evenly spaced points inside a bounded region.
///
/// Each generation step draws up to `tries` uniform candidates, accepts the
/// first whose effective distance strictly exceeds the derived radius, and
/// otherwise falls back to the best candidate seen, so every step makes
/// progress. Every distance check scans the full accepted collection; a
/// `fill` therefore costs `O(n² · tries)` evaluations. There is
/// intentionally no spatial index: one would change acceptance order and
/// with it the produced point set.
#[derive(Debug, Clone)]
pub struct Sampler<S: UnitSource> {
    config: ResolvedConfig,
    source: S,
    points: Vec<Point>,
}

impl<S: UnitSource> Sampler<S> {
    /// Creates a sampler from a caller-facing config and an injected source
    /// of uniform `[0, 1)` draws.
    pub fn new(config: &SamplerConfig, source: S) -> Result<Self, PdsError> {
        Ok(Self::from_resolved(config.resolve()?, source))
    }

    /// Creates a sampler from an already validated config.
    pub fn from_resolved(config: ResolvedConfig, source: S) -> Self {
        let points = Vec::with_capacity(config.n);
        Self {
            config,
            source,
            points,
        }
    }

    /// The validated configuration driving this sampler.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// The derived minimum-separation radius.
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    /// Read-only view of the accepted points, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns a mutable reference to the injected draw source for advanced
    /// usage (reseeding, inspecting scripted sources in tests).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Whether the target count has been reached (or exceeded through
    /// manual injection).
    pub fn is_complete(&self) -> bool {
        self.points.len() >= self.config.n
    }

    /// Generates and accepts the next point, or returns `None` once the
    /// target count is reached.
    ///
    /// Draws up to `tries` candidates. A candidate whose effective distance
    /// strictly exceeds the radius is accepted immediately; ties on the
    /// best-so-far candidate go to the earlier draw (strict `>`). The
    /// fallback acceptance guarantees the step never fails while points
    /// remain to be generated.
    pub fn next_point(&mut self) -> Option<Point> {
        if self.is_complete() {
            return None;
        }

        let mut best: Option<(Point, f64)> = None;
        for _ in 0..self.config.tries {
            let candidate = self.draw_candidate();
            let distance = geometry::effective_distance(&candidate, &self.points, &self.config);
            if distance > self.config.radius {
                self.points.push(candidate.clone());
                return Some(candidate);
            }
            let improved = match &best {
                Some((_, best_distance)) => distance > *best_distance,
                None => true,
            };
            if improved {
                best = Some((candidate, distance));
            }
        }

        // Budget exhausted: accept the best-effort candidate. `tries` is
        // validated positive, so `best` is always populated here.
        let (candidate, _) = best?;
        self.points.push(candidate.clone());
        Some(candidate)
    }

    /// Runs [`Sampler::next_point`] to completion and returns the full
    /// accepted collection.
    pub fn fill(&mut self) -> Vec<Point> {
        while self.next_point().is_some() {}
        self.points.clone()
    }

    /// Appends a caller-supplied point without any distance or bounds check.
    ///
    /// Only the coordinate count is validated. This is an escape hatch for
    /// seeding the sampler with externally constrained points; it can
    /// violate the minimum-separation property and can push the collection
    /// past `n`, after which [`Sampler::next_point`] reports completion.
    pub fn add_point(&mut self, point: Point) -> Result<(), PdsError> {
        if point.len() != self.config.dimensions {
            return Err(PdsError::Point(
                ErrorInfo::new("shape-mismatch", "point arity differs from sampler dimensions")
                    .with_context("dimensions", self.config.dimensions.to_string())
                    .with_context("point_len", point.len().to_string()),
            ));
        }
        self.points.push(point);
        Ok(())
    }

    /// One uniform candidate: a unit draw per axis, consumed in axis order,
    /// mapped onto the axis interval.
    fn draw_candidate(&mut self) -> Point {
        let source = &mut self.source;
        self.config
            .axes
            .iter()
            .map(|axis| axis.lower + source.next_unit() * axis.span())
            .collect()
    }
}

impl<S: UnitSource> Iterator for Sampler<S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.next_point()
    }
}

impl DefaultSampler {
    /// Creates a sampler whose draws come from the given deterministic seed.
    pub fn from_seed(config: &SamplerConfig, seed: u64) -> Result<Self, PdsError> {
        Self::new(config, RngHandle::from_seed(seed))
    }

    /// Creates the sampler at index `sampler_index` of a batch sharing one
    /// master seed, each with an independent substream.
    pub fn from_master_seed(
        config: &SamplerConfig,
        master_seed: u64,
        sampler_index: usize,
    ) -> Result<Self, PdsError> {
        Self::from_seed(config, determinism::sampler_seed(master_seed, sampler_index))
    }

    /// Creates a sampler seeded from operating-system entropy.
    pub fn from_entropy(config: &SamplerConfig) -> Result<Self, PdsError> {
        Self::new(config, RngHandle::from_entropy())
    }
}
