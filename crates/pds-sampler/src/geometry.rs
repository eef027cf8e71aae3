//! Distance evaluation for candidate acceptance.
//!
//! All helpers take the resolved config so periodic flags and axis spans are
//! read from one place. They are exposed publicly for diagnostics and for
//! spot-checking the metric in tests.

use pds_core::Point;

use crate::config::ResolvedConfig;

/// Per-axis separation under optional wraparound.
///
/// For a periodic axis the two interval edges are glued together, so the
/// contribution is the shorter of the direct difference and the path through
/// the seam: `min(|delta|, span - |delta|)`.
pub fn axis_separation(delta: f64, span: f64, periodic: bool) -> f64 {
    let direct = delta.abs();
    if periodic {
        direct.min(span - direct)
    } else {
        direct
    }
}

/// Distance between two points of equal arity under the configured metric.
pub fn distance_between(a: &[f64], b: &[f64], config: &ResolvedConfig) -> f64 {
    let mut sum = 0.0;
    for (axis, (pa, pb)) in a.iter().zip(b.iter()).enumerate() {
        let separation = axis_separation(
            pa - pb,
            config.axes[axis].span(),
            config.periodic[axis],
        );
        sum += separation * separation;
    }
    sum.sqrt()
}

/// Minimum distance from `candidate` to any accepted point.
///
/// Defined as positive infinity for an empty collection, so the very first
/// candidate of a run is always accepted on its first try.
pub fn nearest_neighbor_distance(
    candidate: &[f64],
    points: &[Point],
    config: &ResolvedConfig,
) -> f64 {
    points
        .iter()
        .map(|point| distance_between(candidate, point, config))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `candidate` to the closest extent edge, minimized over all
/// axes.
pub fn boundary_distance(candidate: &[f64], config: &ResolvedConfig) -> f64 {
    candidate
        .iter()
        .zip(config.axes.iter())
        .map(|(coordinate, axis)| (coordinate - axis.lower).min(axis.upper - coordinate))
        .fold(f64::INFINITY, f64::min)
}

/// Effective acceptance distance of a candidate.
///
/// With boundary repulsion off this is the nearest-neighbor distance. With
/// it on, the boundary distance enters doubled: comparing `2 * boundary`
/// against the same radius threshold as the neighbor check enforces a
/// `radius / 2` clearance from every edge. The factor is part of the
/// observable output contract and must not be rederived.
pub fn effective_distance(candidate: &[f64], points: &[Point], config: &ResolvedConfig) -> f64 {
    let neighbor = nearest_neighbor_distance(candidate, points, config);
    if config.repulsive_boundary {
        neighbor.min(2.0 * boundary_distance(candidate, config))
    } else {
        neighbor
    }
}
