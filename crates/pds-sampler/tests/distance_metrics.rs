use pds_sampler::{
    axis_separation, boundary_distance, distance_between, effective_distance,
    nearest_neighbor_distance, ExtentSpec, Periodicity, ResolvedConfig, SamplerConfig,
};

fn unit_line(periodic: bool) -> ResolvedConfig {
    let mut config = SamplerConfig::new(4);
    config.dimensions = 1;
    config.extent = Some(ExtentSpec::Flat([0.0, 1.0]));
    config.periodic = Periodicity::Uniform(periodic);
    config.resolve().unwrap()
}

fn unit_square(repulsive: bool) -> ResolvedConfig {
    let mut config = SamplerConfig::new(4);
    config.extent = Some(ExtentSpec::PerAxis(vec![[0.0, 1.0], [0.0, 1.0]]));
    config.repulsive_boundary = repulsive;
    config.resolve().unwrap()
}

#[test]
fn direct_distance_on_the_unit_line() {
    let config = unit_line(false);
    let d = distance_between(&[0.1], &[0.9], &config);
    assert!((d - 0.8).abs() < 1e-12);
}

#[test]
fn periodic_distance_wraps_through_the_seam() {
    let config = unit_line(true);
    let d = distance_between(&[0.1], &[0.9], &config);
    assert!((d - 0.2).abs() < 1e-12);
}

#[test]
fn axis_separation_prefers_the_shorter_path() {
    assert_eq!(axis_separation(0.8, 1.0, false), 0.8);
    assert!((axis_separation(0.8, 1.0, true) - 0.2).abs() < 1e-12);
    assert!((axis_separation(-0.8, 1.0, true) - 0.2).abs() < 1e-12);
    assert_eq!(axis_separation(0.3, 1.0, true), 0.3);
}

#[test]
fn periodicity_is_independent_per_axis() {
    let mut config = SamplerConfig::new(4);
    config.extent = Some(ExtentSpec::PerAxis(vec![[0.0, 1.0], [0.0, 1.0]]));
    config.periodic = Periodicity::PerAxis(vec![true, false]);
    let resolved = config.resolve().unwrap();

    // Axis 0 wraps (0.2), axis 1 does not (0.8).
    let d = distance_between(&[0.1, 0.1], &[0.9, 0.9], &resolved);
    let expected = (0.2f64 * 0.2 + 0.8 * 0.8).sqrt();
    assert!((d - expected).abs() < 1e-12);
}

#[test]
fn nearest_neighbor_of_empty_collection_is_infinite() {
    let config = unit_square(false);
    assert_eq!(
        nearest_neighbor_distance(&[0.5, 0.5], &[], &config),
        f64::INFINITY
    );
}

#[test]
fn nearest_neighbor_takes_the_minimum_over_points() {
    let config = unit_square(false);
    let points = vec![vec![0.0, 0.0], vec![0.5, 0.4]];
    let d = nearest_neighbor_distance(&[0.5, 0.5], &points, &config);
    assert!((d - 0.1).abs() < 1e-12);
}

#[test]
fn boundary_distance_picks_the_nearest_edge() {
    let config = unit_square(true);
    assert!((boundary_distance(&[0.3, 0.9], &config) - 0.1).abs() < 1e-12);
    assert!((boundary_distance(&[0.5, 0.5], &config) - 0.5).abs() < 1e-12);
}

#[test]
fn effective_distance_doubles_the_edge_clearance() {
    let config = unit_square(true);
    // Empty collection: only the boundary term applies, doubled.
    let d = effective_distance(&[0.1, 0.5], &[], &config);
    assert!((d - 0.2).abs() < 1e-12);

    // A close neighbor dominates the boundary term.
    let points = vec![vec![0.1, 0.55]];
    let d = effective_distance(&[0.1, 0.5], &points, &config);
    assert!((d - 0.05).abs() < 1e-12);
}

#[test]
fn effective_distance_ignores_edges_when_repulsion_is_off() {
    let config = unit_square(false);
    assert_eq!(effective_distance(&[0.01, 0.5], &[], &config), f64::INFINITY);
}
