use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::num::NonZeroUsize;

fn cfg(steps: usize, gap_threshold_sq: f64) -> DensifyCfg {
    DensifyCfg {
        steps: NonZeroUsize::new(steps).unwrap(),
        gap_threshold_sq,
    }
}

fn v(ra: f64, dec: f64) -> Vertex {
    Vertex::new(ra, dec)
}

/// Distance between two RA values on the 24h circle.
fn ra_dist(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(24.0 - d)
}

#[test]
fn wraparound_takes_short_path_across_seam() {
    let ra2 = unwrap_ra(23.9, 0.1);
    assert!((ra2 - 23.9 - 0.2).abs() < 1e-12);
    let ra2 = unwrap_ra(0.1, 23.9);
    assert!((ra2 - 0.1 + 0.2).abs() < 1e-12);
    // Within 12h nothing moves.
    assert_eq!(unwrap_ra(3.0, 14.0), 14.0);
}

#[test]
fn seam_edge_interpolates_through_zero_hours() {
    let poly = vec![v(23.9, 0.0), v(0.1, 0.0)];
    let out = densify_polygon(&poly, &cfg(4, 100.0));
    assert_eq!(out.len(), 8);
    let expected = [23.9, 23.95, 0.0, 0.05];
    for (got, want) in out.iter().take(4).zip(expected) {
        assert!(ra_dist(got.ra, want) < 1e-9, "got {} want {}", got.ra, want);
    }
    // Return edge runs back across the seam.
    let expected = [0.1, 0.05, 0.0, 23.95];
    for (got, want) in out.iter().skip(4).zip(expected) {
        assert!(ra_dist(got.ra, want) < 1e-9, "got {} want {}", got.ra, want);
    }
}

#[test]
fn gap_edge_emits_only_start_vertex() {
    let poly = vec![v(0.0, 0.0), v(15.0, 0.0)];
    let (out, stats) = densify_polygon_with_stats(&poly, &cfg(10, 100.0));
    // Raw delta 15h wraps to -9h: 81 <= 100, so the edge stays continuous.
    assert_eq!(stats.gaps, 0);
    assert_eq!(out.len(), 20);

    // Dec difference keeps the squared distance above the threshold.
    let poly = vec![v(0.0, 0.0), v(1.0, 15.0)];
    let (out, stats) = densify_polygon_with_stats(&poly, &cfg(10, 100.0));
    assert_eq!(stats.edges, 2);
    assert_eq!(stats.gaps, 2);
    assert_eq!(out, vec![v(0.0, 0.0), v(1.0, 15.0)]);
}

#[test]
fn gap_detected_without_wraparound() {
    // 11h apart: no seam correction, 121 > 100 on both edges.
    let poly = vec![v(0.0, 0.0), v(11.0, 0.0)];
    let (out, stats) = densify_polygon_with_stats(&poly, &cfg(10, 100.0));
    assert_eq!(stats.gaps, 2);
    assert_eq!(out, vec![v(0.0, 0.0), v(11.0, 0.0)]);
}

#[test]
fn split_polygon_keeps_continuous_edges_dense() {
    // Two 1x1 patches far apart in declination (Serpens-like).
    let poly = vec![
        v(15.0, 0.0),
        v(15.5, 0.0),
        v(15.5, 1.0),
        v(18.0, -20.0),
        v(18.5, -20.0),
        v(18.5, -19.0),
    ];
    let (out, stats) = densify_polygon_with_stats(&poly, &cfg(5, 100.0));
    assert_eq!(stats.edges, 6);
    assert_eq!(stats.gaps, 2);
    assert_eq!(out.len(), 4 * 5 + 2);
}

#[test]
fn step_count_scales_per_edge() {
    for k in 1..=7 {
        let poly = vec![v(1.0, 1.0), v(1.5, 2.0)];
        let out = densify_polygon(&poly, &cfg(k, 100.0));
        assert_eq!(out.len(), 2 * k);
        assert_eq!(out[0], poly[0]);
        assert_eq!(out[k], poly[1]);
    }
}

#[test]
fn end_to_end_two_vertex_scenario() {
    let poly = vec![v(5.5, 10.0), v(5.6, 10.0)];
    let out = densify_polygon(&poly, &cfg(2, 100.0));
    let ras: Vec<f64> = out.iter().map(|p| p.ra).collect();
    let expected = [5.5, 5.55, 5.6, 5.55];
    assert_eq!(ras.len(), expected.len());
    for (got, want) in ras.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12);
    }
    assert!(out.iter().all(|p| (p.dec - 10.0).abs() < 1e-12));
}

#[test]
fn degenerate_polygons_do_not_panic() {
    let c = cfg(10, 100.0);
    assert!(densify_polygon(&[], &c).is_empty());
    let single = densify_polygon(&[v(-1.0, 45.0)], &c);
    assert_eq!(single, vec![v(23.0, 45.0); 10]);
}

#[test]
fn single_vertex_is_one_closed_edge() {
    let (out, stats) = densify_polygon_with_stats(&[v(5.5, 10.0)], &cfg(10, 100.0));
    assert_eq!(out.len(), 10);
    assert!(out.iter().all(|p| *p == v(5.5, 10.0)));
    assert_eq!(stats, DensifyStats { edges: 1, gaps: 0 });
}

#[test]
fn negative_and_large_input_ra_is_normalized() {
    let poly = vec![v(-0.5, 0.0), v(24.5, 0.0), v(0.25, 1.0)];
    let out = densify_polygon(&poly, &cfg(3, 100.0));
    assert!(out.iter().all(|p| (0.0..24.0).contains(&p.ra)));
}

#[test]
fn normalize_ra_folds_into_range() {
    assert_eq!(normalize_ra(0.0), 0.0);
    assert_eq!(normalize_ra(24.0), 0.0);
    assert!((normalize_ra(-0.25) - 23.75).abs() < 1e-12);
    assert!((normalize_ra(49.5) - 1.5).abs() < 1e-12);
    let tiny = normalize_ra(-1e-17);
    assert!((0.0..24.0).contains(&tiny));
}

#[test]
fn randomized_polygons_seeded() {
    let mut rng = StdRng::seed_from_u64(1875);
    let c = cfg(6, 100.0);
    for _ in 0..50 {
        let n = rng.gen_range(3..20);
        let poly: Vec<Vertex> = (0..n)
            .map(|_| v(rng.gen_range(0.0..24.0), rng.gen_range(-90.0..90.0)))
            .collect();
        let (out, stats) = densify_polygon_with_stats(&poly, &c);
        assert_eq!(stats.edges, n);
        assert_eq!(out.len(), (n - stats.gaps) * 6 + stats.gaps);
        assert!(out.iter().all(|p| (0.0..24.0).contains(&p.ra)));
    }
}

proptest! {
    #[test]
    fn prop_output_ra_in_range(
        pts in prop::collection::vec((-48.0f64..48.0, -90.0f64..90.0), 0..12),
        steps in 1usize..12,
        gap in 1.0f64..400.0,
    ) {
        let poly: Vec<Vertex> = pts.into_iter().map(|(ra, dec)| v(ra, dec)).collect();
        let out = densify_polygon(&poly, &cfg(steps, gap));
        for p in &out {
            prop_assert!(p.ra >= 0.0 && p.ra < 24.0);
        }
    }

    #[test]
    fn prop_count_matches_gap_stats(
        pts in prop::collection::vec((0.0f64..24.0, -90.0f64..90.0), 2..12),
        steps in 1usize..12,
    ) {
        let poly: Vec<Vertex> = pts.into_iter().map(|(ra, dec)| v(ra, dec)).collect();
        let (out, stats) = densify_polygon_with_stats(&poly, &cfg(steps, 100.0));
        prop_assert_eq!(stats.edges, poly.len());
        prop_assert_eq!(out.len(), (stats.edges - stats.gaps) * steps + stats.gaps);
    }
}
