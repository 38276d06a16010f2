//! Edge subdivision for boundary polygons.
//!
//! Model
//! - Edges are cyclic over the raw polygon: vertex `i` connects to
//!   `(i + 1) % n`.
//! - Per edge, the end RA is shifted by ±24h when the raw delta exceeds 12h,
//!   so interpolation takes the short path across 0h/24h.
//! - Edges whose corrected endpoints are farther apart than the gap threshold
//!   (flat squared distance in hour/degree units) mark split constellations and
//!   contribute only their start vertex.
//! - Interpolation is half-open: `t = s / k` for `s in 0..k`; the end point is
//!   emitted as the start of the next edge.

use super::types::{
    DensifiedPolygon, DensifyCfg, DensifyStats, Vertex, RA_HALF_WRAP_HOURS, RA_WRAP_HOURS,
};

/// End RA of an edge, shifted by ±24h so that `result - ra1` lies in
/// `[-12, 12]` whenever the inputs are in `[0, 24)`.
#[inline]
pub fn unwrap_ra(ra1: f64, ra2: f64) -> f64 {
    let d = ra2 - ra1;
    if d > RA_HALF_WRAP_HOURS {
        ra2 - RA_WRAP_HOURS
    } else if d < -RA_HALF_WRAP_HOURS {
        ra2 + RA_WRAP_HOURS
    } else {
        ra2
    }
}

/// Densify one polygon. See module docs for the edge rules.
pub fn densify_polygon(points: &[Vertex], cfg: &DensifyCfg) -> DensifiedPolygon {
    densify_polygon_with_stats(points, cfg).0
}

/// As `densify_polygon`, also reporting edge and gap counts.
///
/// An empty polygon yields nothing. A single vertex is one zero-length edge
/// back to itself, so it yields `k` copies of the normalized vertex.
pub fn densify_polygon_with_stats(
    points: &[Vertex],
    cfg: &DensifyCfg,
) -> (DensifiedPolygon, DensifyStats) {
    let n = points.len();
    let mut stats = DensifyStats::default();
    if n == 0 {
        return (Vec::new(), stats);
    }
    let k = cfg.steps.get();
    let mut out = Vec::with_capacity(n * k);
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        stats.edges += 1;

        let start = p1.as_vec();
        let end = Vertex::new(unwrap_ra(p1.ra, p2.ra), p2.dec).as_vec();
        if (end - start).norm_squared() > cfg.gap_threshold_sq {
            stats.gaps += 1;
            out.push(p1.normalized());
            continue;
        }

        for s in 0..k {
            let t = s as f64 / k as f64;
            out.push(Vertex::from_vec(start.lerp(&end, t)).normalized());
        }
    }
    (out, stats)
}
