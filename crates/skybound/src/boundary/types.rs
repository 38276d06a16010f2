//! Boundary data model and densification settings.
//!
//! - `Vertex`: one (RA hours, Dec degrees) pair; the frame is implied by the
//!   pipeline stage.
//! - `RawPolygon` / `DensifiedPolygon`: ordered, implicitly closed vertex lists.
//! - `BoundarySet`: polygons keyed by uppercase constellation code.
//! - `DensifyCfg`: step count and gap threshold.

use nalgebra::Vector2;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Full turn of right ascension, in hours.
pub const RA_WRAP_HOURS: f64 = 24.0;

/// Half turn; RA deltas beyond this take the short way across 0h/24h.
pub const RA_HALF_WRAP_HOURS: f64 = 12.0;

/// Point on the celestial sphere: RA in hours, Dec in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub ra: f64,
    pub dec: f64,
}

impl Vertex {
    #[inline]
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Planar (RA-hour, Dec-degree) coordinates, no angular weighting.
    #[inline]
    pub fn as_vec(&self) -> Vector2<f64> {
        Vector2::new(self.ra, self.dec)
    }

    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self { ra: v.x, dec: v.y }
    }

    /// Same vertex with RA folded into `[0, 24)`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            ra: normalize_ra(self.ra),
            dec: self.dec,
        }
    }

    #[inline]
    pub fn to_pair(self) -> [f64; 2] {
        [self.ra, self.dec]
    }
}

/// Vertices of one constellation as read from the source, in file order.
/// No closing vertex: the last point connects back to the first.
pub type RawPolygon = Vec<Vertex>;

/// Output of edge subdivision. Every RA lies in `[0, 24)`.
pub type DensifiedPolygon = Vec<Vertex>;

/// Polygons keyed by constellation code (e.g. `"ORI"`).
pub type BoundarySet<P> = BTreeMap<String, P>;

/// Fold an RA value into `[0, 24)`.
///
/// `rem_euclid` may return exactly 24 for tiny negative inputs; that case maps
/// to 0.
#[inline]
pub fn normalize_ra(ra: f64) -> f64 {
    let r = ra.rem_euclid(RA_WRAP_HOURS);
    if r >= RA_WRAP_HOURS {
        0.0
    } else {
        r
    }
}

/// Densification settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensifyCfg {
    /// Vertices emitted per continuous edge (start point included).
    pub steps: NonZeroUsize,
    /// Squared (RA-hour, Dec-degree) distance above which an edge is treated
    /// as a discontinuity and left uninterpolated.
    pub gap_threshold_sq: f64,
}

impl DensifyCfg {
    pub const DEFAULT_STEPS: usize = 10;
    pub const DEFAULT_GAP_THRESHOLD_SQ: f64 = 100.0;
}

impl Default for DensifyCfg {
    fn default() -> Self {
        Self {
            steps: NonZeroUsize::new(Self::DEFAULT_STEPS).unwrap_or(NonZeroUsize::MIN),
            gap_threshold_sq: Self::DEFAULT_GAP_THRESHOLD_SQ,
        }
    }
}

/// Per-polygon counters collected while densifying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DensifyStats {
    pub edges: usize,
    pub gaps: usize,
}
