//! Boundary parsing and densification (historical frame).
//!
//! - `types`: `Vertex`, polygon aliases, `DensifyCfg`.
//! - `parse`: tolerant line parser for the CDS `constbnd.dat` layout.
//! - `densify`: cyclic edge subdivision with wraparound and gap handling.

mod densify;
mod parse;
mod types;

pub use densify::{densify_polygon, densify_polygon_with_stats, unwrap_ra};
pub use parse::parse_boundaries;
pub use types::{
    normalize_ra, BoundarySet, DensifiedPolygon, DensifyCfg, DensifyStats, RawPolygon, Vertex,
    RA_HALF_WRAP_HOURS, RA_WRAP_HOURS,
};

#[cfg(test)]
mod tests;
