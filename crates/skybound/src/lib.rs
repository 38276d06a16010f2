//! Constellation boundary geometry.
//!
//! Turns the sparse IAU boundary vertex list (FK4, equinox B1875) into dense
//! polygons in ICRS, ready for a sky-map renderer.
//!
//! Stages
//! - `boundary::parse_boundaries`: raw text → per-constellation vertex lists.
//! - `boundary::densify_polygon`: edge subdivision with 0h/24h wraparound and
//!   gap detection for split constellations.
//! - `frame`: batch FK4 B1875 → ICRS transform, or identity when precession is
//!   unavailable.
//! - `pipeline`: orchestration, rounding, output assembly.
//!
//! API Policy
//! - Consumed by the `skybound` CLI in this workspace. There is no stable
//!   public API; breaking changes are fine when they improve the design.

pub mod boundary;
pub mod error;
pub mod frame;
pub mod pipeline;

pub use boundary::{BoundarySet, RawPolygon, Vertex};
pub use error::BoundaryError;
pub use frame::{FrameTransform, OutputFrame};
pub use pipeline::{BoundaryOutput, BoundaryPipeline, PipelineCfg};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supplier of the raw boundary definition text.
///
/// The pipeline reads the source exactly once per run. Caching, retries and
/// network access are the implementor's business.
pub trait BoundarySource {
    /// Short human-readable description used in logs and provenance.
    fn describe(&self) -> String;

    fn read_text(&self) -> Result<String, BoundaryError>;
}

/// In-memory source, mostly for tests and embedding.
impl BoundarySource for String {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read_text(&self) -> Result<String, BoundaryError> {
        Ok(self.clone())
    }
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{
        densify_polygon, densify_polygon_with_stats, normalize_ra, parse_boundaries,
        BoundarySet, DensifiedPolygon, DensifyCfg, DensifyStats, RawPolygon, Vertex,
    };
    pub use crate::frame::{
        select_transform, Fk4ToIcrs, FrameTransform, IdentityTransform, OutputFrame, Precession,
        TransformCfg,
    };
    pub use crate::pipeline::{BoundaryOutput, BoundaryPipeline, PipelineCfg, PolygonStats};
    pub use crate::{BoundaryError, BoundarySource};
}
