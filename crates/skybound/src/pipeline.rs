//! Boundary pipeline: densify → transform → round, per constellation.
//!
//! Constellations share no state, so `PipelineCfg::parallel` spreads them over
//! the rayon pool; results are keyed by code and identical either way.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::boundary::{
    densify_polygon_with_stats, normalize_ra, parse_boundaries, BoundarySet, DensifyCfg,
    RawPolygon, Vertex,
};
use crate::error::BoundaryError;
use crate::frame::{select_transform, FrameTransform, OutputFrame, TransformCfg};
use crate::BoundarySource;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineCfg {
    pub densify: DensifyCfg,
    pub transform: TransformCfg,
    /// Decimal places kept in the output.
    pub decimals: u32,
    pub parallel: bool,
}

impl Default for PipelineCfg {
    fn default() -> Self {
        Self {
            densify: DensifyCfg::default(),
            transform: TransformCfg::default(),
            decimals: 5,
            parallel: false,
        }
    }
}

impl PipelineCfg {
    pub fn validate(&self) -> Result<(), BoundaryError> {
        let gap = self.densify.gap_threshold_sq;
        if !(gap.is_finite() && gap > 0.0) {
            return Err(BoundaryError::invalid(format!(
                "gap threshold must be a positive finite number, got {gap}"
            )));
        }
        // Past 15 places f64 rounding stops being meaningful.
        if self.decimals > 15 {
            return Err(BoundaryError::invalid(format!(
                "at most 15 decimals are supported, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

/// Counters for one constellation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolygonStats {
    pub raw_vertices: usize,
    pub dense_vertices: usize,
    pub gaps: usize,
}

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryOutput {
    /// `code → [[ra_hours, dec_degrees], ...]`, rounded, RA in `[0, 24)`.
    pub polygons: BTreeMap<String, Vec<[f64; 2]>>,
    pub stats: BTreeMap<String, PolygonStats>,
    pub frame: OutputFrame,
}

impl BoundaryOutput {
    pub fn total_vertices(&self) -> usize {
        self.polygons.values().map(Vec::len).sum()
    }
}

/// Configured pipeline; the transform strategy is fixed at construction.
pub struct BoundaryPipeline {
    cfg: PipelineCfg,
    transform: Box<dyn FrameTransform>,
}

impl BoundaryPipeline {
    pub fn new(cfg: PipelineCfg) -> Result<Self, BoundaryError> {
        cfg.validate()?;
        let transform = select_transform(&cfg.transform);
        Ok(Self { cfg, transform })
    }

    /// Use a caller-provided transform instead of `select_transform`.
    pub fn with_transform(
        cfg: PipelineCfg,
        transform: Box<dyn FrameTransform>,
    ) -> Result<Self, BoundaryError> {
        cfg.validate()?;
        Ok(Self { cfg, transform })
    }

    pub fn cfg(&self) -> &PipelineCfg {
        &self.cfg
    }

    pub fn output_frame(&self) -> OutputFrame {
        self.transform.output_frame()
    }

    /// Read the source once, parse, and run.
    pub fn run_source(&self, source: &dyn BoundarySource) -> Result<BoundaryOutput, BoundaryError> {
        tracing::info!(source = %source.describe(), "reading boundary data");
        let text = source.read_text()?;
        let raw = parse_boundaries(&text);
        Ok(self.run(&raw))
    }

    pub fn run(&self, raw: &BoundarySet<RawPolygon>) -> BoundaryOutput {
        let processed: Vec<(String, Vec<[f64; 2]>, PolygonStats)> = if self.cfg.parallel {
            raw.par_iter()
                .map(|(code, poly)| self.process(code, poly))
                .collect()
        } else {
            raw.iter()
                .map(|(code, poly)| self.process(code, poly))
                .collect()
        };

        let mut polygons = BTreeMap::new();
        let mut stats = BTreeMap::new();
        for (code, points, st) in processed {
            stats.insert(code.clone(), st);
            polygons.insert(code, points);
        }
        let out = BoundaryOutput {
            polygons,
            stats,
            frame: self.transform.output_frame(),
        };
        tracing::info!(
            polygons = out.polygons.len(),
            vertices = out.total_vertices(),
            frame = %out.frame.label(),
            "generated boundary polygons"
        );
        out
    }

    fn process(&self, code: &str, poly: &[Vertex]) -> (String, Vec<[f64; 2]>, PolygonStats) {
        let (dense, dstats) = densify_polygon_with_stats(poly, &self.cfg.densify);
        let moved = self.transform.transform_batch(&dense);
        debug_assert_eq!(moved.len(), dense.len());
        if dstats.gaps > 0 {
            tracing::debug!(code, gaps = dstats.gaps, "discontinuous boundary");
        }
        let stats = PolygonStats {
            raw_vertices: poly.len(),
            dense_vertices: moved.len(),
            gaps: dstats.gaps,
        };
        (code.to_string(), round_vertices(&moved, self.cfg.decimals), stats)
    }
}

/// Round to `decimals` places and emit `[ra, dec]` pairs.
///
/// Rounding is decided on the exact binary value (decimal formatting), not on
/// `x * 10^d`, so `23.123455` (stored just below the tie) becomes `23.12345`.
/// RA is folded again after rounding so that e.g. 23.999999 never surfaces as
/// 24.0.
pub fn round_vertices(points: &[Vertex], decimals: u32) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| {
            [
                normalize_ra(round_decimal(p.ra, decimals)),
                round_decimal(p.dec, decimals),
            ]
        })
        .collect()
}

#[inline]
fn round_decimal(x: f64, decimals: u32) -> f64 {
    format!("{x:.prec$}", prec = decimals as usize)
        .parse()
        .unwrap_or(x)
}
