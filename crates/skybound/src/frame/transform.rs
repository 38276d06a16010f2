use nalgebra::{Matrix3, Matrix3xX, Vector3};

use super::cfg::{Precession, TransformCfg, B1950, DEG_PER_HOUR};
use super::matrices::{eterms, fk4_b1950_to_fk5, fk5_to_icrs, precession_besselian, remove_eterms};
use crate::boundary::{normalize_ra, Vertex};

/// Reference frame of the pipeline output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFrame {
    /// Coordinates left in FK4 at the given Besselian equinox (degraded).
    Fk4 { equinox: f64 },
    Icrs,
}

impl OutputFrame {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fk4 { .. })
    }

    pub fn label(&self) -> String {
        match self {
            Self::Fk4 { equinox } => format!("FK4 B{equinox}"),
            Self::Icrs => "ICRS".to_string(),
        }
    }
}

/// Batch coordinate transform from the historical frame.
///
/// Implementations are pure: output depends only on the batch, and the output
/// has the same length and order as the input.
pub trait FrameTransform: Send + Sync {
    fn transform_batch(&self, batch: &[Vertex]) -> Vec<Vertex>;

    fn output_frame(&self) -> OutputFrame;
}

/// Pass-through used when precession is unavailable.
#[derive(Clone, Copy, Debug)]
pub struct IdentityTransform {
    pub equinox: f64,
}

impl FrameTransform for IdentityTransform {
    fn transform_batch(&self, batch: &[Vertex]) -> Vec<Vertex> {
        batch.to_vec()
    }

    fn output_frame(&self) -> OutputFrame {
        OutputFrame::Fk4 {
            equinox: self.equinox,
        }
    }
}

/// FK4 (Besselian equinox, with E-terms) → ICRS.
///
/// The rotation part is folded into one matrix at construction; a batch is one
/// `3×N` product plus per-column E-term removal.
#[derive(Clone, Debug)]
pub struct Fk4ToIcrs {
    equinox: f64,
    eterms: Vector3<f64>,
    rotation: Matrix3<f64>,
}

impl Fk4ToIcrs {
    /// `None` when the equinox is not a finite epoch.
    pub fn new(equinox: f64) -> Option<Self> {
        if !equinox.is_finite() {
            return None;
        }
        // Observation epoch defaults to the equinox for catalog positions.
        let rotation =
            fk5_to_icrs() * fk4_b1950_to_fk5(equinox) * precession_besselian(equinox, B1950);
        Some(Self {
            equinox,
            eterms: eterms(equinox),
            rotation,
        })
    }

    pub fn equinox(&self) -> f64 {
        self.equinox
    }

    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }
}

impl FrameTransform for Fk4ToIcrs {
    fn transform_batch(&self, batch: &[Vertex]) -> Vec<Vertex> {
        if batch.is_empty() {
            return Vec::new();
        }
        let mut cols = Matrix3xX::<f64>::zeros(batch.len());
        for (mut col, v) in cols.column_iter_mut().zip(batch) {
            col.copy_from(&remove_eterms(to_unit(v), &self.eterms));
        }
        let rotated = self.rotation * cols;
        rotated
            .column_iter()
            .map(|c| from_unit(&Vector3::new(c[0], c[1], c[2])))
            .collect()
    }

    fn output_frame(&self) -> OutputFrame {
        OutputFrame::Icrs
    }
}

/// Pick the transform strategy once, at pipeline construction.
///
/// Falls back to `IdentityTransform` (with a single warning) when precession is
/// disabled or the configured equinox is unusable.
pub fn select_transform(cfg: &TransformCfg) -> Box<dyn FrameTransform> {
    let fallback = |reason: &str| -> Box<dyn FrameTransform> {
        tracing::warn!(
            equinox = cfg.equinox,
            reason,
            "precession unavailable; boundaries stay in the historical frame"
        );
        Box::new(IdentityTransform {
            equinox: cfg.equinox,
        })
    };
    match cfg.precession {
        Precession::Disabled => fallback("disabled by configuration"),
        Precession::Enabled => match Fk4ToIcrs::new(cfg.equinox) {
            Some(t) => Box::new(t) as Box<dyn FrameTransform>,
            None => fallback("equinox is not a finite epoch"),
        },
    }
}

#[inline]
fn to_unit(v: &Vertex) -> Vector3<f64> {
    let ra = (v.ra * DEG_PER_HOUR).to_radians();
    let dec = v.dec.to_radians();
    let (sd, cd) = dec.sin_cos();
    let (sa, ca) = ra.sin_cos();
    Vector3::new(cd * ca, cd * sa, sd)
}

#[inline]
fn from_unit(r: &Vector3<f64>) -> Vertex {
    let ra_h = r.y.atan2(r.x).to_degrees() / DEG_PER_HOUR;
    let dec = r.z.atan2(r.x.hypot(r.y)).to_degrees();
    Vertex::new(normalize_ra(ra_h), dec)
}
