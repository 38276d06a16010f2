//! Historical → modern frame transform.
//!
//! Purpose
//! - Re-express boundary vertices given in FK4 at equinox B1875 in ICRS.
//!
//! Why this design (short)
//! - The strategy is a trait object chosen once by `select_transform`, so the
//!   pipeline never checks a capability flag per polygon.
//! - Polygons run as one batch each; the rotation chain is a single
//!   precomputed `Matrix3` applied to a `3×N` matrix.
//!
//! Accuracy
//! - `Fk4ToIcrs` follows the standard FK4 → FK5 → ICRS chain (E-terms, Newcomb
//!   precession to B1950, B1950 → J2000 with the FK4 rotation term, frame
//!   bias); agreement with reference implementations is sub-arcsecond.
//! - `IdentityTransform` returns historical-epoch values, off by up to a couple
//!   of degrees near the poles. Fine for a coarse sketch, not for science use.

mod cfg;
mod matrices;
mod transform;

pub use cfg::{Precession, TransformCfg, B1875};
pub use matrices::{eterms, fk4_b1950_to_fk5, fk5_to_icrs, precession_besselian};
pub use transform::{select_transform, Fk4ToIcrs, FrameTransform, IdentityTransform, OutputFrame};
