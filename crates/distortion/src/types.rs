use foundation::geo::{GeoPoint, PlanarPoint};
use serde::Serialize;

/// Partial derivatives of a projection at a point, canvas units per degree.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocalJacobian {
    pub dx_dlon: f64,
    pub dy_dlon: f64,
    pub dx_dlat: f64,
    pub dy_dlat: f64,
}

/// A Jacobian together with the context the later stages need: where the
/// sample landed on the canvas and the longitude-to-distance factor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocalFrame {
    pub center: PlanarPoint,
    pub cos_lat: f64,
    pub jacobian: LocalJacobian,
}

/// Symmetric 2x2 metric tensor (m21 == m12) of the physically-normalized
/// local linearization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MetricTensor {
    pub m11: f64,
    pub m12: f64,
    pub m22: f64,
}

/// Principal stretch factors (major >= minor) and the major-axis orientation
/// in canvas degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PrincipalStretches {
    pub major_scale: f64,
    pub minor_scale: f64,
    pub angle_deg: f64,
}

/// One accepted sample: the ellipse of distortion at `source`, ready for a
/// renderer to draw around `center`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct IndicatrixDescriptor {
    pub center: PlanarPoint,
    pub major_scale: f64,
    pub minor_scale: f64,
    pub angle_deg: f64,
    pub source: GeoPoint,
}

/// Why a sample produced no descriptor. Never fatal: the sampler drops the
/// point and moves on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The projection is undefined at the sample point itself.
    Undefined,
    /// Too close to a pole for longitude scaling to mean anything.
    PoleUnstable,
    /// Both finite-difference neighbors along one axis are undefined.
    InsufficientNeighbors,
    /// The metric tensor has a non-positive eigenvalue (folded or singular
    /// local mapping).
    NonPositiveDefinite,
    /// A stretch scale is non-finite or implausibly large.
    OutOfRange,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkipReason::Undefined => "undefined",
            SkipReason::PoleUnstable => "pole-unstable",
            SkipReason::InsufficientNeighbors => "insufficient-neighbors",
            SkipReason::NonPositiveDefinite => "non-positive-definite",
            SkipReason::OutOfRange => "out-of-range",
        };
        f.write_str(name)
    }
}
