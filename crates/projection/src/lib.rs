//! Map projections and the adapter boundary the distortion pipeline samples.
//!
//! A projection here is a pure function from geographic degrees to canvas
//! units, returning `None` where the point falls outside the projection's
//! valid domain (e.g. the far hemisphere of an orthographic view). Callers
//! treat `None` as data, not as an error.

pub mod azimuthal_equal_area;
pub mod equirectangular;
pub mod mercator;
pub mod natural_earth;
pub mod orthographic;
pub mod transform;

use std::str::FromStr;

use foundation::geo::PlanarPoint;
use serde::{Deserialize, Serialize};

pub use azimuthal_equal_area::AzimuthalEqualArea;
pub use equirectangular::Equirectangular;
pub use mercator::Mercator;
pub use natural_earth::NaturalEarth;
pub use orthographic::Orthographic;
pub use transform::CanvasTransform;

/// The adapter contract: deterministic, side-effect-free, and allowed to
/// decline points outside its valid range.
pub trait Projection {
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint>;
}

/// Closures are adapters too; tests lean on this.
impl<F> Projection for F
where
    F: Fn(f64, f64) -> Option<PlanarPoint>,
{
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint> {
        self(lon_deg, lat_deg)
    }
}

/// The projections the viewer offers, selectable by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    Mercator,
    NaturalEarth,
    Orthographic,
    Equirectangular,
    AzimuthalEqualArea,
}

impl ProjectionKind {
    pub fn name(self) -> &'static str {
        match self {
            ProjectionKind::Mercator => "mercator",
            ProjectionKind::NaturalEarth => "natural",
            ProjectionKind::Orthographic => "orthographic",
            ProjectionKind::Equirectangular => "equirectangular",
            ProjectionKind::AzimuthalEqualArea => "azimuthal",
        }
    }

    /// Construct the projection fitted to a `width` x `height` canvas.
    pub fn build(self, width: f64, height: f64) -> Box<dyn Projection> {
        match self {
            ProjectionKind::Mercator => Box::new(Mercator::fitted(width, height)),
            ProjectionKind::NaturalEarth => Box::new(NaturalEarth::fitted(width, height)),
            ProjectionKind::Orthographic => Box::new(Orthographic::fitted(width, height)),
            ProjectionKind::Equirectangular => Box::new(Equirectangular::fitted(width, height)),
            ProjectionKind::AzimuthalEqualArea => {
                Box::new(AzimuthalEqualArea::fitted(width, height))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProjection(pub String);

impl std::fmt::Display for UnknownProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown projection {:?} (expected one of: mercator, natural, orthographic, equirectangular, azimuthal)",
            self.0
        )
    }
}

impl std::error::Error for UnknownProjection {}

impl FromStr for ProjectionKind {
    type Err = UnknownProjection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mercator" => Ok(ProjectionKind::Mercator),
            "natural" | "natural_earth" => Ok(ProjectionKind::NaturalEarth),
            "orthographic" => Ok(ProjectionKind::Orthographic),
            "equirectangular" => Ok(ProjectionKind::Equirectangular),
            "azimuthal" | "azimuthal_equal_area" => Ok(ProjectionKind::AzimuthalEqualArea),
            other => Err(UnknownProjection(other.to_string())),
        }
    }
}
