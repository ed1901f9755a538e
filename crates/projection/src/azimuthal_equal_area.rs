use foundation::geo::{PlanarPoint, wrap_longitude};

use crate::Projection;
use crate::transform::CanvasTransform;

/// Lambert azimuthal equal-area, centered on (0, 0). Undefined only at the
/// exact antipode, where the scaling term blows up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AzimuthalEqualArea {
    transform: CanvasTransform,
}

const ANTIPODE_EPS: f64 = 1e-12;

fn raw(lon_deg: f64, lat_deg: f64) -> Option<(f64, f64)> {
    let lambda = lon_deg.to_radians();
    let phi = lat_deg.to_radians();
    let c = 1.0 + phi.cos() * lambda.cos();
    if c < ANTIPODE_EPS {
        return None;
    }
    let k = (2.0 / c).sqrt();
    Some((k * phi.cos() * lambda.sin(), k * phi.sin()))
}

impl AzimuthalEqualArea {
    pub fn fitted(width: f64, height: f64) -> Self {
        Self {
            transform: CanvasTransform::fit(raw, width, height),
        }
    }
}

impl Projection for AzimuthalEqualArea {
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint> {
        let (x, y) = raw(wrap_longitude(lon_deg), lat_deg)?;
        Some(self.transform.apply(x, y))
    }
}
