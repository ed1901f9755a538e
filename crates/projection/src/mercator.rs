use std::f64::consts::FRAC_PI_4;

use foundation::geo::{PlanarPoint, wrap_longitude};

use crate::Projection;
use crate::transform::CanvasTransform;

/// Spherical Mercator. The poles map to infinity, so the formula declines
/// any latitude where it stops being finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mercator {
    transform: CanvasTransform,
}

fn raw(lon_deg: f64, lat_deg: f64) -> Option<(f64, f64)> {
    let phi = lat_deg.to_radians();
    let y = (FRAC_PI_4 + phi / 2.0).tan().ln();
    if !y.is_finite() {
        return None;
    }
    Some((lon_deg.to_radians(), y))
}

impl Mercator {
    pub fn fitted(width: f64, height: f64) -> Self {
        Self {
            transform: CanvasTransform::fit(raw, width, height),
        }
    }
}

impl Projection for Mercator {
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint> {
        let (x, y) = raw(wrap_longitude(lon_deg), lat_deg)?;
        Some(self.transform.apply(x, y))
    }
}
