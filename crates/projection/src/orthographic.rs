use foundation::geo::{PlanarPoint, wrap_longitude};

use crate::Projection;
use crate::transform::CanvasTransform;

/// Orthographic view centered on (0, 0). The far hemisphere is invisible and
/// projects to `None`, which is what exercises the estimator's one-sided
/// differencing near the horizon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orthographic {
    transform: CanvasTransform,
}

fn raw(lon_deg: f64, lat_deg: f64) -> Option<(f64, f64)> {
    let lambda = lon_deg.to_radians();
    let phi = lat_deg.to_radians();
    // cos(c): angular distance from the projection center.
    if phi.cos() * lambda.cos() < 0.0 {
        return None;
    }
    Some((phi.cos() * lambda.sin(), phi.sin()))
}

impl Orthographic {
    pub fn fitted(width: f64, height: f64) -> Self {
        Self {
            transform: CanvasTransform::fit(raw, width, height),
        }
    }
}

impl Projection for Orthographic {
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint> {
        let (x, y) = raw(wrap_longitude(lon_deg), lat_deg)?;
        Some(self.transform.apply(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::Orthographic;
    use crate::Projection;

    #[test]
    fn far_hemisphere_is_clipped() {
        let proj = Orthographic::fitted(600.0, 600.0);
        assert!(proj.project(150.0, 0.0).is_none());
        assert!(proj.project(-120.0, 10.0).is_none());
        assert!(proj.project(45.0, 45.0).is_some());
    }

    #[test]
    fn horizon_compresses_the_east_west_direction() {
        let proj = Orthographic::fitted(600.0, 600.0);
        let x = |lon: f64| proj.project(lon, 0.0).unwrap().x;
        let near_center = x(10.0) - x(0.0);
        let near_horizon = x(89.0) - x(79.0);
        assert!(near_horizon < near_center / 2.0);
    }

    #[test]
    fn poles_sit_on_the_vertical_axis() {
        let proj = Orthographic::fitted(600.0, 600.0);
        let north = proj.project(0.0, 90.0).unwrap();
        let south = proj.project(0.0, -90.0).unwrap();
        assert!((north.x - south.x).abs() < 1e-9);
        assert!(north.y < south.y);
    }
}
