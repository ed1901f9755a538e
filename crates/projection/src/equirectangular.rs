use foundation::geo::{PlanarPoint, wrap_longitude};

use crate::Projection;
use crate::transform::CanvasTransform;

/// Plate carree: longitude and latitude straight onto the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Equirectangular {
    transform: CanvasTransform,
}

fn raw(lon_deg: f64, lat_deg: f64) -> Option<(f64, f64)> {
    Some((lon_deg.to_radians(), lat_deg.to_radians()))
}

impl Equirectangular {
    pub fn fitted(width: f64, height: f64) -> Self {
        Self {
            transform: CanvasTransform::fit(raw, width, height),
        }
    }
}

impl Projection for Equirectangular {
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint> {
        let (x, y) = raw(wrap_longitude(lon_deg), lat_deg)?;
        Some(self.transform.apply(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::Equirectangular;
    use crate::Projection;

    #[test]
    fn graticule_is_a_uniform_lattice() {
        let proj = Equirectangular::fitted(600.0, 600.0);
        let a = proj.project(0.0, 0.0).unwrap();
        let b = proj.project(30.0, 0.0).unwrap();
        let c = proj.project(60.0, 0.0).unwrap();
        let step1 = b.x - a.x;
        let step2 = c.x - b.x;
        assert!((step1 - step2).abs() < 1e-9);
        assert!(step1 > 0.0);
    }

    #[test]
    fn longitude_wraps_across_the_antimeridian() {
        let proj = Equirectangular::fitted(600.0, 600.0);
        let just_west = proj.project(-180.001, 0.0).unwrap();
        let east_side = proj.project(179.999, 0.0).unwrap();
        assert!((just_west.x - east_side.x).abs() < 1e-9);
    }
}
