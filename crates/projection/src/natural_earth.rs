use foundation::geo::{PlanarPoint, wrap_longitude};

use crate::Projection;
use crate::transform::CanvasTransform;

/// Natural Earth I, the Savric polynomial pseudocylindrical.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NaturalEarth {
    transform: CanvasTransform,
}

fn raw(lon_deg: f64, lat_deg: f64) -> Option<(f64, f64)> {
    let lambda = lon_deg.to_radians();
    let phi = lat_deg.to_radians();
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    Some((
        lambda
            * (0.8707 - 0.131979 * phi2
                + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4))),
        phi * (1.007226
            + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4))),
    ))
}

impl NaturalEarth {
    pub fn fitted(width: f64, height: f64) -> Self {
        Self {
            transform: CanvasTransform::fit(raw, width, height),
        }
    }
}

impl Projection for NaturalEarth {
    fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<PlanarPoint> {
        let (x, y) = raw(wrap_longitude(lon_deg), lat_deg)?;
        Some(self.transform.apply(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::NaturalEarth;
    use crate::Projection;

    #[test]
    fn parallels_shorten_toward_the_poles() {
        let proj = NaturalEarth::fitted(600.0, 600.0);
        let width_at = |lat: f64| {
            let w = proj.project(-179.0, lat).unwrap();
            let e = proj.project(179.0, lat).unwrap();
            e.x - w.x
        };
        assert!(width_at(60.0) < width_at(0.0));
        assert!(width_at(85.0) < width_at(60.0));
    }

    #[test]
    fn projection_is_defined_everywhere() {
        let proj = NaturalEarth::fitted(600.0, 600.0);
        for lat in [-90.0, -45.0, 0.0, 45.0, 90.0] {
            for lon in [-180.0, -90.0, 0.0, 90.0, 179.0] {
                assert!(proj.project(lon, lat).is_some(), "({lon}, {lat})");
            }
        }
    }
}
