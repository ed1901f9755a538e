use foundation::geo::GeoPoint;
use projection::Projection;

use crate::tunables::Tunables;
use crate::types::{LocalFrame, LocalJacobian, SkipReason};

/// Recover the local Jacobian of `proj` at `point` by finite differences.
///
/// Longitude differencing carries a seam guard: when the east and west
/// neighbors land implausibly far apart in x, the pair straddles a
/// projection discontinuity (typically the antimeridian) and a one-sided
/// difference through the center is used instead. Latitude has no
/// wraparound, so its differencing needs no such guard.
pub fn estimate<P>(proj: &P, point: GeoPoint, tun: &Tunables) -> Result<LocalFrame, SkipReason>
where
    P: Projection + ?Sized,
{
    let cos_lat = point.lat_deg.to_radians().cos();
    if !cos_lat.is_finite() || cos_lat.abs() < tun.cos_lat_floor {
        return Err(SkipReason::PoleUnstable);
    }

    // One-sided differences need the center value, so an undefined center
    // ends the sample here.
    let center = proj
        .project(point.lon_deg, point.lat_deg)
        .ok_or(SkipReason::Undefined)?;

    let delta = tun.delta_deg;
    let east = proj.project(point.lon_deg + delta, point.lat_deg);
    let west = proj.project(point.lon_deg - delta, point.lat_deg);
    let north = proj.project(point.lon_deg, point.lat_deg + delta);
    let south = proj.project(point.lon_deg, point.lat_deg - delta);

    let (dx_dlon, dy_dlon) = match (east, west) {
        (Some(e), Some(w)) if (e.x - w.x).abs() < tun.seam_jump_max => {
            ((e.x - w.x) / (2.0 * delta), (e.y - w.y) / (2.0 * delta))
        }
        // Both neighbors exist but straddle a seam, or only east exists.
        (Some(e), _) => ((e.x - center.x) / delta, (e.y - center.y) / delta),
        (None, Some(w)) => ((center.x - w.x) / delta, (center.y - w.y) / delta),
        (None, None) => return Err(SkipReason::InsufficientNeighbors),
    };

    let (dx_dlat, dy_dlat) = match (north, south) {
        (Some(n), Some(s)) => ((n.x - s.x) / (2.0 * delta), (n.y - s.y) / (2.0 * delta)),
        (Some(n), None) => ((n.x - center.x) / delta, (n.y - center.y) / delta),
        (None, Some(s)) => ((center.x - s.x) / delta, (center.y - s.y) / delta),
        (None, None) => return Err(SkipReason::InsufficientNeighbors),
    };

    Ok(LocalFrame {
        center,
        cos_lat,
        jacobian: LocalJacobian {
            dx_dlon,
            dy_dlon,
            dx_dlat,
            dy_dlat,
        },
    })
}
