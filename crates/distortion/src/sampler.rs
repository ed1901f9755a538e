use foundation::geo::GeoPoint;
use projection::Projection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::tunables::Tunables;
use crate::types::{IndicatrixDescriptor, SkipReason};
use crate::{eigen, guard, jacobian, metric};

/// Grid spacing plus the renderer-facing base radius.
///
/// The latitude band stays inside +-80 degrees: the strip beyond is
/// guaranteed pole-unstable, so sampling it would only produce skips.
/// Longitude covers [-180, 180).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Angular spacing between samples, degrees. At least 1; use
    /// [`GridConfig::new`] to get the validation.
    pub spacing_deg: u32,
    /// Multiplier a renderer applies to the stretch scales to get pixel
    /// radii. Not consumed by the sampler itself.
    pub base_radius: f64,
}

impl GridConfig {
    pub const LAT_LIMIT_DEG: i32 = 80;
    pub const LON_LIMIT_DEG: i32 = 180;

    pub fn new(spacing_deg: u32) -> Result<Self, InvalidGridSpacing> {
        if spacing_deg == 0 {
            return Err(InvalidGridSpacing(spacing_deg));
        }
        Ok(Self {
            spacing_deg,
            base_radius: 3.0,
        })
    }

    /// Number of points the grid enumerates (accepted or not).
    pub fn grid_points(&self) -> usize {
        let s = self.spacing_deg as i32;
        let rows = 2 * Self::LAT_LIMIT_DEG / s + 1;
        let cols = (2 * Self::LON_LIMIT_DEG + s - 1) / s;
        (rows * cols) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGridSpacing(pub u32);

impl std::fmt::Display for InvalidGridSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "grid spacing must be at least 1 degree, got {}", self.0)
    }
}

impl std::error::Error for InvalidGridSpacing {}

/// Run the full pipeline at a single point: differences, metric tensor,
/// eigen-decomposition, stability guard.
pub fn indicatrix_at<P>(
    proj: &P,
    point: GeoPoint,
    tun: &Tunables,
) -> Result<IndicatrixDescriptor, SkipReason>
where
    P: Projection + ?Sized,
{
    let frame = jacobian::estimate(proj, point, tun)?;
    let tensor = metric::metric_tensor(frame.jacobian, frame.cos_lat);
    let stretches = eigen::principal_stretches(tensor, tun)?;
    if !guard::admit(&stretches, tun) {
        return Err(SkipReason::OutOfRange);
    }
    debug_assert!(stretches.major_scale >= stretches.minor_scale);

    Ok(IndicatrixDescriptor {
        center: frame.center,
        major_scale: stretches.major_scale,
        minor_scale: stretches.minor_scale,
        angle_deg: stretches.angle_deg,
        source: point,
    })
}

/// Enumerate the grid row-major (latitude outer, longitude inner) and
/// collect the accepted descriptors.
///
/// Every failure kind is treated identically: the point is skipped and the
/// pass continues. Consumers learn about skips only through the length of
/// the result relative to [`GridConfig::grid_points`].
pub fn sample_grid<P>(proj: &P, config: &GridConfig, tun: &Tunables) -> Vec<IndicatrixDescriptor>
where
    P: Projection + ?Sized,
{
    let spacing = config.spacing_deg as usize;
    let mut out = Vec::new();
    let mut skipped = 0usize;

    for lat in (-GridConfig::LAT_LIMIT_DEG..=GridConfig::LAT_LIMIT_DEG).step_by(spacing) {
        for lon in (-GridConfig::LON_LIMIT_DEG..GridConfig::LON_LIMIT_DEG).step_by(spacing) {
            let point = GeoPoint::new(lon as f64, lat as f64);
            match indicatrix_at(proj, point, tun) {
                Ok(descriptor) => out.push(descriptor),
                Err(reason) => {
                    skipped += 1;
                    debug!(lon, lat, %reason, "sample skipped");
                }
            }
        }
    }

    info!(
        accepted = out.len(),
        skipped, "distortion grid pass complete"
    );
    out
}
