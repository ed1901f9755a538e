use foundation::bounds::Aabb2;
use foundation::geo::PlanarPoint;

/// Uniform scale plus centering translation from raw projection space onto a
/// y-down canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl CanvasTransform {
    pub fn apply(&self, raw_x: f64, raw_y: f64) -> PlanarPoint {
        PlanarPoint::new(
            self.translate_x + self.scale * raw_x,
            // Raw projections put north up; the canvas puts y down.
            self.translate_y - self.scale * raw_y,
        )
    }

    /// Fit a raw projection to the canvas by bounding its image over a
    /// one-degree graticule, then scaling and centering that box.
    ///
    /// The graticule spans lon [-180, 180] and lat [-90, 90] inclusive;
    /// points the projection declines contribute nothing to the bounds.
    pub fn fit<F>(raw: F, width: f64, height: f64) -> CanvasTransform
    where
        F: Fn(f64, f64) -> Option<(f64, f64)>,
    {
        let mut bounds = Aabb2::empty();
        for lat in -90..=90 {
            for lon in -180..=180 {
                if let Some((x, y)) = raw(lon as f64, lat as f64) {
                    bounds.expand([x, -y]);
                }
            }
        }
        debug_assert!(bounds.is_valid(), "projection declined the whole graticule");

        let scale = (width / bounds.width()).min(height / bounds.height());
        // Bounds were accumulated in flipped (y-down) space, the same space
        // `apply` emits into.
        let [cx, cy] = bounds.center();
        CanvasTransform {
            scale,
            translate_x: width / 2.0 - scale * cx,
            translate_y: height / 2.0 - scale * cy,
        }
    }
}
