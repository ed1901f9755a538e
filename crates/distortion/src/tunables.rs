/// Numerical thresholds for the estimator pipeline.
///
/// The defaults are calibrated against a 600-unit canvas. `seam_jump_max`
/// in particular is a canvas-space length, so prefer
/// [`Tunables::for_canvas_width`] whenever the canvas size is known.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tunables {
    /// Finite-difference step in degrees (~100 m at the equator).
    pub delta_deg: f64,
    /// Samples whose |cos(lat)| falls below this are inside the pole band
    /// where longitude scaling is unstable.
    pub cos_lat_floor: f64,
    /// Largest believable x-distance between the east and west neighbors.
    /// Anything larger means the pair straddles a projection seam.
    pub seam_jump_max: f64,
    /// Upper bound on an admissible stretch scale.
    pub scale_ceiling: f64,
    /// Below this, the primary eigenvector formula is degenerate and the
    /// fallback form is used.
    pub eigenvector_floor: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            delta_deg: 1e-3,
            cos_lat_floor: 1e-3,
            seam_jump_max: 3000.0,
            scale_ceiling: 10_000.0,
            eigenvector_floor: 1e-12,
        }
    }
}

impl Tunables {
    /// Thresholds scaled to a canvas of the given width. A legitimate
    /// east/west neighbor pair sits a fraction of a degree apart; any x-jump
    /// wider than half the canvas is a seam crossing, not a derivative.
    pub fn for_canvas_width(width: f64) -> Self {
        Self {
            seam_jump_max: width / 2.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tunables;

    #[test]
    fn canvas_width_drives_the_seam_threshold() {
        let tun = Tunables::for_canvas_width(600.0);
        assert_eq!(tun.seam_jump_max, 300.0);
        assert_eq!(tun.delta_deg, Tunables::default().delta_deg);
        assert_eq!(tun.scale_ceiling, Tunables::default().scale_ceiling);
    }
}
