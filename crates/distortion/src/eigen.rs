use crate::tunables::Tunables;
use crate::types::{MetricTensor, PrincipalStretches, SkipReason};

/// Closed-form eigen-decomposition of the symmetric 2x2 metric tensor.
///
/// Returns the square roots of the eigenvalues (the physical stretch
/// factors, major first) and the orientation of the major eigenvector in
/// canvas degrees. Fails when either eigenvalue is non-positive or the pair
/// is non-finite, which is what a singular or folded local mapping looks
/// like after differencing.
pub fn principal_stretches(
    m: MetricTensor,
    tun: &Tunables,
) -> Result<PrincipalStretches, SkipReason> {
    let trace = m.m11 + m.m22;
    let det = m.m11 * m.m22 - m.m12 * m.m12;
    let half_trace = trace / 2.0;
    // Roundoff can push the discriminant a hair negative; clamp it.
    let disc = (half_trace * half_trace - det).max(0.0);
    let root = disc.sqrt();

    let lambda_major = half_trace + root;
    let lambda_minor = half_trace - root;
    if !(lambda_major > 0.0 && lambda_minor > 0.0) || !(lambda_major + lambda_minor).is_finite() {
        return Err(SkipReason::NonPositiveDefinite);
    }

    let major_scale = lambda_major.sqrt();
    let minor_scale = lambda_minor.sqrt();

    // Eigenvector for the major eigenvalue from (M - lambda*I) v = 0. The
    // primary row degenerates when m12 == 0 and m11 == lambda (axis-aligned
    // stretch); the second row covers that case.
    let mut vx = m.m12;
    let mut vy = lambda_major - m.m11;
    if vx.abs() + vy.abs() < tun.eigenvector_floor {
        vx = lambda_major - m.m22;
        vy = m.m12;
    }
    let angle_deg = vy.atan2(vx).to_degrees();

    Ok(PrincipalStretches {
        major_scale,
        minor_scale,
        angle_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::principal_stretches;
    use crate::tunables::Tunables;
    use crate::types::{MetricTensor, SkipReason};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn axis_aligned_tensor_uses_the_fallback_eigenvector() {
        // m12 == 0 and m11 == lambda_major: the primary formula yields the
        // zero vector, the fallback yields the x axis.
        let m = MetricTensor {
            m11: 4.0,
            m12: 0.0,
            m22: 1.0,
        };
        let s = principal_stretches(m, &Tunables::default()).unwrap();
        assert_close(s.major_scale, 2.0, 1e-12);
        assert_close(s.minor_scale, 1.0, 1e-12);
        assert_close(s.angle_deg, 0.0, 1e-12);
    }

    #[test]
    fn rotated_tensor_reports_the_rotation() {
        // R(45deg) * diag(4, 1) * R(45deg)^T
        let m = MetricTensor {
            m11: 2.5,
            m12: 1.5,
            m22: 2.5,
        };
        let s = principal_stretches(m, &Tunables::default()).unwrap();
        assert_close(s.major_scale, 2.0, 1e-12);
        assert_close(s.minor_scale, 1.0, 1e-12);
        assert_close(s.angle_deg, 45.0, 1e-9);
    }

    #[test]
    fn vertical_major_axis_points_along_y() {
        let m = MetricTensor {
            m11: 1.0,
            m12: 0.0,
            m22: 9.0,
        };
        let s = principal_stretches(m, &Tunables::default()).unwrap();
        assert_close(s.major_scale, 3.0, 1e-12);
        assert_close(s.angle_deg, 90.0, 1e-9);
    }

    #[test]
    fn isotropic_tensor_is_conformal() {
        let m = MetricTensor {
            m11: 2.25,
            m12: 0.0,
            m22: 2.25,
        };
        let s = principal_stretches(m, &Tunables::default()).unwrap();
        assert_close(s.major_scale, 1.5, 1e-12);
        assert_close(s.minor_scale, 1.5, 1e-12);
    }

    #[test]
    fn singular_tensor_is_rejected() {
        // Rank one: det = 0, minor eigenvalue 0.
        let m = MetricTensor {
            m11: 1.0,
            m12: 1.0,
            m22: 1.0,
        };
        let err = principal_stretches(m, &Tunables::default());
        assert_eq!(err.unwrap_err(), SkipReason::NonPositiveDefinite);
    }

    #[test]
    fn non_finite_tensor_is_rejected() {
        let m = MetricTensor {
            m11: f64::NAN,
            m12: 0.0,
            m22: 1.0,
        };
        let err = principal_stretches(m, &Tunables::default());
        assert_eq!(err.unwrap_err(), SkipReason::NonPositiveDefinite);

        let m = MetricTensor {
            m11: f64::INFINITY,
            m12: 0.0,
            m22: 1.0,
        };
        let err = principal_stretches(m, &Tunables::default());
        assert_eq!(err.unwrap_err(), SkipReason::NonPositiveDefinite);
    }

    #[test]
    fn ordering_holds_across_a_spread_of_tensors() {
        let cases = [
            (1.0, 0.2, 1.0),
            (5.0, -2.0, 3.0),
            (0.01, 0.001, 0.02),
            (100.0, 49.0, 30.0),
        ];
        for (m11, m12, m22) in cases {
            let m = MetricTensor { m11, m12, m22 };
            let s = principal_stretches(m, &Tunables::default()).unwrap();
            assert!(
                s.major_scale >= s.minor_scale && s.minor_scale > 0.0,
                "ordering violated for ({m11}, {m12}, {m22})"
            );
        }
    }
}
