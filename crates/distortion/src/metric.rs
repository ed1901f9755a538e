use crate::types::{LocalJacobian, MetricTensor};

/// Build the metric tensor `M = A * A^T` from a Jacobian whose longitude
/// partials have been rescaled to equal physical distance.
///
/// A degree of longitude spans `cos(lat)` times less ground than a degree of
/// latitude, so the longitude column is divided by `cos_lat` first; `M` then
/// measures the squared length of the image of a unit physical displacement.
pub fn metric_tensor(jac: LocalJacobian, cos_lat: f64) -> MetricTensor {
    let a11 = jac.dx_dlon / cos_lat;
    let a12 = jac.dx_dlat;
    let a21 = jac.dy_dlon / cos_lat;
    let a22 = jac.dy_dlat;

    MetricTensor {
        m11: a11 * a11 + a12 * a12,
        m12: a11 * a21 + a12 * a22,
        m22: a21 * a21 + a22 * a22,
    }
}
