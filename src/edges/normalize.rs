use ndarray::Array2;

/// Linearly rescale so the minimum maps to 0.0 and the maximum to 1.0
///
/// A flat (or empty) map has no range to stretch and becomes all zeros.
pub fn normalize_min_max(map: &Array2<f32>) -> Array2<f32> {
    let (min, max) = map
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;

    if !(range > 0.0) {
        tracing::debug!("Flat edge map, weights set to zero");
        return Array2::zeros(map.raw_dim());
    }

    map.mapv(|v| (v - min) / range)
}

/// Raise every sample to `gamma`
///
/// Values below 1.0 widen the band treated as edge: with 0.25 a gradient at
/// 1% of the maximum already gets a weight of about 0.32.
pub fn apply_gamma(map: &Array2<f32>, gamma: f32) -> Array2<f32> {
    map.mapv(|v| v.powf(gamma))
}
