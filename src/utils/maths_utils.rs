use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

/// Relative tolerance below which a spread is treated as zero.
pub(crate) const FLAT_EPSILON: f64 = 1e-12;

/// (min, max) of a non-empty slice. Empty input gives None.
#[inline]
pub(crate) fn min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

/// Mean and sample (n-1) standard deviation.
/// Fewer than two values gives a zero deviation rather than NaN.
#[inline]
pub(crate) fn mean_and_sample_stddev(data: &[f64]) -> (f64, f64) {
    match data.len() {
        0 => (0.0, 0.0),
        1 => (data[0], 0.0),
        _ => (data.mean(), data.std_dev()),
    }
}

/// True when `spread` is negligible compared to `scale`.
#[inline]
pub(crate) fn is_flat(spread: f64, scale: f64) -> bool {
    spread <= FLAT_EPSILON * scale.abs().max(1.0)
}

/// Pearson correlation. NaN when either side has no variance or lengths differ.
pub(crate) fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return f64::NAN;
    }
    let (mean_x, sd_x) = mean_and_sample_stddev(xs);
    let (mean_y, sd_y) = mean_and_sample_stddev(ys);
    if is_flat(sd_x, mean_x) || is_flat(sd_y, mean_y) {
        return f64::NAN;
    }
    let cov = xs.covariance(ys);
    (cov / (sd_x * sd_y)).clamp(-1.0, 1.0)
}

/// Linearly maps a value from one range to another while preserving its relative proportion.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (val - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}
