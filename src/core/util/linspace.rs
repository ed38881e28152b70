/// `count` evenly spaced samples over `[min, max]`, both ends included.
///
/// With a single sample the result is `[min]`. The last sample is pinned to
/// `max` so the far edge is hit exactly regardless of rounding in the step.
#[must_use]
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = count - 1;
            let step = (max - min) / last as f64;

            (0..count)
                .map(|k| if k == last { max } else { min + k as f64 * step })
                .collect()
        }
    }
}
