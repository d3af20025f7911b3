//! Pre-processing filters applied to a series before clustering.
use crate::Scalar;
use crate::statistics;

/// Moving average over every full window of `window` consecutive values.
///
/// Produces `data.len() - window + 1` outputs. A zero-width window, or one
/// wider than the data, leaves the series unchanged.
pub fn smooth(data: &[Scalar], window: usize) -> Vec<Scalar> {
    if window == 0 || window > data.len() {
        return data.to_vec();
    }
    data.windows(window)
        .filter_map(statistics::mean)
        .collect()
}
