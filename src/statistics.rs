//! Single-pass summaries over scalar sequences.
//!
//! Every function returns `None` where the reference formula would divide
//! by zero, so callers never see a NaN produced here.
use crate::Scalar;

/// Arithmetic mean. Finite for any finite input: when the running sum
/// overflows, each term is scaled by 1/n before summing instead.
pub fn mean(data: &[Scalar]) -> Option<Scalar> {
    match data.len() {
        0 => None,
        n => match data.iter().sum::<Scalar>() {
            sum if sum.is_finite() => Some(sum / n as Scalar),
            _ => Some(data.iter().map(|x| x / n as Scalar).sum()),
        },
    }
}

/// Sample variance around a known mean (n - 1 denominator).
pub fn variance(data: &[Scalar], mean: Scalar) -> Option<Scalar> {
    match data.len() {
        0 | 1 => None,
        n => Some(
            data.iter()
                .map(|x| x - mean)
                .map(|d| d * d)
                .sum::<Scalar>()
                / (n - 1) as Scalar,
        ),
    }
}

/// Sample standard deviation around a known mean.
pub fn standard_deviation(data: &[Scalar], mean: Scalar) -> Option<Scalar> {
    variance(data, mean).map(Scalar::sqrt)
}

pub fn min(data: &[Scalar]) -> Option<Scalar> {
    data.iter().copied().reduce(Scalar::min)
}

pub fn max(data: &[Scalar]) -> Option<Scalar> {
    data.iter().copied().reduce(Scalar::max)
}
