use crate::Energy;
use crate::Scalar;

/// A 1-D metric between observations and centroids.
///
/// The iterator only relies on non-negativity and d(a, a) = 0,
/// so any metric with those properties can be swapped in.
pub trait Distance {
    fn distance(&self, a: Scalar, b: Scalar) -> Energy;
}

/// Absolute difference, the 1-D Euclidean distance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Euclidean;

impl Distance for Euclidean {
    fn distance(&self, a: Scalar, b: Scalar) -> Energy {
        (a - b).abs()
    }
}

impl<F> Distance for F
where
    F: Fn(Scalar, Scalar) -> Energy,
{
    fn distance(&self, a: Scalar, b: Scalar) -> Energy {
        self(a, b)
    }
}
