use crate::Energy;
use crate::KMEANS_MAX_ERROR;
use crate::KMEANS_MAX_ITERATIONS;

/// Stopping parameters for Lloyd iteration.
///
/// Any one of the three conditions in [`Termination::check`] ends the run;
/// `max_iters` is the only one guaranteed to be reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Termination {
    pub max_error: Energy,
    pub max_iters: usize,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stop {
    /// Average error fell to or below `max_error`.
    Convergent,
    /// The iteration cap was reached.
    Exhausted,
    /// A reassignment pass made no relocations.
    Stable,
}

impl Termination {
    pub fn new(max_error: Energy, max_iters: usize) -> Self {
        Self {
            max_error,
            max_iters,
        }
    }

    /// Evaluate the stopping rule after `iteration` update cycles.
    /// Conditions are checked in order: error, cap, stability.
    pub fn check(&self, error: Energy, iteration: usize, relocations: usize) -> Option<Stop> {
        if error <= self.max_error {
            Some(Stop::Convergent)
        } else if iteration >= self.max_iters {
            Some(Stop::Exhausted)
        } else if relocations == 0 {
            Some(Stop::Stable)
        } else {
            None
        }
    }
}

impl Default for Termination {
    fn default() -> Self {
        Self::new(KMEANS_MAX_ERROR, KMEANS_MAX_ITERATIONS)
    }
}

impl From<(Energy, usize)> for Termination {
    fn from((max_error, max_iters): (Energy, usize)) -> Self {
        Self::new(max_error, max_iters)
    }
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Convergent => write!(f, "convergent"),
            Self::Exhausted => write!(f, "exhausted"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_any_condition_sufficient() {
        let t = Termination::new(0.1, 10);
        assert_eq!(t.check(0.05, 1, 5), Some(Stop::Convergent));
        assert_eq!(t.check(0.50, 10, 5), Some(Stop::Exhausted));
        assert_eq!(t.check(0.50, 1, 0), Some(Stop::Stable));
        assert_eq!(t.check(0.50, 1, 5), None);
    }
    #[test]
    fn is_error_threshold_inclusive() {
        assert_eq!(Termination::new(0.25, 10).check(0.25, 1, 3), Some(Stop::Convergent));
    }
    #[test]
    fn is_default_from_constants() {
        let t = Termination::default();
        assert_eq!(t.max_iters, KMEANS_MAX_ITERATIONS);
        assert_eq!(t.max_error, KMEANS_MAX_ERROR);
    }
}
