/// Errors that can occur when initializing or running a clustering.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Degenerate request: too few observations, zero clusters,
    /// more clusters than observations, or a centroid count that disagrees with k.
    InvalidArgument(String),
    /// Input that would poison the iteration with non-finite values.
    NumericDegeneracy(String),
}

impl ClusterError {
    /// Validates the shape of a clustering request over `n` observations.
    pub fn check(n: usize, k: usize) -> Result<(), Self> {
        if n <= 1 {
            Err(Self::InvalidArgument(format!("need at least 2 observations, got {}", n)))
        } else if k == 0 {
            Err(Self::InvalidArgument("need at least 1 cluster".to_string()))
        } else if k > n {
            Err(Self::InvalidArgument(format!("{} clusters exceed {} observations", k, n)))
        } else {
            Ok(())
        }
    }

    /// Rejects NaN and infinite values, naming the offending sequence.
    pub fn finite(name: &str, values: &[crate::Scalar]) -> Result<(), Self> {
        match values.iter().position(|x| !x.is_finite()) {
            None => Ok(()),
            Some(i) => Err(Self::NumericDegeneracy(format!(
                "{} contains non-finite value {} at index {}",
                name, values[i], i
            ))),
        }
    }
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Self::NumericDegeneracy(s) => write!(f, "numeric degeneracy: {}", s),
        }
    }
}

impl std::error::Error for ClusterError {}
