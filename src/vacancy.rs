use crate::Scalar;

/// What happens to a centroid whose cluster has no members after a reassignment pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Vacancy {
    /// Keep the centroid where it was last iteration, so it can still attract points.
    #[default]
    Retain,
    /// Reset the centroid to zero.
    Collapse,
}

impl Vacancy {
    /// Resolve the centroid of cluster `j` from the mean of its members,
    /// `None` when it has none.
    pub fn resolve(&self, j: usize, mean: Option<Scalar>, previous: Scalar) -> Scalar {
        match (mean, self) {
            (Some(mean), _) => mean,
            (None, Self::Retain) => {
                log::warn!("cluster {} is empty, retaining centroid {}", j, previous);
                previous
            }
            (None, Self::Collapse) => {
                log::warn!("cluster {} is empty, collapsing centroid {} to zero", j, previous);
                0.0
            }
        }
    }
}
