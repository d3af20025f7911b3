use crate::Energy;
use crate::Scalar;
use crate::Stop;
use crate::Tag;

/// Outcome of a finished Lloyd run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Clustering {
    /// Cluster of each observation, aligned with the input order.
    pub tags: Vec<Tag>,
    /// Final centroid of each cluster, indexed by tag.
    pub centroids: Vec<Scalar>,
    /// Mean recorded distance from each observation to its centroid.
    pub error: Energy,
    /// Update cycles performed.
    pub iterations: usize,
    pub stop: Stop,
}

impl Clustering {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Member count per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        self.tags.iter().for_each(|&j| sizes[j] += 1);
        sizes
    }

    /// Indices of the observations tagged `j`.
    pub fn members(&self, j: Tag) -> Vec<usize> {
        self.tags
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == j)
            .map(|(i, _)| i)
            .collect()
    }

    /// The `(tags, average error)` pair.
    pub fn into_parts(self) -> (Vec<Tag>, Energy) {
        (self.tags, self.error)
    }
}

impl std::fmt::Display for Clustering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} after {} iterations, error {:.6}",
            self.stop, self.iterations, self.error
        )?;
        for (j, (centroid, size)) in self.centroids.iter().zip(self.sizes()).enumerate() {
            writeln!(f, "{:>4} {:>12.6} {:>6}", j, centroid, size)?;
        }
        Ok(())
    }
}
