//! Flat entry points over [`Initialization`] and [`Lloyd`].
use crate::ClusterError;
use crate::Clustering;
use crate::Energy;
use crate::Initialization;
use crate::Lloyd;
use crate::Scalar;
use crate::Termination;
use rand::Rng;

/// `k` centroids evenly spaced from `min(data)` to `max(data)`.
pub fn initialize_evenly_spaced(data: &[Scalar], k: usize) -> Result<Vec<Scalar>, ClusterError> {
    Initialization::spaced(data, k)
}

/// `k` centroids sampled from `data` with replacement.
pub fn initialize_random<R>(data: &[Scalar], k: usize, rng: &mut R) -> Result<Vec<Scalar>, ClusterError>
where
    R: Rng,
{
    Initialization::random(data, k, rng)
}

/// Run Lloyd iteration from the given centroids.
pub fn cluster(
    data: &[Scalar],
    k: usize,
    max_error: Energy,
    max_iters: usize,
    centroids: Vec<Scalar>,
) -> Result<Clustering, ClusterError> {
    if centroids.len() != k {
        return Err(ClusterError::InvalidArgument(format!(
            "{} centroids supplied for {} clusters",
            centroids.len(),
            k
        )));
    }
    Lloyd::new(data, centroids, Termination::new(max_error, max_iters)).map(Lloyd::run)
}

/// Initialize evenly spaced centroids and cluster.
pub fn cluster_evenly_spaced(
    data: &[Scalar],
    k: usize,
    max_error: Energy,
    max_iters: usize,
) -> Result<Clustering, ClusterError> {
    let centroids = initialize_evenly_spaced(data, k)?;
    cluster(data, k, max_error, max_iters, centroids)
}

/// Initialize randomly sampled centroids and cluster.
pub fn cluster_random<R>(
    data: &[Scalar],
    k: usize,
    max_error: Energy,
    max_iters: usize,
    rng: &mut R,
) -> Result<Clustering, ClusterError>
where
    R: Rng,
{
    let centroids = initialize_random(data, k, rng)?;
    cluster(data, k, max_error, max_iters, centroids)
}
