use crate::ClusterError;
use crate::Scalar;
use crate::statistics;
use rand::Rng;

/// Policy for choosing the starting centroids.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Initialization {
    /// Evenly spaced across [min, max] of the data, both ends inclusive.
    #[default]
    Spaced,
    /// Uniformly sampled from the data, with replacement.
    Random,
}

impl Initialization {
    /// Produce `k` centroids from `data`. The random source is only drawn from
    /// by [`Initialization::Random`].
    pub fn centroids<R>(&self, data: &[Scalar], k: usize, rng: &mut R) -> Result<Vec<Scalar>, ClusterError>
    where
        R: Rng,
    {
        match self {
            Self::Spaced => Self::spaced(data, k),
            Self::Random => Self::random(data, k, rng),
        }
    }

    /// `min + i * (max - min) / (k - 1)` for each `i` in `0..k`, evaluated as
    /// `min * (1 - t) + max * t` with `t = i / (k - 1)` so a range wider than
    /// `Scalar::MAX` stays finite. A single cluster starts at the data mean.
    pub fn spaced(data: &[Scalar], k: usize) -> Result<Vec<Scalar>, ClusterError> {
        ClusterError::check(data.len(), k)?;
        ClusterError::finite("data", data)?;
        let (min, max, mean) = statistics::min(data)
            .zip(statistics::max(data))
            .zip(statistics::mean(data))
            .map(|((min, max), mean)| (min, max, mean))
            .ok_or_else(|| ClusterError::InvalidArgument("empty data".to_string()))?;
        if k == 1 {
            return Ok(vec![mean]);
        }
        let centroids = (0..k)
            .map(|i| i as Scalar / (k - 1) as Scalar)
            .map(|t| min * (1.0 - t) + max * t)
            .collect::<Vec<_>>();
        log::debug!("spaced centroids {:?}", centroids);
        Ok(centroids)
    }

    /// `k` values drawn from `data` at indices uniform over `0..n`.
    pub fn random<R>(data: &[Scalar], k: usize, rng: &mut R) -> Result<Vec<Scalar>, ClusterError>
    where
        R: Rng,
    {
        ClusterError::check(data.len(), k)?;
        ClusterError::finite("data", data)?;
        let centroids = (0..k)
            .map(|_| rng.random_range(0..data.len()))
            .map(|i| data[i])
            .collect::<Vec<_>>();
        log::debug!("random centroids {:?}", centroids);
        Ok(centroids)
    }
}
