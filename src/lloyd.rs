//! Lloyd iteration over a 1-D dataset.
//!
//! Construction performs the initial assignment. Each call to
//! [`Iterator::next`] then runs one update cycle: re-estimate centroids,
//! offer every observation every centroid, and evaluate the stopping rule.
//! The iterator is exhausted once a [`Stop`] has been reached.

use crate::Assignment;
use crate::ClusterError;
use crate::Clustering;
use crate::Distance;
use crate::Energy;
use crate::Euclidean;
use crate::Scalar;
use crate::Stop;
use crate::Tag;
use crate::Termination;
use crate::Vacancy;
use crate::statistics;

/// Summary of one update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// 1-based index of the cycle.
    pub iteration: usize,
    /// Mean recorded error after the reassignment pass.
    pub error: Energy,
    /// Strict improvements taken during the reassignment pass.
    pub relocations: usize,
}

#[derive(Debug)]
pub struct Lloyd<'a, D = Euclidean> {
    data: &'a [Scalar],
    metric: D,
    termination: Termination,
    vacancy: Vacancy,
    centroids: Vec<Scalar>,
    assignments: Vec<Assignment>,
    iteration: usize,
    error: Energy,
    stop: Option<Stop>,
}

impl<'a> Lloyd<'a, Euclidean> {
    /// Euclidean distance, retained empty clusters.
    pub fn new(data: &'a [Scalar], centroids: Vec<Scalar>, termination: Termination) -> Result<Self, ClusterError> {
        Self::with(data, centroids, termination, Vacancy::default(), Euclidean)
    }
}

impl<'a, D> Lloyd<'a, D>
where
    D: Distance,
{
    /// Validate the request and assign every observation to its nearest initial centroid.
    /// The number of clusters is the number of centroids supplied.
    pub fn with(
        data: &'a [Scalar],
        centroids: Vec<Scalar>,
        termination: Termination,
        vacancy: Vacancy,
        metric: D,
    ) -> Result<Self, ClusterError> {
        ClusterError::check(data.len(), centroids.len())?;
        ClusterError::finite("data", data)?;
        ClusterError::finite("centroids", &centroids)?;
        if termination.max_iters == 0 {
            return Err(ClusterError::InvalidArgument("max_iters must be positive".to_string()));
        }
        if !(termination.max_error >= 0.0) {
            return Err(ClusterError::InvalidArgument(format!(
                "max_error must be non-negative, got {}",
                termination.max_error
            )));
        }
        let mut lloyd = Self {
            data,
            metric,
            termination,
            vacancy,
            centroids,
            assignments: Vec::new(),
            iteration: 0,
            error: 0.0,
            stop: None,
        };
        lloyd.assignments = lloyd.assign();
        if let Some(i) = lloyd.assignments.iter().position(|a| !a.error().is_finite()) {
            return Err(ClusterError::NumericDegeneracy(format!(
                "distance from observation {} to every centroid overflows",
                i
            )));
        }
        lloyd.error = lloyd.loss();
        log::debug!(
            "kmeans assigned {} observations to {} clusters, error {:.6}",
            lloyd.n(),
            lloyd.k(),
            lloyd.error
        );
        Ok(lloyd)
    }

    pub fn n(&self) -> usize {
        self.data.len()
    }
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    pub fn iteration(&self) -> usize {
        self.iteration
    }
    pub fn error(&self) -> Energy {
        self.error
    }
    pub fn stop(&self) -> Option<Stop> {
        self.stop
    }
    pub fn centroids(&self) -> &[Scalar] {
        &self.centroids
    }
    pub fn tags(&self) -> Vec<Tag> {
        self.assignments.iter().map(Assignment::j).collect()
    }

    /// Nearest centroid to `x`; the lowest index wins ties.
    pub fn neighbor(&self, x: Scalar) -> Assignment {
        let mut nearest = Assignment::from((0, self.metric.distance(x, self.centroids[0])));
        for (j, &c) in self.centroids.iter().enumerate().skip(1) {
            nearest.witness(j, self.metric.distance(x, c));
        }
        nearest
    }

    /// Initial assignment of every observation.
    fn assign(&self) -> Vec<Assignment> {
        self.data.iter().map(|&x| self.neighbor(x)).collect()
    }

    /// Mean of the recorded errors.
    fn loss(&self) -> Energy {
        let errors = self.assignments.iter().map(Assignment::error).collect::<Vec<_>>();
        statistics::mean(&errors).unwrap_or_default()
    }

    /// Re-estimate each centroid as the mean of its members,
    /// deferring to the vacancy policy for clusters with none.
    fn update(&self) -> Vec<Scalar> {
        let mut members = vec![Vec::new(); self.k()];
        for (&x, a) in self.data.iter().zip(self.assignments.iter()) {
            members[a.j()].push(x);
        }
        members
            .iter()
            .zip(self.centroids.iter())
            .enumerate()
            .map(|(j, (xs, &previous))| self.vacancy.resolve(j, statistics::mean(xs), previous))
            .collect()
    }

    /// Offer every observation every centroid in index order, own cluster included.
    /// Returns how many offers were taken.
    fn reassign(&mut self) -> usize {
        let Self {
            data,
            metric,
            centroids,
            assignments,
            ..
        } = self;
        let mut relocations = 0;
        for (&x, a) in data.iter().zip(assignments.iter_mut()) {
            for (j, &c) in centroids.iter().enumerate() {
                if a.witness(j, metric.distance(x, c)) {
                    relocations += 1;
                }
            }
        }
        relocations
    }

    /// Drive the iteration to a stop and report.
    pub fn run(mut self) -> Clustering {
        while let Some(_) = self.next() {}
        let stop = self.stop.unwrap_or(Stop::Exhausted);
        log::info!(
            "kmeans {} after {} iterations, error {:.6}",
            stop,
            self.iteration,
            self.error
        );
        Clustering {
            tags: self.tags(),
            centroids: self.centroids,
            error: self.error,
            iterations: self.iteration,
            stop,
        }
    }
}

impl<'a, D> Iterator for Lloyd<'a, D>
where
    D: Distance,
{
    type Item = Step;
    fn next(&mut self) -> Option<Self::Item> {
        if self.stop.is_some() {
            return None;
        }
        self.centroids = self.update();
        let relocations = self.reassign();
        self.error = self.loss();
        self.iteration += 1;
        self.stop = self
            .termination
            .check(self.error, self.iteration, relocations);
        log::debug!(
            "{:3} error {:.6} relocations {}",
            self.iteration,
            self.error,
            relocations
        );
        Some(Step {
            iteration: self.iteration,
            error: self.error,
            relocations,
        })
    }
}
