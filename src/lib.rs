//! One-dimensional k-means clustering.
//!
//! Partitions a sequence of scalar observations into `k` clusters using
//! Lloyd's algorithm, reporting a tag per observation and the mean residual
//! distance to the assigned centroid.
//!
//! ## Pipeline
//!
//! 1. **Initialization** — choose `k` starting centroids, evenly spaced across
//!    the data range or sampled from the data with an injected random source
//! 2. **Assignment** — tag every observation with its nearest centroid
//! 3. **Convergence** — alternate centroid re-estimation and relocation passes
//!    until the error threshold, the iteration cap, or a stable partition is reached
//!
//! ## Core Types
//!
//! - [`Lloyd`] — The iterator driving assignment and convergence
//! - [`Clustering`] — Tags, centroids, and error of a finished run
//! - [`Termination`] — Stopping parameters
//! - [`Vacancy`] — Policy for clusters that lose every member
//! - [`Distance`] — 1-D metric consumed by the iterator
//!
//! ## Collaborators
//!
//! - [`statistics`] — mean, variance, extrema
//! - [`signals`] — moving-average smoothing for pre-processing
mod api;
mod assignment;
mod clustering;
mod distance;
mod error;
mod initialization;
mod lloyd;
mod termination;
mod vacancy;

pub mod signals;
pub mod statistics;

pub use api::*;
pub use assignment::*;
pub use clustering::*;
pub use distance::*;
pub use error::*;
pub use initialization::*;
pub use lloyd::*;
pub use termination::*;
pub use vacancy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single observation or centroid value.
pub type Scalar = f64;
/// Distances, residuals, and convergence thresholds.
pub type Energy = f64;
/// Cluster identifier, an index into the centroid set.
pub type Tag = usize;

// ============================================================================
// K-MEANS CLUSTERING
// ============================================================================
/// Lloyd iteration cap when the caller does not supply one.
pub const KMEANS_MAX_ITERATIONS: usize = 64;
/// Mean residual at or below which iteration stops early.
pub const KMEANS_MAX_ERROR: Energy = 0.001;
/// Seed for the random initializer when the caller does not supply one.
pub const KMEANS_SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    // a second init (e.g. from tests) keeps the first logger
    let _ = simplelog::CombinedLogger::init(vec![term]);
}
