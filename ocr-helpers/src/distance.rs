use ndarray::{ArrayView1, Zip};
use thiserror::Error;

use crate::Feature;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Errors raised when comparing two feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The two vectors do not have the same number of features.
    #[error("samples must be the same size: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// A dissimilarity measure between two feature vectors of equal length.
///
/// Implementors must return a non-negative value, zero when both inputs are
/// identical, and the same value regardless of argument order. Lengths are
/// checked before any arithmetic, so a mismatch is always reported as
/// [`DistanceError::DimensionMismatch`] rather than as a partial result.
pub trait Distance<T: Feature>: Clone + Send + Sync {
    /// Computes the distance between `a` and `b`.
    fn distance(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> Result<f64, DistanceError>;

    /// A cheaper quantity that orders pairs exactly like [`Distance::distance`].
    ///
    /// Nearest-neighbour searches only compare distances, so they may rank on
    /// this value instead. The default is the true distance.
    fn rdistance(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> Result<f64, DistanceError> {
        self.distance(a, b)
    }

    /// Short human-readable name of the metric.
    fn name(&self) -> &'static str;
}

/// Exact absolute difference of two features.
fn abs_diff<T: Feature>(x: T, y: T) -> u128 {
    x.to_i128().abs_diff(y.to_i128())
}

fn check_dimensions<T>(a: &ArrayView1<T>, b: &ArrayView1<T>) -> Result<(), DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// L1 (Manhattan) distance: the sum of absolute element differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ManhattanDist;

impl<T: Feature> Distance<T> for ManhattanDist {
    fn distance(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> Result<f64, DistanceError> {
        check_dimensions(&a, &b)?;
        // Summed as integers; only the total is rounded to f64.
        let mut sum: u128 = 0;
        Zip::from(&a).and(&b).for_each(|&x, &y| {
            sum += abs_diff(x, y);
        });
        Ok(sum as f64)
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// L2 (Euclidean) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct EuclideanDist;

impl<T: Feature> Distance<T> for EuclideanDist {
    fn distance(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> Result<f64, DistanceError> {
        self.rdistance(a, b).map(f64::sqrt)
    }

    /// Squared Euclidean distance; skips the square root.
    fn rdistance(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> Result<f64, DistanceError> {
        check_dimensions(&a, &b)?;
        let mut sum = 0.0;
        Zip::from(&a).and(&b).for_each(|&x, &y| {
            let diff = abs_diff(x, y) as f64;
            sum += diff * diff;
        });
        Ok(sum)
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Hamming distance: the number of positions holding different values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct HammingDist;

impl<T: Feature> Distance<T> for HammingDist {
    fn distance(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> Result<f64, DistanceError> {
        check_dimensions(&a, &b)?;
        let differing = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
        Ok(differing as f64)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}
