use ndarray::Array1;
use crate::Feature;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A single labeled sample: the ground-truth class and its feature vector.
///
/// L: The type of the label (e.g., String for digit classes read from text).
/// T: The integer type of the features (e.g., i32 pixel intensities).
///
/// Observations are built once by whoever loads the data and are not
/// mutated afterwards. Within one training or validation set every
/// observation is expected to carry features of the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Observation<L, T>
where
    L: Clone + Eq + Debug,
    T: Feature,
{
    pub features: Array1<T>,
    pub label: L,
}

impl<L, T> Observation<L, T>
where
    L: Clone + Eq + Debug,
    T: Feature,
{
    pub fn new(features: Array1<T>, label: L) -> Self {
        Observation { features, label }
    }

    /// Builds an observation from a label and a plain vector of features,
    /// which is the shape a parsed text record naturally has.
    pub fn from_vec(label: L, features: Vec<T>) -> Self {
        Observation {
            features: Array1::from(features),
            label,
        }
    }

    /// Length of the feature vector.
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}
