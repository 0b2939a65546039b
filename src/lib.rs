//! Nearest-neighbour recognition of handwritten digits.
//!
//! The pieces, leaf first:
//! - [`Observation`]: a label paired with an integer feature vector.
//! - [`Distance`]: a pluggable metric, with [`ManhattanDist`] as the default.
//! - [`BasicClassifier`]: remembers a borrowed training set and predicts the
//!   label of the closest observation.
//! - [`evaluator`]: scores predictions against a labeled validation set.
//!
//! [`reader`] and [`split`] turn delimited text files into observation sets.

pub mod evaluator;
pub mod reader;
pub mod split;

// Re-export the shared types so callers only depend on this crate.
pub use nearest_neighbor::{BasicClassifier, Classifier, ClassifierError, Neighbor};
pub use ocr_helpers::{
    Distance, DistanceError, EuclideanDist, Feature, HammingDist, ManhattanDist, Observation,
};

pub use evaluator::{Accuracy, EvaluationError};
