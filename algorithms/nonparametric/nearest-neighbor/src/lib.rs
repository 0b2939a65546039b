use std::fmt::Debug;

use ndarray::ArrayView1;
use ocr_helpers::{Distance, DistanceError, Feature, Observation};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur when using the nearest-neighbour classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// Predict was called before any training data was set, or with an empty set.
    #[error("cannot predict with an empty training set")]
    EmptyTrainingSet,
    /// The metric rejected a comparison between the query and a training observation.
    #[error(transparent)]
    Distance(#[from] DistanceError),
}

/// Something that learns from labeled observations and predicts labels for
/// new feature vectors.
///
/// The training set is borrowed for `'a`, not copied. Since the borrow is
/// shared, the caller cannot mutate the observations while the classifier
/// still holds them.
pub trait Classifier<'a, L, T>
where
    L: Clone + Eq + Debug,
    T: Feature,
{
    /// Replaces whatever the classifier was trained on before.
    fn train(&mut self, training_set: &'a [Observation<L, T>]);

    /// Predicts the label of `features`.
    fn predict(&self, features: ArrayView1<T>) -> Result<L, ClassifierError>;
}

/// The training observation closest to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a, L, T>
where
    L: Clone + Eq + Debug,
    T: Feature,
{
    /// Position of the observation in the training set.
    pub index: usize,
    /// Distance between the observation and the query, as reported by the metric.
    pub distance: f64,
    pub observation: &'a Observation<L, T>,
}

/// A 1-nearest-neighbour classifier.
///
/// Training only remembers the training set. Prediction scans every stored
/// observation and returns the label of the closest one, so a query costs
/// O(n·d) for n observations of d features. When several observations are
/// equally close, the one that comes first in the training set wins.
///
/// # Type Parameters
///
/// * `L`: The type of the label (e.g., `String` or `&str`).
/// * `T`: The integer type of the features (e.g., `i32`).
/// * `D`: The distance metric, which must implement `ocr_helpers::Distance`.
#[derive(Debug, Clone)]
pub struct BasicClassifier<'a, L, T, D>
where
    L: Clone + Eq + Debug,
    T: Feature,
    D: Distance<T>,
{
    training_data: Option<&'a [Observation<L, T>]>,
    distance: D,
}

impl<'a, L, T, D> BasicClassifier<'a, L, T, D>
where
    L: Clone + Eq + Debug,
    T: Feature,
    D: Distance<T>,
{
    /// Creates an untrained classifier that compares vectors with `distance`.
    pub fn new(distance: D) -> Self {
        Self {
            training_data: None,
            distance,
        }
    }

    /// Returns `true` once [`Classifier::train`] has been called.
    pub fn is_trained(&self) -> bool {
        self.training_data.is_some()
    }

    /// Number of observations currently held, zero when untrained.
    pub fn training_len(&self) -> usize {
        self.training_data.map_or(0, <[_]>::len)
    }

    pub fn metric(&self) -> &D {
        &self.distance
    }

    /// Finds the training observation closest to `features`.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::EmptyTrainingSet` if the classifier is
    /// untrained or was trained on an empty slice.
    /// Returns `ClassifierError::Distance` as soon as the metric rejects a
    /// comparison, which happens when `features` does not have the same length
    /// as a training observation.
    pub fn nearest(
        &self,
        features: ArrayView1<T>,
    ) -> Result<Neighbor<'a, L, T>, ClassifierError> {
        let data = self
            .training_data
            .filter(|data| !data.is_empty())
            .ok_or(ClassifierError::EmptyTrainingSet)?;

        // Rank on the reduced distance. Only a strictly smaller value replaces
        // the current best, which keeps the earliest observation on ties.
        let mut best: Option<(usize, f64)> = None;
        for (index, observation) in data.iter().enumerate() {
            let dist = self.distance.rdistance(observation.features.view(), features)?;
            if best.is_none_or(|(_, closest)| dist < closest) {
                best = Some((index, dist));
            }
        }

        let (index, _) = best.ok_or(ClassifierError::EmptyTrainingSet)?;
        let observation = &data[index];
        let distance = self.distance.distance(observation.features.view(), features)?;
        trace!(
            index,
            distance,
            label = ?observation.label,
            "nearest neighbour found"
        );

        Ok(Neighbor {
            index,
            distance,
            observation,
        })
    }
}

impl<'a, L, T, D> Classifier<'a, L, T> for BasicClassifier<'a, L, T, D>
where
    L: Clone + Eq + Debug,
    T: Feature,
    D: Distance<T>,
{
    fn train(&mut self, training_set: &'a [Observation<L, T>]) {
        debug!(
            observations = training_set.len(),
            metric = self.distance.name(),
            "training set replaced"
        );
        self.training_data = Some(training_set);
    }

    fn predict(&self, features: ArrayView1<T>) -> Result<L, ClassifierError> {
        self.nearest(features)
            .map(|neighbor| neighbor.observation.label.clone())
    }
}
