use clap::ValueEnum;
use ocr::evaluator::{self, Accuracy, EvaluationError};
use ocr::{
    BasicClassifier, Classifier, Distance, EuclideanDist, HammingDist, ManhattanDist, Observation,
};

/// The metrics selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceMetric {
    /// Sum of absolute pixel differences
    Manhattan,
    /// Straight-line distance
    Euclidean,
    /// Number of differing pixels
    Hamming,
}

impl DistanceMetric {
    /// Trains a classifier using this metric and scores it on `validation_set`.
    pub fn evaluate(
        self,
        training_set: &[Observation<String, i32>],
        validation_set: &[Observation<String, i32>],
    ) -> Result<Accuracy, EvaluationError> {
        match self {
            DistanceMetric::Manhattan => {
                train_and_evaluate(ManhattanDist, training_set, validation_set)
            }
            DistanceMetric::Euclidean => {
                train_and_evaluate(EuclideanDist, training_set, validation_set)
            }
            DistanceMetric::Hamming => {
                train_and_evaluate(HammingDist, training_set, validation_set)
            }
        }
    }
}

fn train_and_evaluate<D: Distance<i32>>(
    distance: D,
    training_set: &[Observation<String, i32>],
    validation_set: &[Observation<String, i32>],
) -> Result<Accuracy, EvaluationError> {
    let mut classifier = BasicClassifier::new(distance);
    classifier.train(training_set);
    evaluator::evaluate(validation_set, &classifier)
}
