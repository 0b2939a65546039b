use std::fmt::{self, Debug, Display, Formatter};

use nearest_neighbor::{Classifier, ClassifierError};
use ocr_helpers::{Feature, Observation};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while measuring accuracy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Accuracy over zero observations is undefined.
    #[error("cannot evaluate an empty validation set")]
    EmptyValidationSet,
    /// A prediction failed; the evaluation is abandoned.
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Number of correct predictions out of the number made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    /// Fraction of correct predictions, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.correct as f64 / self.total as f64
    }
}

impl Display for Accuracy {
    /// Formats as a percentage with two decimals, e.g. `93.40%`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.fraction() * 100.0)
    }
}

/// Returns `1.0` if the classifier predicts the observation's label, `0.0` otherwise.
pub fn score<'a, L, T, C>(
    observation: &Observation<L, T>,
    classifier: &C,
) -> Result<f64, ClassifierError>
where
    L: Clone + Eq + Debug,
    T: Feature,
    C: Classifier<'a, L, T>,
{
    let predicted = classifier.predict(observation.features.view())?;
    Ok(if predicted == observation.label { 1.0 } else { 0.0 })
}

/// Mean [`score`] over the validation set.
///
/// Each observation is scored once, in order. The first failing prediction
/// aborts the whole computation; there is no partial result.
///
/// # Errors
///
/// Returns `EvaluationError::EmptyValidationSet` if `validation_set` is empty.
/// Returns `EvaluationError::Classifier` with the first prediction error.
pub fn correct<'a, L, T, C>(
    validation_set: &[Observation<L, T>],
    classifier: &C,
) -> Result<f64, EvaluationError>
where
    L: Clone + Eq + Debug,
    T: Feature,
    C: Classifier<'a, L, T>,
{
    if validation_set.is_empty() {
        return Err(EvaluationError::EmptyValidationSet);
    }

    let total = validation_set
        .iter()
        .map(|observation| score(observation, classifier))
        .sum::<Result<f64, _>>()?;
    let mean = total / validation_set.len() as f64;

    debug!(observations = validation_set.len(), accuracy = mean, "validation scored");
    Ok(mean)
}

/// Like [`correct`], but keeps the raw counts.
pub fn evaluate<'a, L, T, C>(
    validation_set: &[Observation<L, T>],
    classifier: &C,
) -> Result<Accuracy, EvaluationError>
where
    L: Clone + Eq + Debug,
    T: Feature,
    C: Classifier<'a, L, T>,
{
    if validation_set.is_empty() {
        return Err(EvaluationError::EmptyValidationSet);
    }

    let mut hits = 0;
    for observation in validation_set {
        if score(observation, classifier)? == 1.0 {
            hits += 1;
        }
    }

    let accuracy = Accuracy {
        correct: hits,
        total: validation_set.len(),
    };
    debug!(correct = accuracy.correct, total = accuracy.total, "validation scored");
    Ok(accuracy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{ArrayView1, array};
    use nearest_neighbor::BasicClassifier;
    use ocr_helpers::{DistanceError, ManhattanDist};
    use std::cell::Cell;

    fn training_set() -> Vec<Observation<String, i32>> {
        vec![
            Observation::from_vec("0".to_string(), vec![0, 0, 0]),
            Observation::from_vec("1".to_string(), vec![5, 5, 5]),
        ]
    }

    /// Predicts a fixed label and counts how often it was asked.
    struct CountingClassifier {
        label: &'static str,
        calls: Cell<usize>,
    }

    impl<'a> Classifier<'a, &'static str, i32> for CountingClassifier {
        fn train(&mut self, _training_set: &'a [Observation<&'static str, i32>]) {}

        fn predict(&self, _features: ArrayView1<i32>) -> Result<&'static str, ClassifierError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.label)
        }
    }

    #[test]
    fn test_all_predictions_correct() {
        let training = training_set();
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training);

        let validation = vec![
            Observation::from_vec("0".to_string(), vec![1, 0, 0]),
            Observation::from_vec("1".to_string(), vec![4, 5, 5]),
        ];
        assert_eq!(correct(&validation, &classifier).unwrap(), 1.0);
        assert_eq!(
            evaluate(&validation, &classifier).unwrap(),
            Accuracy { correct: 2, total: 2 }
        );
    }

    #[test]
    fn test_mislabeled_point_scores_zero() {
        let training = training_set();
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training);

        let mislabeled = Observation::from_vec("1".to_string(), vec![0, 0, 0]);
        assert_eq!(classifier.predict(mislabeled.features.view()).unwrap(), "0");
        assert_eq!(score(&mislabeled, &classifier).unwrap(), 0.0);
        assert_eq!(correct(&[mislabeled], &classifier).unwrap(), 0.0);
    }

    #[test]
    fn test_correct_is_mean_of_scores() {
        let training = training_set();
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training);

        let validation = vec![
            Observation::from_vec("0".to_string(), vec![1, 1, 0]),
            Observation::from_vec("0".to_string(), vec![4, 4, 4]),
            Observation::from_vec("1".to_string(), vec![5, 5, 4]),
        ];
        let scores: Vec<f64> = validation
            .iter()
            .map(|o| score(o, &classifier).unwrap())
            .collect();
        assert_eq!(scores, vec![1.0, 0.0, 1.0]);

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let result = correct(&validation, &classifier).unwrap();
        assert_abs_diff_eq!(result, mean);
        assert_abs_diff_eq!(result, 2.0 / 3.0);

        let accuracy = evaluate(&validation, &classifier).unwrap();
        assert_abs_diff_eq!(accuracy.fraction(), result);
    }

    #[test]
    fn test_each_observation_is_visited_once() {
        let classifier = CountingClassifier {
            label: "7",
            calls: Cell::new(0),
        };
        let validation = vec![
            Observation::new(array![1], "7"),
            Observation::new(array![2], "3"),
            Observation::new(array![3], "7"),
            Observation::new(array![4], "7"),
        ];
        assert_abs_diff_eq!(correct(&validation, &classifier).unwrap(), 0.75);
        assert_eq!(classifier.calls.get(), 4);
    }

    #[test]
    fn test_error_on_empty_validation_set() {
        let training = training_set();
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training);

        let validation: Vec<Observation<String, i32>> = vec![];
        assert_eq!(
            correct(&validation, &classifier),
            Err(EvaluationError::EmptyValidationSet)
        );
        assert_eq!(
            evaluate(&validation, &classifier),
            Err(EvaluationError::EmptyValidationSet)
        );
    }

    #[test]
    fn test_empty_training_set_surfaces_from_first_prediction() {
        let training: Vec<Observation<String, i32>> = vec![];
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training);

        let validation = vec![Observation::from_vec("0".to_string(), vec![0, 0, 0])];
        assert_eq!(
            correct(&validation, &classifier),
            Err(EvaluationError::Classifier(ClassifierError::EmptyTrainingSet))
        );
    }

    #[test]
    fn test_dimension_mismatch_aborts_evaluation() {
        let training = training_set();
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training);

        let validation = vec![
            Observation::from_vec("0".to_string(), vec![0, 0, 0]),
            Observation::from_vec("1".to_string(), vec![5, 5]),
            Observation::from_vec("1".to_string(), vec![5, 5, 5]),
        ];
        let err = correct(&validation, &classifier).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::Classifier(ClassifierError::Distance(
                DistanceError::DimensionMismatch { left: 3, right: 2 }
            ))
        );
        assert_eq!(err.to_string(), "samples must be the same size: 3 != 2");
    }

    #[test]
    fn test_accuracy_displays_as_percentage() {
        let accuracy = Accuracy { correct: 467, total: 500 };
        assert_eq!(accuracy.to_string(), "93.40%");
        assert_eq!(Accuracy { correct: 1, total: 3 }.to_string(), "33.33%");
    }
}
