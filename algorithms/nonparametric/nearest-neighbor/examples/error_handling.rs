//! Example demonstrating error handling with the nearest-neighbour classifier.
//!
//! Every misuse of the classifier is reported through `ClassifierError`
//! instead of a panic or a meaningless label.

use nearest_neighbor::{BasicClassifier, Classifier, ClassifierError};
use ndarray::array;
use ocr_helpers::{DistanceError, ManhattanDist, Observation};

fn main() {
    println!("Nearest-Neighbour Classifier Error Handling Examples");
    println!("====================================================");

    // Example 1: Predict before training
    println!("\n1. Predicting with an untrained classifier:");
    let untrained: BasicClassifier<&str, i32, ManhattanDist> = BasicClassifier::new(ManhattanDist);
    match untrained.predict(array![1, 1].view()) {
        Ok(label) => println!("   Predicted label: {}", label),
        Err(ClassifierError::EmptyTrainingSet) => {
            println!("   ✓ Caught expected error: {}", ClassifierError::EmptyTrainingSet)
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 2: Query with the wrong number of features
    println!("\n2. Predicting with a query of the wrong length:");
    let training_data = vec![
        Observation::new(array![0, 0, 0], "0"),
        Observation::new(array![5, 5, 5], "1"),
    ];
    let mut classifier = BasicClassifier::new(ManhattanDist);
    classifier.train(&training_data);

    match classifier.predict(array![1, 2].view()) {
        Ok(label) => println!("   Predicted label: {}", label),
        Err(ClassifierError::Distance(DistanceError::DimensionMismatch { left, right })) => {
            println!("   ✓ Caught expected dimension mismatch: {} != {}", left, right)
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 3: Successful predictions, including a tie
    println!("\n3. Successful predictions:");
    let test_points = vec![
        (array![1, 0, 0], "should be 0"),
        (array![4, 5, 5], "should be 1"),
    ];
    for (point, expected) in test_points {
        match classifier.nearest(point.view()) {
            Ok(neighbor) => println!(
                "   ✓ Prediction: {} at distance {} ({})",
                neighbor.observation.label, neighbor.distance, expected
            ),
            Err(e) => println!("   ✗ Prediction failed: {}", e),
        }
    }

    // Example 4: Error propagation in a function
    println!("\n4. Error propagation in functions:");

    fn classify_with_error_handling() -> Result<String, ClassifierError> {
        let training_data = vec![
            Observation::new(array![0, 0], "A"),
            Observation::new(array![0, 0], "B"),
        ];
        let mut classifier = BasicClassifier::new(ManhattanDist);
        classifier.train(&training_data);
        let result = classifier.predict(array![0, 0].view())?;
        Ok(result.to_string())
    }

    match classify_with_error_handling() {
        Ok(result) => println!("   ✓ Tie resolved to the first observation: {}", result),
        Err(e) => println!("   ✗ Classification failed: {}", e),
    }

    println!("\nAll examples completed successfully!");
}
