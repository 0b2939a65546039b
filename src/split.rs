use std::fmt::Debug;

use ocr_helpers::{Feature, Observation};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_xoshiro::Xoshiro256PlusPlus;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplitError {
    #[error("validation fraction must lie strictly between 0 and 1, got {0}")]
    InvalidFraction(f64),
    #[error("{available} observations cannot be split with a validation fraction of {fraction}")]
    TooFewObservations { available: usize, fraction: f64 },
}

/// Shuffles `observations` with a seeded generator and splits them into a
/// training set and a validation set holding `validation_fraction` of them
/// (rounded to the nearest count).
///
/// The same seed always yields the same split. Both sides are guaranteed to
/// be non-empty.
pub fn holdout<L, T>(
    mut observations: Vec<Observation<L, T>>,
    validation_fraction: f64,
    seed: u64,
) -> Result<(Vec<Observation<L, T>>, Vec<Observation<L, T>>), SplitError>
where
    L: Clone + Eq + Debug,
    T: Feature,
{
    if !(validation_fraction > 0.0 && validation_fraction < 1.0) {
        return Err(SplitError::InvalidFraction(validation_fraction));
    }

    let available = observations.len();
    let n_validation = (available as f64 * validation_fraction).round() as usize;
    if n_validation == 0 || n_validation == available {
        return Err(SplitError::TooFewObservations {
            available,
            fraction: validation_fraction,
        });
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    observations.shuffle(&mut rng);
    let validation = observations.split_off(available - n_validation);
    Ok((observations, validation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: i32) -> Vec<Observation<String, i32>> {
        (0..n)
            .map(|i| Observation::from_vec(i.to_string(), vec![i, i]))
            .collect()
    }

    #[test]
    fn test_split_sizes_and_coverage() {
        let (training, validation) = holdout(numbered(10), 0.2, 0).unwrap();
        assert_eq!(training.len(), 8);
        assert_eq!(validation.len(), 2);

        let mut labels: Vec<i32> = training
            .iter()
            .chain(validation.iter())
            .map(|o| o.label.parse().unwrap())
            .collect();
        labels.sort();
        assert_eq!(labels, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_gives_same_split() {
        let first = holdout(numbered(50), 0.3, 1234).unwrap();
        let second = holdout(numbered(50), 0.3, 1234).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_shuffle_differently() {
        let (a, _) = holdout(numbered(50), 0.3, 1).unwrap();
        let (b, _) = holdout(numbered(50), 0.3, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_fraction() {
        for fraction in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let result = holdout(numbered(10), fraction, 0);
            assert!(matches!(result, Err(SplitError::InvalidFraction(_))));
        }
    }

    #[test]
    fn test_too_few_observations() {
        assert_eq!(
            holdout(numbered(2), 0.1, 0),
            Err(SplitError::TooFewObservations {
                available: 2,
                fraction: 0.1
            })
        );
        assert!(matches!(
            holdout(numbered(0), 0.5, 0),
            Err(SplitError::TooFewObservations { available: 0, .. })
        ));
    }
}
