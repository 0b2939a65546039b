use std::path::Path;

use anyhow::{Context, Result};
use ocr::evaluator::Accuracy;
use ocr::reader::{self, ReaderOptions};
use ocr::{Observation, split};
use tracing::info;

use crate::args::Cli;
use crate::classifier::DistanceMetric;

/// Everything needed for one train-and-validate run.
pub struct App {
    pub training_set: Vec<Observation<String, i32>>,
    pub validation_set: Vec<Observation<String, i32>>,
    pub metric: DistanceMetric,
}

impl App {
    /// Loads the training data and either loads the validation data or
    /// holds part of the training data out for it.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let options = cli.reader_options()?;

        println!("Reading training data from {}", cli.training.display());
        let training = load(&cli.training, &options)?;

        let (training_set, validation_set) = match &cli.validation {
            Some(path) => {
                println!("Reading validation data from {}", path.display());
                (training, load(path, &options)?)
            }
            None => {
                info!(
                    fraction = cli.holdout,
                    seed = cli.seed,
                    "no validation file, holding out part of the training data"
                );
                split::holdout(training, cli.holdout, cli.seed)
                    .context("failed to hold out a validation set")?
            }
        };

        Ok(Self {
            training_set,
            validation_set,
            metric: cli.metric,
        })
    }

    pub fn run(&self) -> Result<Accuracy> {
        info!(
            training = self.training_set.len(),
            validation = self.validation_set.len(),
            metric = ?self.metric,
            "validating the classifier"
        );
        println!("Validating the classifier...");
        let accuracy = self
            .metric
            .evaluate(&self.training_set, &self.validation_set)
            .context("validation failed")?;
        println!("Classification score: {}", accuracy);
        Ok(accuracy)
    }
}

fn load(path: &Path, options: &ReaderOptions) -> Result<Vec<Observation<String, i32>>> {
    reader::read_observations(path, options)
        .with_context(|| format!("failed to read observations from {}", path.display()))
}
