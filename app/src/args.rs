use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use ocr::reader::ReaderOptions;

use crate::classifier::DistanceMetric;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Recognizes handwritten digits with a nearest-neighbour classifier"
)]
pub struct Cli {
    /// Labeled observations to train on
    #[arg(long, value_name = "PATH")]
    pub training: PathBuf,

    /// Labeled observations to validate against (omit to hold out part of the training file)
    #[arg(long, value_name = "PATH")]
    pub validation: Option<PathBuf>,

    /// Fraction of the training file held out for validation when no validation file is given
    #[arg(long, default_value_t = 0.2, value_name = "FRACTION")]
    pub holdout: f64,

    /// Seed for the holdout shuffle
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub seed: u64,

    /// Distance metric used to find the nearest neighbour
    #[arg(long, value_enum, default_value_t = DistanceMetric::Manhattan)]
    pub metric: DistanceMetric,

    /// Field separator of the input files
    #[arg(long, default_value_t = ',', value_name = "CHAR")]
    pub delimiter: char,

    /// The input files have no header line
    #[arg(long)]
    pub no_header: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn reader_options(&self) -> Result<ReaderOptions> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(ReaderOptions {
            delimiter: self.delimiter as u8,
            has_header: !self.no_header,
        })
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
