//! Loading observations from delimited text files.
//!
//! Each record holds the label in its first field followed by one field per
//! feature, e.g. a 28x28 digit is a label and 784 pixel intensities:
//!
//! ```text
//! label,pixel0,pixel1,...,pixel783
//! 7,0,0,...,0
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ocr_helpers::{Feature, Observation};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading observations.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Malformed input, including records whose field count differs from the others.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("record {record} has an empty label")]
    MissingLabel { record: usize },
    #[error("record {record} has a label but no features")]
    NoFeatures { record: usize },
    #[error("record {record}, column {column}: invalid feature value {value:?}")]
    InvalidFeature {
        record: usize,
        column: usize,
        value: String,
    },
}

/// How the input text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Field separator.
    pub delimiter: u8,
    /// Whether the first line is a header to skip.
    pub has_header: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }
}

/// Reads every observation in the file at `path`.
pub fn read_observations<T, P>(
    path: P,
    options: &ReaderOptions,
) -> Result<Vec<Observation<String, T>>, ReadError>
where
    T: Feature + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let observations = read_observations_from(file, options)?;
    debug!(path = %path.display(), observations = observations.len(), "observations read");
    Ok(observations)
}

/// Reads every observation from `input`.
///
/// Records are numbered from 1, not counting the header.
pub fn read_observations_from<T, R>(
    input: R,
    options: &ReaderOptions,
) -> Result<Vec<Observation<String, T>>, ReadError>
where
    T: Feature + FromStr,
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .from_reader(input);

    let mut observations = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let number = index + 1;

        let label = record.get(0).map(str::trim).unwrap_or_default();
        if label.is_empty() {
            return Err(ReadError::MissingLabel { record: number });
        }
        if record.len() < 2 {
            return Err(ReadError::NoFeatures { record: number });
        }

        let features = record
            .iter()
            .enumerate()
            .skip(1)
            .map(|(column, field)| {
                field
                    .trim()
                    .parse::<T>()
                    .map_err(|_| ReadError::InvalidFeature {
                        record: number,
                        column,
                        value: field.to_string(),
                    })
            })
            .collect::<Result<Vec<T>, _>>()?;

        observations.push(Observation::from_vec(label.to_string(), features));
    }

    Ok(observations)
}
