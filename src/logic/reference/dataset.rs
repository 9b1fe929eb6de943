//! Dataset Reader - extracts the score column from a delimited file
//!
//! Other columns are ignored. A header row is required.

use std::io::Read;

use crate::error::{PredictorError, Result};
use super::population::ReferencePopulation;

/// How to read the reference dataset
#[derive(Debug, Clone)]
pub struct DatasetOptions {
    /// Column holding real-valued scores
    pub score_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            score_column: crate::constants::DEFAULT_SCORE_COLUMN.to_string(),
            delimiter: crate::constants::DEFAULT_DELIMITER,
        }
    }
}

/// Load the score column from a file on disk
pub fn load_reference_scores(path: &str, options: &DatasetOptions) -> Result<ReferencePopulation> {
    log::info!("Loading reference dataset from: {} (column: {})", path, options.score_column);

    let file = std::fs::File::open(path)
        .map_err(|e| PredictorError::artifact("dataset", path, e))?;

    let population = read_reference_scores(file, options, path)?;
    log::info!("Reference dataset loaded: {} scores", population.len());
    Ok(population)
}

/// Read the score column from any reader. `source` names it in errors.
pub fn read_reference_scores<R: Read>(
    reader: R,
    options: &DatasetOptions,
    source: &str,
) -> Result<ReferencePopulation> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| PredictorError::artifact("dataset", source, e))?;

    let column = headers
        .iter()
        .position(|h| h == options.score_column)
        .ok_or_else(|| {
            PredictorError::artifact(
                "dataset",
                source,
                format!("missing required column '{}'", options.score_column),
            )
        })?;

    let mut scores = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| PredictorError::artifact("dataset", source, e))?;

        // row 1 is the header
        let line = row + 2;
        let cell = record.get(column).ok_or_else(|| {
            PredictorError::artifact("dataset", source, format!("row {} has no '{}' cell", line, options.score_column))
        })?;

        let score: f64 = cell.parse().map_err(|_| {
            PredictorError::artifact(
                "dataset",
                source,
                format!("row {}: '{}' is not a number", line, cell),
            )
        })?;

        if !score.is_finite() {
            return Err(PredictorError::artifact(
                "dataset",
                source,
                format!("row {}: score '{}' is not finite", line, cell),
            ));
        }

        scores.push(score);
    }

    Ok(ReferencePopulation::new(scores))
}
