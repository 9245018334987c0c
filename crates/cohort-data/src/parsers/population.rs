//! Survey population parser

use crate::error::{DataError, DataResult};
use crate::parsers::SourceParser;
use cohort_types::{RawSurveyRecord, SurveyRecord, COLUMNS};
use std::path::Path;

/// Field separator of the population file
pub const SEPARATOR: u8 = b';';

/// Parses the semicolon-separated population file
///
/// Columns beyond the five survey columns are ignored. Blank lines are
/// skipped; every other row must be complete and in-vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationParser;

impl PopulationParser {
    /// Create new population parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for PopulationParser {
    type Output = Vec<SurveyRecord>;

    fn parse(&self, content: &[u8], path: &Path) -> DataResult<Self::Output> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(SEPARATOR)
            .trim(csv::Trim::All)
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| DataError::malformed_row(path, 1, e.to_string()))?
            .clone();
        for column in COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| {
                let line = e.position().map_or(0, csv::Position::line);
                DataError::malformed_row(path, line, e.to_string())
            })?;
            let line = row.position().map_or(0, csv::Position::line);

            let raw: RawSurveyRecord = row
                .deserialize(Some(&headers))
                .map_err(|e| DataError::malformed_row(path, line, e.to_string()))?;
            let record = raw
                .validate()
                .map_err(|e| DataError::malformed_row(path, line, e.to_string()))?;
            records.push(record);
        }

        Ok(records)
    }

    fn describe(&self) -> &'static str {
        "population"
    }
}
