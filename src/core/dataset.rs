use crate::core::filters::in_region;
use crate::models::PlaceRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column positions in a GeoNames-style row
pub const FIELD_NAME: usize = 1;
pub const FIELD_LATITUDE: usize = 4;
pub const FIELD_LONGITUDE: usize = 5;
pub const FIELD_REGION_CODE: usize = 8;

/// Minimum number of fields a row must carry
pub const MIN_FIELDS: usize = FIELD_REGION_CODE + 1;

/// Region kept when none is configured
pub const DEFAULT_REGION_CODE: &str = "GB";

/// Errors that can occur while building the dataset
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("failed to open data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Immutable, ordered collection of places
///
/// Built once at startup. Iteration order is the order rows were supplied in.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PlaceRecord>,
}

impl Dataset {
    /// Build a dataset from rows of fields, keeping only rows in `region_code`
    ///
    /// Rows are numbered from 1 in error messages.
    pub fn build<I, R, F>(rows: I, region_code: &str) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut records = Vec::new();

        for (idx, row) in rows.into_iter().enumerate() {
            let fields: Vec<&str> = row.as_ref().iter().map(|field| field.as_ref()).collect();
            if let Some(record) = record_in_region(idx + 1, &fields, region_code)? {
                records.push(record);
            }
        }

        Ok(Self { records })
    }

    /// Build a dataset from headerless, comma separated CSV
    pub fn from_reader<R: Read>(reader: R, region_code: &str) -> Result<Self, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();

        for (idx, result) in csv_reader.records().enumerate() {
            let row = result?;
            let fields: Vec<&str> = row.iter().collect();
            if let Some(record) = record_in_region(idx + 1, &fields, region_code)? {
                records.push(record);
            }
        }

        Ok(Self { records })
    }

    /// Load the dataset from a CSV file on disk
    pub fn load<P: AsRef<Path>>(path: P, region_code: &str) -> Result<Self, DataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file, region_code)?;

        tracing::info!(
            "Loaded {} places for region {} from {}",
            dataset.len(),
            region_code,
            path.display()
        );

        Ok(dataset)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PlaceRecord;
    type IntoIter = std::slice::Iter<'a, PlaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl PlaceRecord {
    /// Build a record from one row of fields
    ///
    /// Reads the name, latitude and longitude columns. `line` is only used
    /// in error messages.
    pub fn from_row(line: usize, fields: &[&str]) -> Result<Self, DataError> {
        check_field_count(line, fields)?;

        let latitude = parse_coordinate(line, "latitude", fields[FIELD_LATITUDE])?;
        let longitude = parse_coordinate(line, "longitude", fields[FIELD_LONGITUDE])?;

        Ok(Self::new(fields[FIELD_NAME], latitude, longitude))
    }
}

/// Turn one row into a record, or `None` when it belongs to another region
fn record_in_region(
    line: usize,
    fields: &[&str],
    region_code: &str,
) -> Result<Option<PlaceRecord>, DataError> {
    check_field_count(line, fields)?;

    if !in_region(fields[FIELD_REGION_CODE], region_code) {
        return Ok(None);
    }

    PlaceRecord::from_row(line, fields).map(Some)
}

fn check_field_count(line: usize, fields: &[&str]) -> Result<(), DataError> {
    if fields.len() < MIN_FIELDS {
        return Err(DataError::MalformedRow {
            line,
            reason: format!("expected at least {} fields, got {}", MIN_FIELDS, fields.len()),
        });
    }
    Ok(())
}

fn parse_coordinate(line: usize, field: &str, raw: &str) -> Result<f64, DataError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) => Err(DataError::MalformedRow {
            line,
            reason: format!("{} is not finite: {}", field, value),
        }),
        Err(e) => Err(DataError::MalformedRow {
            line,
            reason: format!("failed to parse {} {:?}: {}", field, raw, e),
        }),
    }
}
