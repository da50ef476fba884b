//! Data Loading
//!
//! Reads location tables with Polars. Every column is read as text so that
//! numeric coercion and category normalization happen in one place
//! (`RawLocationRow::into_record`), whatever the source spreadsheet did.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::error::{Result, ScoringError};
use crate::records::{clean_rows, IngestOptions, LocationRecord, RawLocationRow};

pub const COL_NAME: &str = "name";
pub const COL_PRICE: &str = "price_per_m2";
pub const COL_FLOOD_RISK: &str = "flood_risk";
pub const COL_CROWD_LEVEL: &str = "crowd_level";
pub const COL_PROXIMITY: &str = "proximity_to_public_facilities";
pub const COL_GREEN_SPACE: &str = "green_space_percent";

/// Columns a location table must provide, in row-field order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_PRICE,
    COL_FLOOD_RISK,
    COL_CROWD_LEVEL,
    COL_PROXIMITY,
    COL_GREEN_SPACE,
];

/// A validated location table
pub struct LocationTable {
    frame: DataFrame,
    /// Actual header for each entry of `REQUIRED_COLUMNS`
    columns: [String; 6],
}

impl LocationTable {
    /// Load a CSV file
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading location table");

        let frame = text_csv_options()
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        Self::from_frame(frame)
    }

    /// Parse CSV already held in memory
    pub fn from_csv_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let frame = text_csv_options()
            .into_reader_with_file_handle(Cursor::new(bytes.into()))
            .finish()?;

        Self::from_frame(frame)
    }

    /// Wrap an existing frame, checking that every required column exists.
    ///
    /// Headers match case-insensitively after trimming.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let mut columns: [String; 6] = Default::default();
        for (slot, wanted) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = resolve_column(&frame, wanted)?;
        }

        tracing::info!(rows = frame.height(), "Location table ready");
        Ok(Self { frame, columns })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Every row as uncleaned text cells
    pub fn raw_rows(&self) -> Result<Vec<RawLocationRow>> {
        let mut cells: Vec<Vec<Option<String>>> = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for name in &self.columns {
            cells.push(text_cells(&self.frame, name)?);
        }

        let rows = (0..self.frame.height())
            .map(|idx| {
                let mut take = |col: usize| cells[col][idx].take();
                RawLocationRow {
                    name: take(0),
                    price_per_m2: take(1),
                    flood_risk: take(2),
                    crowd_level: take(3),
                    proximity_to_public_facilities: take(4),
                    green_space_percent: take(5),
                }
            })
            .collect();

        Ok(rows)
    }

    /// Cleaned records; rows without a name are dropped
    pub fn records(&self, options: &IngestOptions) -> Result<Vec<LocationRecord>> {
        let raw = self.raw_rows()?;
        let total = raw.len();
        let records = clean_rows(raw, options);

        if records.len() < total {
            tracing::warn!(
                skipped = total - records.len(),
                "Dropped rows without a location name"
            );
        }
        Ok(records)
    }
}

/// CSV options that keep every column as text
fn text_csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

fn resolve_column(frame: &DataFrame, wanted: &str) -> Result<String> {
    frame
        .get_column_names()
        .into_iter()
        .find(|name| name.trim().eq_ignore_ascii_case(wanted))
        .map(|name| name.to_string())
        .ok_or_else(|| ScoringError::MissingRequiredField(wanted.to_string()))
}

fn text_cells(frame: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = frame.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .into_iter()
        .map(|cell| cell.map(str::to_string))
        .collect();
    Ok(values)
}
