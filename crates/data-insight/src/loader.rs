//! CSV loading into a [`Table`].
//!
//! Parse failures (ragged rows, bad quoting, invalid UTF-8, empty input)
//! surface as [`InsightError::LoadFailed`]. Content is never rewritten to
//! make a broken file parse.
//!
//! Column types are first inferred from a sample of rows. If that schema
//! does not fit a later row, the file is read again with types inferred
//! from every row, so a column that turns textual late loads as text.

use crate::config::LoadOptions;
use crate::error::{InsightError, Result};
use crate::table::Table;
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions, NullValues};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Load a table from raw CSV bytes (e.g. an uploaded file).
pub fn load_csv_bytes(bytes: &[u8], options: &LoadOptions) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Err(e) = std::str::from_utf8(bytes) {
        return Err(InsightError::LoadFailed(format!(
            "input is not valid UTF-8 (byte offset {})",
            e.valid_up_to()
        )));
    }

    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(InsightError::LoadFailed("input is empty".to_string()));
    }

    let null_values = if options.null_values.is_empty() {
        None
    } else {
        Some(NullValues::AllColumns(
            options
                .null_values
                .iter()
                .map(|v| v.as_str().into())
                .collect(),
        ))
    };

    let sampled = read_frame(
        bytes,
        options,
        null_values.clone(),
        options.infer_schema_length,
    );
    let frame = match sampled {
        Ok(frame) => frame,
        // A sampled schema can mistype a column whose later rows differ.
        Err(e) if options.infer_schema_length.is_some() => {
            debug!("Sampled schema failed ({}); inferring from all rows", e);
            read_frame(bytes, options, null_values, None)
                .map_err(|e| InsightError::LoadFailed(e.to_string()))?
        }
        Err(e) => return Err(InsightError::LoadFailed(e.to_string())),
    };

    info!("Dataset loaded: {} rows x {} columns", frame.height(), frame.width());
    Ok(Table::new(frame))
}

fn read_frame(
    bytes: &[u8],
    options: &LoadOptions,
    null_values: Option<NullValues>,
    infer_schema_length: Option<usize>,
) -> PolarsResult<DataFrame> {
    let parse_options = CsvParseOptions::default()
        .with_separator(options.separator)
        .with_quote_char(Some(b'"'))
        .with_null_values(null_values);

    CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(infer_schema_length)
        .with_parse_options(parse_options)
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
}

/// Load a table from a CSV file on disk.
pub fn load_csv_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Table> {
    let path = path.as_ref();
    debug!("Reading CSV file: {}", path.display());
    let bytes = std::fs::read(path)?;
    load_csv_bytes(&bytes, options)
}
