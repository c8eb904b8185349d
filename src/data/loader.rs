use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info, warn};

use super::model::{
    PairRecord, PairTable, COL_COMIGRATOR, COL_CORRELATION, COL_PROT_A, COL_PROT_B, COL_WD,
    REQUIRED_COLUMNS,
};
use crate::error::CoverageError;

/// Cell texts read as "missing" and replaced by an empty string.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and classify a tab-separated pair table.
///
/// The header must name `ProtA`, `ProtB`, `WD`, `correlation` and
/// `CoMigratorScore`; any other columns are ignored. Values are kept as text,
/// short rows are padded with empty cells and cells past the header width
/// are dropped.
pub fn load_file(path: &Path) -> Result<PairTable, CoverageError> {
    let file = File::open(path).map_err(|source| CoverageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_reader(file, path)?;
    info!("loaded {} pairs from {}", table.len(), path.display());
    Ok(table)
}

/// Same as [`load_file`] over any reader. `origin` only labels errors.
pub fn load_reader<R: Read>(input: R, origin: &Path) -> Result<PairTable, CoverageError> {
    let csv_err = |source| CoverageError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = ColumnIndex::locate(&headers)?;
    debug!("header has {} columns", headers.len());

    let mut records = Vec::new();
    let mut short_rows = 0usize;

    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        if row.len() < headers.len() {
            short_rows += 1;
        }
        records.push(columns.extract(&row));
    }

    if short_rows > 0 {
        warn!("{short_rows} rows had fewer cells than the header; padded with empty values");
    }

    Ok(PairTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

/// Positions of the required columns within the header.
struct ColumnIndex {
    prot_a: usize,
    prot_b: usize,
    wd: usize,
    correlation: usize,
    comigrator: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, CoverageError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&name| position(name).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(CoverageError::Schema { missing });
        }

        let index = |name: &str| position(name).unwrap_or_default();
        Ok(ColumnIndex {
            prot_a: index(COL_PROT_A),
            prot_b: index(COL_PROT_B),
            wd: index(COL_WD),
            correlation: index(COL_CORRELATION),
            comigrator: index(COL_COMIGRATOR),
        })
    }

    fn extract(&self, row: &StringRecord) -> PairRecord {
        PairRecord {
            prot_a: cell(row, self.prot_a),
            prot_b: cell(row, self.prot_b),
            wd: cell(row, self.wd),
            correlation: cell(row, self.correlation),
            comigrator_score: cell(row, self.comigrator),
        }
    }
}

fn cell(row: &StringRecord, idx: usize) -> String {
    match row.get(idx) {
        Some(value) if !NA_TOKENS.contains(&value) => value.to_string(),
        _ => String::new(),
    }
}
