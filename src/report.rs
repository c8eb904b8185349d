use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::data::filter::{count, exported_subsets, selected_indices, threshold_label, Subset};
use crate::data::loader::load_file;
use crate::data::model::PairTable;
use crate::error::CoverageError;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Resolved settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Prefix of every output file (`<prefix>.<suffix>.txt`).
    pub out_prefix: String,
    /// CoMigratorScore threshold; `None` skips the threshold subset.
    pub comi_threshold: Option<f64>,
}

impl ReportOptions {
    /// Output path for an exported subset.
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}.{suffix}.txt", self.out_prefix))
    }
}

// ---------------------------------------------------------------------------
// Summary counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    pub total_rows: usize,

    pub wd_pos: usize,
    pub wd_pos_corr: usize,
    pub wd_pos_comi: usize,
    pub wd_pos_missing_both: usize,
    pub wdpos_corr_only: usize,

    pub wd_zero: usize,
    pub wd_zero_missing_both: usize,
    pub wd_zero_corr_or_comi: usize,
    pub wd_zero_corr_found: usize,
    pub wd_zero_comi_found: usize,

    /// `(threshold, count)` of WD == 0 rows whose numeric score reaches it.
    pub wdzero_comi_ge: Option<(f64, usize)>,

    /// Pair lists written, in write order.
    pub written: Vec<PathBuf>,
}

impl CoverageSummary {
    /// Count every catalogued subset over `table`.
    pub fn compute(table: &PairTable, comi_threshold: Option<f64>) -> Self {
        let n = |subset| count(table, subset);
        CoverageSummary {
            total_rows: table.len(),
            wd_pos: n(Subset::WdPos),
            wd_pos_corr: n(Subset::WdPosCorr),
            wd_pos_comi: n(Subset::WdPosComi),
            wd_pos_missing_both: n(Subset::WdPosMissingBoth),
            wdpos_corr_only: n(Subset::WdPosCorrOnly),
            wd_zero: n(Subset::WdZero),
            wd_zero_missing_both: n(Subset::WdZeroMissingBoth),
            wd_zero_corr_or_comi: n(Subset::WdZeroCorrOrComi),
            wd_zero_corr_found: n(Subset::WdZeroCorrFound),
            wd_zero_comi_found: n(Subset::WdZeroComiFound),
            wdzero_comi_ge: comi_threshold.map(|t| (t, n(Subset::WdZeroComiAtLeast(t)))),
            written: Vec::new(),
        }
    }
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SUMMARY ===")?;
        writeln!(f, "Total rows: {}", self.total_rows)?;
        writeln!(f)?;
        writeln!(f, "WD > 0: {}", self.wd_pos)?;
        writeln!(f, "WD > 0 with correlation found: {}", self.wd_pos_corr)?;
        writeln!(f, "WD > 0 with CoMigratorScore found: {}", self.wd_pos_comi)?;
        writeln!(
            f,
            "WD > 0 missing BOTH (correlation + CoMigratorScore): {}",
            self.wd_pos_missing_both
        )?;
        writeln!(
            f,
            "WD > 0 correlation found BUT CoMigratorScore notFound: {}",
            self.wdpos_corr_only
        )?;
        writeln!(f)?;
        writeln!(f, "WD == 0: {}", self.wd_zero)?;
        writeln!(
            f,
            "WD == 0 missing BOTH (notFound in both): {}",
            self.wd_zero_missing_both
        )?;
        writeln!(
            f,
            "WD == 0 with correlation OR CoMigratorScore found: {}",
            self.wd_zero_corr_or_comi
        )?;
        writeln!(f, "  WD == 0 with correlation found: {}", self.wd_zero_corr_found)?;
        writeln!(
            f,
            "  WD == 0 with CoMigratorScore found: {}",
            self.wd_zero_comi_found
        )?;
        if let Some((threshold, n)) = self.wdzero_comi_ge {
            writeln!(
                f,
                "WD == 0 with CoMigratorScore >= {}: {n}",
                threshold_label(threshold)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Wrote:")?;
        for path in &self.written {
            writeln!(f, "  {}", path.display())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pair-list export
// ---------------------------------------------------------------------------

/// Write one `ProtA\tProtB` list per exported subset and return the paths in
/// write order. Rows keep their input order; every file has a header row.
pub fn write_pair_lists(
    table: &PairTable,
    options: &ReportOptions,
) -> Result<Vec<PathBuf>, CoverageError> {
    let mut written = Vec::new();
    for subset in exported_subsets(options.comi_threshold) {
        let Some(suffix) = subset.file_suffix() else {
            continue;
        };
        let path = options.output_path(&suffix);
        let rows = selected_indices(table, subset);
        write_pairs(table, &rows, &path)?;
        debug!("{}: {} pairs", path.display(), rows.len());
        written.push(path);
    }
    Ok(written)
}

fn write_pairs(table: &PairTable, rows: &[usize], path: &Path) -> Result<(), CoverageError> {
    let csv_err = |source| CoverageError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(|source| CoverageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    if rows.is_empty() {
        // serialize() only emits the header alongside the first record
        writer.write_record(["ProtA", "ProtB"]).map_err(csv_err)?;
    }
    for &i in rows {
        writer.serialize(table.records[i].ids()).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| CoverageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Whole run
// ---------------------------------------------------------------------------

/// Load `infile`, write every pair list and return the filled-in summary.
///
/// A schema error surfaces before any file is created.
pub fn run(infile: &Path, options: &ReportOptions) -> Result<CoverageSummary, CoverageError> {
    let table = load_file(infile)?;
    let mut summary = CoverageSummary::compute(&table, options.comi_threshold);
    summary.written = write_pair_lists(&table, options)?;
    info!(
        "wrote {} pair lists with prefix {}",
        summary.written.len(),
        options.out_prefix
    );
    Ok(summary)
}
