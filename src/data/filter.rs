use super::model::{PairFlags, PairTable};

// ---------------------------------------------------------------------------
// Subset catalogue
// ---------------------------------------------------------------------------

/// A named boolean combination of [`PairFlags`].
///
/// The first ten are counted in the summary; the `WdPosMissing*` pair only
/// feed the exported lists; `WdZeroComiAtLeast` carries the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subset {
    WdPos,
    WdPosCorr,
    WdPosComi,
    WdPosMissingBoth,
    WdPosCorrOnly,
    WdZero,
    WdZeroMissingBoth,
    WdZeroCorrOrComi,
    WdZeroCorrFound,
    WdZeroComiFound,
    WdPosMissingComi,
    WdPosMissingCorr,
    WdZeroComiAtLeast(f64),
}

impl Subset {
    pub fn matches(&self, f: &PairFlags) -> bool {
        use Subset::*;
        match *self {
            WdPos => f.wd_pos,
            WdPosCorr => f.wd_pos && f.corr_found,
            WdPosComi => f.wd_pos && f.comi_found,
            WdPosMissingBoth => f.wd_pos && !f.corr_found && !f.comi_found,
            WdPosCorrOnly => f.wd_pos && f.corr_found && !f.comi_found,
            WdZero => f.wd_zero,
            WdZeroMissingBoth => f.wd_zero && !f.corr_found && !f.comi_found,
            WdZeroCorrOrComi => f.wd_zero && (f.corr_found || f.comi_found),
            WdZeroCorrFound => f.wd_zero && f.corr_found,
            WdZeroComiFound => f.wd_zero && f.comi_found,
            WdPosMissingComi => f.wd_pos && !f.comi_found,
            WdPosMissingCorr => f.wd_pos && !f.corr_found,
            WdZeroComiAtLeast(threshold) => f.wd_zero && f.comi_at_least(threshold),
        }
    }

    /// File-name suffix of the pair list exported for this subset, if any.
    pub fn file_suffix(&self) -> Option<String> {
        use Subset::*;
        let suffix = match *self {
            WdPosMissingBoth => "wdpos_missing_both",
            WdPosMissingComi => "wdpos_missing_comigrator",
            WdPosMissingCorr => "wdpos_missing_correlation",
            WdPosCorrOnly => "wdpos_corr_not_comigrator",
            WdZeroMissingBoth => "wdzero_missing_both",
            WdZeroCorrOrComi => "wdzero_has_corr_or_comigrator",
            WdZeroComiAtLeast(threshold) => {
                return Some(format!("wdzero_comigrator_ge_{}", threshold_label(threshold)))
            }
            _ => return None,
        };
        Some(suffix.to_string())
    }
}

/// Threshold rendered with two decimals; non-finite values print as
/// `nan`, `inf` and `-inf`.
pub fn threshold_label(threshold: f64) -> String {
    if threshold.is_nan() {
        "nan".to_string()
    } else if threshold.is_infinite() {
        if threshold > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{threshold:.2}")
    }
}

/// Subsets exported as pair lists, in write order. The threshold list is
/// appended only when a threshold is given.
pub fn exported_subsets(threshold: Option<f64>) -> Vec<Subset> {
    let mut subsets = vec![
        Subset::WdPosMissingBoth,
        Subset::WdPosMissingComi,
        Subset::WdPosMissingCorr,
        Subset::WdPosCorrOnly,
        Subset::WdZeroMissingBoth,
        Subset::WdZeroCorrOrComi,
    ];
    if let Some(t) = threshold {
        subsets.push(Subset::WdZeroComiAtLeast(t));
    }
    subsets
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Indices of rows in `subset`, in input order.
pub fn selected_indices(table: &PairTable, subset: Subset) -> Vec<usize> {
    table
        .flags
        .iter()
        .enumerate()
        .filter(|(_, f)| subset.matches(f))
        .map(|(i, _)| i)
        .collect()
}

/// Number of rows in `subset`.
pub fn count(table: &PairTable, subset: Subset) -> usize {
    table.flags.iter().filter(|f| subset.matches(f)).count()
}
