use serde::Serialize;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_PROT_A: &str = "ProtA";
pub const COL_PROT_B: &str = "ProtB";
pub const COL_WD: &str = "WD";
pub const COL_CORRELATION: &str = "correlation";
pub const COL_COMIGRATOR: &str = "CoMigratorScore";

/// Columns every input table must carry, in the order they are reported
/// when missing.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_PROT_A,
    COL_PROT_B,
    COL_WD,
    COL_CORRELATION,
    COL_COMIGRATOR,
];

/// The dataset's "score unavailable" marker.
pub const NOT_FOUND: &str = "notFound";

// ---------------------------------------------------------------------------
// PairRecord – one row of the input table
// ---------------------------------------------------------------------------

/// A protein pair as read from the table. Every field is kept as text;
/// missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PairRecord {
    #[serde(rename = "ProtA")]
    pub prot_a: String,
    #[serde(rename = "ProtB")]
    pub prot_b: String,
    #[serde(rename = "WD")]
    pub wd: String,
    #[serde(rename = "correlation")]
    pub correlation: String,
    #[serde(rename = "CoMigratorScore")]
    pub comigrator_score: String,
}

/// The identity columns written to every pair list.
#[derive(Debug, Serialize)]
pub struct PairIds<'a> {
    #[serde(rename = "ProtA")]
    pub prot_a: &'a str,
    #[serde(rename = "ProtB")]
    pub prot_b: &'a str,
}

impl PairRecord {
    pub fn ids(&self) -> PairIds<'_> {
        PairIds {
            prot_a: &self.prot_a,
            prot_b: &self.prot_b,
        }
    }
}

// ---------------------------------------------------------------------------
// PairFlags – classification derived once per row
// ---------------------------------------------------------------------------

/// Per-row classification. A negative WD is neither `wd_pos` nor `wd_zero`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairFlags {
    pub wd_pos: bool,
    pub wd_zero: bool,
    pub corr_found: bool,
    pub comi_found: bool,
    /// Numeric CoMigratorScore; `None` when the text does not parse.
    pub comi_value: Option<f64>,
}

impl PairFlags {
    pub fn derive(record: &PairRecord) -> Self {
        let wd = parse_number(&record.wd).unwrap_or(0.0);
        PairFlags {
            wd_pos: wd > 0.0,
            wd_zero: wd == 0.0,
            corr_found: is_found(&record.correlation),
            comi_found: is_found(&record.comigrator_score),
            comi_value: parse_number(&record.comigrator_score),
        }
    }

    /// Whether the numeric CoMigratorScore reaches `threshold`.
    pub fn comi_at_least(&self, threshold: f64) -> bool {
        self.comi_value.is_some_and(|v| v >= threshold)
    }
}

/// A score counts as found unless it is blank or the `notFound` marker.
pub fn is_found(score: &str) -> bool {
    let s = score.trim();
    !s.is_empty() && s != NOT_FOUND
}

/// Lenient float parse: surrounding whitespace is ignored and NaN counts as
/// unparseable.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ---------------------------------------------------------------------------
// PairTable – the loaded, classified table
// ---------------------------------------------------------------------------

/// All records in input order, with their flags at matching indices.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    pub records: Vec<PairRecord>,
    pub flags: Vec<PairFlags>,
}

impl PairTable {
    /// Classify every record.
    pub fn from_records(records: Vec<PairRecord>) -> Self {
        let flags = records.iter().map(PairFlags::derive).collect();
        PairTable { records, flags }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairRecord, &PairFlags)> {
        self.records.iter().zip(self.flags.iter())
    }
}
