use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a pair table or writing the reports.
///
/// Only [`CoverageError::Schema`] is a domain error; row-level oddities are
/// absorbed by the classification defaults and never surface here.
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Missing columns in input: {}", column_list(.missing))]
    Schema { missing: Vec<String> },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Renders column names as `['ProtA', 'WD']`.
fn column_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}
