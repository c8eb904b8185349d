/// Data layer: pair records, loading, and subset selection.
///
/// Architecture:
/// ```text
///   pairs.tsv
///       │
///       ▼
///   ┌──────────┐
///   │  loader  │  parse + validate header → PairTable
///   └──────────┘
///       │
///       ▼
///   ┌───────────┐
///   │ PairTable │  Vec<PairRecord>, Vec<PairFlags>
///   └───────────┘
///       │
///       ▼
///   ┌──────────┐
///   │  filter  │  Subset predicates → selected row indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
