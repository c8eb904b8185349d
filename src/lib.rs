//! Coverage of WD-stratified protein pairs by correlation and CoMigratorScore.
//!
//! The library backs the `wd-coverage` and `wd-coverage-thresh` binaries:
//! load a tab-separated pair table, classify every row, count the named
//! subsets and export the pair lists.

pub mod cli;
pub mod data;
pub mod error;
pub mod report;

pub use error::CoverageError;
