//! Command-line surfaces of the report binaries, using clap.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::report::ReportOptions;

pub const DEFAULT_OUT_PREFIX: &str = "report";
pub const DEFAULT_COMI_THRESHOLD: f64 = 0.93;

// Arguments shared by both report variants.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Tab-separated pair table (ProtA, ProtB, WD, correlation, CoMigratorScore)
    #[arg(long)]
    pub infile: PathBuf,

    /// Prefix for output txt files
    #[arg(long = "out_prefix", default_value = DEFAULT_OUT_PREFIX)]
    pub out_prefix: String,
}

/// Summarize coverage of WD>0 pairs in correlation vs CoMigratorScore.
#[derive(Parser, Debug)]
#[command(name = "wd-coverage", version, about, long_about = None)]
pub struct CoverageCli {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CoverageCli {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            out_prefix: self.input.out_prefix.clone(),
            comi_threshold: None,
        }
    }
}

/// Summarize coverage of WD>0 pairs in correlation vs CoMigratorScore,
/// plus WD==0 pairs whose CoMigratorScore reaches a threshold.
#[derive(Parser, Debug)]
#[command(name = "wd-coverage-thresh", version, about, long_about = None)]
pub struct ThresholdCli {
    #[command(flatten)]
    pub input: InputArgs,

    /// Threshold for CoMigratorScore
    #[arg(long = "comi_thresh", default_value_t = DEFAULT_COMI_THRESHOLD)]
    pub comi_thresh: f64,
}

impl ThresholdCli {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            out_prefix: self.input.out_prefix.clone(),
            comi_threshold: Some(self.comi_thresh),
        }
    }
}

/// Write a synthetic pair table for trying out the report binaries.
#[derive(Parser, Debug)]
#[command(name = "generate-sample", version, about, long_about = None)]
pub struct SampleCli {
    /// Number of pairs to generate
    #[arg(long, default_value_t = 500)]
    pub rows: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output path
    #[arg(long, default_value = "sample_pairs.tsv")]
    pub out: PathBuf,
}
