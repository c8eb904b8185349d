use std::fs;
use std::path::{Path, PathBuf};

use wd_coverage::report::{run, ReportOptions};
use wd_coverage::CoverageError;

const HEADER: &str = "ProtA\tProtB\tWD\tcorrelation\tCoMigratorScore\textra";

fn write_input(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("pairs.tsv");
    let mut text = format!("{HEADER}\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(&path, text).unwrap();
    path
}

fn options(dir: &Path, threshold: Option<f64>) -> ReportOptions {
    ReportOptions {
        out_prefix: dir.join("report").to_string_lossy().into_owned(),
        comi_threshold: threshold,
    }
}

/// Pair rows of a written list, header excluded.
fn pairs(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ProtA\tProtB"), "{}", path.display());
    lines.map(str::to_string).collect()
}

fn rows() -> Vec<&'static str> {
    vec![
        "P1\tQ1\t2.5\t0.8\t0.91\tx",
        "P2\tQ2\t1\t0.4\tnotFound\tx",
        "P3\tQ3\t3\tnotFound\t0.5\tx",
        "P4\tQ4\t0.7\tnotFound\tnotFound\tx",
        "P5\tQ5\t0\tnotFound\t0.95\tx",
        "P6\tQ6\t0\t0.2\t\tx",
        "P7\tQ7\t0\tnotFound\tnotFound\tx",
        "P8\tQ8\tbad\t\t0.99\tx",
        "P9\tQ9\t-1\t0.5\tnotFound\tx",
    ]
}

#[test]
fn writes_six_lists_without_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let infile = write_input(dir.path(), &rows());
    let opts = options(dir.path(), None);

    let summary = run(&infile, &opts).unwrap();
    assert_eq!(summary.total_rows, 9);
    assert_eq!(summary.wd_pos, 4);
    assert_eq!(summary.wd_pos_corr, 2);
    assert_eq!(summary.wd_pos_comi, 2);
    assert_eq!(summary.wd_pos_missing_both, 1);
    assert_eq!(summary.wdpos_corr_only, 1);
    assert_eq!(summary.wd_zero, 4);
    assert_eq!(summary.wd_zero_missing_both, 1);
    assert_eq!(summary.wd_zero_corr_or_comi, 3);
    assert_eq!(summary.wd_zero_corr_found, 1);
    assert_eq!(summary.wd_zero_comi_found, 2);
    assert_eq!(summary.written.len(), 6);

    let list = |suffix: &str| pairs(&opts.output_path(suffix));
    assert_eq!(list("wdpos_missing_both"), vec!["P4\tQ4"]);
    assert_eq!(list("wdpos_missing_comigrator"), vec!["P2\tQ2", "P4\tQ4"]);
    assert_eq!(list("wdpos_missing_correlation"), vec!["P3\tQ3", "P4\tQ4"]);
    assert_eq!(list("wdpos_corr_not_comigrator"), vec!["P2\tQ2"]);
    assert_eq!(list("wdzero_missing_both"), vec!["P7\tQ7"]);
    assert_eq!(
        list("wdzero_has_corr_or_comigrator"),
        vec!["P5\tQ5", "P6\tQ6", "P8\tQ8"]
    );

    // The negative-WD pair appears in no list.
    for path in &summary.written {
        assert!(!pairs(path).iter().any(|p| p.starts_with("P9")));
    }
    assert!(!opts.output_path("wdzero_comigrator_ge_0.93").exists());
}

#[test]
fn threshold_variant_adds_seventh_list() {
    let dir = tempfile::tempdir().unwrap();
    let infile = write_input(dir.path(), &rows());
    let opts = options(dir.path(), Some(0.93));

    let summary = run(&infile, &opts).unwrap();
    assert_eq!(summary.wdzero_comi_ge, Some((0.93, 2)));
    assert_eq!(summary.written.len(), 7);

    let last = summary.written.last().unwrap();
    assert_eq!(last, &opts.output_path("wdzero_comigrator_ge_0.93"));
    assert_eq!(pairs(last), vec!["P5\tQ5", "P8\tQ8"]);

    let text = summary.to_string();
    assert!(text.contains("WD == 0 with CoMigratorScore >= 0.93: 2\n"));
    assert!(text.ends_with(&format!("  {}\n", last.display())));
}

#[test]
fn wd_zero_lists_plus_negatives_cover_zero_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let infile = write_input(dir.path(), &rows());
    let opts = options(dir.path(), None);
    let summary = run(&infile, &opts).unwrap();

    let missing = pairs(&opts.output_path("wdzero_missing_both"));
    let has = pairs(&opts.output_path("wdzero_has_corr_or_comigrator"));
    assert_eq!(missing.len() + has.len(), summary.wd_zero);
    assert!(missing.iter().all(|p| !has.contains(p)));
    assert_eq!(summary.wd_zero + summary.wd_pos + 1, summary.total_rows);
}

#[test]
fn empty_lists_still_have_header() {
    let dir = tempfile::tempdir().unwrap();
    let infile = write_input(dir.path(), &["P1\tQ1\t-3\t0.1\t0.2\tx"]);
    let opts = options(dir.path(), Some(0.5));

    let summary = run(&infile, &opts).unwrap();
    assert_eq!(summary.written.len(), 7);
    for path in &summary.written {
        assert_eq!(fs::read_to_string(path).unwrap(), "ProtA\tProtB\n");
    }
}

#[test]
fn missing_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pairs.tsv");
    fs::write(&infile, "ProtA\tProtB\tcorrelation\tCoMigratorScore\nA\tB\t0.5\t0.9\n").unwrap();
    let opts = options(dir.path(), Some(0.93));

    let err = run(&infile, &opts).unwrap_err();
    assert!(matches!(&err, CoverageError::Schema { missing } if missing == &["WD"]));
    assert_eq!(err.to_string(), "Missing columns in input: ['WD']");

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the input file should exist");
}
