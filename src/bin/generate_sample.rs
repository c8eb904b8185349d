use anyhow::Context;
use clap::Parser;
use wd_coverage::cli::SampleCli;
use wd_coverage::data::sample::{generate_pairs, write_tsv};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = SampleCli::parse();
    let records = generate_pairs(cli.rows, cli.seed);
    write_tsv(&records, &cli.out).context("writing sample table")?;

    println!(
        "Wrote {} pairs (seed {}) to {}",
        records.len(),
        cli.seed,
        cli.out.display()
    );
    Ok(())
}
