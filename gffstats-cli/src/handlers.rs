use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use gffstats_core::FeatureReader;
use gffstats_io::StatsWrite;
use gffstats_summary::{FeatureFilter, FeatureStatistics, FeatureStatsAccumulator};

const PROGRESS_INTERVAL: u64 = 10_000;

/// Stream the GFF input into the accumulator, ticking a spinner as it goes.
fn collect_statistics(gff_path: &str, filter: FeatureFilter) -> Result<FeatureStatistics> {
    let mut reader = FeatureReader::from_path(gff_path)
        .with_context(|| format!("Failed to open GFF input: {}", gff_path))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} features)")?,
    );
    pb.set_message(format!("Reading {}", gff_path));

    let mut accumulator = FeatureStatsAccumulator::new(filter);
    for record in reader.by_ref() {
        let record = record.with_context(|| format!("Failed to parse GFF input: {}", gff_path))?;

        if accumulator.push(&record) && accumulator.total_features() % PROGRESS_INTERVAL == 0 {
            pb.set_position(accumulator.total_features());
        }
    }
    pb.finish_and_clear();

    debug!(
        "{} lines read, {} skipped",
        reader.lines_read(),
        reader.skipped_lines()
    );

    Ok(accumulator.finish())
}

pub fn run_gffstats(matches: &ArgMatches) -> Result<()> {
    let gff_path = matches
        .get_one::<String>("gff")
        .expect("--gff is required");
    let out_path = matches
        .get_one::<String>("out")
        .expect("--out is required");
    let filter = FeatureFilter::from(matches.get_one::<String>("filter-type").cloned());

    let stats = collect_statistics(gff_path, filter)?;

    let out = Path::new(out_path);
    let written = match out.extension().and_then(|e| e.to_str()) {
        Some("gz") => stats.write_json_gz(out),
        _ => stats.write_json(out),
    };
    written.with_context(|| format!("Failed to write statistics to {}", out_path))?;

    eprintln!("Statistics written to {}", out_path);

    Ok(())
}
