//! Reads an FEC contributions file and writes running medians by zip code and by date

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use donor_medians::{FieldLayout, Pipeline};

#[derive(Debug, Parser)]
#[command(
    name = "find-political-donors",
    version,
    about = "Running contribution medians by recipient and zip code, and by recipient and date"
)]
struct Cli {
    #[arg(value_name = "INPUT", help = "Pipe-delimited contributions file")]
    input: PathBuf,
    #[arg(value_name = "BY_ZIP", help = "Output for running statistics by zip code")]
    by_zip: PathBuf,
    #[arg(value_name = "BY_DATE", help = "Output for final statistics by date")]
    by_date: PathBuf,
    #[arg(
        long,
        default_value_t = '|',
        help = "Field separator used by the input file"
    )]
    delimiter: char,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let layout = FieldLayout {
        delimiter: cli.delimiter,
        ..FieldLayout::default()
    };
    let pipeline = Pipeline::new(layout)?;

    let stats = pipeline
        .run_files(&cli.input, &cli.by_zip, &cli.by_date)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    log::info!(
        "Wrote {} zip lines to {} and {} date lines to {}",
        stats.zip_lines,
        cli.by_zip.display(),
        stats.date_lines,
        cli.by_date.display()
    );

    Ok(())
}
