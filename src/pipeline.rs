//! Driving the engine from a line-oriented input to the two outputs

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    config::FieldLayout,
    engine::AggregationEngine,
    error::Error,
    record::parse_line,
};

/// Tallies from one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input lines read
    pub lines: u64,
    /// Lines that became records and were fed to the engine
    pub accepted: u64,
    /// Well-formed lines rejected by the validity filter
    pub filtered: u64,
    /// Lines skipped because they couldn't be parsed
    pub malformed: u64,
    /// Lines written to the zip output
    pub zip_lines: u64,
    /// Lines written to the date output
    pub date_lines: u64,
}

/// One pass over an input stream
///
/// Zip lines are written as each record is processed; date lines are written once the input is exhausted.
/// Malformed lines are logged and skipped. I/O failures end the run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    layout: FieldLayout,
}

impl Pipeline {
    /// Constructs a pipeline reading fields according to `layout`
    pub fn new(layout: FieldLayout) -> Result<Self, Error> {
        layout.validate()?;
        Ok(Self { layout })
    }

    /// Processes every line of `input`, then flushes both writers
    pub fn run<R, Z, D>(&self, mut input: R, mut by_zip: Z, mut by_date: D) -> Result<RunStats, Error>
    where
        R: BufRead,
        Z: Write,
        D: Write,
    {
        let mut engine = AggregationEngine::new(self.layout.clone())?;
        let mut stats = RunStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            stats.lines += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_line(&line, &self.layout) {
                Ok(Some(record)) => {
                    stats.accepted += 1;
                    if let Some(summary) = engine.observe(&record) {
                        writeln!(by_zip, "{summary}")?;
                        stats.zip_lines += 1;
                    }
                }
                Ok(None) => stats.filtered += 1,
                Err(_e) => {
                    stats.malformed += 1;

                    #[cfg(feature = "log")]
                    log::warn!("Skipping malformed line {}: {}", stats.lines, _e);

                    #[cfg(not(feature = "log"))]
                    eprintln!("Skipping malformed line {}: {}", stats.lines, _e);
                }
            }
        }
        by_zip.flush()?;

        for summary in engine.flush() {
            writeln!(by_date, "{summary}")?;
            stats.date_lines += 1;
        }
        by_date.flush()?;

        #[cfg(feature = "log")]
        log::info!(
            "Read {} lines: {} accepted, {} filtered, {} malformed",
            stats.lines,
            stats.accepted,
            stats.filtered,
            stats.malformed
        );

        Ok(stats)
    }

    /// Reads `input` and writes both outputs to files, creating or truncating them
    pub fn run_files(
        &self,
        input: impl AsRef<Path>,
        by_zip: impl AsRef<Path>,
        by_date: impl AsRef<Path>,
    ) -> Result<RunStats, Error> {
        let input = BufReader::new(File::open(input)?);
        let by_zip = BufWriter::new(File::create(by_zip)?);
        let by_date = BufWriter::new(File::create(by_date)?);

        self.run(input, by_zip, by_date)
    }
}
