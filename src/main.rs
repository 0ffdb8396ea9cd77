//! PullView - WOT pull analyzer for engine-controller datalog exports
//!
//! Scans a directory for `.csv` datalog exports and, for each file, prints
//! a pull performance summary and opens an interactive chart of the pull.
//! Every failure is file-scoped: the file is announced and skipped, and the
//! batch continues.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context};

use pullview::analysis::window::{extract, Strategy};
use pullview::app;
use pullview::parsers;
use pullview::report::PullSummary;
use pullview::schema::Schema;
use pullview::state::LoadedPull;

struct Options {
    directory: PathBuf,
    strategy: Strategy,
    show_chart: bool,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options {
        directory: std::env::current_dir()?,
        strategy: Strategy::default(),
        show_chart: true,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-chart" => options.show_chart = false,
            "--strategy" => {
                let value = args
                    .next()
                    .context("--strategy requires a value (intersecting | threshold-crossing)")?;
                options.strategy = Strategy::from_str(&value)
                    .map_err(|_| anyhow::anyhow!("unknown strategy: {}", value))?;
            }
            other if other.starts_with("--") => bail!("unknown flag: {}", other),
            other => options.directory = PathBuf::from(other),
        }
    }

    Ok(options)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let options = parse_args()?;

    // Registry mismatches are configuration errors and fatal up front;
    // nothing downstream can produce a correct metric without the registry
    let schema = Schema::new().context("column registry failed validation")?;

    let mut entries: Vec<PathBuf> = std::fs::read_dir(&options.directory)
        .with_context(|| format!("failed to read directory {}", options.directory.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();

    if entries.is_empty() {
        println!("no .csv files in {}", options.directory.display());
        return Ok(());
    }

    // Directory listing order is platform-dependent; sort for a stable run
    entries.sort();

    for path in entries {
        println!("{}", path.display());
        if let Err(err) = process_file(&path, &schema, &options) {
            tracing::warn!("skipping {}: {:#}", path.display(), err);
            println!("skipping {}: {:#}", path.display(), err);
        }
        println!();
    }

    Ok(())
}

/// Load, window, summarize, and chart one file
fn process_file(path: &Path, schema: &Schema, options: &Options) -> anyhow::Result<()> {
    let table = parsers::parse_file(path, schema)
        .with_context(|| format!("failed to load {}", path.display()))?;

    // Summary metrics come from the tightly-trimmed window
    let summary_window = extract(&table, options.strategy)?;
    let trimmed = summary_window.apply(&table);
    let summary = PullSummary::compute(&trimmed)?;
    for line in summary.lines() {
        println!("{}", line);
    }

    if options.show_chart {
        // The chart gets the threshold-crossing window: padding on both
        // sides shows the launch and the lift
        let chart_window = extract(&table, Strategy::ThresholdCrossing)?;
        let pull = LoadedPull::new(path.to_path_buf(), table, chart_window);
        app::show(&pull)?;
    }

    Ok(())
}
