// Mon Oct 19 2026 - Alex

use anyhow::Context;
use log::LevelFilter;
use platform_constants::{utils::LoggingUtils, LayoutReporter};
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    LoggingUtils::init_logger(LevelFilter::Warn);

    let reporter = LayoutReporter::new();
    let report = reporter
        .collect()
        .context("Failed to measure native layouts")?;

    let stdout = io::stdout();
    report
        .write_to(BufWriter::new(stdout.lock()))
        .context("Failed to write layout report")?;

    log::info!("Wrote {} facts for {}", report.facts().len(), report.profile());
    Ok(())
}
