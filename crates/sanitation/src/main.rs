// File: crates/sanitation/src/main.rs
// Summary: CLI; maps flags onto RunOptions and runs the pipeline once.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sanitation::{run, ArtifactPaths, PipelineMode, RunOptions};
use wb_indicator::fetch::{DEFAULT_BASE_URL, SANITATION_INDICATOR};
use wb_indicator::{DateRange, IndicatorQuery, TextCodec};

/// Plot access to improved sanitation facilities by income cohort.
#[derive(Debug, Parser)]
#[command(name = "sanitation", version)]
struct Cli {
    /// Re-fetch the indicator and rebuild the tabular file before plotting.
    #[arg(long)]
    refresh: bool,

    /// Save the PNG without opening a window.
    #[arg(long)]
    no_display: bool,

    /// Directory holding the JSON, CSV and PNG artifacts.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    #[arg(long, default_value = SANITATION_INDICATOR)]
    indicator: String,

    /// Inclusive year range, START:END.
    #[arg(long, default_value = "1960:2017")]
    dates: DateRange,

    /// Encoding of the tabular file (WHATWG label).
    #[arg(long, default_value = "windows-1252")]
    encoding: String,

    /// Chart theme: light or dark.
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl Cli {
    fn into_options(self) -> Result<RunOptions> {
        let codec = TextCodec::for_label(&self.encoding).context("--encoding")?;
        Ok(RunOptions {
            mode: if self.refresh { PipelineMode::Refresh } else { PipelineMode::Cached },
            query: IndicatorQuery::new(self.indicator, self.dates),
            base_url: self.base_url,
            paths: ArtifactPaths::in_dir(&self.data_dir),
            codec,
            display: !self.no_display,
            theme: chart_core::theme::find(&self.theme),
            ..RunOptions::default()
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = Cli::parse().into_options()?;
    info!(mode = ?options.mode, indicator = %options.query.indicator, "starting");
    let report = run(&options)?;
    info!(image = %report.image.display(), cohorts = report.plotted.len(), "done");
    Ok(())
}
