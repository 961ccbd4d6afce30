// File: crates/sanitation/src/pipeline.rs
// Summary: The run entry point: fetch gate, transform gate, then visualize.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chart_core::{Chart, RenderOptions};
use tracing::info;
use wb_indicator::{fetch_to_file, read_tabular, transform_file, PageSource, WorldBankClient};

use crate::config::RunOptions;
use crate::plot;

/// What a run did, for logging and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Records fetched; `None` in cached mode.
    pub fetched: Option<usize>,
    /// Rows written to the tabular file; `None` in cached mode.
    pub written: Option<usize>,
    /// Rows read back from the tabular file, null rows included.
    pub rows_read: usize,
    /// `(cohort, points)` in plotting order.
    pub plotted: Vec<(String, usize)>,
    pub image: PathBuf,
}

/// Run the pipeline against the live API. The client is only built in refresh mode.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let mut client = if options.mode.refreshes() {
        Some(WorldBankClient::new(&options.base_url, &options.user_agent).context("building API client")?)
    } else {
        None
    };
    run_stages(options, client.as_mut().map(|c| c as &mut dyn PageSource))
}

/// Run the pipeline with `source` standing in for the API. The source is only
/// consulted in refresh mode.
pub fn run_with_source(options: &RunOptions, source: &mut dyn PageSource) -> Result<RunReport> {
    run_stages(options, Some(source))
}

fn run_stages(options: &RunOptions, source: Option<&mut dyn PageSource>) -> Result<RunReport> {
    let mut report = RunReport::default();
    if options.mode.refreshes() {
        let source = source.ok_or_else(|| anyhow!("refresh mode needs a page source"))?;
        refresh(options, source, &mut report)?;
    } else {
        info!(csv = %options.paths.csv.display(), "cached mode: reusing tabular file");
    }
    visualize(options, &mut report)?;
    Ok(report)
}

fn refresh(options: &RunOptions, source: &mut dyn PageSource, report: &mut RunReport) -> Result<()> {
    let paths = &options.paths;
    let dataset = fetch_to_file(source, &options.query, &paths.json)
        .with_context(|| format!("fetching {} into {}", options.query.indicator, paths.json.display()))?;
    report.fetched = Some(dataset.len());

    let written = transform_file(&paths.json, &paths.csv, options.codec)
        .with_context(|| format!("transforming {} into {}", paths.json.display(), paths.csv.display()))?;
    report.written = Some(written);
    Ok(())
}

fn visualize(options: &RunOptions, report: &mut RunReport) -> Result<()> {
    let paths = &options.paths;
    let rows = read_tabular(&paths.csv, options.codec)
        .with_context(|| format!("reading tabular file {}", paths.csv.display()))?;
    report.rows_read = rows.len();

    let cohorts = plot::load_cohorts(&rows)?;
    report.plotted = cohorts.iter().map(|c| (c.style.name.to_string(), c.series.len())).collect();

    let chart = plot::build_chart(&cohorts)?;
    let opts = plot::render_options(options.theme)?;
    chart
        .render_to_png(&opts, &paths.image)
        .with_context(|| format!("rendering chart to {}", paths.image.display()))?;
    info!(path = %paths.image.display(), "wrote chart");
    report.image = paths.image.clone();

    if options.display {
        display(&chart, &opts)?;
    }
    Ok(())
}

#[cfg(feature = "display")]
fn display(chart: &Chart, opts: &RenderOptions) -> Result<()> {
    chart_window::show(chart, opts, plot::TITLE).context("showing chart window")?;
    Ok(())
}

#[cfg(not(feature = "display"))]
fn display(_chart: &Chart, _opts: &RenderOptions) -> Result<()> {
    tracing::warn!("built without the `display` feature; chart saved but not shown");
    Ok(())
}
