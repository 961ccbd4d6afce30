// File: crates/sanitation/src/plot.rs
// Summary: Cohort series selection and the fixed chart cosmetics.

use anyhow::{anyhow, Context, Result};
use chart_core::{named_color, Axis, Chart, GridLines, Legend, LegendPosition, RenderOptions, Series, Theme};
use tracing::{info, warn};
use wb_indicator::{select_cohort, CohortSeries, TabularRow};

use crate::cohorts::{CohortStyle, COHORTS};

pub const TITLE: &str = "Improved sanitation facilities (% of population with access), 1990 to 2015";
pub const Y_LABEL: &str = "% of population with access to improved sanitation facilities";
pub const Y_RANGE: (f64, f64) = (-2.0, 100.0);
pub const GRID_COLOR: &str = "#DCDCDC";
pub const GRID_WIDTH: f32 = 0.7;

/// One cohort's points paired with its row in the cohort table.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortPlot {
    pub style: &'static CohortStyle,
    pub series: CohortSeries,
}

/// Select every cohort in table order. A cohort with no complete rows yields an empty series.
pub fn load_cohorts(rows: &[TabularRow]) -> Result<Vec<CohortPlot>> {
    COHORTS
        .iter()
        .map(|style| -> Result<CohortPlot> {
            let series = select_cohort(rows, style.name).with_context(|| format!("selecting cohort '{}'", style.name))?;
            if series.is_empty() {
                warn!(cohort = style.name, "no complete rows for cohort");
            } else {
                info!(cohort = style.name, points = series.len(), "selected cohort");
            }
            Ok(CohortPlot { style, series })
        })
        .collect()
}

/// One labeled line per cohort; X spans the plotted years, Y is fixed.
pub fn build_chart(cohorts: &[CohortPlot]) -> Result<Chart> {
    let mut chart = Chart::new();
    chart.title = Some(TITLE.to_string());
    chart.y_axis = Axis::new(Y_LABEL, Y_RANGE.0, Y_RANGE.1);
    for c in cohorts {
        chart.add_series(
            Series::with_data(c.series.points.clone())
                .labeled(c.style.name)
                .styled(c.style.line_style()?),
        );
    }
    chart.autoscale_x();
    chart.x_axis.label.clear();
    Ok(chart)
}

/// 1500x1000, no spines or tick marks, light horizontal grid, frameless legend lower right.
pub fn render_options(theme: Theme) -> Result<RenderOptions> {
    let grid_color = named_color(GRID_COLOR).ok_or_else(|| anyhow!("bad grid color {GRID_COLOR}"))?;
    let mut opts = RenderOptions { theme, ..RenderOptions::default() };
    opts.show_spines = false;
    opts.show_ticks = false;
    opts.grid = GridLines::horizontal(grid_color, GRID_WIDTH);
    opts.legend = Some(Legend::new(LegendPosition::LowerRight).without_frame());
    opts.title_gap = 0.08 * opts.plot_area().height() as f32;
    Ok(opts)
}
