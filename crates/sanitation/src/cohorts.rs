// File: crates/sanitation/src/cohorts.rs
// Summary: Ordered cohort table: which Country labels are plotted, and how.

use anyhow::{anyhow, Result};
use chart_core::{named_color, LineStyle};
use wb_indicator::{INCOME_LEVELS, WORLD};

/// Stroke width shared by every cohort line.
pub const LINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CohortStyle {
    /// Country label in the tabular file, also the legend entry.
    pub name: &'static str,
    pub color: &'static str,
    pub dashed: bool,
}

impl CohortStyle {
    pub fn line_style(&self) -> Result<LineStyle> {
        let color = named_color(self.color).ok_or_else(|| anyhow!("unknown color '{}' for {}", self.color, self.name))?;
        let style = if self.dashed { LineStyle::dashed(color) } else { LineStyle::solid(color) };
        Ok(style.with_width(LINE_WIDTH))
    }
}

/// Plotting order: World first, then income levels low to high.
pub static COHORTS: [CohortStyle; 5] = [
    CohortStyle { name: WORLD, color: "black", dashed: true },
    CohortStyle { name: INCOME_LEVELS[0], color: "red", dashed: false },
    CohortStyle { name: INCOME_LEVELS[1], color: "lightcoral", dashed: false },
    CohortStyle { name: INCOME_LEVELS[2], color: "gray", dashed: false },
    CohortStyle { name: INCOME_LEVELS[3], color: "silver", dashed: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_and_styles() {
        let names: Vec<_> = COHORTS.iter().map(|c| c.name).collect();
        assert_eq!(names, ["World", "Low income", "Lower middle income", "Upper middle income", "High income"]);
        assert!(COHORTS[0].dashed);
        assert!(COHORTS[1..].iter().all(|c| !c.dashed));
        for c in &COHORTS {
            assert!(c.line_style().is_ok(), "{} has no color", c.name);
        }
    }
}
