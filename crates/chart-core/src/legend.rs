// File: crates/chart-core/src/legend.rs
// Summary: Legend placement and drawing (line swatch + label per labeled series).

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Legend {
    pub position: LegendPosition,
    /// Draw a filled, outlined box behind the entries.
    pub frame: bool,
    pub font_size: f32,
}

impl Legend {
    pub fn new(position: LegendPosition) -> Self {
        Self { position, frame: true, font_size: 15.0 }
    }

    pub fn without_frame(mut self) -> Self {
        self.frame = false;
        self
    }
}

const SWATCH: f32 = 36.0;
const GAP: f32 = 10.0;
const MARGIN: f32 = 14.0;
const PAD: f32 = 8.0;

/// Box occupied by a legend of `rows` entries whose widest label is `label_w`.
pub(crate) fn legend_box(plot: RectI32, legend: &Legend, rows: usize, label_w: f32) -> skia::Rect {
    let row_h = legend.font_size * 1.6;
    let w = PAD * 2.0 + SWATCH + GAP + label_w;
    let h = PAD * 2.0 + row_h * rows as f32;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let (x, y) = match legend.position {
        LegendPosition::UpperLeft => (l + MARGIN, t + MARGIN),
        LegendPosition::UpperRight => (r - MARGIN - w, t + MARGIN),
        LegendPosition::LowerLeft => (l + MARGIN, b - MARGIN - h),
        LegendPosition::LowerRight => (r - MARGIN - w, b - MARGIN - h),
    };
    skia::Rect::from_xywh(x, y, w, h)
}

pub(crate) fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    legend: &Legend,
    theme: &Theme,
    series: &[Series],
    draw_labels: bool,
) {
    let entries: Vec<(&str, &Series)> = series
        .iter()
        .filter_map(|s| s.label.as_deref().map(|l| (l, s)))
        .collect();
    if entries.is_empty() { return; }

    let label_w = if draw_labels {
        entries
            .iter()
            .map(|(l, _)| shaper.measure_width(l, legend.font_size))
            .fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let area = legend_box(plot, legend, entries.len(), label_w);

    if legend.frame {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.background);
        canvas.draw_round_rect(area, 4.0, 4.0, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_frame);
        canvas.draw_round_rect(area, 4.0, 4.0, &border);
    }

    let row_h = legend.font_size * 1.6;
    for (i, (label, s)) in entries.iter().enumerate() {
        let mid_y = area.top + PAD + row_h * (i as f32 + 0.5);
        let x0 = area.left + PAD;
        let paint = crate::chart::stroke_paint(&s.style);
        canvas.draw_line((x0, mid_y), (x0 + SWATCH, mid_y), &paint);
        if draw_labels {
            shaper.draw_left(
                canvas,
                label,
                x0 + SWATCH + GAP,
                mid_y + legend.font_size * 0.35,
                legend.font_size,
                theme.axis_label,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_right_hugs_the_corner() {
        let plot = RectI32::from_ltrb(100, 50, 900, 650);
        let legend = Legend::new(LegendPosition::LowerRight).without_frame();
        let area = legend_box(plot, &legend, 5, 120.0);
        assert!((area.right - (900.0 - MARGIN)).abs() < 1e-3);
        assert!((area.bottom - (650.0 - MARGIN)).abs() < 1e-3);
        assert!(area.left > 100.0 && area.top > 50.0);
        assert!(!legend.frame);
    }

    #[test]
    fn upper_left_hugs_the_corner() {
        let plot = RectI32::from_ltrb(100, 50, 900, 650);
        let area = legend_box(plot, &Legend::new(LegendPosition::UpperLeft), 2, 80.0);
        assert!((area.left - (100.0 + MARGIN)).abs() < 1e-3);
        assert!((area.top - (50.0 + MARGIN)).abs() < 1e-3);
    }
}
