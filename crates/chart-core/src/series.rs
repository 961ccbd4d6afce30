// File: crates/chart-core/src/series.rs
// Summary: Line series model: XY data, legend label and stroke style.

use skia_safe as skia;

/// Stroke used to draw a line series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
    /// On/off dash lengths in pixels; `None` draws a solid line.
    pub dash: Option<(f32, f32)>,
}

impl LineStyle {
    pub fn solid(color: skia::Color) -> Self {
        Self { color, width: 2.0, dash: None }
    }

    pub fn dashed(color: skia::Color) -> Self {
        Self { color, width: 2.0, dash: Some((9.0, 4.0)) }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    pub fn is_dashed(&self) -> bool { self.dash.is_some() }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(skia::Color::from_argb(255, 31, 119, 180))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    /// Legend entry; unlabeled series are left out of the legend.
    pub label: Option<String>,
    pub style: LineStyle,
}

impl Series {
    pub fn new() -> Self {
        Self { data_xy: Vec::new(), label: None, style: LineStyle::default() }
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, label: None, style: LineStyle::default() }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn styled(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (min, max) over X, or `None` for an empty series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        range(self.data_xy.iter().map(|&(x, _)| x))
    }

    /// (min, max) over Y, or `None` for an empty series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        range(self.data_xy.iter().map(|&(_, y)| y))
    }
}

impl Default for Series {
    fn default() -> Self { Self::new() }
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_skip_non_finite() {
        let s = Series::with_data(vec![(2014.0, 77.0), (2015.0, f64::NAN), (2016.0, 79.0)]);
        assert_eq!(s.x_range(), Some((2014.0, 2016.0)));
        assert_eq!(s.y_range(), Some((77.0, 79.0)));
        assert_eq!(Series::new().x_range(), None);
    }

    #[test]
    fn builder_sets_label_and_style() {
        let s = Series::with_data(vec![(0.0, 1.0)])
            .labeled("World")
            .styled(LineStyle::dashed(skia::Color::BLACK));
        assert_eq!(s.label.as_deref(), Some("World"));
        assert!(s.style.is_dashed());
    }
}
