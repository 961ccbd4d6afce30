// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round tick positions inside `[min, max]` using a 1/2/2.5/5 x 10^k step,
/// aiming for roughly `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 { break; }
        // snap away float noise such as 0.30000000000000004
        ticks.push((v / step).round() * step);
        i += 1;
    }
    ticks
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format a tick value without trailing zeros (`20`, `2.5`, `1995`).
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v.round() + 0.0)
    } else {
        let s = format!("{:.3}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_axis_ticks() {
        assert_eq!(nice_ticks(-2.0, 100.0, 6), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn year_axis_ticks() {
        assert_eq!(
            nice_ticks(1990.0, 2015.0, 6),
            vec![1990.0, 1995.0, 2000.0, 2005.0, 2010.0, 2015.0]
        );
    }

    #[test]
    fn empty_range_has_no_ticks() {
        assert!(nice_ticks(5.0, 5.0, 6).is_empty());
        assert!(nice_ticks(f64::NAN, 5.0, 6).is_empty());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(1995.0), "1995");
    }
}
