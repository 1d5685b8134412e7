//! src/graph/layout.rs
//!
//! Pixel geometry shared by the background and history layers.

use super::config::GraphConfig;

/// Distance between an axis label column and the drawable area.
pub const AXIS_LABEL_OFFSET: f64 = 5.0;

/// X positions of the bar slots, rightmost first.
///
/// Starts at `width - gutter - bar_width` and steps left by
/// `bar_width + bar_spacing` while the slot still starts at or right of the
/// gutter.
#[derive(Clone, Debug)]
pub struct BarPositions {
    next: f64,
    left: f64,
    step: f64,
}

impl Iterator for BarPositions {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // a slot starting exactly on the left edge is still drawn
        if self.step <= 0.0 || self.next < self.left {
            return None;
        }
        let x = self.next;
        self.next -= self.step;
        Some(x)
    }
}

pub fn bar_positions(cfg: &GraphConfig) -> BarPositions {
    let gutter = cfg.effective_gutter();
    BarPositions {
        next: cfg.width - gutter - cfg.bar_width,
        left: gutter,
        step: cfg.bar_step(),
    }
}

/// Axis values bottom to top: `[0, m, 2m, 3m, 4m]` with `m` at least 1.
pub fn axis_points(max_hits: u64) -> [u64; 5] {
    let m = max_hits.max(1);
    [0, m, m.saturating_mul(2), m.saturating_mul(3), m.saturating_mul(4)]
}

/// Label y positions matching `axis_points`, bottom to top.
pub fn axis_label_rows(cfg: &GraphConfig) -> [f64; 5] {
    let gutter = cfg.effective_gutter();
    let area = cfg.drawing_height();
    [
        cfg.height - gutter,
        cfg.height - gutter - area / 4.0,
        gutter + area / 2.0,
        gutter + area / 4.0,
        gutter,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(width: f64, gutter: f64) -> GraphConfig {
        GraphConfig {
            width,
            gutter,
            ..GraphConfig::skyline()
        }
    }

    #[test]
    fn positions_rightmost_first() {
        assert_eq!(
            bar_positions(&cfg(18.0, 0.0)).collect::<Vec<_>>(),
            vec![14.0, 8.0, 2.0]
        );
        assert_eq!(
            bar_positions(&cfg(16.0, 0.0)).collect::<Vec<_>>(),
            vec![12.0, 6.0, 0.0]
        );
    }

    #[test]
    fn positions_stay_inside_gutter() {
        let xs: Vec<f64> = bar_positions(&cfg(780.0, 40.0)).collect();
        assert_eq!(xs.first(), Some(&736.0));
        assert!(xs.iter().all(|&x| x >= 40.0));
        assert_eq!(xs.len(), 117);
    }

    #[test]
    fn zero_step_yields_nothing() {
        let mut c = cfg(18.0, 0.0);
        c.bar_width = 0.0;
        c.bar_spacing = 0.0;
        assert_eq!(bar_positions(&c).count(), 0);
    }

    #[test]
    fn axis_points_floor_at_one() {
        assert_eq!(axis_points(0), [0, 1, 2, 3, 4]);
        assert_eq!(axis_points(13), [0, 13, 26, 39, 52]);
    }

    #[test]
    fn label_rows_span_drawable_area() {
        assert_eq!(
            axis_label_rows(&GraphConfig::skyline()),
            [240.0, 190.0, 140.0, 90.0, 40.0]
        );
    }
}
