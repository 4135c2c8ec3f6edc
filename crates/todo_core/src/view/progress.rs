//! Completion progress and circular gauge geometry.
//!
//! # Invariants
//! - `progress_percent` is in `0..=100` and `0` for an empty collection.
//! - Gauge dash offset is `circumference * (1 - percent / 100)`.

use crate::model::todo::Todo;

/// Gauge circle radius inside a 100x100 view box.
pub const GAUGE_RADIUS: f64 = 40.0;
pub const GAUGE_STROKE_WIDTH: f64 = 8.0;
/// Dash array length used for the arc; `2 * pi * 40` rounded to one decimal.
pub const GAUGE_CIRCUMFERENCE: f64 = 251.2;

/// Rounded share of completed todos, as a whole percentage.
pub fn progress_percent(todos: &[Todo]) -> u8 {
    let total = todos.len();
    if total == 0 {
        return 0;
    }
    let completed = todos.iter().filter(|todo| todo.completed).count();
    let percent = (completed as f64 * 100.0 / total as f64).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Render-ready gauge state derived from a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressGauge {
    pub percent: u8,
    pub completed: usize,
    pub total: usize,
}

impl ProgressGauge {
    pub fn from_todos(todos: &[Todo]) -> Self {
        Self {
            percent: progress_percent(todos),
            completed: todos.iter().filter(|todo| todo.completed).count(),
            total: todos.len(),
        }
    }

    /// Unpainted arc length.
    pub fn dash_offset(&self) -> f64 {
        GAUGE_CIRCUMFERENCE * (1.0 - f64::from(self.percent) / 100.0)
    }

    /// SVG markup: grey track circle plus a white arc starting at 12 o'clock.
    pub fn to_svg(&self) -> String {
        let r = GAUGE_RADIUS;
        let w = GAUGE_STROKE_WIDTH;
        let c = GAUGE_CIRCUMFERENCE;
        format!(
            concat!(
                r##"<svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">"##,
                r##"<circle cx="50" cy="50" r="{r}" stroke="#555" stroke-width="{w}" fill="transparent"/>"##,
                r##"<circle cx="50" cy="50" r="{r}" stroke="white" stroke-width="{w}" fill="transparent" "##,
                r##"stroke-dasharray="{c}" stroke-dashoffset="{offset:.1}" stroke-linecap="round" "##,
                r##"transform="rotate(-90 50 50)"/>"##,
                r##"<text x="50" y="50" text-anchor="middle" dominant-baseline="central">{percent}%</text>"##,
                "</svg>"
            ),
            r = r,
            w = w,
            c = c,
            offset = self.dash_offset(),
            percent = self.percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{progress_percent, ProgressGauge, GAUGE_CIRCUMFERENCE};
    use crate::model::todo::Todo;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("task {id}"),
            created_at: String::new(),
            completed,
        }
    }

    #[test]
    fn thirds_round_to_nearest_whole_percent() {
        let todos = vec![todo(1, true), todo(2, false), todo(3, false)];
        assert_eq!(progress_percent(&todos), 33);
        let todos = vec![todo(1, true), todo(2, true), todo(3, false)];
        assert_eq!(progress_percent(&todos), 67);
    }

    #[test]
    fn dash_offset_spans_full_circumference() {
        let empty = ProgressGauge::from_todos(&[]);
        assert!((empty.dash_offset() - GAUGE_CIRCUMFERENCE).abs() < f64::EPSILON);

        let done = ProgressGauge::from_todos(&[todo(1, true)]);
        assert!(done.dash_offset().abs() < f64::EPSILON);

        let half = ProgressGauge::from_todos(&[todo(1, true), todo(2, false)]);
        assert!((half.dash_offset() - 125.6).abs() < 1e-9);
    }

    #[test]
    fn svg_carries_offset_and_label() {
        let svg = ProgressGauge::from_todos(&[todo(1, true), todo(2, false)]).to_svg();
        assert!(svg.contains(r#"stroke-dashoffset="125.6""#));
        assert!(svg.contains(r#"stroke-dasharray="251.2""#));
        assert!(svg.contains(">50%</text>"));
    }
}
