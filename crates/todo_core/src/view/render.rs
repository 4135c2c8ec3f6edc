//! Plain-text rendering of a [`ViewModel`].
//!
//! # Responsibility
//! - Produce a deterministic terminal frame: progress header, search line,
//!   then one block per displayed todo.

use crate::model::todo::Todo;
use crate::view::app::ViewModel;
use crate::view::progress::ProgressGauge;

const GAUGE_CELLS: usize = 10;
const HEADING: &str = "Today's todos";

/// Renders a full frame. Output always ends with a newline.
pub fn render_text(view: &ViewModel) -> String {
    let mut out = String::new();
    out.push_str(&render_gauge_line(&view.gauge));
    out.push('\n');

    if view.is_filtered() {
        out.push_str(&format!(
            "search: \"{}\" ({} of {})\n",
            view.search_term,
            view.rows.len(),
            view.total
        ));
    }

    if view.rows.is_empty() {
        let message = if view.total == 0 {
            "no todos yet"
        } else {
            "no todos match"
        };
        out.push_str(&format!("  {message}\n"));
        return out;
    }

    for todo in &view.rows {
        out.push_str(&render_row(todo));
    }
    out
}

/// `Today's todos  [######----]  60%  (3/5)`
pub fn render_gauge_line(gauge: &ProgressGauge) -> String {
    let filled = (usize::from(gauge.percent) * GAUGE_CELLS + 50) / 100;
    format!(
        "{HEADING}  [{}{}] {:>4}%  ({}/{})",
        "#".repeat(filled),
        "-".repeat(GAUGE_CELLS - filled),
        gauge.percent,
        gauge.completed,
        gauge.total
    )
}

fn render_row(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    let title = if todo.completed {
        format!("~{}~", todo.title)
    } else {
        todo.title.clone()
    };
    format!(
        "  [{mark}] {id}  {title}\n        {created}\n",
        id = todo.id,
        created = todo.created_at
    )
}

#[cfg(test)]
mod tests {
    use super::{render_gauge_line, render_text};
    use crate::model::todo::Todo;
    use crate::model::todo_list::TodoList;
    use crate::view::app::ViewModel;
    use crate::view::progress::ProgressGauge;

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            created_at: "Monday, Oct 7, 03:04 PM".to_string(),
            completed,
        }
    }

    #[test]
    fn gauge_line_fills_cells_by_percent() {
        let gauge = ProgressGauge {
            percent: 50,
            completed: 1,
            total: 2,
        };
        assert_eq!(
            render_gauge_line(&gauge),
            "Today's todos  [#####-----]   50%  (1/2)"
        );
    }

    #[test]
    fn completed_rows_are_marked_and_struck() {
        let list = TodoList::new(vec![todo(2, "Buy Milk", true), todo(1, "Walk", false)]);
        let frame = render_text(&ViewModel::derive(&list, ""));
        assert!(frame.contains("  [x] 2  ~Buy Milk~\n"));
        assert!(frame.contains("  [ ] 1  Walk\n"));
        assert!(frame.contains("Monday, Oct 7, 03:04 PM"));
        assert!(!frame.contains("search:"));
    }

    #[test]
    fn empty_states_distinguish_no_data_from_no_match() {
        let empty = render_text(&ViewModel::derive(&TodoList::default(), ""));
        assert!(empty.contains("no todos yet"));

        let list = TodoList::new(vec![todo(1, "Walk", false)]);
        let unmatched = render_text(&ViewModel::derive(&list, "eggs"));
        assert!(unmatched.contains("search: \"eggs\" (0 of 1)"));
        assert!(unmatched.contains("no todos match"));
    }

    #[test]
    fn filtered_frame_is_built_line_by_line() {
        let list = TodoList::new(vec![todo(2, "Buy Milk", true), todo(1, "Walk", false)]);
        let frame = render_text(&ViewModel::derive(&list, "walk"));
        assert_eq!(
            frame,
            concat!(
                "Today's todos  [#####-----]   50%  (1/2)\n",
                "search: \"walk\" (1 of 2)\n",
                "  [ ] 1  Walk\n",
                "        Monday, Oct 7, 03:04 PM\n",
            )
        );
    }
}
