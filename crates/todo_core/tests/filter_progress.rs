use todo_core::{filter_todos, progress_percent, ProgressGauge, Todo};

fn todo(id: i64, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        created_at: "Monday, Oct 7, 03:04 PM".to_string(),
        completed,
    }
}

fn sample() -> Vec<Todo> {
    vec![
        todo(4, "Buy Milk", false),
        todo(3, "Walk the dog", true),
        todo(2, "buy stamps", false),
        todo(1, "Call MOM", true),
    ]
}

#[test]
fn empty_term_returns_full_collection_in_order() {
    let todos = sample();
    assert_eq!(filter_todos(&todos, ""), todos);
}

#[test]
fn term_matches_case_insensitively() {
    let todos = vec![todo(1, "Buy Milk", false)];
    assert_eq!(filter_todos(&todos, "milk"), todos);
    assert_eq!(filter_todos(&todos, "MILK"), todos);
    assert!(filter_todos(&todos, "eggs").is_empty());
}

#[test]
fn matches_keep_collection_order() {
    let todos = sample();
    let ids: Vec<_> = filter_todos(&todos, "BUY").iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![4, 2]);

    let ids: Vec<_> = filter_todos(&todos, "mo").iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn whitespace_term_is_a_literal_search() {
    let todos = sample();
    let ids: Vec<_> = filter_todos(&todos, " ").iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
    assert!(filter_todos(&todos, "  ").is_empty());
}

#[test]
fn filter_does_not_mutate_input() {
    let todos = sample();
    let copy = todos.clone();
    let _ = filter_todos(&todos, "dog");
    assert_eq!(todos, copy);
}

#[test]
fn progress_examples() {
    assert_eq!(progress_percent(&[]), 0);
    assert_eq!(
        progress_percent(&[todo(1, "a", true), todo(2, "b", false)]),
        50
    );
    assert_eq!(progress_percent(&[todo(1, "a", true)]), 100);
    assert_eq!(progress_percent(&sample()), 50);
}

#[test]
fn progress_stays_in_range() {
    let mut todos = Vec::new();
    for id in 0..7 {
        todos.push(todo(id, "t", id % 3 == 0));
        let percent = progress_percent(&todos);
        assert!(percent <= 100);
    }
    assert_eq!(progress_percent(&todos), 43);
}

#[test]
fn gauge_counts_match_collection() {
    let gauge = ProgressGauge::from_todos(&sample());
    assert_eq!(gauge.completed, 2);
    assert_eq!(gauge.total, 4);
    assert_eq!(gauge.percent, 50);
}
