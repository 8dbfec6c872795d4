use flowscope::view::{SelectionChange, SelectionController};

#[test]
fn test_select_is_exclusive() {
    let mut selection = SelectionController::new();
    selection.select("A");
    let change = selection.select("B").expect("switching tasks should emit a change");

    assert_eq!(change, SelectionChange { previous: Some("A".to_string()), current: Some("B".to_string()) });
    assert_eq!(selection.selected(), Some("B"));
}

#[test]
fn test_reselecting_same_task_is_noop() {
    let mut selection = SelectionController::new();
    assert!(selection.select("A").is_some());
    assert!(selection.select("A").is_none());
    assert_eq!(selection.selected(), Some("A"));
}

#[test]
fn test_clear() {
    let mut selection = SelectionController::new();
    assert!(selection.clear().is_none(), "clearing an empty selection emits nothing");

    selection.select("A");
    let change = selection.clear().expect("clear should emit a change");
    assert_eq!(change.current, None);
    assert!(!selection.has_selection());
}
