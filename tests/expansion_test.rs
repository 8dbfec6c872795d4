use flowscope::view::RowExpansionTracker;

#[test]
fn test_double_toggle_nets_to_no_change() {
    let mut rows = RowExpansionTracker::new();
    assert!(!rows.is_expanded("F1"));

    assert!(rows.toggle("F1"));
    assert!(rows.is_expanded("F1"));
    assert!(!rows.toggle("F1"));
    assert!(!rows.is_expanded("F1"));

    rows.toggle("F2");
    rows.toggle("F1");
    rows.toggle("F1");
    assert!(rows.is_expanded("F2"));
}

#[test]
fn test_reset_and_retain() {
    let mut rows = RowExpansionTracker::new();
    rows.toggle("F3");
    rows.toggle("F1");
    rows.toggle("F2");
    assert_eq!(rows.expanded(), vec!["F1", "F2", "F3"]);

    rows.retain(|id| id != "F2");
    assert_eq!(rows.expanded(), vec!["F1", "F3"]);

    rows.reset();
    assert!(rows.is_empty());
}
