use treeish::{Line, ScrollView, Viewport};

fn numbered(count: usize) -> Vec<Line> {
    (0..count).map(|i| Line::raw(format!("line {i}"))).collect()
}

#[test]
fn test_visible_range() {
    let mut view = ScrollView::new(10, 5);
    view.set_content(numbered(20));
    assert_eq!(view.visible_range(), 0..5);
    assert_eq!(view.visible_lines().len(), 5);

    view.line_down(3);
    assert_eq!(view.visible_range(), 3..8);
    assert_eq!(view.visible_lines()[0].plain(), "line 3");
}

#[test]
fn test_offset_is_clamped() {
    let mut view = ScrollView::new(10, 5);
    view.set_content(numbered(20));

    view.line_down(100);
    assert_eq!(view.y_offset(), 15);
    assert_eq!(view.visible_range(), 15..20);

    view.line_up(100);
    assert_eq!(view.y_offset(), 0);

    view.set_y_offset(42);
    assert_eq!(view.y_offset(), 15);
}

#[test]
fn test_scroll_percent() {
    let mut view = ScrollView::new(10, 5);
    view.set_content(numbered(15));
    assert_eq!(view.scroll_percent(), 0.0);

    view.set_y_offset(5);
    assert_eq!(view.scroll_percent(), 0.5);

    view.line_down(5);
    assert_eq!(view.scroll_percent(), 1.0);

    // Everything fits.
    view.set_height(30);
    assert_eq!(view.scroll_percent(), 1.0);
}

#[test]
fn test_shrinking_content_clamps_offset() {
    let mut view = ScrollView::new(10, 5);
    view.set_content(numbered(20));
    view.set_y_offset(15);

    view.set_content(numbered(8));
    assert_eq!(view.y_offset(), 3);
    assert_eq!(view.visible_range(), 3..8);
}

#[test]
fn test_growing_height_clamps_offset() {
    let mut view = ScrollView::new(10, 5);
    view.set_content(numbered(10));
    view.set_y_offset(5);

    view.set_height(8);
    assert_eq!(view.y_offset(), 2);
}

#[test]
fn test_replace_line() {
    let mut view = ScrollView::new(10, 5);
    view.set_content(numbered(3));

    assert!(view.replace_line(1, Line::raw("changed")));
    assert_eq!(view.lines()[1].plain(), "changed");
    assert!(!view.replace_line(3, Line::raw("nope")));
    assert_eq!(view.total_line_count(), 3);
}

#[test]
fn test_zero_height_shows_nothing() {
    let mut view = ScrollView::default();
    view.set_content(numbered(3));
    assert!(view.visible_lines().is_empty());
    assert_eq!(view.width(), 0);
}
