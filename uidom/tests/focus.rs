use uidom::{collect_focusable, Element, FocusError, FocusState};

fn tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::box_().id("a").focusable(true))
        .child(Element::box_().id("skip").focusable(true).disabled(true))
        .child(Element::box_().id("b").focusable(true))
        .child(Element::text("label").id("c"))
}

#[test]
fn test_collect_focusable_skips_disabled() {
    assert_eq!(collect_focusable(&tree()), vec!["a", "b"]);
}

#[test]
fn test_focus_next_wraps() {
    let root = tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
}

#[test]
fn test_focus_prev_from_nothing_goes_to_last() {
    let root = tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("b".to_string()));
}

#[test]
fn test_focus_attached_success() {
    let root = tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_attached(&root, "b"), Ok(true));
    assert_eq!(focus.focused(), Some("b"));
    // Already focused
    assert_eq!(focus.focus_attached(&root, "b"), Ok(false));
}

#[test]
fn test_focus_attached_missing_element() {
    let root = tree();
    let mut focus = FocusState::new();

    assert_eq!(
        focus.focus_attached(&root, "ghost"),
        Err(FocusError::NotAttached("ghost".to_string()))
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_focus_attached_rejects_disabled_and_static() {
    let root = tree();
    let mut focus = FocusState::new();

    assert!(matches!(
        focus.focus_attached(&root, "skip"),
        Err(FocusError::NotFocusable(_))
    ));
    assert!(matches!(
        focus.focus_attached(&root, "c"),
        Err(FocusError::NotFocusable(_))
    ));
}

#[test]
fn test_retain_attached_clears_detached_focus() {
    let mut focus = FocusState::new();
    focus.focus("gone");
    focus.retain_attached(&tree());
    assert_eq!(focus.focused(), None);
}
