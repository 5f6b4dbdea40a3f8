use std::time::{Duration, Instant};

use trellis::components::{Tooltip, TooltipArrow, TooltipProvider};
use trellis::{Component, RenderCx, Theme, Widget, WidgetResult};
use uidom::{find_element, Element, Key, Modifiers, Role};

fn render(tooltip: &Tooltip) -> Element {
    let theme = Theme::default();
    let mut cx = RenderCx::new(&theme);
    tooltip.render(&mut cx)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Provider
// ============================================================================

#[test]
fn test_provider_defaults() {
    let provider = TooltipProvider::default();
    assert_eq!(provider.delay(), ms(700));
    assert_eq!(provider.skip_delay(), ms(300));
}

#[test]
fn test_provider_from_theme() {
    let theme = Theme::from_json(r#"{ "tooltip": { "delay_duration_ms": 100 } }"#).unwrap();
    let provider = TooltipProvider::from_theme(&theme);

    assert_eq!(provider.delay(), ms(100));
    assert_eq!(provider.skip_delay(), ms(300));
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn test_opens_after_delay() {
    let provider = TooltipProvider::default();
    let tooltip = Tooltip::new(&provider, "Save");
    let start = Instant::now();

    assert_eq!(tooltip.pointer_enter(start), WidgetResult::Handled);
    assert_eq!(tooltip.poll(start + ms(699)), WidgetResult::Ignored);
    assert!(!tooltip.is_open());
    assert_eq!(tooltip.poll(start + ms(700)), WidgetResult::Opened);
    assert!(tooltip.is_open());
}

#[test]
fn test_leave_before_delay_cancels() {
    let provider = TooltipProvider::default();
    let tooltip = Tooltip::new(&provider, "Save");
    let start = Instant::now();

    tooltip.pointer_enter(start);
    assert_eq!(tooltip.pointer_leave(start + ms(100)), WidgetResult::Ignored);
    assert_eq!(tooltip.poll(start + ms(1000)), WidgetResult::Ignored);
    assert!(!tooltip.is_open());
}

#[test]
fn test_skip_delay_opens_next_tooltip_immediately() {
    let provider = TooltipProvider::default();
    let first = Tooltip::new(&provider, "Save");
    let second = Tooltip::new(&provider, "Load");
    let start = Instant::now();

    first.focus(start);
    first.poll(start + ms(700));
    assert_eq!(first.blur(start + ms(800)), WidgetResult::Closed);

    assert_eq!(second.pointer_enter(start + ms(900)), WidgetResult::Opened);
    assert!(second.is_open());
}

#[test]
fn test_after_skip_window_delay_applies_again() {
    let provider = TooltipProvider::new(ms(500), ms(100));
    let first = Tooltip::new(&provider, "Save");
    let second = Tooltip::new(&provider, "Load");
    let start = Instant::now();

    first.pointer_enter(start);
    first.poll(start + ms(500));
    first.pointer_leave(start + ms(600));

    assert_eq!(second.pointer_enter(start + ms(800)), WidgetResult::Handled);
    assert!(!second.is_open());
}

#[test]
fn test_escape_closes() {
    let provider = TooltipProvider::new(Duration::ZERO, ms(300));
    let tooltip = Tooltip::new(&provider, "Save");
    let now = Instant::now();

    tooltip.focus(now);
    tooltip.poll(now);
    assert_eq!(tooltip.handle_key(Key::Escape, Modifiers::new()), WidgetResult::Closed);
    assert!(!tooltip.is_open());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_open_tooltip_content_and_arrow() {
    let provider = TooltipProvider::new(Duration::ZERO, ms(300));
    let tooltip = Tooltip::new(&provider, "Save")
        .id("tip")
        .class_name("tooltip")
        .child("Save the file")
        .arrow(TooltipArrow::new().class_name("arrow"));
    let now = Instant::now();
    tooltip.pointer_enter(now);
    tooltip.poll(now);

    let tree = render(&tooltip);
    let trigger = find_element(&tree, "tip-trigger").unwrap();
    assert_eq!(trigger.get_attr("aria-describedby"), Some("tip-content"));

    let content = find_element(&tree, "tip-content").unwrap();
    assert_eq!(content.role, Some(Role::Tooltip));
    assert!(content.has_class("tooltip"));

    let arrow = content.child_elements().last().unwrap();
    let tokens: Vec<&str> = arrow.classes.iter().collect();
    assert_eq!(tokens, vec!["fill-inverse", "arrow"]);
    assert_eq!(arrow.get_attr("width"), Some("12"));
    assert_eq!(arrow.get_attr("height"), Some("6"));
}

#[test]
fn test_closed_tooltip_has_no_content() {
    let provider = TooltipProvider::default();
    let tree = render(&Tooltip::new(&provider, "Save").id("tip"));

    assert!(find_element(&tree, "tip-content").is_none());
    assert_eq!(
        find_element(&tree, "tip-trigger").unwrap().get_attr("aria-describedby"),
        None
    );
}
