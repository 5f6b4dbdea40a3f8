use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use trellis::classes::CustomClasses;
use trellis::components::{FormControl, Select, SelectItem, SelectVariant};
use trellis::primitives::callback;
use trellis::{Component, RenderCx, Theme, WidgetResult};
use uidom::{find_element, Element, Key, Modifiers, Role};

fn render_with(theme: &Theme, component: &dyn Component) -> Element {
    let mut cx = RenderCx::new(theme);
    component.render(&mut cx)
}

fn render(component: &dyn Component) -> Element {
    render_with(&Theme::default(), component)
}

fn fruit() -> Select {
    Select::new()
        .id("fruit")
        .label("Pick a fruit")
        .item(SelectItem::new("apple", "Apple").id("apple"))
        .item(SelectItem::new("banana", "Banana").id("banana").disabled(true))
        .item(SelectItem::new("cherry", "Cherry").id("cherry"))
}

fn press(select: &Select, key: Key) -> WidgetResult {
    select.handle_key_at(key, Modifiers::new(), Instant::now())
}

// ============================================================================
// Trigger
// ============================================================================

#[test]
fn test_trigger_shows_placeholder() {
    let tree = render(&fruit());
    let trigger = find_element(&tree, "fruit-trigger").unwrap();

    assert_eq!(trigger.role, Some(Role::Combobox));
    assert!(trigger.has_class("select-trigger"));
    assert_eq!(trigger.get_attr("data-variant"), Some("outlined"));

    let value = &trigger.child_elements()[0];
    assert_eq!(value.content.text(), Some("Pick a fruit"));
    assert_eq!(value.get_attr("data-placeholder"), Some(""));

    let icon = &trigger.child_elements()[1];
    assert!(icon.has_class("select-icon"));
    assert_eq!(icon.child_elements()[0].content.text(), Some("▾"));
}

#[test]
fn test_trigger_shows_selected_text() {
    let tree = render(&fruit().default_value("cherry"));
    let trigger = find_element(&tree, "fruit-trigger").unwrap();

    assert_eq!(trigger.child_elements()[0].content.text(), Some("Cherry"));
}

#[test]
fn test_trigger_keeps_base_class_with_overrides() {
    let select = fruit()
        .custom_classes(CustomClasses::new().with("root", "wide"))
        .class_name("mine");
    let tree = render(&select);
    let trigger = find_element(&tree, "fruit-trigger").unwrap();

    let tokens: Vec<&str> = trigger.classes.iter().collect();
    assert_eq!(tokens, vec!["select-trigger", "wide", "mine"]);
}

#[test]
fn test_custom_icon() {
    let tree = render(&fruit().icon(Element::text("v").id("icon")));
    assert!(find_element(&tree, "icon").is_some());
}

// ============================================================================
// Variant
// ============================================================================

#[test]
fn test_variant_resolution_order() {
    let theme = Theme::from_json(r#"{ "select": { "variant": "standard" } }"#).unwrap();

    let themed = render_with(&theme, &fruit());
    let trigger = find_element(&themed, "fruit-trigger").unwrap();
    assert_eq!(trigger.get_attr("data-variant"), Some("standard"));

    let explicit = render_with(&theme, &fruit().variant(SelectVariant::Filled));
    let trigger = find_element(&explicit, "fruit-trigger").unwrap();
    assert_eq!(trigger.get_attr("data-variant"), Some("filled"));
}

#[test]
fn test_form_control_overrides_variant() {
    let form = FormControl::new()
        .variant(SelectVariant::Standard)
        .error(true)
        .item(fruit().variant(SelectVariant::Filled));
    let tree = render(&form);
    let trigger = find_element(&tree, "fruit-trigger").unwrap();

    assert_eq!(trigger.get_attr("data-variant"), Some("standard"));
    assert_eq!(trigger.get_attr("aria-invalid"), Some("true"));
    assert!(tree.has_class("TrellisFormControl-root"));
}

#[test]
fn test_form_control_without_variant_keeps_own() {
    let form = FormControl::new().item(fruit().variant(SelectVariant::Filled));
    let tree = render(&form);
    let trigger = find_element(&tree, "fruit-trigger").unwrap();

    assert_eq!(trigger.get_attr("data-variant"), Some("filled"));
}

#[test]
fn test_select_in_disabled_form_control_ignores_keys() {
    let opens = Arc::new(AtomicUsize::new(0));
    let opened = Arc::clone(&opens);
    let select = Arc::new(fruit().on_open(callback(move |()| {
        opened.fetch_add(1, Ordering::SeqCst);
    })));
    let form = FormControl::new().disabled(true).item(Arc::clone(&select));
    render(&form);

    assert!(select.is_disabled());
    assert_eq!(press(&select, Key::Char('c')), WidgetResult::Ignored);
    assert_eq!(press(&select, Key::Enter), WidgetResult::Ignored);
    assert_eq!(select.selected_value(), None);
    assert!(!select.is_open());
    assert_eq!(opens.load(Ordering::SeqCst), 0);
}

#[test]
fn test_disabled_form_control_disables_trigger() {
    let form = FormControl::new().disabled(true).item(fruit().default_open(true));
    let tree = render(&form);
    let trigger = find_element(&tree, "fruit-trigger").unwrap();

    assert!(trigger.disabled);
    assert!(find_element(&tree, "fruit-content").is_none());
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_open_content_structure() {
    let tree = render(&fruit().default_value("apple").default_open(true));

    let content = find_element(&tree, "fruit-content").unwrap();
    let tokens: Vec<&str> = content.classes.iter().collect();
    assert_eq!(
        tokens,
        vec!["select-content", "bg-white", "shadow-md", "rounded-md", "p-4"]
    );
    assert_eq!(content.role, Some(Role::Listbox));

    let viewport = &content.child_elements()[0];
    assert!(viewport.has_class("select-viewport"));
    assert_eq!(viewport.child_elements().len(), 3);

    let apple = find_element(&tree, "apple").unwrap();
    let tokens: Vec<&str> = apple.classes.iter().collect();
    assert_eq!(tokens, vec!["select-item", "p-2", "cursor-pointer"]);
    assert_eq!(apple.get_attr("aria-selected"), Some("true"));
    assert!(apple.child_elements()[0].has_class("select-item-text"));

    let banana = find_element(&tree, "banana").unwrap();
    assert_eq!(banana.get_attr("aria-selected"), Some("false"));
    assert_eq!(banana.get_attr("data-disabled"), Some(""));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_open_highlights_selected_value() {
    let select = fruit().default_value("cherry");

    assert_eq!(press(&select, Key::Enter), WidgetResult::Opened);
    assert_eq!(select.highlighted(), Some(2));
}

#[test]
fn test_open_without_value_highlights_first() {
    let select = fruit();
    press(&select, Key::Down);
    assert_eq!(select.highlighted(), Some(0));
}

#[test]
fn test_select_with_keyboard() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let closes = Arc::new(AtomicUsize::new(0));
    let closed = Arc::clone(&closes);
    let select = fruit()
        .on_change(callback(move |value: String| sink.lock().unwrap().push(value)))
        .on_close(callback(move |()| {
            closed.fetch_add(1, Ordering::SeqCst);
        }));

    press(&select, Key::Down);
    assert_eq!(press(&select, Key::Down), WidgetResult::HighlightMoved);
    assert_eq!(select.highlighted(), Some(2));
    assert_eq!(press(&select, Key::Enter), WidgetResult::Selected);

    assert_eq!(select.selected_value().as_deref(), Some("cherry"));
    assert!(!select.is_open());
    assert_eq!(*changes.lock().unwrap(), vec!["cherry".to_string()]);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_controlled_value_only_reports() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut select = fruit()
        .value("apple")
        .on_change(callback(move |value: String| sink.lock().unwrap().push(value)));

    assert!(select.select(2));
    assert_eq!(select.selected_value().as_deref(), Some("apple"));
    assert_eq!(*changes.lock().unwrap(), vec!["cherry".to_string()]);

    select.set_controlled_value(Some("cherry".to_string()));
    assert_eq!(select.selected_item().map(SelectItem::text), Some("Cherry"));
}

#[test]
fn test_controlled_value_changes_between_renders() {
    let mut select = fruit().default_value("apple").value("cherry");
    let tree = render(&select);
    let trigger = find_element(&tree, "fruit-trigger").unwrap();
    assert_eq!(trigger.child_elements()[0].content.text(), Some("Cherry"));

    select.set_controlled_value(None);
    let tree = render(&select);
    let value = &find_element(&tree, "fruit-trigger").unwrap().child_elements()[0];
    assert_eq!(value.content.text(), Some("Pick a fruit"));
    assert_eq!(select.selected_value(), None);

    select.release_value();
    assert_eq!(select.selected_value().as_deref(), Some("apple"));
}

#[test]
fn test_disabled_option_is_not_selectable() {
    let select = fruit();
    assert!(!select.select(1));
    assert_eq!(select.selected_value(), None);
}

#[test]
fn test_escape_closes_without_change() {
    let select = fruit().default_value("apple");
    press(&select, Key::Enter);
    press(&select, Key::Down);

    assert_eq!(press(&select, Key::Escape), WidgetResult::Closed);
    assert_eq!(select.selected_value().as_deref(), Some("apple"));
}

#[test]
fn test_typeahead_on_closed_trigger_selects() {
    let select = fruit();

    assert_eq!(press(&select, Key::Char('c')), WidgetResult::Selected);
    assert_eq!(select.selected_value().as_deref(), Some("cherry"));
    assert!(!select.is_open());
}

#[test]
fn test_typeahead_skips_disabled_option() {
    let select = fruit();
    assert_eq!(press(&select, Key::Char('b')), WidgetResult::Handled);
    assert_eq!(select.selected_value(), None);
}

#[test]
fn test_open_and_close_callbacks() {
    let opens = Arc::new(AtomicUsize::new(0));
    let opened = Arc::clone(&opens);
    let select = fruit().on_open(callback(move |()| {
        opened.fetch_add(1, Ordering::SeqCst);
    }));

    select.set_open(true);
    select.set_open(true);
    assert_eq!(opens.load(Ordering::SeqCst), 1);
}
