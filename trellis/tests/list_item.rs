use trellis::classes::OwnerState;
use trellis::components::{
    Child, ContainerProps, List, ListItem, ListItemOwnerState, ListItemSecondaryAction,
    ListItemSlotProps, ListItemSlots, RootComponent, RootProps, SlotProps,
};
use trellis::context::VerticalAlign;
use trellis::{Component, Mount, Node, RenderCx, Theme};
use uidom::{find_element, Element, Role};

fn render(component: &dyn Component) -> Element {
    render_with(&Theme::default(), component)
}

fn render_with(theme: &Theme, component: &dyn Component) -> Element {
    let mut cx = RenderCx::new(theme);
    component.render(&mut cx)
}

fn child_ids(element: &Element) -> Vec<&str> {
    element
        .child_elements()
        .iter()
        .map(|child| child.id.as_str())
        .collect()
}

fn marker(id: &str) -> Child {
    Child::secondary_action(Node::component(
        ListItemSecondaryAction::new().id(id).child("⋮"),
    ))
}

// ============================================================================
// Density
// ============================================================================

#[test]
fn test_item_inherits_dense_from_list() {
    let list = List::new()
        .is_dense(true)
        .item(ListItem::new().id("a").child("A"));
    let tree = render(&list);

    let item = find_element(&tree, "a").unwrap();
    assert!(item.has_class("TrellisListItem-dense"));
    assert!(tree.has_class("TrellisList-dense"));
}

#[test]
fn test_explicit_not_dense_wins_over_dense_list() {
    let list = List::new()
        .is_dense(true)
        .item(ListItem::new().id("a").is_dense(false).child("A"));
    let tree = render(&list);

    assert!(!find_element(&tree, "a").unwrap().has_class("TrellisListItem-dense"));
}

#[test]
fn test_theme_default_does_not_drop_inherited_density() {
    let theme = Theme::from_json(r#"{ "list_item": { "is_dense": false } }"#).unwrap();
    let list = List::new()
        .is_dense(true)
        .item(ListItem::new().id("a").child("A"));
    let tree = render_with(&theme, &list);

    assert!(find_element(&tree, "a").unwrap().has_class("TrellisListItem-dense"));
}

#[test]
fn test_theme_default_adds_density_outside_list() {
    let theme = Theme::from_json(r#"{ "list_item": { "is_dense": true } }"#).unwrap();

    let themed = render_with(&theme, &ListItem::new().id("a"));
    assert!(themed.has_class("TrellisListItem-dense"));

    let explicit = render_with(&theme, &ListItem::new().id("b").is_dense(false));
    assert!(!explicit.has_class("TrellisListItem-dense"));
}

#[test]
fn test_item_outside_list_is_not_dense() {
    let tree = render(&ListItem::new().id("a").child("A"));
    assert!(!tree.has_class("TrellisListItem-dense"));
}

#[test]
fn test_item_republishes_density_to_nested_items() {
    let outer = ListItem::new()
        .id("outer")
        .is_dense(true)
        .child(Child::component(ListItem::new().id("inner").child("B")));
    let tree = render(&outer);

    assert!(find_element(&tree, "inner").unwrap().has_class("TrellisListItem-dense"));
}

#[test]
fn test_nested_list_publishes_its_own_density() {
    let outer = List::new().is_dense(true).item(
        ListItem::new()
            .id("outer")
            .child(Child::component(List::new().item(ListItem::new().id("inner")))),
    );
    let tree = render(&outer);

    assert!(find_element(&tree, "outer").unwrap().has_class("TrellisListItem-dense"));
    assert!(!find_element(&tree, "inner").unwrap().has_class("TrellisListItem-dense"));
}

// ============================================================================
// Secondary action
// ============================================================================

#[test]
fn test_trailing_marker_is_extracted_and_wrapped() {
    let item = ListItem::new()
        .id("item")
        .child(Element::text("A").id("a"))
        .child(Element::text("B").id("b"))
        .child(marker("marker"));
    let tree = render(&item);

    assert_eq!(tree.id, "item-container");
    assert_eq!(tree.tag, "li");
    assert_eq!(tree.role, Some(Role::ListItem));
    assert!(tree.has_class("TrellisListItem-container"));
    assert_eq!(child_ids(&tree), vec!["item", "marker"]);

    let root = find_element(&tree, "item").unwrap();
    assert_eq!(root.tag, "div");
    assert_eq!(child_ids(root), vec!["a", "b"]);
    assert!(root.has_class("TrellisListItem-secondaryAction"));
}

#[test]
fn test_end_action_takes_precedence_over_marker() {
    let item = ListItem::new()
        .id("item")
        .child(Element::text("A").id("a"))
        .child(Element::text("B").id("b"))
        .child(marker("marker"))
        .end_action(Element::text("C").id("c"));
    let tree = render(&item);

    assert_eq!(child_ids(&tree), vec!["item", "item-secondary-action"]);

    let root = find_element(&tree, "item").unwrap();
    assert_eq!(child_ids(root), vec!["a", "b", "marker"]);

    let slot = find_element(&tree, "item-secondary-action").unwrap();
    assert!(slot.has_class("TrellisListItemSecondaryAction-root"));
    assert_eq!(child_ids(slot), vec!["c"]);
}

#[test]
fn test_end_action_that_is_a_slot_is_not_wrapped_twice() {
    let item = ListItem::new()
        .id("item")
        .child("A")
        .end_action(Node::component(ListItemSecondaryAction::new().id("slot")));
    let tree = render(&item);

    assert_eq!(child_ids(&tree), vec!["item", "slot"]);
}

#[test]
fn test_plain_children_render_single_element() {
    let item = ListItem::new()
        .id("item")
        .child(Element::text("A").id("a"))
        .child(Element::text("B").id("b"));
    let tree = render(&item);

    assert_eq!(tree.id, "item");
    assert_eq!(tree.tag, "li");
    assert_eq!(tree.role, Some(Role::ListItem));
    assert_eq!(child_ids(&tree), vec!["a", "b"]);
    assert!(!tree.has_class("TrellisListItem-secondaryAction"));
}

#[test]
fn test_untagged_trailing_child_stays_in_content() {
    let item = ListItem::new()
        .id("item")
        .child(Element::text("A").id("a"))
        .child(Node::component(ListItemSecondaryAction::new().id("untagged")));
    let tree = render(&item);

    assert_eq!(tree.id, "item");
    assert_eq!(child_ids(&tree), vec!["a", "untagged"]);
}

#[test]
fn test_marker_in_the_middle_is_not_extracted() {
    let item = ListItem::new()
        .id("item")
        .child(marker("marker"))
        .child(Element::text("A").id("a"));
    let tree = render(&item);

    assert_eq!(tree.id, "item");
    assert_eq!(child_ids(&tree), vec!["marker", "a"]);
}

#[test]
fn test_secondary_action_reads_no_gutters() {
    let item = ListItem::new().id("item").no_gutters(true).child(marker("m"));
    let tree = render(&item);

    let slot = find_element(&tree, "m").unwrap();
    assert!(slot.has_class("TrellisListItemSecondaryAction-noGutters"));
    assert_eq!(slot.position, uidom::Position::Absolute);
}

#[test]
fn test_container_component_and_props() {
    let item = ListItem::new()
        .id("item")
        .container_component("div")
        .container_props(ContainerProps::new().class("row").attr("data-row", "1"))
        .child(marker("m"));
    let tree = render(&item);

    assert_eq!(tree.tag, "div");
    assert!(tree.has_class("row"));
    assert_eq!(tree.get_attr("data-row"), Some("1"));
}

// ============================================================================
// Root selection
// ============================================================================

#[test]
fn test_is_button_changes_only_button_token_and_interactivity() {
    let plain = render(&ListItem::new().id("item").child("A"));
    let button = render(&ListItem::new().id("item").is_button(true).child("A"));

    let plain_tokens: Vec<&str> = plain.classes.iter().collect();
    let button_tokens: Vec<&str> = button
        .classes
        .iter()
        .filter(|token| *token != "TrellisButtonBase-root" && *token != "TrellisListItem-button")
        .collect();
    assert_eq!(plain_tokens, button_tokens);
    assert!(button.has_class("TrellisListItem-button"));

    assert_eq!(plain.tag, button.tag);
    assert!(!plain.focusable);
    assert!(button.focusable);
    assert!(button.clickable);
    assert_eq!(button.role, Some(Role::Button));
}

#[test]
fn test_button_bucket_differs_only_by_button() {
    let owner = ListItemOwnerState::default();
    let plain = owner.classes(&Default::default());
    let button = ListItemOwnerState {
        is_button: true,
        ..owner
    }
    .classes(&Default::default());

    let mut expected = plain.root().clone();
    expected.push("TrellisListItem-button");
    assert_eq!(button.root(), &expected);
    assert_eq!(button.get("container"), plain.get("container"));
}

#[test]
fn test_disabled_button_is_not_focusable() {
    let tree = render(&ListItem::new().id("item").is_button(true).disabled(true));

    assert!(!tree.focusable);
    assert!(tree.disabled);
    assert!(tree.has_class("Trellis-disabled"));
    assert_eq!(tree.get_attr("tabindex"), Some("-1"));
}

#[test]
fn test_root_tag_override() {
    let tree = render(&ListItem::new().id("item").root_component(RootComponent::tag("section")));
    assert_eq!(tree.tag, "section");
    assert!(tree.has_class("TrellisListItem-root"));
}

#[test]
fn test_root_tag_wins_over_custom_slot() {
    let item = ListItem::new()
        .id("item")
        .custom_slots(ListItemSlots {
            root: Some(RootComponent::custom(|props: RootProps| {
                Element::new("a").id(props.id)
            })),
        })
        .root_component(RootComponent::tag("section"));
    let tree = render(&item);

    assert_eq!(tree.tag, "section");
    assert!(tree.has_class("TrellisListItem-root"));
}

#[test]
fn test_custom_slot_root_used_without_root_component() {
    let item = ListItem::new().id("item").custom_slots(ListItemSlots {
        root: Some(RootComponent::custom(|props: RootProps| {
            Element::new("a").id(props.id)
        })),
    });

    assert_eq!(render(&item).tag, "a");
}

#[test]
fn test_custom_root_receives_classes_and_children() {
    let item = ListItem::new()
        .id("item")
        .is_selected(true)
        .root_component(RootComponent::custom(|props: RootProps| {
            assert!(props.owner.is_selected);
            Element::new("a")
                .id(props.id)
                .class_list(&props.classes)
                .children(props.children)
        }))
        .child(Element::text("A").id("a"));
    let tree = render(&item);

    assert_eq!(tree.tag, "a");
    assert!(tree.has_class("Trellis-selected"));
    assert_eq!(child_ids(&tree), vec!["a"]);
    assert_eq!(tree.get_attr("aria-selected"), Some("true"));
}

#[test]
fn test_slot_props_and_class_name_order() {
    let item = ListItem::new()
        .id("item")
        .is_dense(true)
        .custom_classes(trellis::classes::CustomClasses::new().with("dense", "tight"))
        .custom_slot_props(ListItemSlotProps {
            root: SlotProps::new().class("slot").attr("data-x", "y"),
        })
        .class_name("mine");
    let tree = render(&item);

    let tokens: Vec<&str> = tree.classes.iter().collect();
    assert_eq!(
        tokens,
        vec![
            "TrellisListItem-root",
            "TrellisListItem-dense",
            "tight",
            "TrellisListItem-gutters",
            "TrellisListItem-padding",
            "slot",
            "mine",
        ]
    );
    assert_eq!(tree.get_attr("data-x"), Some("y"));
}

#[test]
fn test_theme_defaults_apply_below_explicit_options() {
    let theme = Theme::from_json(
        r#"{ "list_item": { "has_divider": true, "vertical_align": "flex-start" } }"#,
    )
    .unwrap();

    let themed = render_with(&theme, &ListItem::new().id("a"));
    assert!(themed.has_class("TrellisListItem-divider"));
    assert!(themed.has_class("TrellisListItem-alignItemsFlexStart"));

    let explicit = render_with(
        &theme,
        &ListItem::new()
            .id("b")
            .has_divider(false)
            .vertical_align(VerticalAlign::Center),
    );
    assert!(!explicit.has_class("TrellisListItem-divider"));
    assert!(!explicit.has_class("TrellisListItem-alignItemsFlexStart"));
}

// ============================================================================
// Initial focus
// ============================================================================

#[test]
fn test_initial_focus_runs_once_per_mount() {
    let item = ListItem::new()
        .id("item")
        .is_button(true)
        .initial_focus(true)
        .child("A");
    let mut mount = Mount::new(Theme::default());

    let first = mount.render(&item);
    assert_eq!(first.focus_attempts, 1);
    assert!(first.diagnostics.is_empty());
    assert_eq!(mount.focus().focused(), Some("item"));

    let second = mount.render(&item);
    assert_eq!(second.focus_attempts, 0);
    assert_eq!(second.effects_run, 0);
}

#[test]
fn test_initial_focus_runs_again_after_remount() {
    let item = ListItem::new().id("item").is_button(true).initial_focus(true);
    let mut mount = Mount::new(Theme::default());

    mount.render(&item);
    mount.unmount();
    assert_eq!(mount.focus().focused(), None);

    assert_eq!(mount.render(&item).focus_attempts, 1);
}

#[test]
fn test_initial_focus_forgotten_when_owner_leaves_tree() {
    let item = ListItem::new().id("item").is_button(true).initial_focus(true);
    let other = ListItem::new().id("other");
    let mut mount = Mount::new(Theme::default());

    mount.render(&item);
    mount.render(&other);
    assert_eq!(mount.focus().focused(), None);

    assert_eq!(mount.render(&item).focus_attempts, 1);
}

#[test]
fn test_initial_focus_on_structural_root() {
    let item = ListItem::new().id("item").initial_focus(true);
    let mut mount = Mount::new(Theme::default());

    let report = mount.render(&item);
    assert!(report.diagnostics.is_empty());
    assert_eq!(mount.focus().focused(), Some("item"));
}

#[test]
fn test_initial_focus_on_missing_root_reports_diagnostic() {
    let item = ListItem::new()
        .id("item")
        .initial_focus(true)
        .root_component(RootComponent::custom(|props: RootProps| {
            Element::new("section").children(props.children)
        }));
    let mut mount = Mount::new(Theme::default());

    let report = mount.render(&item);
    assert_eq!(report.focus_attempts, 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert!(report.diagnostics[0].contains("unable to set focus"));
    assert_eq!(mount.focus().focused(), None);
    assert!(mount.tree().is_some());
}

#[test]
fn test_initial_focus_on_disabled_item_is_ignored() {
    let item = ListItem::new()
        .id("item")
        .is_button(true)
        .disabled(true)
        .initial_focus(true);
    let mut mount = Mount::new(Theme::default());

    let report = mount.render(&item);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(mount.focus().focused(), None);
}

#[test]
fn test_without_initial_focus_nothing_is_focused() {
    let item = ListItem::new().id("item").is_button(true);
    let mut mount = Mount::new(Theme::default());

    let report = mount.render(&item);
    assert_eq!(report.focus_attempts, 0);
    assert_eq!(mount.focus().focused(), None);
}
