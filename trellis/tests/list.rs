use trellis::classes::CustomClasses;
use trellis::components::{List, ListItem};
use trellis::context::{resolve_dense, ListContext};
use trellis::{Component, RenderCx, Theme};
use uidom::{Element, Position, Role};

fn render_with(theme: &Theme, component: &dyn Component) -> Element {
    let mut cx = RenderCx::new(theme);
    component.render(&mut cx)
}

fn render(component: &dyn Component) -> Element {
    render_with(&Theme::default(), component)
}

// ============================================================================
// List container
// ============================================================================

#[test]
fn test_list_renders_header_then_children() {
    let list = List::new()
        .id("list")
        .header(Element::text("Inbox").id("header"))
        .item(ListItem::new().id("a"))
        .item(ListItem::new().id("b"));
    let tree = render(&list);

    let ids: Vec<&str> = tree.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["header", "a", "b"]);
    assert_eq!(tree.tag, "ul");
    assert_eq!(tree.role, Some(Role::List));
    assert_eq!(tree.position, Position::Relative);
}

#[test]
fn test_list_default_classes() {
    let tree = render(&List::new());
    let tokens: Vec<&str> = tree.classes.iter().collect();
    assert_eq!(tokens, vec!["TrellisList-root", "TrellisList-padding"]);
}

#[test]
fn test_list_header_and_no_padding_classes() {
    let tree = render(&List::new().no_padding(true).header("Header"));
    assert!(tree.has_class("TrellisList-subheader"));
    assert!(!tree.has_class("TrellisList-padding"));
}

#[test]
fn test_list_component_override() {
    let tree = render(&List::new().component("nav"));
    assert_eq!(tree.tag, "nav");
}

#[test]
fn test_list_custom_classes_then_class_name() {
    let list = List::new()
        .is_dense(true)
        .custom_classes(CustomClasses::new().with("root", "menu"))
        .class_name("sidebar");
    let tree = render(&list);

    let tokens: Vec<&str> = tree.classes.iter().collect();
    assert_eq!(
        tokens,
        vec![
            "TrellisList-root",
            "menu",
            "TrellisList-padding",
            "TrellisList-dense",
            "sidebar",
        ]
    );
}

#[test]
fn test_list_theme_default_density() {
    let theme = Theme::from_json(r#"{ "list": { "is_dense": true } }"#).unwrap();
    let list = List::new().item(ListItem::new().id("a"));
    let tree = render_with(&theme, &list);

    assert!(tree.has_class("TrellisList-dense"));
    assert!(tree.child_elements()[0].has_class("TrellisListItem-dense"));

    let explicit = render_with(&theme, &List::new().is_dense(false));
    assert!(!explicit.has_class("TrellisList-dense"));
}

// ============================================================================
// Context
// ============================================================================

#[test]
fn test_resolve_dense() {
    let dense = ListContext::dense(true);
    let sparse = ListContext::dense(false);

    assert!(!resolve_dense(None, None));
    assert!(resolve_dense(None, Some(&dense)));
    assert!(!resolve_dense(None, Some(&sparse)));
    assert!(resolve_dense(Some(true), Some(&sparse)));
    assert!(!resolve_dense(Some(false), Some(&dense)));
}

#[test]
fn test_provide_is_scoped() {
    let theme = Theme::default();
    let mut cx = RenderCx::new(&theme);

    assert!(cx.consume::<ListContext>().is_none());
    cx.provide(ListContext::dense(true), |cx| {
        assert!(cx.consume::<ListContext>().unwrap().dense);
        cx.provide(ListContext::dense(false), |cx| {
            assert!(!cx.consume::<ListContext>().unwrap().dense);
        });
        assert!(cx.consume::<ListContext>().unwrap().dense);
    });
    assert!(cx.consume::<ListContext>().is_none());
}

#[test]
fn test_list_context_does_not_leak_to_siblings() {
    let theme = Theme::default();
    let mut cx = RenderCx::new(&theme);

    List::new().is_dense(true).render(&mut cx);
    let sibling = ListItem::new().id("after").render(&mut cx);

    assert!(!sibling.has_class("TrellisListItem-dense"));
}
