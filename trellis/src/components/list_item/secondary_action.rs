use uidom::{ClassList, Element, Position};

use crate::classes::{CustomClasses, OwnerState, SlotDef, utility_class};
use crate::context::ListContext;
use crate::render::{Component, Node, RenderCx};
use crate::widget::next_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecondaryActionOwnerState {
    pub no_gutters: bool,
}

impl OwnerState for SecondaryActionOwnerState {
    const NAME: &'static str = "ListItemSecondaryAction";

    fn slots(&self) -> Vec<SlotDef> {
        vec![("root", vec![Some("root"), self.no_gutters.then_some("noGutters")])]
    }
}

/// Trailing action slot of a list item, positioned out of flow.
///
/// Put it last in a list item's children (tagged
/// [`ChildRole::SecondaryAction`](super::ChildRole)) or pass it as the
/// item's end action.
#[derive(Debug)]
pub struct ListItemSecondaryAction {
    id: String,
    content: Vec<Node>,
    custom_classes: CustomClasses,
    class_name: ClassList,
}

impl Default for ListItemSecondaryAction {
    fn default() -> Self {
        Self::new()
    }
}

impl ListItemSecondaryAction {
    pub fn new() -> Self {
        Self {
            id: next_id("list_item_secondary_action"),
            content: Vec::new(),
            custom_classes: CustomClasses::new(),
            class_name: ClassList::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    pub fn custom_classes(mut self, classes: CustomClasses) -> Self {
        self.custom_classes = classes;
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }
}

impl Component for ListItemSecondaryAction {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let owner = SecondaryActionOwnerState {
            no_gutters: cx.consume::<ListContext>().is_some_and(|ctx| ctx.no_gutters),
        };
        let classes = owner.classes(&self.custom_classes);
        let children: Vec<Element> = self.content.iter().map(|node| node.render(cx)).collect();

        Element::new("div")
            .id(self.id.clone())
            .class_list(&classes.root().clone().merged(&self.class_name))
            .position(Position::Absolute)
            .children(children)
    }
}

/// Wrap an already rendered end action in the secondary action slot unless
/// it already is one.
pub(crate) fn into_slot(element: Element, id: String, cx: &mut RenderCx<'_>) -> Element {
    if element.has_class(&utility_class(SecondaryActionOwnerState::NAME, "root")) {
        return element;
    }
    ListItemSecondaryAction::new().id(id).child(element).render(cx)
}
