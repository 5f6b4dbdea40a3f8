use uidom::{ClassList, Element, Position, Role};

use crate::classes::{CustomClasses, OwnerState, SlotDef};
use crate::context::ListContext;
use crate::render::{Component, Node, RenderCx};
use crate::widget::next_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOwnerState {
    pub is_dense: bool,
    pub no_padding: bool,
    pub has_header: bool,
}

impl OwnerState for ListOwnerState {
    const NAME: &'static str = "List";

    fn slots(&self) -> Vec<SlotDef> {
        vec![(
            "root",
            vec![
                Some("root"),
                (!self.no_padding).then_some("padding"),
                self.is_dense.then_some("dense"),
                self.has_header.then_some("subheader"),
            ],
        )]
    }
}

/// Semantic list wrapper. Publishes its density to the items inside it.
#[derive(Debug)]
pub struct List {
    id: String,
    content: Vec<Node>,
    header: Option<Node>,
    is_dense: Option<bool>,
    no_padding: Option<bool>,
    component: Option<String>,
    custom_classes: CustomClasses,
    class_name: ClassList,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub fn new() -> Self {
        Self {
            id: next_id("list"),
            content: Vec::new(),
            header: None,
            is_dense: None,
            no_padding: None,
            component: None,
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

    /// Add a component child, typically a `ListItem`.
    pub fn item(self, component: impl Component + 'static) -> Self {
        self.child(Node::component(component))
    }

    pub fn header(mut self, node: impl Into<Node>) -> Self {
        self.header = Some(node.into());
        self
    }

    pub fn is_dense(mut self, is_dense: bool) -> Self {
        self.is_dense = Some(is_dense);
        self
    }

    pub fn no_padding(mut self, no_padding: bool) -> Self {
        self.no_padding = Some(no_padding);
        self
    }

    /// Root tag, `ul` by default.
    pub fn component(mut self, tag: impl Into<String>) -> Self {
        self.component = Some(tag.into());
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

    pub fn owner_state(&self, cx: &RenderCx<'_>) -> ListOwnerState {
        let defaults = &cx.theme().components.list;
        ListOwnerState {
            is_dense: self.is_dense.or(defaults.is_dense).unwrap_or(false),
            no_padding: self.no_padding.or(defaults.no_padding).unwrap_or(false),
            has_header: self.header.is_some(),
        }
    }
}

impl Component for List {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let owner = self.owner_state(cx);
        let classes = owner.classes(&self.custom_classes);

        let children = cx.provide(ListContext::dense(owner.is_dense), |cx| {
            self.header
                .iter()
                .chain(&self.content)
                .map(|node| node.render(cx))
                .collect::<Vec<_>>()
        });

        Element::new(self.component.as_deref().unwrap_or("ul"))
            .id(self.id.clone())
            .role(Role::List)
            .class_list(&classes.root().clone().merged(&self.class_name))
            .position(Position::Relative)
            .children(children)
    }
}
