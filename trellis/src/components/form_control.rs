use uidom::{ClassList, Element, Role};

use super::SelectVariant;
use crate::classes::utility_class;
use crate::render::{Component, Node, RenderCx};
use crate::widget::next_id;

/// State shared by a form control with the inputs inside it.
///
/// Fields that are set here override the matching option on the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormControlContext {
    pub variant: Option<SelectVariant>,
    pub error: bool,
    pub disabled: bool,
    pub required: bool,
}

/// Groups form inputs and publishes a [`FormControlContext`] to them.
#[derive(Debug)]
pub struct FormControl {
    id: String,
    context: FormControlContext,
    content: Vec<Node>,
    class_name: ClassList,
}

impl Default for FormControl {
    fn default() -> Self {
        Self::new()
    }
}

impl FormControl {
    pub fn new() -> Self {
        Self {
            id: next_id("form_control"),
            context: FormControlContext::default(),
            content: Vec::new(),
            class_name: ClassList::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn variant(mut self, variant: SelectVariant) -> Self {
        self.context.variant = Some(variant);
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.context.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.context.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.context.required = required;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    pub fn item(self, component: impl Component + 'static) -> Self {
        self.child(Node::component(component))
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }
}

impl Component for FormControl {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let children = cx.provide(self.context, |cx| {
            self.content
                .iter()
                .map(|node| node.render(cx))
                .collect::<Vec<_>>()
        });

        let mut classes = ClassList::from(utility_class("FormControl", "root"));
        if self.context.error {
            classes.push(utility_class("FormControl", "error"));
        }
        if self.context.disabled {
            classes.push(utility_class("FormControl", "disabled"));
        }
        classes.merge(&self.class_name);

        Element::new("div")
            .id(self.id.clone())
            .role(Role::Group)
            .class_list(&classes)
            .children(children)
    }
}
