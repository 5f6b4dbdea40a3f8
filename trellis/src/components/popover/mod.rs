//! Click-to-open floating panel.

mod events;

use uidom::{ClassList, Element, Position, Role};

use crate::primitives::{Callback, Controllable, POPUP_Z_INDEX, open_state};
use crate::render::{Component, Node, RenderCx};
use crate::widget::next_id;

const CONTENT_CLASSES: &str = "bg-white shadow-md rounded-md p-4";
pub(crate) const ARROW_CLASSES: &str = "fill-current text-gray-200";

/// Arrow pointing from the content back at the trigger.
#[derive(Debug, Clone, Default)]
pub struct PopoverArrow {
    class_name: ClassList,
}

impl PopoverArrow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }
}

impl Component for PopoverArrow {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        Element::new("svg")
            .class_list(&ClassList::from(ARROW_CLASSES).merged(&self.class_name))
            .attr("aria-hidden", "true")
    }
}

/// Button inside the content that closes the popover.
#[derive(Debug, Clone)]
pub struct PopoverClose {
    label: String,
    class_name: ClassList,
}

impl Default for PopoverClose {
    fn default() -> Self {
        Self::new("×")
    }
}

impl PopoverClose {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class_name: ClassList::new(),
        }
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }
}

impl Component for PopoverClose {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        Element::text(self.label.clone())
            .tag("button")
            .role(Role::Button)
            .class_list(&self.class_name)
            .attr("aria-label", "Close")
            .focusable(true)
            .clickable(true)
    }
}

#[derive(Debug)]
pub struct Popover {
    id: String,
    open: Controllable<bool>,
    trigger: Node,
    content: Vec<Node>,
    arrow: Option<PopoverArrow>,
    close: Option<PopoverClose>,
    class_name: ClassList,
}

impl Popover {
    pub fn new(trigger: impl Into<Node>) -> Self {
        Self {
            id: next_id("popover"),
            open: Controllable::new(false),
            trigger: trigger.into(),
            content: Vec::new(),
            arrow: None,
            close: None,
            class_name: ClassList::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Controlled open state.
    pub fn open(mut self, open: bool) -> Self {
        self.open = self.open.with_controlled(open);
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.open = self.open.with_default(open);
        self
    }

    pub fn on_open_change(mut self, on_open_change: Callback<bool>) -> Self {
        self.open = self.open.with_on_change(on_open_change);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    pub fn arrow(mut self, arrow: PopoverArrow) -> Self {
        self.arrow = Some(arrow);
        self
    }

    pub fn close_button(mut self, close: PopoverClose) -> Self {
        self.close = Some(close);
        self
    }

    /// Extra classes on the content panel.
    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    pub fn set_controlled_open(&mut self, open: Option<bool>) {
        self.open.set_controlled(open);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) -> bool {
        self.open.set(open)
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn content_id(&self) -> String {
        format!("{}-content", self.id)
    }
}

impl Component for Popover {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let open = self.is_open();

        let trigger = Element::new("button")
            .id(self.trigger_id())
            .role(Role::Button)
            .attr("aria-haspopup", "dialog")
            .attr("aria-expanded", open.to_string())
            .attr("aria-controls", self.content_id())
            .attr("data-state", open_state(open))
            .focusable(true)
            .clickable(true)
            .child(self.trigger.render(cx));

        let mut root = Element::new("div")
            .id(self.id.clone())
            .position(Position::Relative)
            .child(trigger);

        if open {
            let mut children: Vec<Element> =
                self.content.iter().map(|node| node.render(cx)).collect();
            if let Some(close) = &self.close {
                children.push(close.render(cx).id(format!("{}-close", self.id)));
            }
            if let Some(arrow) = &self.arrow {
                children.push(arrow.render(cx));
            }

            root = root.child(
                Element::new("div")
                    .id(self.content_id())
                    .role(Role::Dialog)
                    .class_list(&ClassList::from(CONTENT_CLASSES).merged(&self.class_name))
                    .attr("data-state", open_state(open))
                    .position(Position::Absolute)
                    .z_index(POPUP_Z_INDEX)
                    .children(children),
            );
        }

        root
    }
}
