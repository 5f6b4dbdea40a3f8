//! Dropdown menu: a trigger button and a list of actions.

mod events;

use uidom::{ClassList, Element, Position, Role};

use super::popover::ARROW_CLASSES;
use crate::primitives::{Callback, Controllable, POPUP_Z_INDEX, RovingFocus, RovingItem, open_state};
use crate::render::{Component, Node, RenderCx};
use crate::widget::next_id;

const CONTENT_CLASSES: &str = "bg-white shadow-md rounded-md";
const ITEM_CLASSES: &str = "cursor-pointer py-2 px-4 hover:bg-gray-200";

#[derive(Debug, Clone, Default)]
pub struct MenuArrow {
    class_name: ClassList,
}

impl MenuArrow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }
}

impl Component for MenuArrow {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        Element::new("svg")
            .class_list(&ClassList::from(ARROW_CLASSES).merged(&self.class_name))
            .attr("aria-hidden", "true")
    }
}

pub struct MenuItem {
    id: String,
    label: String,
    disabled: bool,
    class_name: ClassList,
    on_select: Option<Callback<()>>,
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: next_id("menu_item"),
            label: label.into(),
            disabled: false,
            class_name: ClassList::new(),
            on_select: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    pub fn on_select(mut self, on_select: Callback<()>) -> Self {
        self.on_select = Some(on_select);
        self
    }

    fn build(&self, highlighted: bool) -> Element {
        let mut element = Element::text(self.label.clone())
            .tag("div")
            .id(self.id.clone())
            .role(Role::MenuItem)
            .class_list(&ClassList::from(ITEM_CLASSES).merged(&self.class_name))
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .attr("tabindex", "-1");
        if highlighted {
            element = element.attr("data-highlighted", "");
        }
        if self.disabled {
            element = element.attr("aria-disabled", "true");
        }
        element
    }
}

impl Component for MenuItem {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        self.build(false)
    }
}

#[derive(Debug)]
pub struct Menu {
    id: String,
    open: Controllable<bool>,
    trigger: Node,
    items: Vec<MenuItem>,
    arrow: Option<MenuArrow>,
    class_name: ClassList,
    roving: RovingFocus,
}

impl Menu {
    pub fn new(trigger: impl Into<Node>) -> Self {
        Self {
            id: next_id("menu"),
            open: Controllable::new(false),
            trigger: trigger.into(),
            items: Vec::new(),
            arrow: None,
            class_name: ClassList::new(),
            roving: RovingFocus::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

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

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn arrow(mut self, arrow: MenuArrow) -> Self {
        self.arrow = Some(arrow);
        self
    }

    /// Wrap keyboard navigation around the ends of the list.
    pub fn looping(mut self, looping: bool) -> Self {
        self.roving = self.roving.looping(looping);
        self
    }

    /// Extra classes on the content panel.
    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.roving.highlighted()
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn content_id(&self) -> String {
        format!("{}-content", self.id)
    }

    pub(crate) fn roving_items(&self) -> Vec<RovingItem> {
        self.items
            .iter()
            .map(|item| RovingItem::new(item.label.clone()).disabled(item.disabled))
            .collect()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
        if !open {
            self.roving.clear();
        }
    }

    /// Run the action of item `index` and close. Disabled items are skipped.
    pub fn activate(&self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.disabled {
            log::warn!("[menu] ignored activation of disabled item '{}'", item.id);
            return false;
        }
        log::debug!("[menu] activated '{}'", item.id);
        if let Some(on_select) = &item.on_select {
            on_select(());
        }
        self.set_open(false);
        true
    }
}

impl Component for Menu {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let open = self.is_open();

        let trigger = Element::new("button")
            .id(self.trigger_id())
            .role(Role::Button)
            .attr("aria-haspopup", "menu")
            .attr("aria-expanded", open.to_string())
            .attr("data-state", open_state(open))
            .focusable(true)
            .clickable(true)
            .child(self.trigger.render(cx));

        let mut root = Element::new("div")
            .id(self.id.clone())
            .position(Position::Relative)
            .child(trigger);

        if open {
            let highlighted = self.highlighted();
            let mut children: Vec<Element> = self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| item.build(highlighted == Some(i)))
                .collect();
            if let Some(arrow) = &self.arrow {
                children.push(arrow.render(cx));
            }

            let mut content = Element::new("div")
                .id(self.content_id())
                .role(Role::Menu)
                .class_list(&ClassList::from(CONTENT_CLASSES).merged(&self.class_name))
                .attr("aria-labelledby", self.trigger_id())
                .attr("data-state", open_state(open))
                .position(Position::Absolute)
                .z_index(POPUP_Z_INDEX)
                .children(children);
            if let Some(item) = highlighted.and_then(|i| self.items.get(i)) {
                content = content.attr("aria-activedescendant", item.id.clone());
            }
            root = root.child(content);
        }

        root
    }
}
