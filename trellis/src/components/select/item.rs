use uidom::{ClassList, Element, Role};

use crate::render::{Component, RenderCx};
use crate::widget::next_id;

const ITEM_CLASSES: &str = "select-item p-2 cursor-pointer";

/// One option of a [`Select`](super::Select).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    id: String,
    value: String,
    text: String,
    disabled: bool,
    class_name: ClassList,
}

impl SelectItem {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: next_id("select_item"),
            value: value.into(),
            text: text.into(),
            disabled: false,
            class_name: ClassList::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(super) fn build(&self, selected: bool, highlighted: bool) -> Element {
        let mut element = Element::new("div")
            .id(self.id.clone())
            .role(Role::Option)
            .class_list(&ClassList::from(ITEM_CLASSES).merged(&self.class_name))
            .attr("aria-selected", selected.to_string())
            .attr("data-state", if selected { "checked" } else { "unchecked" })
            .attr("tabindex", "-1")
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .child(Element::text(self.text.clone()).class("select-item-text"));
        if highlighted {
            element = element.attr("data-highlighted", "");
        }
        if self.disabled {
            element = element.attr("data-disabled", "");
        }
        element
    }
}

impl Component for SelectItem {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        self.build(false, false)
    }
}
