//! Two-state checkbox.

mod events;

use uidom::{ClassList, Element, Role};

use crate::primitives::{Callback, Controllable};
use crate::render::{Component, RenderCx};
use crate::widget::next_id;

const ROOT_CLASSES: &str = "checkbox-root inline-flex items-center justify-center checkbox";
const CHECK_ICON: &str = "✓";

#[derive(Debug)]
pub struct Checkbox {
    id: String,
    checked: Controllable<bool>,
    disabled: bool,
    required: bool,
    class_name: ClassList,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox {
    pub fn new() -> Self {
        Self {
            id: next_id("checkbox"),
            checked: Controllable::new(false),
            disabled: false,
            required: false,
            class_name: ClassList::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Controlled checked value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = self.checked.with_controlled(checked);
        self
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.checked = self.checked.with_default(checked);
        self
    }

    pub fn on_change(mut self, on_change: Callback<bool>) -> Self {
        self.checked = self.checked.with_on_change(on_change);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    /// Update the controlled value before the next render.
    pub fn set_checked(&mut self, checked: Option<bool>) {
        self.checked.set_controlled(checked);
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Flip the value. Returns false when disabled.
    pub fn toggle(&self) -> bool {
        if self.disabled {
            log::warn!("[checkbox] toggle ignored on disabled '{}'", self.id);
            return false;
        }
        self.checked.set(!self.checked.get())
    }
}

impl Component for Checkbox {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        let checked = self.is_checked();
        let state = if checked { "checked" } else { "unchecked" };

        let mut classes = ClassList::from(ROOT_CLASSES);
        classes.merge(&self.class_name);

        let mut root = Element::new("button")
            .id(self.id.clone())
            .role(Role::Checkbox)
            .class_list(&classes)
            .attr("aria-checked", checked.to_string())
            .attr("aria-required", self.required.to_string())
            .attr("data-state", state)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled);

        if checked {
            root = root.child(
                Element::text(CHECK_ICON)
                    .class("checkbox-indicator")
                    .attr("data-state", state),
            );
        }

        root
    }
}
