use std::collections::BTreeMap;

use uidom::{ClassList, Element, Role};

use crate::classes::utility_class;

/// Interactive root: pressable, focusable, with a touch-ripple layer.
///
/// Used wherever a component needs a button-like element that keeps the
/// caller's tag and classes.
#[derive(Debug, Clone)]
pub struct ButtonBase {
    id: String,
    tag: String,
    classes: ClassList,
    attrs: BTreeMap<String, String>,
    disabled: bool,
    disable_ripple: bool,
}

impl ButtonBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: "button".to_string(),
            classes: ClassList::new(),
            attrs: BTreeMap::new(),
            disabled: false,
            disable_ripple: false,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn classes(mut self, classes: &ClassList) -> Self {
        self.classes.merge(classes);
        self
    }

    pub fn attrs(mut self, attrs: BTreeMap<String, String>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn disable_ripple(mut self, disable: bool) -> Self {
        self.disable_ripple = disable;
        self
    }

    pub fn build(self, children: Vec<Element>) -> Element {
        let mut classes = ClassList::from(utility_class("ButtonBase", "root"));
        if self.disabled {
            classes.push(utility_class("ButtonBase", "disabled"));
        }
        classes.merge(&self.classes);

        let mut element = Element::new(self.tag)
            .id(self.id)
            .role(Role::Button)
            .class_list(&classes)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .attr("tabindex", if self.disabled { "-1" } else { "0" })
            .children(children);
        element.attrs.extend(self.attrs);

        if !self.disable_ripple && !self.disabled {
            element = element.child(
                Element::new("span")
                    .class(utility_class("TouchRipple", "root"))
                    .attr("aria-hidden", "true"),
            );
        }

        element
    }
}
