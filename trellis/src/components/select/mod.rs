//! Single-value select: a combobox trigger and a listbox of options.
//!
//! The displayed variant follows an enclosing [`FormControl`] when it sets
//! one, then the select's own option, then the theme default.
//!
//! [`FormControl`]: super::FormControl

mod events;
mod item;

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use uidom::{ClassList, Element, Position, Role};

pub use item::SelectItem;

use super::FormControlContext;
use crate::classes::CustomClasses;
use crate::primitives::{Callback, Controllable, POPUP_Z_INDEX, RovingFocus, RovingItem, open_state};
use crate::render::{Component, Node, RenderCx};
use crate::state::State;
use crate::widget::next_id;

const CONTENT_CLASSES: &str = "select-content bg-white shadow-md rounded-md p-4";
const DEFAULT_ICON: &str = "▾";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectVariant {
    Filled,
    #[default]
    Outlined,
    Standard,
}

impl SelectVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for SelectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Select {
    id: String,
    label: Option<String>,
    value: Controllable<Option<String>>,
    open: Controllable<bool>,
    variant: Option<SelectVariant>,
    disabled: bool,
    /// Disabled by an enclosing form control at the last render.
    form_disabled: State<bool>,
    icon: Option<Node>,
    items: Vec<SelectItem>,
    custom_classes: CustomClasses,
    class_name: ClassList,
    on_open: Option<Callback<()>>,
    on_close: Option<Callback<()>>,
    roving: RovingFocus,
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("open", &self.open)
            .field("variant", &self.variant)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    pub fn new() -> Self {
        Self {
            id: next_id("select"),
            label: None,
            value: Controllable::new(None),
            open: Controllable::new(false),
            variant: None,
            disabled: false,
            form_disabled: State::new(false),
            icon: None,
            items: Vec::new(),
            custom_classes: CustomClasses::new(),
            class_name: ClassList::new(),
            on_open: None,
            on_close: None,
            roving: RovingFocus::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Placeholder shown while nothing is selected.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Controlled value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = self.value.with_controlled(Some(value.into()));
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.value = self.value.with_default(Some(value.into()));
        self
    }

    pub fn on_change(mut self, on_change: Callback<String>) -> Self {
        let forward: Callback<Option<String>> = Arc::new(move |value: Option<String>| {
            if let Some(value) = value {
                on_change(value);
            }
        });
        self.value = self.value.with_on_change(forward);
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

    pub fn on_open(mut self, on_open: Callback<()>) -> Self {
        self.on_open = Some(on_open);
        self
    }

    pub fn on_close(mut self, on_close: Callback<()>) -> Self {
        self.on_close = Some(on_close);
        self
    }

    pub fn variant(mut self, variant: SelectVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the dropdown icon.
    pub fn icon(mut self, icon: impl Into<Node>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn item(mut self, item: SelectItem) -> Self {
        self.items.push(item);
        self
    }

    /// Classes keyed by slot; only `root` applies, on the trigger.
    pub fn custom_classes(mut self, classes: CustomClasses) -> Self {
        self.custom_classes = classes;
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    /// Take control of the value between renders. `None` means controlled
    /// with nothing selected.
    pub fn set_controlled_value(&mut self, value: Option<String>) {
        self.value.set_controlled(Some(value));
    }

    /// Hand the value back to the select.
    pub fn release_value(&mut self) {
        self.value.set_controlled(None);
    }

    /// Disabled directly or by the form control seen at the last render.
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.form_disabled.get()
    }

    pub fn selected_value(&self) -> Option<String> {
        self.value.get()
    }

    pub fn selected_item(&self) -> Option<&SelectItem> {
        let value = self.selected_value()?;
        self.items.iter().find(|item| item.value() == value)
    }

    fn selected_index(&self) -> Option<usize> {
        let value = self.selected_value()?;
        self.items.iter().position(|item| item.value() == value)
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

    /// Variant after the form control and theme are taken into account.
    pub fn resolved_variant(&self, cx: &RenderCx<'_>) -> SelectVariant {
        cx.consume::<FormControlContext>()
            .and_then(|form| form.variant)
            .or(self.variant)
            .or(cx.theme().components.select.variant)
            .unwrap_or_default()
    }

    pub(crate) fn roving_items(&self) -> Vec<RovingItem> {
        self.items
            .iter()
            .map(|item| RovingItem::new(item.text()).disabled(item.is_disabled()))
            .collect()
    }

    pub fn set_open(&self, open: bool) {
        if !self.open.set(open) {
            return;
        }
        if open {
            match self.selected_index() {
                Some(index) => self.roving.set(Some(index)),
                None => {
                    self.roving.first(&self.roving_items());
                }
            }
            if let Some(on_open) = &self.on_open {
                on_open(());
            }
        } else {
            self.roving.clear();
            if let Some(on_close) = &self.on_close {
                on_close(());
            }
        }
    }

    /// Choose item `index` and close. Returns false for disabled or unknown
    /// items.
    pub fn select(&self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.is_disabled() {
            log::warn!("[select] ignored disabled option '{}'", item.value());
            return false;
        }
        self.value.set(Some(item.value().to_string()));
        self.set_open(false);
        true
    }
}

impl Component for Select {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let form = cx.consume::<FormControlContext>().copied().unwrap_or_default();
        let variant = self.resolved_variant(cx);
        self.form_disabled.set(form.disabled);
        let disabled = self.disabled || form.disabled;
        let open = self.is_open() && !disabled;

        let mut trigger_classes = ClassList::from("select-trigger");
        if let Some(root) = self.custom_classes.get("root") {
            trigger_classes.merge(root);
        }
        trigger_classes.merge(&self.class_name);

        let value = match self.selected_item() {
            Some(item) => Element::text(item.text()).class("select-value"),
            None => Element::text(self.label.clone().unwrap_or_default())
                .class("select-value")
                .attr("data-placeholder", ""),
        };
        let icon_child = match &self.icon {
            Some(icon) => icon.render(cx),
            None => Element::text(DEFAULT_ICON),
        };
        let icon = Element::new("span")
            .class("select-icon")
            .attr("aria-hidden", "true")
            .child(icon_child);

        let mut trigger = Element::new("button")
            .id(self.trigger_id())
            .role(Role::Combobox)
            .class_list(&trigger_classes)
            .attr("aria-expanded", open.to_string())
            .attr("aria-controls", self.content_id())
            .attr("aria-haspopup", "listbox")
            .attr("data-state", open_state(open))
            .attr("data-variant", variant.as_str())
            .focusable(!disabled)
            .clickable(!disabled)
            .disabled(disabled)
            .children([value, icon]);
        if form.error {
            trigger = trigger.attr("aria-invalid", "true");
        }
        if form.required {
            trigger = trigger.attr("aria-required", "true");
        }

        let mut root = Element::new("div")
            .id(self.id.clone())
            .position(Position::Relative)
            .child(trigger);

        if open {
            let selected = self.selected_value();
            let highlighted = self.highlighted();
            let items: Vec<Element> = self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.build(
                        selected.as_deref() == Some(item.value()),
                        highlighted == Some(i),
                    )
                })
                .collect();

            root = root.child(
                Element::new("div")
                    .id(self.content_id())
                    .role(Role::Listbox)
                    .class_list(&ClassList::from(CONTENT_CLASSES))
                    .attr("data-state", open_state(open))
                    .position(Position::Absolute)
                    .z_index(POPUP_Z_INDEX)
                    .child(Element::new("div").class("select-viewport").children(items)),
            );
        }

        root
    }
}
