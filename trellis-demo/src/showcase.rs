//! The sample component tree rendered by the demo.
//!
//! Interactive widgets sit in the tree behind an `Arc`, so the showcase can
//! route key presses to them between renders.

use std::sync::Arc;
use std::time::{Duration, Instant};

use trellis::components::{
    Checkbox, Child, FormControl, List, ListItem, Menu, MenuArrow, MenuItem, Popover,
    PopoverArrow, PopoverClose, Select, SelectItem, Tooltip, TooltipArrow, TooltipProvider,
};
use trellis::primitives::callback;
use trellis::{Node, Theme, Widget, WidgetResult};
use uidom::Element;

use crate::cli::{KeyPress, Target};

pub struct Showcase {
    root: List,
    checkbox: Arc<Checkbox>,
    select: Arc<Select>,
    menu: Arc<Menu>,
    popover: Arc<Popover>,
    tooltip: Arc<Tooltip>,
    tooltip_delay: Duration,
}

impl Showcase {
    pub fn new(theme: &Theme) -> Self {
        let provider = TooltipProvider::from_theme(theme);

        let checkbox = Arc::new(Checkbox::new().id("notifications").on_change(callback(
            |checked: bool| log::info!("[showcase] notifications checked={checked}"),
        )));

        let select = Arc::new(
            Select::new()
                .id("fruit")
                .label("Pick a fruit")
                .item(SelectItem::new("apple", "Apple"))
                .item(SelectItem::new("banana", "Banana").disabled(true))
                .item(SelectItem::new("cherry", "Cherry"))
                .item(SelectItem::new("damson", "Damson"))
                .on_change(callback(|value: String| {
                    log::info!("[showcase] fruit -> {value}")
                })),
        );

        let menu = Arc::new(
            Menu::new("Actions")
                .id("actions")
                .looping(true)
                .item(MenuItem::new("Rename").on_select(callback(|()| {
                    log::info!("[showcase] rename")
                })))
                .item(MenuItem::new("Archive").on_select(callback(|()| {
                    log::info!("[showcase] archive")
                })))
                .item(MenuItem::new("Delete").disabled(true))
                .arrow(MenuArrow::new()),
        );

        let popover = Arc::new(
            Popover::new("About")
                .id("about")
                .child("Component showcase")
                .close_button(PopoverClose::default())
                .arrow(PopoverArrow::new()),
        );

        let tooltip = Arc::new(
            Tooltip::new(&provider, "Help")
                .id("help")
                .child("Route keys as <target>:<key>")
                .arrow(TooltipArrow::new()),
        );

        let root = List::new()
            .id("showcase")
            .header(Element::text("Settings").id("showcase-header"))
            .item(
                ListItem::new()
                    .id("notifications-item")
                    .child("Notifications")
                    .child(Child::secondary_action(Node::component(Arc::clone(
                        &checkbox,
                    )))),
            )
            .item(
                ListItem::new()
                    .id("profile")
                    .is_button(true)
                    .is_selected(true)
                    .initial_focus(true)
                    .has_divider(true)
                    .child("Profile"),
            )
            .item(
                ListItem::new().id("fruit-item").child(Node::component(
                    FormControl::new().id("fruit-form").item(Arc::clone(&select)),
                )),
            )
            .item(
                ListItem::new()
                    .id("actions-item")
                    .child(Node::component(Arc::clone(&menu)))
                    .end_action(Node::component(Arc::clone(&popover))),
            )
            .item(
                ListItem::new()
                    .id("help-item")
                    .child(Node::component(Arc::clone(&tooltip))),
            );

        Self {
            root,
            checkbox,
            select,
            menu,
            popover,
            tooltip,
            tooltip_delay: provider.delay(),
        }
    }

    pub fn root(&self) -> &List {
        &self.root
    }

    /// Rest the pointer on the help tooltip long enough for it to open.
    pub fn hover(&self) -> WidgetResult {
        let now = Instant::now();
        self.tooltip.pointer_enter(now);
        self.tooltip.poll(now + self.tooltip_delay)
    }

    fn widget(&self, target: Target) -> &dyn Widget {
        match target {
            Target::Checkbox => self.checkbox.as_ref(),
            Target::Select => self.select.as_ref(),
            Target::Menu => self.menu.as_ref(),
            Target::Popover => self.popover.as_ref(),
            Target::Tooltip => self.tooltip.as_ref(),
        }
    }

    pub fn dispatch(&self, press: KeyPress) -> WidgetResult {
        let widget = self.widget(press.target);
        let result = widget.handle_key(press.key, press.mods);
        log::debug!(
            "[showcase] {:?} {:?} on '{}' -> {:?}",
            press.key,
            press.mods,
            widget.id(),
            result
        );
        result
    }
}
