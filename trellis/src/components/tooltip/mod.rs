//! Hover/focus tooltips with a shared open delay.
//!
//! Timing is driven by the host: pointer and focus events carry the current
//! instant and [`Tooltip::poll`] opens a tooltip once its delay has passed.

mod events;

use std::time::{Duration, Instant};

use uidom::{ClassList, Element, Position, Role};

use crate::primitives::{TOOLTIP_Z_INDEX, open_state};
use crate::render::{Component, Node, RenderCx};
use crate::state::State;
use crate::theme::{Theme, TooltipDefaults};
use crate::widget::{WidgetResult, next_id};

/// Delay settings shared by every tooltip created from it.
///
/// Closing a tooltip starts the skip window: another tooltip opened within
/// it shows immediately.
#[derive(Debug, Clone)]
pub struct TooltipProvider {
    delay: Duration,
    skip_delay: Duration,
    last_closed: State<Option<Instant>>,
}

impl Default for TooltipProvider {
    fn default() -> Self {
        Self::from_defaults(&TooltipDefaults::default())
    }
}

impl TooltipProvider {
    pub fn new(delay: Duration, skip_delay: Duration) -> Self {
        Self {
            delay,
            skip_delay,
            last_closed: State::new(None),
        }
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self::from_defaults(&theme.components.tooltip)
    }

    fn from_defaults(defaults: &TooltipDefaults) -> Self {
        Self::new(defaults.delay(), defaults.skip_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn skip_delay(&self) -> Duration {
        self.skip_delay
    }

    fn in_skip_window(&self, now: Instant) -> bool {
        self.last_closed
            .get()
            .is_some_and(|closed| now.saturating_duration_since(closed) < self.skip_delay)
    }

    fn record_close(&self, now: Instant) {
        self.last_closed.set(Some(now));
    }
}

#[derive(Debug, Clone)]
pub struct TooltipArrow {
    class_name: ClassList,
    width: u16,
    height: u16,
}

impl Default for TooltipArrow {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipArrow {
    pub fn new() -> Self {
        Self {
            class_name: ClassList::new(),
            width: 12,
            height: 6,
        }
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Component for TooltipArrow {
    fn render(&self, _cx: &mut RenderCx<'_>) -> Element {
        Element::new("svg")
            .class_list(&ClassList::from("fill-inverse").merged(&self.class_name))
            .attr("width", self.width.to_string())
            .attr("height", self.height.to_string())
            .attr("aria-hidden", "true")
    }
}

#[derive(Debug)]
pub struct Tooltip {
    id: String,
    provider: TooltipProvider,
    open: State<bool>,
    opens_at: State<Option<Instant>>,
    trigger: Node,
    content: Vec<Node>,
    arrow: Option<TooltipArrow>,
    class_name: ClassList,
}

impl Tooltip {
    pub fn new(provider: &TooltipProvider, trigger: impl Into<Node>) -> Self {
        Self {
            id: next_id("tooltip"),
            provider: provider.clone(),
            open: State::new(false),
            opens_at: State::new(None),
            trigger: trigger.into(),
            content: Vec::new(),
            arrow: None,
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

    pub fn arrow(mut self, arrow: TooltipArrow) -> Self {
        self.arrow = Some(arrow);
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn content_id(&self) -> String {
        format!("{}-content", self.id)
    }

    /// Pointer entered the trigger.
    pub fn pointer_enter(&self, now: Instant) -> WidgetResult {
        self.schedule(now)
    }

    /// Trigger received keyboard focus.
    pub fn focus(&self, now: Instant) -> WidgetResult {
        self.schedule(now)
    }

    pub fn pointer_leave(&self, now: Instant) -> WidgetResult {
        self.close(now)
    }

    pub fn blur(&self, now: Instant) -> WidgetResult {
        self.close(now)
    }

    /// Open when the pending delay has elapsed.
    pub fn poll(&self, now: Instant) -> WidgetResult {
        match self.opens_at.get() {
            Some(due) if now >= due => {
                self.opens_at.set(None);
                self.open.set(true);
                WidgetResult::Opened
            }
            _ => WidgetResult::Ignored,
        }
    }

    fn schedule(&self, now: Instant) -> WidgetResult {
        if self.is_open() {
            return WidgetResult::Handled;
        }
        if self.provider.in_skip_window(now) {
            self.opens_at.set(None);
            self.open.set(true);
            return WidgetResult::Opened;
        }
        if self.opens_at.get().is_none() {
            self.opens_at.set(Some(now + self.provider.delay()));
        }
        WidgetResult::Handled
    }

    pub(crate) fn close(&self, now: Instant) -> WidgetResult {
        self.opens_at.set(None);
        if !self.is_open() {
            return WidgetResult::Ignored;
        }
        self.open.set(false);
        self.provider.record_close(now);
        WidgetResult::Closed
    }
}

impl Component for Tooltip {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let open = self.is_open();

        let mut trigger = Element::new("span")
            .id(self.trigger_id())
            .attr("data-state", open_state(open))
            .focusable(true)
            .child(self.trigger.render(cx));
        if open {
            trigger = trigger.attr("aria-describedby", self.content_id());
        }

        let mut root = Element::new("span")
            .id(self.id.clone())
            .position(Position::Relative)
            .child(trigger);

        if open {
            let mut children: Vec<Element> =
                self.content.iter().map(|node| node.render(cx)).collect();
            if let Some(arrow) = &self.arrow {
                children.push(arrow.render(cx));
            }
            root = root.child(
                Element::new("div")
                    .id(self.content_id())
                    .role(Role::Tooltip)
                    .class_list(&self.class_name)
                    .attr("data-state", open_state(open))
                    .position(Position::Absolute)
                    .z_index(TOOLTIP_Z_INDEX)
                    .children(children),
            );
        }

        root
    }
}
