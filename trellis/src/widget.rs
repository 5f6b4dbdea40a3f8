//! Keyboard-driven widgets.
//!
//! Interactive components keep their state behind `State<T>`, so the host can
//! route key presses to them through `&self` and re-render afterwards.

use std::sync::atomic::{AtomicUsize, Ordering};

use uidom::{Key, Modifiers};

/// What a key press did to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Not for this widget; the host may route it elsewhere.
    #[default]
    Ignored,
    /// Consumed without a visible effect.
    Handled,
    /// A popup (menu, popover, select, tooltip) opened.
    Opened,
    /// A popup closed without a selection.
    Closed,
    /// Highlight moved to another item.
    HighlightMoved,
    /// An item was activated (menu item).
    Activated,
    /// Value changed (checkbox toggle).
    Changed,
    /// An option was chosen (select).
    Selected,
}

impl WidgetResult {
    pub fn is_handled(&self) -> bool {
        *self != Self::Ignored
    }
}

/// A component that reacts to the keyboard while focused.
pub trait Widget: Send + Sync {
    fn id(&self) -> &str;

    fn is_focusable(&self) -> bool {
        true
    }

    fn handle_key(&self, key: Key, mods: Modifiers) -> WidgetResult {
        let _ = (key, mods);
        WidgetResult::Ignored
    }
}

/// Next process-unique widget ID, e.g. `__checkbox_3`.
pub(crate) fn next_id(kind: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("__{kind}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}
