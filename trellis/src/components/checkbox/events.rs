//! Key handling for the Checkbox component.

use uidom::{Key, Modifiers};

use super::Checkbox;
use crate::widget::{Widget, WidgetResult};

impl Widget for Checkbox {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn handle_key(&self, key: Key, mods: Modifiers) -> WidgetResult {
        if !mods.none() {
            return WidgetResult::Ignored;
        }

        // Enter does not toggle.
        match key {
            Key::Char(' ') if self.toggle() => WidgetResult::Changed,
            Key::Char(' ') => WidgetResult::Handled,
            _ => WidgetResult::Ignored,
        }
    }
}
