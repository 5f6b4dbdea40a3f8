use uidom::{Key, Modifiers};

use super::Popover;
use crate::widget::{Widget, WidgetResult};

impl Widget for Popover {
    fn id(&self) -> &str {
        &self.id
    }

    fn handle_key(&self, key: Key, mods: Modifiers) -> WidgetResult {
        if !mods.none() {
            return WidgetResult::Ignored;
        }

        let open = self.is_open();
        match key {
            Key::Escape if open => {
                self.set_open(false);
                WidgetResult::Closed
            }
            Key::Enter | Key::Char(' ') => {
                self.set_open(!open);
                if open {
                    WidgetResult::Closed
                } else {
                    WidgetResult::Opened
                }
            }
            _ => WidgetResult::Ignored,
        }
    }
}
