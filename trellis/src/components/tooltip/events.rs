use std::time::Instant;

use uidom::{Key, Modifiers};

use super::Tooltip;
use crate::widget::{Widget, WidgetResult};

impl Widget for Tooltip {
    fn id(&self) -> &str {
        &self.id
    }

    fn handle_key(&self, key: Key, _mods: Modifiers) -> WidgetResult {
        match key {
            Key::Escape => self.close(Instant::now()),
            _ => WidgetResult::Ignored,
        }
    }
}
