use std::time::Instant;

use uidom::{Key, Modifiers};

use super::Menu;
use crate::widget::{Widget, WidgetResult};

impl Menu {
    /// Key handling with an explicit clock for typeahead.
    pub fn handle_key_at(&self, key: Key, mods: Modifiers, now: Instant) -> WidgetResult {
        if mods.ctrl || mods.alt {
            return WidgetResult::Ignored;
        }
        let items = self.roving_items();

        if !self.is_open() {
            return match key {
                Key::Enter | Key::Char(' ') | Key::Down => {
                    self.set_open(true);
                    self.roving.first(&items);
                    WidgetResult::Opened
                }
                Key::Up => {
                    self.set_open(true);
                    self.roving.last(&items);
                    WidgetResult::Opened
                }
                _ => WidgetResult::Ignored,
            };
        }

        let before = self.highlighted();
        let moved = |after: Option<usize>| {
            if after.is_some() && after != before {
                WidgetResult::HighlightMoved
            } else {
                WidgetResult::Handled
            }
        };

        match key {
            Key::Escape | Key::Tab | Key::BackTab => {
                self.set_open(false);
                WidgetResult::Closed
            }
            Key::Down => moved(self.roving.next(&items)),
            Key::Up => moved(self.roving.prev(&items)),
            Key::Home | Key::PageUp => moved(self.roving.first(&items)),
            Key::End | Key::PageDown => moved(self.roving.last(&items)),
            Key::Enter | Key::Char(' ') => match self.highlighted() {
                Some(index) if self.activate(index) => WidgetResult::Activated,
                _ => WidgetResult::Handled,
            },
            other => match other.printable() {
                Some(ch) => moved(self.roving.typeahead(&items, ch, now)),
                None => WidgetResult::Ignored,
            },
        }
    }
}

impl Widget for Menu {
    fn id(&self) -> &str {
        &self.id
    }

    fn handle_key(&self, key: Key, mods: Modifiers) -> WidgetResult {
        self.handle_key_at(key, mods, Instant::now())
    }
}
