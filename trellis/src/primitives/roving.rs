use std::time::{Duration, Instant};

use crate::state::State;

/// Typeahead buffer resets after this much idle time.
const TYPEAHEAD_TIMEOUT: Duration = Duration::from_millis(1000);

/// What roving focus needs to know about one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RovingItem {
    pub label: String,
    pub disabled: bool,
}

impl RovingItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Default)]
struct Typeahead {
    buffer: String,
    last: Option<Instant>,
}

/// Highlight that moves through a list of items, skipping disabled ones.
///
/// Shared between a popup and the items it owns; cloning yields a handle to
/// the same highlight.
#[derive(Debug, Clone, Default)]
pub struct RovingFocus {
    highlighted: State<Option<usize>>,
    typeahead: State<Typeahead>,
    looping: bool,
}

impl RovingFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap from the last item to the first and back.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted.get()
    }

    pub fn set(&self, index: Option<usize>) {
        self.highlighted.set(index);
    }

    pub fn clear(&self) {
        self.highlighted.set(None);
        self.typeahead.set(Typeahead::default());
    }

    pub fn first(&self, items: &[RovingItem]) -> Option<usize> {
        let index = items.iter().position(|item| !item.disabled);
        self.highlighted.set(index);
        index
    }

    pub fn last(&self, items: &[RovingItem]) -> Option<usize> {
        let index = items.iter().rposition(|item| !item.disabled);
        self.highlighted.set(index);
        index
    }

    pub fn next(&self, items: &[RovingItem]) -> Option<usize> {
        let Some(current) = self.highlighted() else {
            return self.first(items);
        };
        let found = (current + 1..items.len())
            .find(|&i| !items[i].disabled)
            .or_else(|| {
                self.looping
                    .then(|| (0..current.min(items.len())).find(|&i| !items[i].disabled))
                    .flatten()
            });
        if let Some(index) = found {
            self.highlighted.set(Some(index));
        }
        self.highlighted()
    }

    pub fn prev(&self, items: &[RovingItem]) -> Option<usize> {
        let Some(current) = self.highlighted() else {
            return self.last(items);
        };
        let found = (0..current.min(items.len()))
            .rev()
            .find(|&i| !items[i].disabled)
            .or_else(|| {
                self.looping
                    .then(|| (current + 1..items.len()).rev().find(|&i| !items[i].disabled))
                    .flatten()
            });
        if let Some(index) = found {
            self.highlighted.set(Some(index));
        }
        self.highlighted()
    }

    /// Feed one printable character at `now`. Highlights the first enabled
    /// item whose label starts with the accumulated buffer, searching from
    /// the item after the current one.
    pub fn typeahead(&self, items: &[RovingItem], ch: char, now: Instant) -> Option<usize> {
        let buffer = self
            .typeahead
            .update(|state| {
                let expired = state
                    .last
                    .is_none_or(|last| now.saturating_duration_since(last) > TYPEAHEAD_TIMEOUT);
                if expired {
                    state.buffer.clear();
                }
                state.buffer.extend(ch.to_lowercase());
                state.last = Some(now);
                state.buffer.clone()
            });

        if items.is_empty() {
            return None;
        }

        // A repeated single character cycles through matches.
        let start = match self.highlighted() {
            Some(current) if buffer.chars().count() == 1 => current + 1,
            Some(current) => current,
            None => 0,
        };

        let found = (0..items.len())
            .map(|offset| (start + offset) % items.len())
            .find(|&i| {
                !items[i].disabled && items[i].label.to_lowercase().starts_with(&buffer)
            });
        if let Some(index) = found {
            self.highlighted.set(Some(index));
        }
        found
    }
}
