use thiserror::Error;

use crate::element::{find_element, walk, Element};

/// Why a programmatic focus request could not be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    #[error("element '{0}' is not attached to the tree")]
    NotAttached(String),
    #[error("element '{0}' is not focusable")]
    NotFocusable(String),
}

/// The focused element of an attached tree, by ID.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to `id` without consulting any tree. False when `id`
    /// already had focus.
    pub fn focus(&mut self, id: &str) -> bool {
        let changed = self.focused.as_deref() != Some(id);
        if changed {
            self.focused = Some(id.to_string());
        }
        changed
    }

    /// Focus an element that must be present in `root` and accept focus.
    /// Returns whether focus changed.
    pub fn focus_attached(&mut self, root: &Element, id: &str) -> Result<bool, FocusError> {
        let element =
            find_element(root, id).ok_or_else(|| FocusError::NotAttached(id.to_string()))?;
        if !element.focusable || element.disabled {
            return Err(FocusError::NotFocusable(id.to_string()));
        }
        Ok(self.focus(id))
    }

    /// Clear focus; false if nothing had it.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Drop focus if the focused element left the tree.
    pub fn retain_attached(&mut self, root: &Element) {
        if let Some(id) = &self.focused {
            if find_element(root, id).is_none() {
                log::debug!("[focus] '{id}' detached, clearing focus");
                self.focused = None;
            }
        }
    }

    /// Tab: advance to the next focus stop, wrapping at the end. Yields the
    /// new ID when focus moved.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let stops = collect_focusable(root);
        let focusable = stops.as_slice();
        if focusable.is_empty() {
            return None;
        }

        let next = match self.current_index(focusable) {
            Some(i) => (i + 1) % focusable.len(),
            None => 0,
        };
        self.move_to(&focusable[next])
    }

    /// Shift+Tab: the mirror of [`focus_next`](Self::focus_next).
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let stops = collect_focusable(root);
        let focusable = stops.as_slice();
        if focusable.is_empty() {
            return None;
        }

        let prev = match self.current_index(focusable) {
            Some(0) | None => focusable.len() - 1,
            Some(i) => i - 1,
        };
        self.move_to(&focusable[prev])
    }

    fn current_index(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|id| id == current)
    }

    fn move_to(&mut self, id: &str) -> Option<String> {
        self.focus(id).then(|| id.to_string())
    }
}

/// IDs of all focusable, enabled elements in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    walk(root, &mut |element| {
        if element.focusable && !element.disabled {
            ids.push(element.id.clone());
        }
    });
    ids
}
