use std::fmt;

use super::Callback;
use crate::state::State;

/// A value that is either owned by the component (uncontrolled) or handed
/// in by the caller on every render (controlled).
///
/// Setting a controlled value only reports the request through the change
/// callback; the caller decides whether to pass the new value back in.
pub struct Controllable<T> {
    controlled: Option<T>,
    uncontrolled: State<T>,
    on_change: Option<Callback<T>>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Controllable<T> {
    pub fn new(default: T) -> Self {
        Self {
            controlled: None,
            uncontrolled: State::new(default),
            on_change: None,
        }
    }

    /// Replace the uncontrolled starting value.
    pub fn with_default(mut self, default: T) -> Self {
        self.uncontrolled = State::new(default);
        self
    }

    pub fn with_controlled(mut self, value: T) -> Self {
        self.controlled = Some(value);
        self
    }

    pub fn with_on_change(mut self, on_change: Callback<T>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Update the controlled value between renders; `None` hands control
    /// back to the component.
    pub fn set_controlled(&mut self, value: Option<T>) {
        self.controlled = value;
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    pub fn get(&self) -> T {
        match &self.controlled {
            Some(value) => value.clone(),
            None => self.uncontrolled.get(),
        }
    }

    /// Request a new value. Returns false when it equals the current one.
    pub fn set(&self, value: T) -> bool {
        if value == self.get() {
            return false;
        }
        if self.controlled.is_none() {
            self.uncontrolled.set(value.clone());
        }
        if let Some(on_change) = &self.on_change {
            on_change(value);
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Controllable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controllable")
            .field("controlled", &self.controlled)
            .field("uncontrolled", &self.uncontrolled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
