//! Headless behaviour shared by the styled components: controllable values,
//! the interactive button root and roving highlight with typeahead.

mod button_base;
mod controllable;
mod roving;

use std::sync::Arc;

pub use button_base::ButtonBase;
pub use controllable::Controllable;
pub use roving::{RovingFocus, RovingItem};

/// Change callback shared between a component and its state.
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

pub fn callback<T>(f: impl Fn(T) + Send + Sync + 'static) -> Callback<T> {
    Arc::new(f)
}

/// Layer on which popup content is raised.
pub const POPUP_Z_INDEX: i16 = 100;
/// Tooltips sit above other popups.
pub const TOOLTIP_Z_INDEX: i16 = 200;

/// `data-state` value for open/closed popups.
pub(crate) fn open_state(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}
