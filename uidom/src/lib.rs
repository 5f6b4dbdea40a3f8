pub mod element;
pub mod event;
pub mod focus;
pub mod markup;
pub mod stylesheet;
pub mod types;

pub use element::{find_element, walk, Content, Element};
pub use event::{Key, Modifiers};
pub use focus::{collect_focusable, FocusError, FocusState};
pub use markup::{to_markup, MarkupOptions};
pub use stylesheet::Stylesheet;
pub use types::*;
