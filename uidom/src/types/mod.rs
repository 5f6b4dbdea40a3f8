mod class_list;
mod color;
mod enums;
mod scheme;
mod style;

pub use class_list::ClassList;
pub use color::{Color, Rgb};
pub use enums::{Border, Position, Role, TextStyle};
pub use scheme::{resolve_color, NamedPalette, NoPalette, Palette};
pub use style::Style;
