//! Styled components.
//!
//! Interactive components keep key handling in an `events.rs` next to their
//! `mod.rs`.

mod checkbox;
mod form_control;
mod list;
mod list_item;
mod menu;
mod popover;
mod select;
mod tooltip;

pub use checkbox::Checkbox;
pub use form_control::{FormControl, FormControlContext};
pub use list::{List, ListOwnerState};
pub use list_item::{
    Child, ChildRole, ContainerProps, ListItem, ListItemOwnerState, ListItemSecondaryAction,
    ListItemSlotProps, ListItemSlots, RootComponent, RootProps, RootRenderer,
    SecondaryActionOwnerState, SlotProps,
};
pub use menu::{Menu, MenuArrow, MenuItem};
pub use popover::{Popover, PopoverArrow, PopoverClose};
pub use select::{Select, SelectItem, SelectVariant};
pub use tooltip::{Tooltip, TooltipArrow, TooltipProvider};
