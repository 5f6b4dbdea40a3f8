//! Themeable UI building blocks over the `uidom` element tree.
//!
//! Components are plain builders implementing [`Component`]. A [`Mount`]
//! renders a component tree, attaches the result and runs the deferred
//! effects (initial focus) registered during the render pass.

pub mod classes;
pub mod components;
pub mod context;
pub mod error;
pub mod mount;
pub mod primitives;
pub mod render;
pub mod state;
pub mod theme;
pub mod widget;

pub use error::ThemeError;
pub use mount::{CommitReport, Mount};
pub use render::{Component, Node, RenderCx};
pub use state::State;
pub use theme::Theme;
pub use widget::{Widget, WidgetResult};

pub mod prelude {
    pub use crate::classes::{ClassBuckets, CustomClasses, OwnerState};
    pub use crate::components::{
        Checkbox, Child, ChildRole, FormControl, FormControlContext, List, ListItem,
        ListItemSecondaryAction, Menu, MenuArrow, MenuItem, Popover, PopoverArrow, PopoverClose,
        RootComponent, RootProps, RootRenderer, Select, SelectItem, SelectVariant, Tooltip,
        TooltipArrow, TooltipProvider,
    };
    pub use crate::context::{ListContext, VerticalAlign};
    pub use crate::mount::{CommitReport, Mount};
    pub use crate::primitives::{callback, Callback};
    pub use crate::render::{Component, Node, RenderCx};
    pub use crate::theme::Theme;
    pub use crate::widget::{Widget, WidgetResult};

    pub use uidom::{Element, Key, Modifiers};
}
