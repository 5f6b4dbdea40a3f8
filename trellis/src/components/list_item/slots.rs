//! Replaceable pieces of a list item.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use uidom::{ClassList, Element};

use super::ListItemOwnerState;

/// Everything a custom root needs to honour the list item contract.
///
/// A renderer must keep `id` on the element it returns, otherwise the
/// initial-focus effect cannot find it.
#[derive(Debug, Clone)]
pub struct RootProps {
    pub id: String,
    pub tag: String,
    pub classes: ClassList,
    pub attrs: BTreeMap<String, String>,
    pub owner: ListItemOwnerState,
    pub children: Vec<Element>,
}

impl RootProps {
    /// The element a structural root would produce.
    pub fn into_element(self) -> Element {
        let mut element = Element::new(self.tag)
            .id(self.id)
            .class_list(&self.classes)
            .disabled(self.owner.disabled)
            .children(self.children);
        element.attrs.extend(self.attrs);
        element
    }
}

/// Renders a caller supplied root element.
pub trait RootRenderer: Send + Sync {
    fn render(&self, props: RootProps) -> Element;
}

impl<F> RootRenderer for F
where
    F: Fn(RootProps) -> Element + Send + Sync,
{
    fn render(&self, props: RootProps) -> Element {
        self(props)
    }
}

/// Root override for a non-interactive list item.
#[derive(Clone)]
pub enum RootComponent {
    /// Structural root with a different tag.
    Tag(String),
    /// Fully custom root.
    Custom(Arc<dyn RootRenderer>),
}

impl RootComponent {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn custom(renderer: impl RootRenderer + 'static) -> Self {
        Self::Custom(Arc::new(renderer))
    }

    pub(crate) fn tag_override(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Custom(_) => None,
        }
    }

    pub(crate) fn render(&self, props: RootProps) -> Element {
        match self {
            Self::Tag(tag) => RootProps {
                tag: tag.clone(),
                ..props
            }
            .into_element(),
            Self::Custom(renderer) => renderer.render(props),
        }
    }
}

impl fmt::Debug for RootComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Extra classes and attributes for one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotProps {
    pub classes: ClassList,
    pub attrs: BTreeMap<String, String>,
}

impl SlotProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes.push(classes);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// Props for the wrapping container element.
pub type ContainerProps = SlotProps;

#[derive(Debug, Clone, Default)]
pub struct ListItemSlots {
    pub root: Option<RootComponent>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemSlotProps {
    pub root: SlotProps,
}
