use uidom::Element;

use crate::render::{Component, Node};

/// How a list item treats one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildRole {
    #[default]
    Content,
    /// Moved out of the main content into the trailing slot when it is the
    /// last child and no explicit end action is set.
    SecondaryAction,
}

/// A list item child tagged with its role.
#[derive(Debug)]
pub struct Child {
    pub role: ChildRole,
    pub node: Node,
}

impl Child {
    pub fn new(node: impl Into<Node>) -> Self {
        Self {
            role: ChildRole::Content,
            node: node.into(),
        }
    }

    pub fn component(component: impl Component + 'static) -> Self {
        Self::new(Node::component(component))
    }

    pub fn secondary_action(node: impl Into<Node>) -> Self {
        Self {
            role: ChildRole::SecondaryAction,
            node: node.into(),
        }
    }

    pub fn is_secondary_action(&self) -> bool {
        self.role == ChildRole::SecondaryAction
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
