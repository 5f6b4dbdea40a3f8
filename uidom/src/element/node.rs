use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{ClassList, Position, Role, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a process-unique element ID with the given prefix.
pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Structural tag (`div`, `ul`, `li`, `button`, ...).
    pub tag: String,

    // Content
    pub content: Content,

    // Semantics
    pub classes: ClassList,
    pub role: Option<Role>,
    /// `aria-*`, `data-*` and other attributes, kept sorted for stable output.
    pub attrs: BTreeMap<String, String>,

    // Positioning
    pub position: Position,
    pub z_index: i16,

    // Visual
    pub style: Style,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            classes: ClassList::new(),
            role: None,
            attrs: BTreeMap::new(),
            position: Position::Static,
            z_index: 0,
            style: Style::default(),
            focusable: false,
            clickable: false,
            disabled: false,
        }
    }
}

impl Element {
    /// Create an element with the given structural tag.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::new("div")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    // Semantics
    pub fn class(mut self, token: impl AsRef<str>) -> Self {
        self.classes.push(token);
        self
    }

    /// Append class tokens. Tokens may be whitespace separated.
    pub fn classes<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classes.extend(tokens);
        self
    }

    pub fn class_list(mut self, classes: &ClassList) -> Self {
        self.classes.merge(classes);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None | Content::Text(_) => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None | Content::Text(_) => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Child elements in order.
    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }
}
