//! Render pass plumbing: the component trait, child nodes and the render
//! context threaded through one pass.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use uidom::Element;

use crate::theme::Theme;

/// Anything that renders to an element tree.
pub trait Component: Send + Sync {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element;
}

impl<C: Component + ?Sized> Component for std::sync::Arc<C> {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        (**self).render(cx)
    }
}

/// A child passed into a component.
pub enum Node {
    Element(Element),
    Text(String),
    Component(Box<dyn Component>),
}

impl Node {
    pub fn component(component: impl Component + 'static) -> Self {
        Self::Component(Box::new(component))
    }

    pub fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        match self {
            Self::Element(element) => element.clone(),
            Self::Text(text) => Element::text(text.clone()),
            Self::Component(component) => component.render(cx),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "Element({})", element.id),
            Self::Text(text) => write!(f, "Text({text:?})"),
            Self::Component(_) => write!(f, "Component(...)"),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Work deferred until the rendered tree is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectAction {
    /// Nothing to do this time; still records the deps.
    None,
    /// Focus the element with this ID.
    Focus { target: String },
}

/// An effect registered during render.
///
/// The mount runs it only when `deps` differ from the value committed for the
/// same `(owner, key)` in the previous pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub owner: String,
    pub key: &'static str,
    pub deps: u64,
    pub action: EffectAction,
}

/// State threaded through one render pass.
pub struct RenderCx<'t> {
    theme: &'t Theme,
    contexts: HashMap<TypeId, Vec<Box<dyn Any>>>,
    effects: Vec<Effect>,
}

impl<'t> RenderCx<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            contexts: HashMap::new(),
            effects: Vec::new(),
        }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Make `value` visible to everything rendered inside `f`. An inner
    /// `provide` of the same type shadows this one until it returns.
    pub fn provide<T: 'static, R>(&mut self, value: T, f: impl FnOnce(&mut Self) -> R) -> R {
        let type_id = TypeId::of::<T>();
        self.contexts
            .entry(type_id)
            .or_default()
            .push(Box::new(value));

        let result = f(self);

        if let Some(stack) = self.contexts.get_mut(&type_id) {
            stack.pop();
        }
        result
    }

    /// Nearest value of type `T` provided by an enclosing scope.
    pub fn consume<T: 'static>(&self) -> Option<&T> {
        self.contexts
            .get(&TypeId::of::<T>())?
            .last()?
            .downcast_ref::<T>()
    }

    pub fn use_effect(
        &mut self,
        owner: impl Into<String>,
        key: &'static str,
        deps: u64,
        action: EffectAction,
    ) {
        self.effects.push(Effect {
            owner: owner.into(),
            key,
            deps,
            action,
        });
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}
