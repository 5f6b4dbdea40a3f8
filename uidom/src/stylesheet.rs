//! Class-token based styling.
//!
//! A `Stylesheet` maps class tokens to partial styles. An element's computed
//! style layers the rules of its classes in list order, then the element's
//! inline style, then resolves palette references.

use std::collections::HashMap;

use crate::element::Element;
use crate::types::{resolve_color, ClassList, Palette, Style};

#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: HashMap<String, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for a class token.
    pub fn rule(mut self, token: impl Into<String>, style: Style) -> Self {
        self.rules.insert(token.into(), style);
        self
    }

    pub fn get(&self, token: &str) -> Option<&Style> {
        self.rules.get(token)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Layer the rules matching `classes`, later tokens winning.
    pub fn resolve(&self, classes: &ClassList) -> Style {
        classes
            .iter()
            .filter_map(|token| self.rules.get(token))
            .fold(Style::default(), |acc, rule| acc.patch(rule))
    }

    /// Compute the concrete style of an element against a palette.
    pub fn compute(&self, element: &Element, palette: &dyn Palette) -> Style {
        let style = self.resolve(&element.classes).patch(&element.style);

        Style {
            background: style.background.as_ref().map(|c| resolve_color(palette, c)),
            foreground: style.foreground.as_ref().map(|c| resolve_color(palette, c)),
            ..style
        }
    }
}
