//! Named colours and resolution of palette references.

use std::collections::BTreeMap;

use crate::types::{Color, Rgb};

/// Longest chain of `Var` references followed before giving up.
const MAX_DEPTH: usize = 8;

/// Source of named colours for [`Color::Var`].
pub trait Palette: Send + Sync {
    fn color(&self, name: &str) -> Option<&Color>;
}

/// Palette with no entries; every reference resolves to black.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPalette;

impl Palette for NoPalette {
    fn color(&self, _name: &str) -> Option<&Color> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedPalette {
    colors: BTreeMap<String, Color>,
}

impl NamedPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Light palette the component stylesheet is written against.
    pub fn light() -> Self {
        Self::new()
            .with("background", Color::oklch(1.0, 0.0, 0.0))
            .with("foreground", Color::oklch(0.2, 0.0, 0.0))
            .with("surface", Color::oklch(0.97, 0.0, 0.0))
            .with("border", Color::oklch(0.85, 0.0, 0.0))
            .with("divider", Color::oklch(0.9, 0.0, 0.0))
            .with("primary", Color::oklch(0.55, 0.18, 255.0))
            .with("muted", Color::oklch(0.6, 0.0, 0.0))
            .with(
                "selected",
                Color::var("background").mix(Color::var("primary"), 0.12),
            )
            .with("focus", Color::oklch(0.92, 0.0, 0.0))
    }

    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.set(name, color);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }
}

impl Palette for NamedPalette {
    fn color(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }
}

/// Replace palette references and mixes in `color` with concrete colours.
/// Unknown names resolve to black.
pub fn resolve_color(palette: &dyn Palette, color: &Color) -> Color {
    resolve_at(palette, color, 0)
}

fn resolve_at(palette: &dyn Palette, color: &Color, depth: usize) -> Color {
    if depth > MAX_DEPTH {
        log::warn!("[palette] reference chain deeper than {MAX_DEPTH} at {color:?}");
        return Color::Rgb(Rgb::BLACK);
    }

    match color {
        Color::Rgb(_) | Color::Oklch { .. } => color.clone(),
        Color::Var(name) => match palette.color(name) {
            Some(entry) => resolve_at(palette, entry, depth + 1),
            None => {
                log::debug!("[palette] no colour named '{name}'");
                Color::Rgb(Rgb::BLACK)
            }
        },
        Color::Mix { base, top, amount } => {
            let base = resolve_at(palette, base, depth + 1);
            let top = resolve_at(palette, top, depth + 1);
            Color::Rgb(base.blend(&top, *amount))
        }
    }
}
