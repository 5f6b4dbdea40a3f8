//! Theme: palette, stylesheet and per-component default options.
//!
//! Component options resolve in three steps: an option set on the component
//! wins, then the theme default, then the built-in default.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use uidom::{Border, Color, Element, NamedPalette, Style, Stylesheet};

use crate::classes::utility_class;
use crate::components::SelectVariant;
use crate::context::VerticalAlign;
use crate::error::ThemeError;

pub const DEFAULT_TOOLTIP_DELAY: Duration = Duration::from_millis(700);
pub const DEFAULT_TOOLTIP_SKIP_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListDefaults {
    pub is_dense: Option<bool>,
    pub no_padding: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListItemDefaults {
    pub vertical_align: Option<VerticalAlign>,
    pub is_dense: Option<bool>,
    pub no_gutters: Option<bool>,
    pub no_padding: Option<bool>,
    pub has_divider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectDefaults {
    pub variant: Option<SelectVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TooltipDefaults {
    pub delay_duration_ms: Option<u64>,
    pub skip_delay_duration_ms: Option<u64>,
}

impl TooltipDefaults {
    pub fn delay(&self) -> Duration {
        self.delay_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOOLTIP_DELAY)
    }

    pub fn skip_delay(&self) -> Duration {
        self.skip_delay_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOOLTIP_SKIP_DELAY)
    }
}

/// Default options per component, as read from theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComponentDefaults {
    pub list: ListDefaults,
    pub list_item: ListItemDefaults,
    pub select: SelectDefaults,
    pub tooltip: TooltipDefaults,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: NamedPalette,
    pub stylesheet: Stylesheet,
    pub components: ComponentDefaults,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: NamedPalette::light(),
            stylesheet: default_stylesheet(),
            components: ComponentDefaults::default(),
        }
    }

    pub fn with_components(mut self, components: ComponentDefaults) -> Self {
        self.components = components;
        self
    }

    /// Build a theme whose component defaults come from JSON.
    ///
    /// ```
    /// let theme = trellis::Theme::from_json(r#"{ "list": { "is_dense": true } }"#).unwrap();
    /// assert_eq!(theme.components.list.is_dense, Some(true));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let components: ComponentDefaults = serde_json::from_str(json)?;
        Ok(Self::new().with_components(components))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[theme] loaded {}", path.display());
        Self::from_json(&json)
    }

    /// Concrete style for an element under this theme.
    pub fn compute_style(&self, element: &Element) -> Style {
        self.stylesheet.compute(element, &self.palette)
    }
}

fn default_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(utility_class("List", "subheader"), Style::new().bold())
        .rule(
            utility_class("ListItem", "divider"),
            Style::new().border(Border::Single),
        )
        .rule(
            utility_class("ListItem", "button"),
            Style::new().foreground(Color::var("foreground")),
        )
        .rule(
            utility_class("ListItem", "selected"),
            Style::new().background(Color::var("selected")),
        )
        .rule(utility_class("ListItem", "disabled"), Style::new().dim())
        .rule("bg-white", Style::new().background(Color::var("background")))
        .rule("shadow-md", Style::new().border(Border::Rounded))
        .rule("text-gray-200", Style::new().foreground(Color::var("border")))
        .rule("fill-inverse", Style::new().foreground(Color::var("foreground")))
        .rule(
            "hover:bg-gray-200",
            Style::new().background(Color::var("surface")),
        )
        .rule("checkbox-indicator", Style::new().foreground(Color::var("primary")))
}
