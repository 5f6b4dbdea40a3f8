//! Defaults shared down a list subtree.

use serde::Deserialize;

/// Cross-axis alignment of list item content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    FlexStart,
    #[default]
    Center,
}

/// Published by `List` (density only) and re-published by every
/// `ListItem` for its own descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListContext {
    pub dense: bool,
    pub vertical_align: VerticalAlign,
    pub no_gutters: bool,
}

impl ListContext {
    pub fn dense(dense: bool) -> Self {
        Self {
            dense,
            ..Default::default()
        }
    }
}

/// Effective density: an explicit local value wins, otherwise the nearest
/// published value, otherwise `false`.
pub fn resolve_dense(local: Option<bool>, inherited: Option<&ListContext>) -> bool {
    local.unwrap_or_else(|| inherited.is_some_and(|cx| cx.dense))
}
