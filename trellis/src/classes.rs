//! Style-class resolution.
//!
//! Every component resolves an owner state (its fully merged options) into
//! named slots ("root", "container", ...), each holding an ordered list of
//! utility class tokens. Tokens are switched on by plain predicates over the
//! owner state. Caller supplied overrides are appended after the generated
//! token they extend.

use std::collections::BTreeMap;

use uidom::ClassList;

/// Prefix for every generated utility class.
pub const CLASS_PREFIX: &str = "Trellis";

/// Slot keys that describe interaction state rather than structure. These
/// share one global class (`Trellis-disabled`) across components.
const STATE_CLASSES: [&str; 11] = [
    "active",
    "checked",
    "disabled",
    "error",
    "expanded",
    "focused",
    "focusVisible",
    "open",
    "readOnly",
    "required",
    "selected",
];

static EMPTY: ClassList = ClassList::new();

/// Utility class for a component slot key.
///
/// ```
/// use trellis::classes::utility_class;
///
/// assert_eq!(utility_class("ListItem", "root"), "TrellisListItem-root");
/// assert_eq!(utility_class("ListItem", "selected"), "Trellis-selected");
/// ```
pub fn utility_class(component: &str, key: &str) -> String {
    if STATE_CLASSES.contains(&key) {
        format!("{CLASS_PREFIX}-{key}")
    } else {
        format!("{CLASS_PREFIX}{component}-{key}")
    }
}

/// Caller overrides keyed by slot key (`"root"`, `"dense"`, ...).
///
/// Each override is emitted right after the generated class of the same key,
/// and only when that key is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomClasses(BTreeMap<String, ClassList>);

impl CustomClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, classes: impl Into<ClassList>) -> Self {
        self.0.insert(key.into(), classes.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ClassList> {
        self.0.get(key)
    }
}

/// Resolved class lists per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassBuckets(BTreeMap<&'static str, ClassList>);

impl ClassBuckets {
    /// Classes for `slot`; empty if the component has no such slot.
    pub fn get(&self, slot: &str) -> &ClassList {
        self.0.get(slot).unwrap_or(&EMPTY)
    }

    pub fn root(&self) -> &ClassList {
        self.get("root")
    }

    pub fn slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// One slot and its candidate keys; `None` entries are inactive.
pub type SlotDef = (&'static str, Vec<Option<&'static str>>);

/// Build the class buckets for `component` from its slot definitions.
pub fn compose_classes(component: &str, slots: &[SlotDef], custom: &CustomClasses) -> ClassBuckets {
    let mut buckets = BTreeMap::new();

    for (slot, keys) in slots {
        let mut list = ClassList::new();
        for key in keys.iter().flatten() {
            list.push(utility_class(component, key));
            if let Some(extra) = custom.get(key) {
                list.merge(extra);
            }
        }
        buckets.insert(*slot, list);
    }

    ClassBuckets(buckets)
}

/// A component's fully resolved options for one render.
///
/// Implementors must be plain values: the same owner state always yields
/// the same buckets.
pub trait OwnerState {
    /// Component name used in generated classes.
    const NAME: &'static str;

    /// Slot definitions derived from this owner state.
    fn slots(&self) -> Vec<SlotDef>;

    fn classes(&self, custom: &CustomClasses) -> ClassBuckets {
        compose_classes(Self::NAME, &self.slots(), custom)
    }
}
