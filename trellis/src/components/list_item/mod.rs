//! List item composition.
//!
//! A list item resolves its options against the enclosing [`ListContext`],
//! picks a root (interactive, structural or caller supplied) and pulls a
//! trailing secondary action out of its children. When it has such an
//! action the item renders as a container holding the root and the action
//! slot; otherwise it is a single element.

mod child;
mod secondary_action;
mod slots;

use uidom::{ClassList, Element, Position, Role};

pub use child::{Child, ChildRole};
pub use secondary_action::{ListItemSecondaryAction, SecondaryActionOwnerState};
pub use slots::{
    ContainerProps, ListItemSlotProps, ListItemSlots, RootComponent, RootProps, RootRenderer,
    SlotProps,
};

use crate::classes::{CustomClasses, OwnerState, SlotDef};
use crate::context::{ListContext, VerticalAlign, resolve_dense};
use crate::primitives::ButtonBase;
use crate::render::{Component, EffectAction, Node, RenderCx};
use crate::widget::next_id;

/// Fully resolved list item options for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListItemOwnerState {
    pub vertical_align: VerticalAlign,
    pub is_button: bool,
    pub is_dense: bool,
    pub disabled: bool,
    pub no_gutters: bool,
    pub no_padding: bool,
    pub has_divider: bool,
    pub is_selected: bool,
    pub has_secondary_action: bool,
}

impl OwnerState for ListItemOwnerState {
    const NAME: &'static str = "ListItem";

    fn slots(&self) -> Vec<SlotDef> {
        vec![
            (
                "root",
                vec![
                    Some("root"),
                    self.is_dense.then_some("dense"),
                    (!self.no_gutters).then_some("gutters"),
                    (!self.no_padding).then_some("padding"),
                    self.has_divider.then_some("divider"),
                    self.disabled.then_some("disabled"),
                    self.is_button.then_some("button"),
                    (self.vertical_align == VerticalAlign::FlexStart)
                        .then_some("alignItemsFlexStart"),
                    self.has_secondary_action.then_some("secondaryAction"),
                    self.is_selected.then_some("selected"),
                ],
            ),
            ("container", vec![Some("container")]),
        ]
    }
}

/// One row of a [`List`](crate::components::List).
#[derive(Debug)]
pub struct ListItem {
    id: String,
    content: Vec<Child>,
    end_action: Option<Node>,
    vertical_align: Option<VerticalAlign>,
    initial_focus: bool,
    is_button: bool,
    is_dense: Option<bool>,
    disabled: bool,
    no_gutters: Option<bool>,
    no_padding: Option<bool>,
    has_divider: Option<bool>,
    is_selected: bool,
    root_component: Option<RootComponent>,
    container_component: Option<String>,
    container_props: ContainerProps,
    custom_slots: ListItemSlots,
    custom_slot_props: ListItemSlotProps,
    custom_classes: CustomClasses,
    class_name: ClassList,
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new()
    }
}

impl ListItem {
    pub fn new() -> Self {
        Self {
            id: next_id("list_item"),
            content: Vec::new(),
            end_action: None,
            vertical_align: None,
            initial_focus: false,
            is_button: false,
            is_dense: None,
            disabled: false,
            no_gutters: None,
            no_padding: None,
            has_divider: None,
            is_selected: false,
            root_component: None,
            container_component: None,
            container_props: ContainerProps::default(),
            custom_slots: ListItemSlots::default(),
            custom_slot_props: ListItemSlotProps::default(),
            custom_classes: CustomClasses::new(),
            class_name: ClassList::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.content.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.content.extend(children.into_iter().map(Into::into));
        self
    }

    /// Trailing action rendered in the secondary action slot. Takes
    /// precedence over a tagged trailing child, which then stays in the
    /// main content.
    pub fn end_action(mut self, node: impl Into<Node>) -> Self {
        self.end_action = Some(node.into());
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Focus the root once after it is first attached.
    pub fn initial_focus(mut self, initial_focus: bool) -> Self {
        self.initial_focus = initial_focus;
        self
    }

    pub fn is_button(mut self, is_button: bool) -> Self {
        self.is_button = is_button;
        self
    }

    pub fn is_dense(mut self, is_dense: bool) -> Self {
        self.is_dense = Some(is_dense);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn no_gutters(mut self, no_gutters: bool) -> Self {
        self.no_gutters = Some(no_gutters);
        self
    }

    pub fn no_padding(mut self, no_padding: bool) -> Self {
        self.no_padding = Some(no_padding);
        self
    }

    pub fn has_divider(mut self, has_divider: bool) -> Self {
        self.has_divider = Some(has_divider);
        self
    }

    pub fn is_selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn root_component(mut self, root: RootComponent) -> Self {
        self.root_component = Some(root);
        self
    }

    pub fn container_component(mut self, tag: impl Into<String>) -> Self {
        self.container_component = Some(tag.into());
        self
    }

    pub fn container_props(mut self, props: ContainerProps) -> Self {
        self.container_props = props;
        self
    }

    pub fn custom_slots(mut self, slots: ListItemSlots) -> Self {
        self.custom_slots = slots;
        self
    }

    pub fn custom_slot_props(mut self, props: ListItemSlotProps) -> Self {
        self.custom_slot_props = props;
        self
    }

    pub fn custom_classes(mut self, classes: CustomClasses) -> Self {
        self.custom_classes = classes;
        self
    }

    pub fn class_name(mut self, classes: impl AsRef<str>) -> Self {
        self.class_name.push(classes);
        self
    }

    /// Main children and the trailing action, if any.
    fn split_children(&self) -> (&[Child], Option<&Node>) {
        if let Some(action) = &self.end_action {
            return (&self.content, Some(action));
        }
        match self.content.split_last() {
            Some((last, rest)) if last.is_secondary_action() => (rest, Some(&last.node)),
            _ => (&self.content, None),
        }
    }

    /// Resolve options against the theme defaults and the inherited context.
    pub fn owner_state(&self, cx: &RenderCx<'_>) -> ListItemOwnerState {
        let defaults = &cx.theme().components.list_item;
        let inherited = cx.consume::<ListContext>();

        ListItemOwnerState {
            vertical_align: self
                .vertical_align
                .or(defaults.vertical_align)
                .unwrap_or_default(),
            is_button: self.is_button,
            // A theme default can add density but never drops inherited density.
            is_dense: match self.is_dense {
                Some(local) => local,
                None => resolve_dense(None, inherited) || defaults.is_dense == Some(true),
            },
            disabled: self.disabled,
            no_gutters: self.no_gutters.or(defaults.no_gutters).unwrap_or(false),
            no_padding: self.no_padding.or(defaults.no_padding).unwrap_or(false),
            has_divider: self.has_divider.or(defaults.has_divider).unwrap_or(false),
            is_selected: self.is_selected,
            has_secondary_action: self.split_children().1.is_some(),
        }
    }

    fn root_tag(&self, has_container: bool) -> String {
        if let Some(tag) = self.root_component.as_ref().and_then(RootComponent::tag_override) {
            return tag.to_string();
        }
        let tag = if has_container { "div" } else { "li" };
        tag.to_string()
    }
}

impl Component for ListItem {
    fn render(&self, cx: &mut RenderCx<'_>) -> Element {
        let owner = self.owner_state(cx);
        let classes = owner.classes(&self.custom_classes);
        let (main, trailing) = self.split_children();

        let child_context = ListContext {
            dense: owner.is_dense,
            vertical_align: owner.vertical_align,
            no_gutters: owner.no_gutters,
        };
        let (children, action) = cx.provide(child_context, |cx| {
            let children: Vec<Element> = main.iter().map(|child| child.node.render(cx)).collect();
            let action = trailing.map(|node| {
                let rendered = node.render(cx);
                secondary_action::into_slot(rendered, format!("{}-secondary-action", self.id), cx)
            });
            (children, action)
        });

        cx.use_effect(
            self.id.clone(),
            "initial_focus",
            u64::from(self.initial_focus),
            if self.initial_focus {
                EffectAction::Focus {
                    target: self.id.clone(),
                }
            } else {
                EffectAction::None
            },
        );

        let mut root_classes = classes.root().clone();
        root_classes.merge(&self.custom_slot_props.root.classes);
        root_classes.merge(&self.class_name);

        let has_container = action.is_some();
        let tag = self.root_tag(has_container);
        let custom_root = match &self.root_component {
            Some(root @ RootComponent::Custom(_)) => Some(root),
            Some(RootComponent::Tag(_)) => None,
            None => self.custom_slots.root.as_ref(),
        };

        let mut root = if owner.is_button {
            ButtonBase::new(self.id.clone())
                .tag(tag)
                .classes(&root_classes)
                .attrs(self.custom_slot_props.root.attrs.clone())
                .disabled(owner.disabled)
                .build(children)
        } else {
            let props = RootProps {
                id: self.id.clone(),
                tag,
                classes: root_classes,
                attrs: self.custom_slot_props.root.attrs.clone(),
                owner,
                children,
            };
            match custom_root {
                Some(root) => root.render(props),
                None => {
                    let focusable = self.initial_focus && !owner.disabled;
                    let mut element = props.into_element().focusable(focusable);
                    if focusable {
                        element = element.attr("tabindex", "-1");
                    }
                    element
                }
            }
        };
        if owner.is_selected {
            root = root.attr("aria-selected", "true");
        }

        let Some(action) = action else {
            if root.role.is_none() {
                root = root.role(Role::ListItem);
            }
            return root;
        };

        let mut container_classes = classes.get("container").clone();
        container_classes.merge(&self.container_props.classes);

        let mut container = Element::new(
            self.container_component
                .clone()
                .unwrap_or_else(|| "li".to_string()),
        )
        .id(format!("{}-container", self.id))
        .role(Role::ListItem)
        .class_list(&container_classes)
        .position(Position::Relative)
        .children([root, action]);
        container.attrs.extend(self.container_props.attrs.clone());

        log::debug!("[list_item] '{}' rendered with secondary action", self.id);
        container
    }
}
