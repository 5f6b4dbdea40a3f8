//! Render host: runs a render pass, attaches the tree and commits effects.

use std::collections::{HashMap, HashSet};

use uidom::{Element, FocusError, FocusState};

use crate::render::{Component, Effect, EffectAction, RenderCx};
use crate::theme::Theme;

/// What happened while committing one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Effects whose deps changed and were therefore executed.
    pub effects_run: usize,
    /// Focus requests attempted by those effects.
    pub focus_attempts: usize,
    /// Non-fatal problems, also sent to the log.
    pub diagnostics: Vec<String>,
}

/// Owns the attached tree between renders.
pub struct Mount {
    theme: Theme,
    focus: FocusState,
    tree: Option<Element>,
    committed: HashMap<(String, &'static str), u64>,
}

impl Mount {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            focus: FocusState::new(),
            tree: None,
            committed: HashMap::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The tree attached by the last render.
    pub fn tree(&self) -> Option<&Element> {
        self.tree.as_ref()
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusState {
        &mut self.focus
    }

    /// Render `root`, attach the result and run effects.
    pub fn render(&mut self, root: &dyn Component) -> CommitReport {
        let mut cx = RenderCx::new(&self.theme);
        let tree = root.render(&mut cx);
        let effects = cx.into_effects();

        self.focus.retain_attached(&tree);
        self.tree = Some(tree);

        self.commit(effects)
    }

    /// Detach the tree. Every owner counts as unmounted afterwards.
    pub fn unmount(&mut self) {
        self.tree = None;
        self.committed.clear();
        self.focus.blur();
    }

    fn commit(&mut self, effects: Vec<Effect>) -> CommitReport {
        let mut report = CommitReport::default();

        // Owners that did not render this pass are gone.
        let live: HashSet<(String, &'static str)> = effects
            .iter()
            .map(|effect| (effect.owner.clone(), effect.key))
            .collect();
        self.committed.retain(|key, _| live.contains(key));

        for effect in effects {
            let key = (effect.owner, effect.key);
            if self.committed.get(&key) == Some(&effect.deps) {
                continue;
            }
            log::debug!("[commit] running {} for '{}'", key.1, key.0);
            self.committed.insert(key, effect.deps);
            report.effects_run += 1;
            self.run(effect.action, &mut report);
        }

        report
    }

    fn run(&mut self, action: EffectAction, report: &mut CommitReport) {
        match action {
            EffectAction::None => {}
            EffectAction::Focus { target } => {
                report.focus_attempts += 1;
                let Some(tree) = self.tree.as_ref() else {
                    return;
                };
                match self.focus.focus_attached(tree, &target) {
                    Ok(_) => {}
                    Err(err @ FocusError::NotAttached(_)) => {
                        let message = format!(
                            "unable to set focus to a list item whose root has not been rendered: {err}"
                        );
                        log::error!("{message}");
                        report.diagnostics.push(message);
                    }
                    Err(err @ FocusError::NotFocusable(_)) => {
                        let message = format!("initial focus ignored: {err}");
                        log::warn!("{message}");
                        report.diagnostics.push(message);
                    }
                }
            }
        }
    }
}
