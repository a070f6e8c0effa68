//! Per-badge resolved state with selector change detection.

use crate::render::{render_plan, BadgeView, DisplayRequest};
use crate::resolver::{ResolvedState, Resolver};
use crate::selector::SelectorError;

/// Default selector for a freshly created badge.
pub const DEFAULT_GOAL: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of writing a goal selector into a [`BadgeState`].
pub enum GoalUpdate {
    /// The selector equals the previous one; nothing was recomputed.
    Unchanged,
    /// The selector resolved and replaced the displayed asset and label.
    Resolved(ResolvedState),
    /// The selector names nothing; the previous asset and label remain.
    Ignored(SelectorError),
}

/// Mutable state owned by one badge instance.
///
/// The asset reference and label are tracked separately so that a caller can
/// override the label after resolution without disturbing the image source.
#[derive(Debug, Clone, Default)]
pub struct BadgeState {
    resolver: Resolver,
    selector: Option<String>,
    asset_ref: String,
    label: String,
    recomputations: u64,
}

impl BadgeState {
    /// Creates an empty state; nothing is resolved until the first
    /// [`BadgeState::set_goal`].
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            ..Self::default()
        }
    }

    /// Records a selector write and recomputes when it differs from the last.
    pub fn set_goal(&mut self, selector: &str) -> GoalUpdate {
        if self.selector.as_deref() == Some(selector) {
            return GoalUpdate::Unchanged;
        }
        self.selector = Some(selector.to_string());
        self.recomputations += 1;

        match self.resolver.try_resolve(selector) {
            Ok(resolved) => {
                self.asset_ref = resolved.asset_ref.clone();
                self.label = resolved.label.clone();
                GoalUpdate::Resolved(resolved)
            }
            Err(err) => GoalUpdate::Ignored(err),
        }
    }

    /// Overrides the accessible label until the next successful resolution.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Last selector written, if any.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Current image source; empty before the first successful resolution.
    pub fn asset_ref(&self) -> &str {
        &self.asset_ref
    }

    /// Current accessible label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Snapshot of the displayed asset and label.
    pub fn resolved(&self) -> ResolvedState {
        ResolvedState {
            asset_ref: self.asset_ref.clone(),
            label: self.label.clone(),
        }
    }

    /// Number of times a changed selector triggered resolution.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Builds the render plan for the current state.
    pub fn view(&self, request: &DisplayRequest) -> BadgeView {
        render_plan(&self.resolved(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::AssetBase;
    use pretty_assertions::assert_eq;

    fn resolved_state(goal: &str) -> BadgeState {
        let mut state = BadgeState::default();
        state.set_goal(goal);
        state
    }

    #[test]
    fn new_state_is_empty_until_first_goal() {
        let state = BadgeState::new(Resolver::new(AssetBase::new("/art")));
        assert_eq!(state.selector(), None);
        assert_eq!(state.asset_ref(), "");
        assert_eq!(state.label(), "");
        assert_eq!(state.recomputations(), 0);
    }

    #[test]
    fn default_goal_resolves_to_no_poverty() {
        let state = resolved_state(DEFAULT_GOAL);
        assert_eq!(state.label(), "Goal 1: No Poverty");
        assert_eq!(state.asset_ref(), "/lib/svgs/goal-1.svg");
    }

    #[test]
    fn rewriting_the_same_selector_does_not_recompute() {
        let mut state = resolved_state("3");
        assert_eq!(state.recomputations(), 1);

        assert_eq!(state.set_goal("3"), GoalUpdate::Unchanged);
        assert_eq!(state.recomputations(), 1);

        assert!(matches!(state.set_goal("4"), GoalUpdate::Resolved(_)));
        assert_eq!(state.recomputations(), 2);
    }

    // Out-of-range and unparseable selectors are swallowed: the badge keeps
    // showing the previous goal and the caller gets no visible error. The
    // `Ignored` outcome is the only trace of the rejected value.
    #[test]
    fn invalid_selectors_leave_previous_state_in_place() {
        let mut state = resolved_state("7");
        let before = state.resolved();

        for raw in ["0", "18", "abc"] {
            let update = state.set_goal(raw);
            assert!(matches!(update, GoalUpdate::Ignored(_)), "selector={raw:?}");
            assert_eq!(state.resolved(), before, "selector={raw:?}");
        }
        assert_eq!(state.selector(), Some("abc"));
        assert_eq!(state.recomputations(), 4);
    }

    #[test]
    fn invalid_first_selector_leaves_state_empty() {
        let state = resolved_state("42");
        assert_eq!(state.asset_ref(), "");
        assert_eq!(state.label(), "");
    }

    #[test]
    fn recovering_from_invalid_selector_resolves_again() {
        let mut state = resolved_state("2");
        state.set_goal("oops");
        assert!(matches!(state.set_goal("2"), GoalUpdate::Resolved(_)));
        assert_eq!(state.label(), "Goal 2: Zero Hunger");
    }

    #[test]
    fn caller_label_override_lasts_until_next_resolution() {
        let mut state = resolved_state("all");
        state.set_label("Our goals");
        assert_eq!(state.label(), "Our goals");
        assert_eq!(state.asset_ref(), "/lib/svgs/all.svg");

        state.set_goal("all");
        assert_eq!(state.label(), "Our goals");

        state.set_goal("circle");
        assert_eq!(state.label(), "Sustainable Development Goals Circle");
    }

    #[test]
    fn label_set_before_resolution_is_overwritten() {
        let mut state = BadgeState::default();
        state.set_label("placeholder");
        state.set_goal("5");
        assert_eq!(state.label(), "Goal 5: Gender Equality");
    }
}
