//! Selector-to-asset resolution.

use serde::{Deserialize, Serialize};

use crate::registry::GoalNumber;
use crate::selector::{GoalSelector, SelectorError};

/// Default location of the goal artwork relative to the host page.
pub const DEFAULT_ASSET_BASE: &str = "/lib/svgs";
/// Accessible label for the composite image.
pub const ALL_GOALS_LABEL: &str = "All Sustainable Development Goals";
/// Accessible label for the circular badge.
pub const CIRCLE_LABEL: &str = "Sustainable Development Goals Circle";

/// Base path that goal artwork is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetBase(String);

impl AssetBase {
    /// Creates a base, dropping trailing slashes so joins never double them.
    ///
    /// An empty or all-slash base resolves assets relative to the page.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim().trim_end_matches('/');
        Self(trimmed.to_string())
    }

    /// Returns the normalized base.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a file name onto the base.
    pub fn join(&self, file_name: &str) -> String {
        if self.0.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{file_name}", self.0)
        }
    }

    /// Asset reference for a selector.
    pub fn asset_for(&self, selector: GoalSelector) -> String {
        match selector {
            GoalSelector::All => self.join("all.svg"),
            GoalSelector::Circle => self.join("circle.png"),
            GoalSelector::Goal(number) => self.join(&format!("goal-{number}.svg")),
        }
    }
}

impl Default for AssetBase {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

/// Asset reference and accessible label derived from one selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedState {
    /// Image source path.
    pub asset_ref: String,
    /// Accessible text alternative.
    pub label: String,
}

/// Returns the label shown for a selector.
pub fn label_for(selector: GoalSelector) -> String {
    match selector {
        GoalSelector::All => ALL_GOALS_LABEL.to_string(),
        GoalSelector::Circle => CIRCLE_LABEL.to_string(),
        GoalSelector::Goal(number) => goal_label(number),
    }
}

fn goal_label(number: GoalNumber) -> String {
    format!("Goal {number}: {}", number.entry().name)
}

/// Maps goal selectors onto artwork under an [`AssetBase`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolver {
    assets: AssetBase,
}

impl Resolver {
    /// Creates a resolver rooted at `assets`.
    pub fn new(assets: AssetBase) -> Self {
        Self { assets }
    }

    /// Resolves a raw selector, or returns `None` when it names nothing.
    ///
    /// `None` means "leave the current state alone"; callers must not treat
    /// it as a reason to clear what is displayed.
    pub fn resolve(&self, selector: &str) -> Option<ResolvedState> {
        self.try_resolve(selector).ok()
    }

    /// Resolves a raw selector, reporting why it names nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`SelectorError`] from [`GoalSelector::parse`].
    pub fn try_resolve(&self, selector: &str) -> Result<ResolvedState, SelectorError> {
        let selector = GoalSelector::parse(selector)?;
        Ok(self.resolve_selector(selector))
    }

    /// Resolves an already-validated selector.
    pub fn resolve_selector(&self, selector: GoalSelector) -> ResolvedState {
        ResolvedState {
            asset_ref: self.assets.asset_for(selector),
            label: label_for(selector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_goal_number_resolves_to_its_artwork_and_name() {
        let resolver = Resolver::default();
        for n in 1..=17u8 {
            let resolved = resolver.resolve(&n.to_string()).expect("in range");
            let entry = lookup(n).expect("registry entry");
            assert_eq!(resolved.label, format!("Goal {n}: {}", entry.name));
            assert!(
                resolved.asset_ref.contains(&format!("goal-{n}")),
                "asset_ref={}",
                resolved.asset_ref
            );
        }
    }

    #[test]
    fn all_and_circle_use_fixed_assets_and_labels() {
        let resolver = Resolver::default();
        assert_eq!(
            resolver.resolve("all"),
            Some(ResolvedState {
                asset_ref: "/lib/svgs/all.svg".to_string(),
                label: "All Sustainable Development Goals".to_string(),
            })
        );
        assert_eq!(
            resolver.resolve("circle"),
            Some(ResolvedState {
                asset_ref: "/lib/svgs/circle.png".to_string(),
                label: "Sustainable Development Goals Circle".to_string(),
            })
        );
    }

    #[test]
    fn unresolvable_selectors_yield_nothing() {
        let resolver = Resolver::default();
        for raw in ["0", "18", "abc", "", "-1"] {
            assert_eq!(resolver.resolve(raw), None, "selector={raw:?}");
        }
        assert_eq!(
            resolver.try_resolve("18"),
            Err(SelectorError::OutOfRange(18))
        );
    }

    #[test]
    fn prefix_numbers_resolve_like_their_leading_digits() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve("5abc"), resolver.resolve("5"));
        assert_eq!(
            resolver.resolve("13.5").map(|state| state.label),
            Some("Goal 13: Climate Action".to_string())
        );
    }

    #[test]
    fn asset_base_normalizes_trailing_slashes() {
        let cases = [
            ("/lib/svgs/", "/lib/svgs/goal-3.svg"),
            ("https://cdn.example.org/sdg//", "https://cdn.example.org/sdg/goal-3.svg"),
            ("", "goal-3.svg"),
            ("/", "goal-3.svg"),
            ("assets", "assets/goal-3.svg"),
        ];

        for (base, expected) in cases {
            let resolver = Resolver::new(AssetBase::new(base));
            let resolved = resolver.resolve("3").expect("goal 3");
            assert_eq!(resolved.asset_ref, expected, "base={base:?}");
        }
    }
}
