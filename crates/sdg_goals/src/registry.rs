//! The fixed, ordered catalog of the seventeen Sustainable Development Goals.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/goal_catalog_generated.rs"));

/// Number of goals in the registry.
pub const GOAL_COUNT: u8 = 17;

/// A goal number known to be within `1..=17`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GoalNumber(u8);

impl GoalNumber {
    /// Returns a goal number when `raw` lies within `1..=17`.
    pub fn new(raw: u8) -> Option<Self> {
        (1..=GOAL_COUNT).contains(&raw).then_some(Self(raw))
    }

    /// Returns the numeric value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the registry entry for this goal.
    pub fn entry(self) -> &'static GoalEntry {
        goal(self)
    }
}

impl TryFrom<u8> for GoalNumber {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("goal number {raw} is outside 1..={GOAL_COUNT}"))
    }
}

impl From<GoalNumber> for u8 {
    fn from(value: GoalNumber) -> Self {
        value.0
    }
}

impl fmt::Display for GoalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One goal's display name and brand color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEntry {
    /// Official goal number.
    pub number: GoalNumber,
    /// Official English goal name.
    pub name: String,
    /// Brand color as `#rrggbb`.
    pub color: String,
}

fn catalog() -> &'static [GoalEntry] {
    static CATALOG: OnceLock<Vec<GoalEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(GOAL_CATALOG_JSON).expect("generated goal catalog should parse")
    })
}

/// Returns every goal in registry order.
pub fn goals() -> &'static [GoalEntry] {
    catalog()
}

/// Returns the entry for a validated goal number.
pub fn goal(number: GoalNumber) -> &'static GoalEntry {
    &catalog()[usize::from(number.get()) - 1]
}

/// Looks up a goal by raw number, returning `None` outside `1..=17`.
pub fn lookup(number: u8) -> Option<&'static GoalEntry> {
    GoalNumber::new(number).map(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_holds_seventeen_goals_in_order() {
        let all = goals();
        assert_eq!(all.len(), usize::from(GOAL_COUNT));
        for (idx, entry) in all.iter().enumerate() {
            assert_eq!(usize::from(entry.number.get()), idx + 1);
        }
    }

    #[test]
    fn quality_education_is_goal_four() {
        let entry = lookup(4).expect("goal 4");
        assert_eq!(entry.name, "Quality Education");
        assert_eq!(entry.color, "#c5192d");
    }

    #[test]
    fn first_and_last_entries_match_official_list() {
        assert_eq!(lookup(1).map(|g| g.name.as_str()), Some("No Poverty"));
        assert_eq!(
            lookup(17).map(|g| (g.name.as_str(), g.color.as_str())),
            Some(("Partnerships for the Goals", "#19486a"))
        );
    }

    #[test]
    fn lookup_rejects_out_of_range_numbers() {
        assert!(lookup(0).is_none());
        assert!(lookup(18).is_none());
        assert!(GoalNumber::new(u8::MAX).is_none());
    }

    #[test]
    fn colors_are_hex_triplets() {
        for entry in goals() {
            assert_eq!(entry.color.len(), 7, "goal {}", entry.number);
            assert!(entry.color.starts_with('#'));
            assert!(entry.color[1..].bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn goal_number_deserializes_only_in_range() {
        let ok: GoalNumber = serde_json::from_str("9").expect("in range");
        assert_eq!(ok.get(), 9);
        assert!(serde_json::from_str::<GoalNumber>("0").is_err());
        assert!(serde_json::from_str::<GoalNumber>("18").is_err());
    }
}
