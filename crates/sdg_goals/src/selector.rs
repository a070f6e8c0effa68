//! Goal selector parsing.
//!
//! A selector is the raw `goal` value a caller hands the badge: `"all"`,
//! `"circle"`, or a goal number. Numbers use leading-prefix semantics, so
//! `"5abc"` and `" 5"` both select goal 5 while `"abc"` selects nothing.

use std::fmt;

use thiserror::Error;

use crate::registry::{GoalNumber, GOAL_COUNT};

/// Selector value for the composite image of every goal.
pub const ALL_SELECTOR: &str = "all";
/// Selector value for the circular badge image.
pub const CIRCLE_SELECTOR: &str = "circle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A selector that names something the badge can display.
pub enum GoalSelector {
    /// Composite "all goals" image.
    All,
    /// Circular badge image.
    Circle,
    /// A single goal image.
    Goal(GoalNumber),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a selector does not name a displayable image.
pub enum SelectorError {
    /// No leading integer could be read from the selector.
    #[error("goal selector `{0}` is not `all`, `circle`, or a number")]
    NotANumber(String),
    /// The selector parsed to a number outside the registry.
    #[error("goal number {0} is outside 1..={GOAL_COUNT}")]
    OutOfRange(i64),
}

impl GoalSelector {
    /// Parses a raw selector.
    ///
    /// `"all"` and `"circle"` match exactly (case-sensitive). Anything else is
    /// read as a leading integer and must fall within `1..=17`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::NotANumber`] when no integer prefix exists and
    /// [`SelectorError::OutOfRange`] when the integer is not a goal number.
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        match raw {
            ALL_SELECTOR => Ok(Self::All),
            CIRCLE_SELECTOR => Ok(Self::Circle),
            _ => {
                let value = parse_leading_int(raw)
                    .ok_or_else(|| SelectorError::NotANumber(raw.to_string()))?;
                u8::try_from(value)
                    .ok()
                    .and_then(GoalNumber::new)
                    .map(Self::Goal)
                    .ok_or(SelectorError::OutOfRange(value))
            }
        }
    }
}

impl fmt::Display for GoalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SELECTOR),
            Self::Circle => f.write_str(CIRCLE_SELECTOR),
            Self::Goal(number) => write!(f, "{number}"),
        }
    }
}

/// Reads the leading base-10 integer of `raw`.
///
/// Leading whitespace and one optional sign are skipped, then digits are
/// consumed up to the first non-digit. Returns `None` when no digit follows.
/// Values too large for `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
