//! Leptos adapter for the Sustainable Development Goal badge.
//!
//! [`GoalBadge`] renders the artwork or color palette described by
//! `sdg_goals`. Host pages that declare `<un-sdg>` elements go through the
//! element registry instead: [`register_goal_badge`] installs the factory once
//! at startup and the host adapter mounts it with the element's attributes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attributes;
mod badge;
mod element;

pub use attributes::{BadgeAttributes, HostAttributes, OBSERVED_ATTRIBUTES};
pub use badge::{goal_badge_element, GoalBadge, GoalBadgeModel};
pub use element::{define, lookup, register_goal_badge, ElementFactory, RegistrationError};
pub use sdg_goals::ELEMENT_TAG;
