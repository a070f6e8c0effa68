//! Core model for the Sustainable Development Goal badge.
//!
//! This crate owns the fixed goal registry, selector parsing, selector-to-asset
//! resolution, per-badge state with change detection, and the framework-free
//! render plan. It has no DOM or Leptos dependency so every rule here can be
//! exercised natively; `sdg_badge` adapts it to a reactive component.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod descriptor;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod selector;
pub mod state;

pub use descriptor::{
    component_descriptor, descriptor_url, ComponentDescriptor, PropertyDescriptor, PropertyKind,
    PropertyOption, ELEMENT_TAG,
};
pub use registry::{goal, goals, lookup, GoalEntry, GoalNumber, GOAL_COUNT};
pub use render::{
    color_swatches, render_plan, BadgeView, ColorGrid, ColorSwatch, DisplayRequest, ImageView,
    COLOR_GRID_STYLE, DEFAULT_FETCH_PRIORITY, DEFAULT_HEIGHT, DEFAULT_LOADING, DEFAULT_WIDTH,
    SWATCH_SIZE,
};
pub use resolver::{
    label_for, AssetBase, ResolvedState, Resolver, ALL_GOALS_LABEL, CIRCLE_LABEL,
    DEFAULT_ASSET_BASE,
};
pub use selector::{
    parse_leading_int, GoalSelector, SelectorError, ALL_SELECTOR, CIRCLE_SELECTOR,
};
pub use state::{BadgeState, GoalUpdate, DEFAULT_GOAL};
