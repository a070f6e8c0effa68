//! Framework-free render plans for the goal badge.
//!
//! The badge has two display modes. [`render_plan`] picks one per call and
//! returns a plain value describing the markup; the Leptos component maps it
//! onto elements.

use serde::{Deserialize, Serialize};

use crate::registry::goals;
use crate::resolver::ResolvedState;

/// Default image height.
pub const DEFAULT_HEIGHT: &str = "254px";
/// Default image width.
pub const DEFAULT_WIDTH: &str = "245px";
/// Default `loading` hint.
pub const DEFAULT_LOADING: &str = "lazy";
/// Default `fetchpriority` hint.
pub const DEFAULT_FETCH_PRIORITY: &str = "low";
/// Edge length of each color-only swatch.
pub const SWATCH_SIZE: &str = "254px";
/// Layout of the color-only container: swatches wrap onto new rows.
pub const COLOR_GRID_STYLE: &str = "display: flex; flex-wrap: wrap; gap: 10px;";

/// Caller-supplied display settings consumed at render time.
///
/// Every string is forwarded verbatim; malformed sizes are the host's problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRequest {
    /// Show the 17 color swatches instead of an image.
    pub color_only: bool,
    /// CSS height applied to the image.
    pub height: String,
    /// CSS width applied to the image.
    pub width: String,
    /// Image `loading` attribute.
    pub loading: String,
    /// Image `fetchpriority` attribute.
    pub fetch_priority: String,
}

impl Default for DisplayRequest {
    fn default() -> Self {
        Self {
            color_only: false,
            height: DEFAULT_HEIGHT.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            loading: DEFAULT_LOADING.to_string(),
            fetch_priority: DEFAULT_FETCH_PRIORITY.to_string(),
        }
    }
}

/// One block of the color-only grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    /// Background color.
    pub color: String,
    /// Accessible label, `Goal: <name>`.
    pub aria_label: String,
}

impl ColorSwatch {
    /// Inline style giving the swatch its color and fixed size.
    pub fn style(&self) -> String {
        format!(
            "background-color: {}; height: {SWATCH_SIZE}; width: {SWATCH_SIZE};",
            self.color
        )
    }
}

/// Wrapping flex container holding one swatch per goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGrid {
    /// Swatches in registry order.
    pub swatches: Vec<ColorSwatch>,
}

impl ColorGrid {
    /// Inline style laying the swatches out as a wrapping row.
    pub fn style(&self) -> &'static str {
        COLOR_GRID_STYLE
    }
}

/// Image rendering of the resolved goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageView {
    /// Image source.
    pub src: String,
    /// Text alternative.
    pub alt: String,
    /// `loading` hint.
    pub loading: String,
    /// `fetchpriority` hint.
    pub fetch_priority: String,
    /// CSS height.
    pub height: String,
    /// CSS width.
    pub width: String,
}

impl ImageView {
    /// Inline style carrying the requested size.
    pub fn style(&self) -> String {
        format!("height: {}; width: {};", self.height, self.width)
    }
}

/// What the badge shows for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeView {
    /// Every registry color, in registry order.
    ColorGrid(ColorGrid),
    /// A single image.
    Image(ImageView),
}

/// Swatches for every goal in registry order.
pub fn color_swatches() -> Vec<ColorSwatch> {
    goals()
        .iter()
        .map(|entry| ColorSwatch {
            color: entry.color.clone(),
            aria_label: format!("Goal: {}", entry.name),
        })
        .collect()
}

/// Chooses the display mode for `request` and describes its markup.
///
/// In color-only mode `resolved` is ignored entirely.
pub fn render_plan(resolved: &ResolvedState, request: &DisplayRequest) -> BadgeView {
    if request.color_only {
        return BadgeView::ColorGrid(ColorGrid {
            swatches: color_swatches(),
        });
    }
    BadgeView::Image(ImageView {
        src: resolved.asset_ref.clone(),
        alt: resolved.label.clone(),
        loading: request.loading.clone(),
        fetch_priority: request.fetch_priority.clone(),
        height: request.height.clone(),
        width: request.width.clone(),
    })
}
