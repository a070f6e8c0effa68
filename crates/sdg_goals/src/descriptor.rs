//! Authoring-tool metadata describing the badge element and its properties.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::registry::goals;
use crate::render::{DEFAULT_FETCH_PRIORITY, DEFAULT_HEIGHT, DEFAULT_LOADING, DEFAULT_WIDTH};
use crate::selector::{ALL_SELECTOR, CIRCLE_SELECTOR};
use crate::state::DEFAULT_GOAL;

/// Tag name the badge registers under.
pub const ELEMENT_TAG: &str = "un-sdg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Editor input kind for a property.
pub enum PropertyKind {
    /// Free text.
    Text,
    /// Checkbox.
    Boolean,
    /// Choice from [`PropertyDescriptor::options`].
    Select,
}

/// One selectable value of a [`PropertyKind::Select`] property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOption {
    /// Value written to the property.
    pub value: String,
    /// Text shown in the editor.
    pub text: String,
}

/// One configurable property of the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name on the component.
    pub property: String,
    /// Host attribute name.
    pub attribute: String,
    /// Editor input kind.
    pub kind: PropertyKind,
    /// Editor label.
    pub title: String,
    /// Editor help text.
    pub description: String,
    /// Default value.
    pub default: Value,
    /// Allowed values for select properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
}

/// Element-level metadata consumed by host authoring tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Registered tag name.
    pub tag: String,
    /// Human-readable element name.
    pub title: String,
    /// Short element description.
    pub description: String,
    /// Search tags for the element picker.
    pub tags: Vec<String>,
    /// Configurable properties.
    pub properties: Vec<PropertyDescriptor>,
}

impl ComponentDescriptor {
    /// Serializes the descriptor as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which only occurs for non-string map keys.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns the property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|prop| prop.property == name)
    }
}

/// Location of the descriptor file published alongside the element.
pub fn descriptor_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/lib/{ELEMENT_TAG}.haxProperties.json")
}

fn goal_options() -> Vec<PropertyOption> {
    let mut options = vec![
        PropertyOption {
            value: ALL_SELECTOR.to_string(),
            text: "All goals".to_string(),
        },
        PropertyOption {
            value: CIRCLE_SELECTOR.to_string(),
            text: "Goals circle".to_string(),
        },
    ];
    options.extend(goals().iter().map(|entry| PropertyOption {
        value: entry.number.to_string(),
        text: format!("Goal {}: {}", entry.number, entry.name),
    }));
    options
}

fn text_property(
    property: &str,
    attribute: &str,
    title: &str,
    description: &str,
    default: &str,
) -> PropertyDescriptor {
    PropertyDescriptor {
        property: property.to_string(),
        attribute: attribute.to_string(),
        kind: PropertyKind::Text,
        title: title.to_string(),
        description: description.to_string(),
        default: json!(default),
        options: Vec::new(),
    }
}

/// Builds the descriptor for the goal badge.
pub fn component_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        tag: ELEMENT_TAG.to_string(),
        title: "UN Sustainable Development Goal".to_string(),
        description: "Displays a Sustainable Development Goal icon or the goal color palette."
            .to_string(),
        tags: ["sdg", "goal", "sustainability", "badge"]
            .iter()
            .map(|tag| tag.to_string())
            .collect(),
        properties: vec![
            PropertyDescriptor {
                property: "goal".to_string(),
                attribute: "goal".to_string(),
                kind: PropertyKind::Select,
                title: "Goal".to_string(),
                description: "Goal number, the composite image, or the circle badge.".to_string(),
                default: json!(DEFAULT_GOAL),
                options: goal_options(),
            },
            text_property(
                "label",
                "label",
                "Label",
                "Alternative text; replaced whenever the goal changes.",
                "",
            ),
            PropertyDescriptor {
                property: "colorOnly".to_string(),
                attribute: "color-only".to_string(),
                kind: PropertyKind::Boolean,
                title: "Color only".to_string(),
                description: "Show every goal color instead of an image.".to_string(),
                default: json!(false),
                options: Vec::new(),
            },
            text_property(
                "fetchPriority",
                "fetchpriority",
                "Fetch priority",
                "Image fetch priority hint.",
                DEFAULT_FETCH_PRIORITY,
            ),
            text_property(
                "loading",
                "loading",
                "Loading",
                "Image loading hint.",
                DEFAULT_LOADING,
            ),
            text_property("height", "height", "Height", "CSS image height.", DEFAULT_HEIGHT),
            text_property("width", "width", "Width", "CSS image width.", DEFAULT_WIDTH),
        ],
    }
}
