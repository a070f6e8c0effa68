//! Host attribute mapping for `<un-sdg>` elements.

use std::collections::BTreeMap;

use sdg_goals::{
    DisplayRequest, DEFAULT_FETCH_PRIORITY, DEFAULT_GOAL, DEFAULT_HEIGHT, DEFAULT_LOADING,
    DEFAULT_WIDTH,
};

/// Raw attributes of a host element, keyed by lowercase attribute name.
pub type HostAttributes = BTreeMap<String, String>;

/// Attribute names the badge observes.
pub const OBSERVED_ATTRIBUTES: [&str; 7] = [
    "goal",
    "label",
    "color-only",
    "fetchpriority",
    "loading",
    "height",
    "width",
];

/// Badge properties decoded from host attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeAttributes {
    /// Goal selector.
    pub goal: String,
    /// Caller-supplied accessible label.
    pub label: String,
    /// Color-only display flag.
    pub color_only: bool,
    /// Image fetch priority hint.
    pub fetch_priority: String,
    /// Image loading hint.
    pub loading: String,
    /// CSS height.
    pub height: String,
    /// CSS width.
    pub width: String,
}

impl Default for BadgeAttributes {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL.to_string(),
            label: String::new(),
            color_only: false,
            fetch_priority: DEFAULT_FETCH_PRIORITY.to_string(),
            loading: DEFAULT_LOADING.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            width: DEFAULT_WIDTH.to_string(),
        }
    }
}

impl BadgeAttributes {
    /// Decodes attributes, falling back to defaults for absent ones.
    ///
    /// `color-only` is a boolean attribute: present means `true` whatever its
    /// value. Unknown attributes are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut attrs = Self::default();
        for (name, value) in pairs {
            attrs.apply(name.as_ref(), Some(value.as_ref()));
        }
        attrs
    }

    /// Decodes a host attribute map.
    pub fn from_host(host: &HostAttributes) -> Self {
        Self::from_pairs(host)
    }

    /// Applies one attribute write; `None` means the attribute was removed.
    ///
    /// Returns `false` for attributes the badge does not observe.
    pub fn apply(&mut self, name: &str, value: Option<&str>) -> bool {
        let defaults = Self::default();
        let text = |fallback: String| value.map(str::to_string).unwrap_or(fallback);
        match name.to_ascii_lowercase().as_str() {
            "goal" => self.goal = text(defaults.goal),
            "label" => self.label = text(defaults.label),
            "color-only" => self.color_only = value.is_some(),
            "fetchpriority" => self.fetch_priority = text(defaults.fetch_priority),
            "loading" => self.loading = text(defaults.loading),
            "height" => self.height = text(defaults.height),
            "width" => self.width = text(defaults.width),
            _ => return false,
        }
        true
    }

    /// Render-time settings carried by these attributes.
    pub fn display_request(&self) -> DisplayRequest {
        DisplayRequest {
            color_only: self.color_only,
            height: self.height.clone(),
            width: self.width.clone(),
            loading: self.loading.clone(),
            fetch_priority: self.fetch_priority.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_attributes_use_component_defaults() {
        let attrs = BadgeAttributes::from_pairs(Vec::<(&str, &str)>::new());
        assert_eq!(attrs, BadgeAttributes::default());
        assert_eq!(attrs.goal, "1");
        assert_eq!(attrs.display_request(), DisplayRequest::default());
    }

    #[test]
    fn known_attributes_override_defaults() {
        let attrs = BadgeAttributes::from_pairs([
            ("goal", "circle"),
            ("FetchPriority", "high"),
            ("loading", "eager"),
            ("height", "100px"),
            ("width", "90px"),
            ("label", "SDG circle"),
            ("data-extra", "ignored"),
        ]);
        assert_eq!(
            attrs,
            BadgeAttributes {
                goal: "circle".to_string(),
                label: "SDG circle".to_string(),
                color_only: false,
                fetch_priority: "high".to_string(),
                loading: "eager".to_string(),
                height: "100px".to_string(),
                width: "90px".to_string(),
            }
        );
    }

    #[test]
    fn color_only_is_true_whenever_present() {
        for value in ["", "true", "false"] {
            let attrs = BadgeAttributes::from_pairs([("color-only", value)]);
            assert!(attrs.color_only, "value={value:?}");
        }
    }

    #[test]
    fn removing_an_attribute_restores_its_default() {
        let mut attrs = BadgeAttributes::from_pairs([("goal", "9"), ("color-only", "")]);
        assert!(attrs.apply("goal", None));
        assert!(attrs.apply("color-only", None));
        assert_eq!(attrs.goal, "1");
        assert!(!attrs.color_only);
        assert!(!attrs.apply("title", Some("ignored")));
    }

    #[test]
    fn host_map_decodes_like_pairs() {
        let mut host = HostAttributes::new();
        host.insert("goal".to_string(), "all".to_string());
        host.insert("width".to_string(), "50%".to_string());
        let attrs = BadgeAttributes::from_host(&host);
        assert_eq!(attrs.goal, "all");
        assert_eq!(attrs.width, "50%");
        assert_eq!(attrs.height, "254px");
    }
}
