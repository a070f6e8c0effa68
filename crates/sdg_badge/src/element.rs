//! Process-wide registry of named host elements.
//!
//! A host adapter looks up the factory for a tag and hands it a signal of the
//! element's raw attributes. Tags are defined once; redefining one is an error,
//! matching how browsers treat custom element names.

use std::cell::RefCell;
use std::collections::BTreeMap;

use leptos::{ReadSignal, View};
use sdg_goals::ELEMENT_TAG;
use thiserror::Error;

use crate::attributes::HostAttributes;
use crate::badge::goal_badge_element;

/// Builds an element's view from its live host attributes.
pub type ElementFactory = fn(ReadSignal<HostAttributes>) -> View;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Element registration failures.
pub enum RegistrationError {
    /// The tag already has a factory.
    #[error("element `{0}` is already defined")]
    AlreadyDefined(String),
    /// Tag names must be lowercase and contain a hyphen.
    #[error("`{0}` is not a valid element name")]
    InvalidName(String),
}

thread_local! {
    static ELEMENT_REGISTRY: RefCell<BTreeMap<String, ElementFactory>> =
        RefCell::new(BTreeMap::new());
}

fn is_valid_element_name(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    !bytes.is_empty()
        && bytes[0].is_ascii_lowercase()
        && tag.contains('-')
        && bytes.iter().all(|b| {
            b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(*b, b'-' | b'.' | b'_')
        })
}

/// Registers `factory` under `tag`.
///
/// # Errors
///
/// Returns [`RegistrationError::InvalidName`] for names without a hyphen or
/// with uppercase characters, and [`RegistrationError::AlreadyDefined`] when
/// the tag was registered before.
pub fn define(tag: &str, factory: ElementFactory) -> Result<(), RegistrationError> {
    if !is_valid_element_name(tag) {
        return Err(RegistrationError::InvalidName(tag.to_string()));
    }
    ELEMENT_REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if registry.contains_key(tag) {
            return Err(RegistrationError::AlreadyDefined(tag.to_string()));
        }
        registry.insert(tag.to_string(), factory);
        Ok(())
    })
}

/// Returns the factory registered for `tag`.
pub fn lookup(tag: &str) -> Option<ElementFactory> {
    ELEMENT_REGISTRY.with(|registry| registry.borrow().get(tag).copied())
}

/// Registers the goal badge under [`ELEMENT_TAG`].
///
/// # Errors
///
/// Returns [`RegistrationError::AlreadyDefined`] if called twice.
pub fn register_goal_badge() -> Result<(), RegistrationError> {
    define(ELEMENT_TAG, goal_badge_element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::IntoView;

    fn empty_element(_attrs: ReadSignal<HostAttributes>) -> View {
        ().into_view()
    }

    #[test]
    fn goal_badge_registers_once() {
        assert_eq!(register_goal_badge(), Ok(()));
        assert!(lookup("un-sdg").is_some());
        assert_eq!(
            register_goal_badge(),
            Err(RegistrationError::AlreadyDefined("un-sdg".to_string()))
        );
    }

    #[test]
    fn invalid_names_are_rejected() {
        for tag in ["", "badge", "Un-Sdg", "1-badge", "sdg badge"] {
            assert_eq!(
                define(tag, empty_element),
                Err(RegistrationError::InvalidName(tag.to_string())),
                "tag={tag:?}"
            );
        }
    }

    #[test]
    fn defined_tags_resolve_and_unknown_tags_miss() {
        define("test-swatch", empty_element).expect("fresh tag");
        assert!(lookup("test-swatch").is_some());
        assert!(lookup("never-defined").is_none());
    }
}
