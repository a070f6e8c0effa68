//! Browser entry point for the goal badge.
//!
//! Pages that declare `<un-sdg>` elements get a badge mounted into each of
//! them; pages without any get the standalone goal gallery.

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
mod host;
mod web_app;

pub use web_app::{gallery_selectors, GoalGallery, GoalRoute, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();

    if let Err(err) = sdg_badge::register_goal_badge() {
        leptos::logging::warn!("goal badge registration failed: {err}");
    }

    match host::mount_host_elements(sdg_badge::ELEMENT_TAG) {
        Ok(0) => leptos::mount_to_body(|| leptos::view! { <SiteApp /> }),
        Ok(count) => {
            leptos::logging::log!("mounted {count} <{}> elements", sdg_badge::ELEMENT_TAG)
        }
        Err(err) => leptos::logging::warn!("goal badge mount failed: {err}"),
    }
}
