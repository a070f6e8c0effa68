//! Mounts registered elements into matching host elements on the page.

use leptos::*;
use sdg_badge::{HostAttributes, OBSERVED_ATTRIBUTES};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlElement, MutationObserver, MutationObserverInit};

fn read_attributes(element: &Element) -> HostAttributes {
    element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            element
                .get_attribute(&name)
                .map(|value| (name.to_ascii_lowercase(), value))
        })
        .collect()
}

fn observe_attributes(
    element: &Element,
    set_host: WriteSignal<HostAttributes>,
) -> Result<(), String> {
    let target = element.clone();
    let on_mutation = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::wrap(Box::new(
        move |_records: js_sys::Array, _observer: MutationObserver| {
            set_host.set(read_attributes(&target));
        },
    ));
    let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())
        .map_err(|err| format!("failed to create attribute observer: {err:?}"))?;

    let options = MutationObserverInit::new();
    options.set_attributes(true);
    let filter: js_sys::Array = OBSERVED_ATTRIBUTES
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect();
    options.set_attribute_filter(&filter);

    observer
        .observe_with_options(element, &options)
        .map_err(|err| format!("failed to observe host attributes: {err:?}"))?;
    on_mutation.forget();
    Ok(())
}

/// Mounts the factory registered for `tag` into every `<tag>` element.
///
/// Returns how many elements were mounted.
pub fn mount_host_elements(tag: &str) -> Result<usize, String> {
    let factory =
        sdg_badge::lookup(tag).ok_or_else(|| format!("element `{tag}` is not defined"))?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())?;

    let collection = document.get_elements_by_tag_name(tag);
    let hosts: Vec<Element> = (0..collection.length())
        .filter_map(|idx| collection.item(idx))
        .collect();

    for element in &hosts {
        let parent = element
            .clone()
            .dyn_into::<HtmlElement>()
            .map_err(|_| format!("<{tag}> is not an HTML element"))?;
        let element = element.clone();
        mount_to(parent, move || {
            let (host, set_host) = create_signal(read_attributes(&element));
            if let Err(err) = observe_attributes(&element, set_host) {
                logging::warn!("{err}");
            }
            factory(host)
        });
    }

    Ok(hosts.len())
}
