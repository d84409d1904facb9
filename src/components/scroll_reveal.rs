use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};
use yew::prelude::*;

/// Portion of an element that must be visible before it animates in.
const VISIBILITY_THRESHOLD: f64 = 0.1;
/// Pulls the trigger line 50px above the bottom edge of the viewport.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";
const REVEAL_CLASS: &str = "animate-in";

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Adds the reveal marker to every element matching `selector` the first
/// time it scrolls into view. Each element is observed at most once;
/// without `IntersectionObserver` support everything is shown up front.
#[hook]
pub fn use_reveal_on_scroll(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            let observer = web_sys::window().and_then(|window| observe_all(&window, selector));
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

fn observe_all(window: &Window, selector: &str) -> Option<(IntersectionObserver, RevealCallback)> {
    let document = window.document()?;
    if !js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
    {
        // Older engines: no staged reveal, just show the content.
        reveal_all(&document, selector);
        return None;
    }

    let callback: RevealCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                reveal_all(&document, selector);
                return None;
            }
        };

    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&element);
            }
        }
    }

    Some((observer, callback))
}

fn reveal_all(document: &Document, selector: &str) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
            {
                let _ = element.class_list().add_1(REVEAL_CLASS);
            }
        }
    }
}
