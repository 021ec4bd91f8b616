//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{frame::window_dom_id, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => focus_element_by_id(window_dom_id(window_id)),
        RuntimeEffect::OpenExternalUrl(url) => open_external_url(&url),
    }
}

#[cfg(target_arch = "wasm32")]
fn focus_element_by_id(id: String) {
    // A freshly opened window mounts after the state change that focused it.
    request_animation_frame(move || {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let _ = element.focus();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_element_by_id(_: String) {}

#[cfg(target_arch = "wasm32")]
fn open_external_url(url: &str) {
    let Some(window) = web_sys::window() else {
        logging::warn!("open external url failed for `{url}`: no browser window");
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        logging::warn!("open external url failed for `{url}`: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_external_url(url: &str) {
    logging::log!("external url requested outside the browser: {url}");
}
