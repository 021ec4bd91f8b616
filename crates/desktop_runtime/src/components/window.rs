use desktop_contract::{WindowId, WindowPosition};
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{content::WindowContent, stop_mouse_event, use_desktop_runtime};
use crate::frame::{window_dom_id, DragGesture, PointerPosition, WindowFrame};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let frame = WindowFrame::new(window_id);

    let window = create_memo(move |_| runtime.state.with(|manager| frame.view(manager)));
    let content = create_memo(move |_| window.with(|view| view.as_ref().map(|v| v.content.clone())));
    let drag = create_rw_signal(None::<DragGesture>);
    let preview = create_rw_signal(None::<WindowPosition>);

    let focus = move |_| {
        if let Some(action) = runtime
            .state
            .with_untracked(|manager| frame.focus_action(manager))
        {
            runtime.dispatch_action(action);
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        let Some(origin) = window.with_untracked(|view| view.as_ref().map(|v| v.position)) else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        drag.set(Some(DragGesture::begin(
            origin,
            pointer_from_pointer_event(&ev),
        )));
    };
    let update_move = move |ev: web_sys::PointerEvent| {
        if let Some(gesture) = drag.get_untracked() {
            preview.set(Some(gesture.position_at(pointer_from_pointer_event(&ev))));
        }
    };
    let end_move = move |ev: web_sys::PointerEvent| {
        let Some(gesture) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        preview.set(None);
        let position = gesture.position_at(pointer_from_pointer_event(&ev));
        runtime.dispatch_action(frame.drag_end_action(position));
    };
    let cancel_move = move |_| {
        drag.set(None);
        preview.set(None);
    };

    let style = move || {
        window.with(|view| {
            view.as_ref().map(|v| {
                let position = preview.get().unwrap_or(v.position);
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    position.x, position.y, v.size.width, v.size.height, v.z_index
                )
            })
        })
    };
    let is_focused = move || window.with(|view| view.as_ref().is_some_and(|v| v.is_focused));
    let is_minimized = move || window.with(|view| view.as_ref().is_some_and(|v| v.is_minimized));
    let title = move || {
        window.with(|view| view.as_ref().map(|v| v.title.clone()).unwrap_or_default())
    };

    view! {
        <Show when=move || window.with(Option::is_some) fallback=|| ()>
            <section
                id=window_dom_id(window_id)
                class="desktop-window"
                class:focused=is_focused
                class:minimized=is_minimized
                class:dragging=move || drag.with(Option::is_some)
                data-window-id=window_id.as_str()
                style=style
                tabindex="-1"
                role="dialog"
                aria-label=title
                aria-hidden=move || is_minimized().to_string()
                on:pointerdown=focus
                on:pointermove=update_move
                on:pointerup=end_move
                on:pointercancel=cancel_move
            >
                <header class="titlebar" on:pointerdown=begin_move>
                    <div class="titlebar-controls">
                        <button
                            type="button"
                            class="titlebar-close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(frame.close_action());
                            }
                        />
                        <button
                            type="button"
                            class="titlebar-minimize"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(frame.minimize_action());
                            }
                        />
                        <button
                            type="button"
                            class="titlebar-zoom"
                            aria-hidden="true"
                            tabindex="-1"
                            disabled=true
                        />
                    </div>
                    <h2 class="titlebar-title">{title}</h2>
                </header>
                <div class="window-body">
                    {move || {
                        content
                            .get()
                            .map(|content| view! { <WindowContent window_id=window_id content=content /> })
                    }}
                </div>
            </section>
        </Show>
    }
}
