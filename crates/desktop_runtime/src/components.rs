//! Desktop shell UI composition: menu bar, window layer, and dock.

mod content;
mod dock;
mod menubar;
mod window;

use leptos::*;

use self::{dock::Dock, menubar::MenuBar, window::DesktopWindow};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI. Every registered window gets a frame; frames of closed
/// windows render nothing.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_ids = runtime
        .catalog
        .with_value(|catalog| catalog.registry.ids().collect::<Vec<_>>());

    view! {
        <div id="desktop-shell-root" class="desktop-shell" tabindex="-1">
            <MenuBar />
            <main class="desktop-window-layer">
                {window_ids
                    .into_iter()
                    .map(|window_id| view! { <DesktopWindow window_id=window_id /> })
                    .collect_view()}
            </main>
            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
