use leptos::*;

use super::use_desktop_runtime;
use crate::dock::DockController;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let controller = store_value(runtime.catalog.with_value(DockController::from_catalog));
    let indicators = Signal::derive(move || {
        runtime
            .state
            .with(|manager| controller.with_value(|dock| dock.indicators(manager)))
    });

    let activate = move |item_id: String| {
        match controller.with_value(|dock| dock.activate(&item_id)) {
            Ok(Some(action)) => runtime.dispatch_action(action),
            Ok(None) => {}
            Err(err) => logging::warn!("dock activation failed: {err}"),
        }
    };

    view! {
        <footer class="dock">
            <ul class="dock-items" role="toolbar" aria-label="Dock">
                <For
                    each=move || indicators.get()
                    key=|indicator| (indicator.item_id.clone(), indicator.running, indicator.focused)
                    let:indicator
                >
                    {{
                        let item_id = indicator.item_id.clone();
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="dock-icon"
                                    class:running=indicator.running
                                    class:focused=indicator.focused
                                    disabled=!indicator.enabled
                                    title=indicator.label.clone()
                                    aria-label=indicator.label.clone()
                                    aria-pressed=indicator.focused.to_string()
                                    on:click=move |_| activate(item_id.clone())
                                >
                                    {indicator.icon.clone().map(|src| view! { <img src=src alt="" /> })}
                                </button>
                                <span class="dock-running-dot" aria-hidden="true"></span>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </footer>
    }
}
