//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window manager signal, the runtime effect queue, and the
//! embedded desktop catalog. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    catalog::DesktopCatalog,
    effect_executor,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Window manager state; written only by [`DesktopRuntimeContext::dispatch`].
    pub state: RwSignal<WindowManager>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Static desktop configuration.
    pub catalog: StoredValue<DesktopCatalog>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn load_catalog() -> DesktopCatalog {
    match DesktopCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("desktop catalog rejected, starting empty: {err}");
            DesktopCatalog::default()
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = load_catalog();
    let state = create_rw_signal(WindowManager::new(catalog.registry.clone()));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let catalog = store_value(catalog);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        effects,
        catalog,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
