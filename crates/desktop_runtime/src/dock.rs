//! Dock controller: translates icon clicks into toggle actions and derives running indicators.

use desktop_contract::WindowId;

use crate::{
    catalog::{DesktopCatalog, DockItem},
    error::DesktopError,
    reducer::DesktopAction,
    window_manager::WindowManager,
};

/// Per-icon view state derived from the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockIndicator {
    pub item_id: String,
    pub label: String,
    pub icon: Option<String>,
    pub window: Option<WindowId>,
    /// Dot under the icon.
    pub running: bool,
    pub focused: bool,
    /// Decorative icons (no bound window) render disabled.
    pub enabled: bool,
}

/// Stateless view over the dock items; all window state is read from [`WindowManager`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DockController {
    items: Vec<DockItem>,
}

impl DockController {
    pub fn new(items: Vec<DockItem>) -> Self {
        Self { items }
    }

    pub fn from_catalog(catalog: &DesktopCatalog) -> Self {
        Self::new(catalog.dock.clone())
    }

    /// Action for a click on `item_id`; `Ok(None)` for icons without a window.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownDockItem`] when no icon has that id.
    pub fn activate(&self, item_id: &str) -> Result<Option<DesktopAction>, DesktopError> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| DesktopError::UnknownDockItem(item_id.to_string()))?;
        Ok(item
            .window
            .map(|window_id| DesktopAction::ToggleWindow { window_id }))
    }

    pub fn indicators(&self, manager: &WindowManager) -> Vec<DockIndicator> {
        self.items
            .iter()
            .map(|item| DockIndicator {
                item_id: item.id.clone(),
                label: item.label.clone(),
                icon: item.icon.clone(),
                window: item.window,
                running: item.window.is_some_and(|id| manager.is_open(id)),
                focused: item.window.is_some_and(|id| manager.is_focused(id)),
                enabled: item.window.is_some(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    fn setup() -> (DockController, WindowManager) {
        let catalog = DesktopCatalog::builtin().expect("builtin catalog");
        (
            DockController::from_catalog(&catalog),
            WindowManager::new(catalog.registry),
        )
    }

    fn indicator<'a>(indicators: &'a [DockIndicator], id: &str) -> &'a DockIndicator {
        indicators.iter().find(|i| i.item_id == id).unwrap()
    }

    #[test]
    fn activation_toggles_the_bound_window() {
        let (dock, _) = setup();
        assert_eq!(
            dock.activate("terminal"),
            Ok(Some(DesktopAction::ToggleWindow {
                window_id: WindowId::Terminal
            }))
        );
    }

    #[test]
    fn decorative_and_unknown_items() {
        let (dock, _) = setup();
        assert_eq!(dock.activate("trash"), Ok(None));
        assert_eq!(
            dock.activate("launchpad"),
            Err(DesktopError::UnknownDockItem("launchpad".to_string()))
        );
    }

    #[test]
    fn running_dot_follows_open_state_including_minimized() {
        let (dock, mut wm) = setup();
        let click = dock.activate("finder").unwrap().unwrap();

        reduce_desktop(&mut wm, click.clone()).unwrap();
        let indicators = dock.indicators(&wm);
        assert!(indicator(&indicators, "finder").running);
        assert!(indicator(&indicators, "finder").focused);
        assert!(!indicator(&indicators, "safari").running);

        reduce_desktop(&mut wm, click).unwrap();
        let indicators = dock.indicators(&wm);
        assert!(indicator(&indicators, "finder").running);
        assert!(!indicator(&indicators, "finder").focused);
        assert!(!indicator(&indicators, "trash").enabled);
    }
}
