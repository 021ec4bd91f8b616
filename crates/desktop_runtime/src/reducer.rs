//! Reducer actions, side-effect intents, and transition dispatch for the desktop runtime.

use desktop_contract::{WindowData, WindowId, WindowPosition};

use crate::{error::DesktopError, window_manager::WindowManager};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`]; the only way UI code expresses intent.
pub enum DesktopAction {
    /// Open (or restore) a window and bring it to the front, optionally binding a payload.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
        /// Payload for data-bearing windows.
        data: Option<WindowData>,
    },
    /// Close a window and drop its payload.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Dock-click behavior: minimize if in front, otherwise open/restore.
    ToggleWindow {
        /// Window bound to the dock icon.
        window_id: WindowId,
    },
    /// Commit the end position of a drag gesture.
    MoveWindow {
        /// Dragged window.
        window_id: WindowId,
        /// Final top-left position.
        position: WindowPosition,
    },
    /// Replace the payload of an open window without refocusing it.
    BindWindowData {
        /// Target window.
        window_id: WindowId,
        /// New payload.
        data: WindowData,
    },
    /// Leave the desktop for an external URL.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly focused window.
    FocusWindowInput(WindowId),
    /// Open an external URL in a new browser tab.
    OpenExternalUrl(String),
}

/// Applies a [`DesktopAction`] to the window manager and collects resulting side effects.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownWindow`] when an action references a window that is not
/// registered. State is left untouched in that case.
pub fn reduce_desktop(
    manager: &mut WindowManager,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, DesktopError> {
    let mut effects = Vec::new();
    let focused_before = manager.focused();

    match action {
        DesktopAction::OpenWindow { window_id, data } => {
            manager.open(window_id, data)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            manager.close(window_id)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            manager.minimize(window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            manager.focus(window_id)?;
        }
        DesktopAction::ToggleWindow { window_id } => {
            manager.toggle(window_id)?;
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            manager.move_to(window_id, position)?;
        }
        DesktopAction::BindWindowData { window_id, data } => {
            manager.bind_data(window_id, data)?;
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    let focused_after = manager.focused();
    if focused_after != focused_before {
        if let Some(window_id) = focused_after {
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::DesktopCatalog;

    fn manager() -> WindowManager {
        let catalog = DesktopCatalog::builtin().expect("builtin catalog");
        WindowManager::new(catalog.registry)
    }

    fn open(manager: &mut WindowManager, window_id: WindowId) -> Vec<RuntimeEffect> {
        reduce_desktop(
            manager,
            DesktopAction::OpenWindow {
                window_id,
                data: None,
            },
        )
        .expect("open window")
    }

    #[test]
    fn open_window_requests_input_focus_for_the_new_front_window() {
        let mut wm = manager();
        let effects = open(&mut wm, WindowId::Finder);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(WindowId::Finder)]);

        let effects = open(&mut wm, WindowId::Finder);
        assert!(effects.is_empty());
    }

    #[test]
    fn closing_the_front_window_moves_input_focus_to_the_next_one() {
        let mut wm = manager();
        open(&mut wm, WindowId::Finder);
        open(&mut wm, WindowId::Terminal);

        let effects = reduce_desktop(
            &mut wm,
            DesktopAction::CloseWindow {
                window_id: WindowId::Terminal,
            },
        )
        .unwrap();
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(WindowId::Finder)]);
    }

    #[test]
    fn minimizing_the_last_window_emits_no_focus_effect() {
        let mut wm = manager();
        open(&mut wm, WindowId::Safari);
        let effects = reduce_desktop(
            &mut wm,
            DesktopAction::ToggleWindow {
                window_id: WindowId::Safari,
            },
        )
        .unwrap();
        assert!(effects.is_empty());
        assert!(wm.is_minimized(WindowId::Safari));
    }

    #[test]
    fn external_url_is_forwarded_without_touching_windows() {
        let mut wm = manager();
        let before = wm.clone();
        let effects = reduce_desktop(
            &mut wm,
            DesktopAction::OpenExternalUrl {
                url: "https://example.com".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl("https://example.com".to_string())]
        );
        assert_eq!(wm, before);
    }

    #[test]
    fn move_after_close_is_ignored() {
        let mut wm = manager();
        open(&mut wm, WindowId::Terminal);
        reduce_desktop(
            &mut wm,
            DesktopAction::CloseWindow {
                window_id: WindowId::Terminal,
            },
        )
        .unwrap();
        let before = wm.state_of(WindowId::Terminal).unwrap().position;

        let effects = reduce_desktop(
            &mut wm,
            DesktopAction::MoveWindow {
                window_id: WindowId::Terminal,
                position: WindowPosition::new(999, 999),
            },
        )
        .unwrap();
        assert!(effects.is_empty());
        assert_eq!(wm.state_of(WindowId::Terminal).unwrap().position, before);
    }
}
