//! The window manager core: sole owner of every window's live state.
//!
//! Commands validate the window id against the registry and then either apply a transition or
//! resolve to a no-op. Each command returns whether observable state changed. Invalid transitions
//! (focusing a closed window, moving a window after it closed) are no-ops rather than errors.
//!
//! Stacking uses one monotonically increasing counter: every focus-causing command assigns the
//! next counter value to its target, so z-indices stay unique and ordered by recency without
//! renumbering the stack.

use std::{collections::BTreeMap, rc::Rc};

use desktop_contract::{WindowData, WindowId, WindowPosition};
use leptos::logging;

use crate::{
    error::DesktopError,
    model::{
        DesktopSnapshot, WindowSnapshot, WindowState, WindowStatus,
        DESKTOP_SNAPSHOT_SCHEMA_VERSION,
    },
    registry::WindowRegistry,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    registry: Rc<WindowRegistry>,
    windows: BTreeMap<WindowId, WindowState>,
    focused: Option<WindowId>,
    z_counter: u32,
}

impl WindowManager {
    /// Creates a closed state for every registered window at its default position.
    pub fn new(registry: Rc<WindowRegistry>) -> Self {
        let windows = registry
            .descriptors()
            .iter()
            .map(|d| (d.id, WindowState::closed_at(d.default_position)))
            .collect();
        Self {
            registry,
            windows,
            focused: None,
            z_counter: 0,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Opens (or un-minimizes) `id`, binds `data` when provided, and brings it to the front.
    ///
    /// Payloads for windows that are not data-bearing are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn open(&mut self, id: WindowId, data: Option<WindowData>) -> Result<bool, DesktopError> {
        let data_bearing = self.registry.descriptor_of(id)?.data_bearing;
        let already_front = self.focused == Some(id) && self.is_visible(id);

        let window = self.window_mut(id)?;
        let mut changed = !window.is_visible();
        window.is_open = true;
        window.is_minimized = false;

        if let Some(data) = data {
            if !data_bearing {
                logging::warn!("ignoring payload for window `{id}`: not data-bearing");
            } else if window.data.as_ref() != Some(&data) {
                window.data = Some(data);
                changed = true;
            }
        }

        if !already_front {
            self.raise(id);
            changed = true;
        }
        Ok(changed)
    }

    /// Closes `id`, dropping its payload. Focus passes to the next window down.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn close(&mut self, id: WindowId) -> Result<bool, DesktopError> {
        let window = self.window_mut(id)?;
        if !window.is_open {
            return Ok(false);
        }
        window.is_open = false;
        window.is_minimized = false;
        window.data = None;
        self.release_focus(id);
        Ok(true)
    }

    /// Hides an open window from the stack while keeping its payload.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn minimize(&mut self, id: WindowId) -> Result<bool, DesktopError> {
        let window = self.window_mut(id)?;
        if !window.is_visible() {
            return Ok(false);
        }
        window.is_minimized = true;
        self.release_focus(id);
        Ok(true)
    }

    /// Brings an open, non-minimized window to the front.
    ///
    /// Minimized and closed windows are not focusable; use [`WindowManager::open`] for those.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn focus(&mut self, id: WindowId) -> Result<bool, DesktopError> {
        if !self.window_mut(id)?.is_visible() || self.focused == Some(id) {
            return Ok(false);
        }
        self.raise(id);
        Ok(true)
    }

    /// Dock-click semantics: minimize the front window, otherwise open/restore and focus.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn toggle(&mut self, id: WindowId) -> Result<bool, DesktopError> {
        if self.focused == Some(id) && self.is_visible(id) {
            self.minimize(id)
        } else {
            self.open(id, None)
        }
    }

    /// Records the final position of a drag. Ignored for closed windows.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn move_to(&mut self, id: WindowId, position: WindowPosition) -> Result<bool, DesktopError> {
        let window = self.window_mut(id)?;
        if !window.is_open || window.position == position {
            return Ok(false);
        }
        window.position = position;
        Ok(true)
    }

    /// Replaces the payload of an open, data-bearing window without changing focus or stacking.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` is not registered.
    pub fn bind_data(&mut self, id: WindowId, data: WindowData) -> Result<bool, DesktopError> {
        let data_bearing = self.registry.descriptor_of(id)?.data_bearing;
        let window = self.window_mut(id)?;
        if !data_bearing || !window.is_open || window.data.as_ref() == Some(&data) {
            return Ok(false);
        }
        window.data = Some(data);
        Ok(true)
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.windows.get(&id).is_some_and(|w| w.is_open)
    }

    pub fn is_minimized(&self, id: WindowId) -> bool {
        self.windows.get(&id).is_some_and(|w| w.is_minimized)
    }

    pub fn is_visible(&self, id: WindowId) -> bool {
        self.windows.get(&id).is_some_and(WindowState::is_visible)
    }

    pub fn is_focused(&self, id: WindowId) -> bool {
        self.focused == Some(id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn data_of(&self, id: WindowId) -> Option<&WindowData> {
        self.windows.get(&id).and_then(|w| w.data.as_ref())
    }

    pub fn state_of(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.get(&id)
    }

    pub fn status_of(&self, id: WindowId) -> WindowStatus {
        match self.windows.get(&id) {
            Some(w) if w.is_minimized => WindowStatus::OpenMinimized,
            Some(w) if w.is_open && self.focused == Some(id) => WindowStatus::OpenFocused,
            Some(w) if w.is_open => WindowStatus::OpenBackground,
            _ => WindowStatus::Closed,
        }
    }

    /// Open, non-minimized windows in paint order: ascending z-index, topmost last.
    pub fn visible_windows_by_z_order(&self) -> Vec<WindowId> {
        let mut visible: Vec<(u32, WindowId)> = self
            .windows
            .iter()
            .filter(|(_, w)| w.is_visible())
            .map(|(id, w)| (w.z_index, *id))
            .collect();
        visible.sort_unstable();
        visible.into_iter().map(|(_, id)| id).collect()
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        let windows = self
            .registry
            .descriptors()
            .iter()
            .filter_map(|descriptor| {
                let state = self.windows.get(&descriptor.id)?;
                Some(WindowSnapshot {
                    id: descriptor.id,
                    title: descriptor.title.clone(),
                    status: self.status_of(descriptor.id),
                    is_open: state.is_open,
                    is_minimized: state.is_minimized,
                    z_index: state.z_index,
                    position: state.position,
                    size: descriptor.default_size,
                    data: state.data.clone(),
                })
            })
            .collect();
        DesktopSnapshot {
            schema_version: DESKTOP_SNAPSHOT_SCHEMA_VERSION,
            focused: self.focused,
            windows,
        }
    }

    fn window_mut(&mut self, id: WindowId) -> Result<&mut WindowState, DesktopError> {
        self.windows
            .get_mut(&id)
            .ok_or_else(|| DesktopError::UnknownWindow(id.to_string()))
    }

    fn raise(&mut self, id: WindowId) {
        if self.z_counter == u32::MAX {
            self.compact_z_order();
        }
        self.z_counter += 1;
        let z_index = self.z_counter;
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z_index;
        }
        self.focused = Some(id);
    }

    /// Drops focus from `id` if it held it, handing focus to the highest remaining visible window.
    fn release_focus(&mut self, id: WindowId) {
        if self.focused != Some(id) {
            return;
        }
        self.focused = self
            .windows
            .iter()
            .filter(|(_, w)| w.is_visible())
            .max_by_key(|(_, w)| w.z_index)
            .map(|(id, _)| *id);
    }

    /// Renumbers the stack from 1 in current order once the counter is exhausted.
    fn compact_z_order(&mut self) {
        let mut order: Vec<(u32, WindowId)> = self
            .windows
            .iter()
            .map(|(id, w)| (w.z_index, *id))
            .collect();
        order.sort_unstable();
        for (idx, (_, id)) in order.into_iter().enumerate() {
            if let Some(window) = self.windows.get_mut(&id) {
                window.z_index = idx as u32 + 1;
            }
        }
        self.z_counter = self.windows.len() as u32;
    }
}
