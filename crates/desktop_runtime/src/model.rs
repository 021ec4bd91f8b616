use desktop_contract::{WindowData, WindowId, WindowPosition, WindowSize};
use serde::{Deserialize, Serialize};

pub const DESKTOP_SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Live state of one registered window, owned by [`crate::WindowManager`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u32,
    pub position: WindowPosition,
    pub data: Option<WindowData>,
}

impl WindowState {
    pub fn closed_at(position: WindowPosition) -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            z_index: 0,
            position,
            data: None,
        }
    }

    /// Open and not minimized: part of the stacking and focus order.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowStatus {
    Closed,
    OpenFocused,
    OpenBackground,
    OpenMinimized,
}

/// Read-only view of one window handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub title: String,
    pub status: WindowStatus,
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u32,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub data: Option<WindowData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSnapshot {
    pub schema_version: u32,
    pub focused: Option<WindowId>,
    pub windows: Vec<WindowSnapshot>,
}

impl DesktopSnapshot {
    pub fn window(&self, id: WindowId) -> Option<&WindowSnapshot> {
        self.windows.iter().find(|w| w.id == id)
    }
}
