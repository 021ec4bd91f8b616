//! Window frame adapter: the binding each concrete window uses to read its own state and to
//! request close, minimize, focus, and drag-end moves.
//!
//! Frames never mutate state; they derive a [`FrameView`] from the [`WindowManager`] and hand back
//! [`DesktopAction`] values for the runtime to dispatch.

use desktop_contract::{
    FinderData, ImageFileData, TextFileData, WindowData, WindowId, WindowPosition, WindowSize,
};

use crate::{
    model::WindowStatus, reducer::DesktopAction, registry::WindowDescriptor,
    window_manager::WindowManager,
};

/// Content a window body should render, narrowed from its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameContent {
    /// Window without a payload; body is fixed markup.
    Static(WindowId),
    /// Data-bearing window with no usable payload; renders nothing.
    Empty,
    Text(TextFileData),
    Image(ImageFileData),
    Finder(FinderData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub window_id: WindowId,
    pub title: String,
    pub status: WindowStatus,
    pub is_focused: bool,
    pub is_minimized: bool,
    /// Painted stacking value: descriptor bias plus live z-index.
    pub z_index: u32,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub content: FrameContent,
}

/// Narrows a stored payload to the shape the window renders.
///
/// A payload shaped for another window narrows to [`FrameContent::Empty`].
pub fn narrow_content(descriptor: &WindowDescriptor, data: Option<&WindowData>) -> FrameContent {
    if !descriptor.data_bearing {
        return FrameContent::Static(descriptor.id);
    }
    match (descriptor.id, data) {
        (WindowId::TxtFile, Some(WindowData::TextFile(text))) => FrameContent::Text(text.clone()),
        (WindowId::ImgFile, Some(WindowData::ImageFile(image))) => {
            FrameContent::Image(image.clone())
        }
        (WindowId::Finder, Some(WindowData::Finder(finder))) => {
            FrameContent::Finder(finder.clone())
        }
        _ => FrameContent::Empty,
    }
}

/// DOM id of the window's root element.
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{window_id}")
}

/// Pointer coordinates in client space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// In-flight title-bar drag. Lives in the frame, not the core; only the end position is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub pointer_start: PointerPosition,
    pub origin: WindowPosition,
}

impl DragGesture {
    pub fn begin(origin: WindowPosition, pointer: PointerPosition) -> Self {
        Self {
            pointer_start: pointer,
            origin,
        }
    }

    /// Window position with the pointer at `pointer`.
    pub fn position_at(&self, pointer: PointerPosition) -> WindowPosition {
        self.origin.offset(
            pointer.x.saturating_sub(self.pointer_start.x),
            pointer.y.saturating_sub(self.pointer_start.y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    window_id: WindowId,
}

impl WindowFrame {
    pub fn new(window_id: WindowId) -> Self {
        Self { window_id }
    }

    /// Render state of the window, or `None` when it is closed (or unregistered).
    pub fn view(&self, manager: &WindowManager) -> Option<FrameView> {
        let state = manager.state_of(self.window_id)?;
        if !state.is_open {
            return None;
        }
        let descriptor = manager.registry().descriptor_of(self.window_id).ok()?;
        let content = narrow_content(descriptor, state.data.as_ref());
        // File viewers are titled by the file they show.
        let title = match &content {
            FrameContent::Text(text) => text.name.clone(),
            FrameContent::Image(image) => image.name.clone(),
            _ => descriptor.title.clone(),
        };
        Some(FrameView {
            window_id: self.window_id,
            title,
            status: manager.status_of(self.window_id),
            is_focused: manager.is_focused(self.window_id),
            is_minimized: state.is_minimized,
            z_index: descriptor.z_bias.saturating_add(state.z_index),
            position: state.position,
            size: descriptor.default_size,
            content,
        })
    }

    pub fn close_action(&self) -> DesktopAction {
        DesktopAction::CloseWindow {
            window_id: self.window_id,
        }
    }

    pub fn minimize_action(&self) -> DesktopAction {
        DesktopAction::MinimizeWindow {
            window_id: self.window_id,
        }
    }

    /// Click-to-front; `None` when the window is already in front or cannot take focus.
    pub fn focus_action(&self, manager: &WindowManager) -> Option<DesktopAction> {
        let should_focus =
            manager.is_visible(self.window_id) && !manager.is_focused(self.window_id);
        should_focus.then_some(DesktopAction::FocusWindow {
            window_id: self.window_id,
        })
    }

    pub fn drag_end_action(&self, position: WindowPosition) -> DesktopAction {
        DesktopAction::MoveWindow {
            window_id: self.window_id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog::DesktopCatalog, reducer::reduce_desktop};

    fn manager() -> WindowManager {
        WindowManager::new(DesktopCatalog::builtin().expect("catalog").registry)
    }

    fn notes() -> WindowData {
        WindowData::TextFile(TextFileData {
            name: "Notes".to_string(),
            subtitle: Some("Intro".to_string()),
            image: None,
            description: vec!["a".to_string(), "b".to_string()],
        })
    }

    #[test]
    fn closed_window_renders_nothing() {
        let wm = manager();
        assert_eq!(WindowFrame::new(WindowId::Contact).view(&wm), None);
    }

    #[test]
    fn open_text_window_narrows_to_its_payload() {
        let mut wm = manager();
        wm.open(WindowId::TxtFile, Some(notes())).unwrap();

        let view = WindowFrame::new(WindowId::TxtFile).view(&wm).unwrap();
        assert_eq!(view.status, WindowStatus::OpenFocused);
        assert!(view.is_focused);
        assert_eq!(view.title, "Notes");
        let FrameContent::Text(text) = view.content else {
            panic!("expected text content");
        };
        assert_eq!(text.description, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn data_bearing_window_without_payload_is_empty() {
        let mut wm = manager();
        wm.open(WindowId::ImgFile, None).unwrap();
        let view = WindowFrame::new(WindowId::ImgFile).view(&wm).unwrap();
        assert_eq!(view.content, FrameContent::Empty);
        assert_eq!(view.title, "Preview");
    }

    #[test]
    fn payload_of_the_wrong_shape_is_empty() {
        let mut wm = manager();
        wm.open(WindowId::ImgFile, Some(notes())).unwrap();
        let view = WindowFrame::new(WindowId::ImgFile).view(&wm).unwrap();
        assert_eq!(view.content, FrameContent::Empty);
    }

    #[test]
    fn static_windows_ignore_payloads() {
        let mut wm = manager();
        wm.open(WindowId::Resume, None).unwrap();
        let view = WindowFrame::new(WindowId::Resume).view(&wm).unwrap();
        assert_eq!(view.content, FrameContent::Static(WindowId::Resume));
        assert_eq!(view.title, "Resume");
    }

    #[test]
    fn painted_z_index_keeps_stack_order() {
        let mut wm = manager();
        wm.open(WindowId::Finder, None).unwrap();
        wm.open(WindowId::Safari, None).unwrap();
        let finder = WindowFrame::new(WindowId::Finder).view(&wm).unwrap();
        let safari = WindowFrame::new(WindowId::Safari).view(&wm).unwrap();
        assert!(safari.z_index > finder.z_index);
    }

    #[test]
    fn focus_action_only_when_behind() {
        let mut wm = manager();
        let finder = WindowFrame::new(WindowId::Finder);
        assert_eq!(finder.focus_action(&wm), None);

        wm.open(WindowId::Finder, None).unwrap();
        assert_eq!(finder.focus_action(&wm), None);

        wm.open(WindowId::Terminal, None).unwrap();
        let action = finder.focus_action(&wm).unwrap();
        reduce_desktop(&mut wm, action).unwrap();
        assert!(wm.is_focused(WindowId::Finder));
    }

    #[test]
    fn controls_map_to_core_commands() {
        let mut wm = manager();
        let frame = WindowFrame::new(WindowId::Terminal);
        wm.open(WindowId::Terminal, None).unwrap();

        reduce_desktop(&mut wm, frame.drag_end_action(WindowPosition::new(12, 34))).unwrap();
        assert_eq!(
            frame.view(&wm).unwrap().position,
            WindowPosition::new(12, 34)
        );

        reduce_desktop(&mut wm, frame.minimize_action()).unwrap();
        assert_eq!(
            frame.view(&wm).unwrap().status,
            WindowStatus::OpenMinimized
        );

        reduce_desktop(&mut wm, frame.close_action()).unwrap();
        assert_eq!(frame.view(&wm), None);
    }

    #[test]
    fn drag_gesture_tracks_pointer_delta() {
        let gesture =
            DragGesture::begin(WindowPosition::new(100, 80), PointerPosition { x: 110, y: 90 });
        assert_eq!(
            gesture.position_at(PointerPosition { x: 150, y: 60 }),
            WindowPosition::new(140, 50)
        );
        assert_eq!(
            gesture.position_at(PointerPosition { x: 110, y: 90 }),
            WindowPosition::new(100, 80)
        );
    }

    #[test]
    fn dom_ids_use_the_stable_key() {
        assert_eq!(window_dom_id(WindowId::ImgFile), "desktop-window-imgfile");
    }
}
