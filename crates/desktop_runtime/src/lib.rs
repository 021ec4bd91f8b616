//! Window manager runtime for the portfolio desktop: window lifecycle, focus and stacking, dock
//! and launch-source wiring, and the Leptos shell that renders it.

pub mod catalog;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod error;
pub mod frame;
pub mod launch;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;

pub use catalog::{DesktopCatalog, DockItem, NavLink};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use dock::{DockController, DockIndicator};
pub use error::DesktopError;
pub use frame::{FrameContent, FrameView, WindowFrame};
pub use launch::{finder_item_action, nav_link_action};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use registry::{WindowDescriptor, WindowRegistry};
pub use window_manager::WindowManager;
