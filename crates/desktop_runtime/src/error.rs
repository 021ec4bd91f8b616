//! Error taxonomy shared by the registry, the window manager, and the launch sources.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by desktop runtime operations.
///
/// Invalid state transitions (focusing a closed window, moving a window after it closed) are
/// not errors; they resolve to no-ops so late user events degrade quietly.
pub enum DesktopError {
    /// The window key is not part of the registry.
    #[error("unknown window `{0}`")]
    UnknownWindow(String),
    /// The same window key was declared twice while building the registry.
    #[error("window `{0}` is declared more than once")]
    DuplicateWindow(String),
    /// A dock item id is not part of the desktop catalog.
    #[error("unknown dock item `{0}`")]
    UnknownDockItem(String),
    /// The static desktop catalog could not be decoded.
    #[error("invalid desktop catalog: {0}")]
    InvalidCatalog(String),
}
