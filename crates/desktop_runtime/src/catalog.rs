//! Static desktop configuration: window registry, dock items, menu-bar links, and Finder
//! locations.
//!
//! The catalog is authored in `desktop.manifest.toml`, validated by the build script, and embedded
//! as JSON so the browser build has no configuration I/O.

use std::rc::Rc;

use desktop_contract::{FinderItem, WindowId, WindowPosition, WindowSize};
use serde::Deserialize;

use crate::{
    error::DesktopError,
    registry::{WindowDescriptor, WindowRegistry},
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));
}

pub use generated::DESKTOP_CATALOG_JSON;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    /// Window toggled by the icon; decorative icons have none.
    pub window: Option<WindowId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub window: Option<WindowId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopCatalog {
    pub title: String,
    pub registry: Rc<WindowRegistry>,
    pub dock: Vec<DockItem>,
    pub navbar: Vec<NavLink>,
    pub finder_locations: Vec<FinderItem>,
}

#[derive(Debug, Deserialize)]
struct RawWindow {
    id: String,
    title: String,
    data_bearing: bool,
    z_bias: u32,
    position: WindowPosition,
    size: WindowSize,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    id: String,
    label: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    window: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    title: String,
    windows: Vec<RawWindow>,
    #[serde(default)]
    dock: Vec<RawLink>,
    #[serde(default)]
    navbar: Vec<RawLink>,
    #[serde(default)]
    finder: Vec<FinderItem>,
}

fn parse_window_key(raw: &str) -> Result<WindowId, DesktopError> {
    WindowId::parse(raw).ok_or_else(|| DesktopError::UnknownWindow(raw.to_string()))
}

fn bound_window(
    registry: &WindowRegistry,
    raw: Option<&str>,
) -> Result<Option<WindowId>, DesktopError> {
    raw.map(|key| registry.resolve(key)).transpose()
}

impl DesktopCatalog {
    /// Decodes the catalog embedded at build time.
    ///
    /// # Errors
    ///
    /// See [`DesktopCatalog::from_json`].
    pub fn builtin() -> Result<Self, DesktopError> {
        Self::from_json(DESKTOP_CATALOG_JSON)
    }

    /// Decodes a catalog from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::InvalidCatalog`] for malformed JSON, and
    /// [`DesktopError::UnknownWindow`] / [`DesktopError::DuplicateWindow`] when window references do
    /// not line up with the registry.
    pub fn from_json(raw: &str) -> Result<Self, DesktopError> {
        let raw: RawCatalog =
            serde_json::from_str(raw).map_err(|err| DesktopError::InvalidCatalog(err.to_string()))?;

        let descriptors = raw
            .windows
            .into_iter()
            .map(|window| -> Result<WindowDescriptor, DesktopError> {
                Ok(WindowDescriptor {
                    id: parse_window_key(&window.id)?,
                    title: window.title,
                    data_bearing: window.data_bearing,
                    default_position: window.position,
                    default_size: window.size,
                    z_bias: window.z_bias,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let registry = WindowRegistry::new(descriptors)?;

        let dock = raw
            .dock
            .into_iter()
            .map(|link| -> Result<DockItem, DesktopError> {
                Ok(DockItem {
                    window: bound_window(&registry, link.window.as_deref())?,
                    id: link.id,
                    label: link.label,
                    icon: link.icon,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let navbar = raw
            .navbar
            .into_iter()
            .map(|link| -> Result<NavLink, DesktopError> {
                Ok(NavLink {
                    window: bound_window(&registry, link.window.as_deref())?,
                    id: link.id,
                    label: link.label,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: raw.title,
            registry: Rc::new(registry),
            dock,
            navbar,
            finder_locations: raw.finder,
        })
    }

    /// Finds a Finder folder or file by id across all locations.
    pub fn finder_item(&self, id: &str) -> Option<&FinderItem> {
        self.finder_locations.iter().find_map(|root| root.find(id))
    }

    pub fn default_finder_location(&self) -> Option<&FinderItem> {
        self.finder_locations.first()
    }
}

#[cfg(test)]
mod tests {
    use desktop_contract::{FileType, ItemKind};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_registers_every_window() {
        let catalog = DesktopCatalog::builtin().expect("builtin catalog");
        for id in WindowId::ALL {
            assert!(catalog.registry.is_known(id), "{id} missing");
        }
        let data_bearing: Vec<_> = catalog
            .registry
            .descriptors()
            .iter()
            .filter(|d| d.data_bearing)
            .map(|d| d.id)
            .collect();
        assert_eq!(
            data_bearing,
            vec![WindowId::Finder, WindowId::TxtFile, WindowId::ImgFile]
        );
    }

    #[test]
    fn builtin_dock_keeps_decorative_items_unbound() {
        let catalog = DesktopCatalog::builtin().expect("builtin catalog");
        let trash = catalog.dock.iter().find(|item| item.id == "trash").unwrap();
        assert_eq!(trash.window, None);
        let finder = catalog.dock.iter().find(|item| item.id == "finder").unwrap();
        assert_eq!(finder.window, Some(WindowId::Finder));
    }

    #[test]
    fn builtin_finder_tree_resolves_nested_files() {
        let catalog = DesktopCatalog::builtin().expect("builtin catalog");
        assert_eq!(
            catalog.default_finder_location().map(|item| item.id.as_str()),
            Some("work")
        );
        let note = catalog.finder_item("work-portfolio-notes").unwrap();
        assert_eq!(note.kind, ItemKind::File);
        assert_eq!(note.file_type, Some(FileType::Txt));
        assert_eq!(note.description.len(), 2);
    }

    #[test]
    fn dock_reference_to_unregistered_window_is_rejected() {
        let raw = r#"{
            "title": "t",
            "windows": [{
                "id": "finder", "title": "Finder", "data_bearing": true, "z_bias": 0,
                "position": {"x": 0, "y": 0}, "size": {"width": 10, "height": 10}
            }],
            "dock": [{"id": "term", "label": "Terminal", "window": "terminal"}]
        }"#;
        assert_eq!(
            DesktopCatalog::from_json(raw),
            Err(DesktopError::UnknownWindow("terminal".to_string()))
        );
    }

    #[test]
    fn malformed_json_is_an_invalid_catalog() {
        let err = DesktopCatalog::from_json("{").unwrap_err();
        assert!(matches!(err, DesktopError::InvalidCatalog(_)));
    }
}
