//! Static catalog of the desktop's windows and their declared capabilities.

use desktop_contract::{WindowId, WindowPosition, WindowSize};
use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Declared capabilities and default geometry of one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub title: String,
    /// Whether the window accepts a runtime payload.
    pub data_bearing: bool,
    pub default_position: WindowPosition,
    pub default_size: WindowSize,
    /// Offset added to the window's painted z-index.
    pub z_bias: u32,
}

impl WindowDescriptor {
    pub fn new(id: WindowId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            data_bearing: false,
            default_position: WindowPosition::new(48, 48),
            default_size: WindowSize::default(),
            z_bias: 0,
        }
    }

    pub fn with_data_bearing(mut self, data_bearing: bool) -> Self {
        self.data_bearing = data_bearing;
        self
    }

    pub fn with_position(mut self, position: WindowPosition) -> Self {
        self.default_position = position;
        self
    }
}

/// Lookup table built once at startup; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRegistry {
    descriptors: Vec<WindowDescriptor>,
}

impl WindowRegistry {
    /// Builds a registry, keeping declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::DuplicateWindow`] when two descriptors share an id.
    pub fn new(descriptors: Vec<WindowDescriptor>) -> Result<Self, DesktopError> {
        for (idx, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..idx].iter().any(|d| d.id == descriptor.id) {
                return Err(DesktopError::DuplicateWindow(descriptor.id.to_string()));
            }
        }
        Ok(Self { descriptors })
    }

    pub fn is_known(&self, id: WindowId) -> bool {
        self.descriptors.iter().any(|d| d.id == id)
    }

    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] when `id` was not registered.
    pub fn descriptor_of(&self, id: WindowId) -> Result<&WindowDescriptor, DesktopError> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DesktopError::UnknownWindow(id.to_string()))
    }

    /// Resolves a string window key (as composed by launch sources) to a registered id.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownWindow`] for keys outside the fixed id set or not registered.
    pub fn resolve(&self, key: &str) -> Result<WindowId, DesktopError> {
        WindowId::parse(key)
            .filter(|id| self.is_known(*id))
            .ok_or_else(|| DesktopError::UnknownWindow(key.to_string()))
    }

    pub fn descriptors(&self) -> &[WindowDescriptor] {
        &self.descriptors
    }

    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.descriptors.iter().map(|d| d.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(vec![
            WindowDescriptor::new(WindowId::Finder, "Portfolio").with_data_bearing(true),
            WindowDescriptor::new(WindowId::Terminal, "Skills"),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = WindowRegistry::new(vec![
            WindowDescriptor::new(WindowId::Finder, "a"),
            WindowDescriptor::new(WindowId::Finder, "b"),
        ])
        .unwrap_err();
        assert_eq!(err, DesktopError::DuplicateWindow("finder".to_string()));
    }

    #[test]
    fn descriptor_lookup_reports_unknown_windows() {
        let registry = registry();
        assert!(registry.descriptor_of(WindowId::Finder).unwrap().data_bearing);
        assert_eq!(
            registry.descriptor_of(WindowId::Safari),
            Err(DesktopError::UnknownWindow("safari".to_string()))
        );
    }

    #[test]
    fn resolve_requires_a_registered_key() {
        let registry = registry();
        assert_eq!(registry.resolve("terminal"), Ok(WindowId::Terminal));
        assert_eq!(
            registry.resolve("contact"),
            Err(DesktopError::UnknownWindow("contact".to_string()))
        );
        assert_eq!(
            registry.resolve("docfile"),
            Err(DesktopError::UnknownWindow("docfile".to_string()))
        );
    }

    #[test]
    fn ids_keep_declaration_order() {
        let ids: Vec<_> = registry().ids().collect();
        assert_eq!(ids, vec![WindowId::Finder, WindowId::Terminal]);
    }
}
