//! Launch sources outside the dock: menu-bar links and Finder item clicks.

use desktop_contract::{FileType, FinderData, FinderItem, ItemKind, WindowData, WindowId};

use crate::{
    catalog::NavLink, error::DesktopError, reducer::DesktopAction, registry::WindowRegistry,
};

/// Action for a menu-bar link; `None` for links not bound to a window.
pub fn nav_link_action(link: &NavLink) -> Option<DesktopAction> {
    link.window.map(|window_id| DesktopAction::OpenWindow {
        window_id,
        data: None,
    })
}

/// Resolves a Finder click into the action that handles it.
///
/// Folders navigate the Finder in place, the resume document opens the resume window, linked
/// design files and URLs leave the desktop, and every other file opens the window keyed
/// `"{file_type}{kind}"` with a payload built from the item.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownWindow`] when the composed window key is not registered.
pub fn finder_item_action(
    registry: &WindowRegistry,
    item: &FinderItem,
) -> Result<DesktopAction, DesktopError> {
    if item.kind == ItemKind::Folder {
        return Ok(DesktopAction::BindWindowData {
            window_id: WindowId::Finder,
            data: WindowData::Finder(FinderData {
                active_location: item.id.clone(),
            }),
        });
    }

    match (item.file_type, item.href.as_deref()) {
        (Some(FileType::Pdf), _) => {
            return Ok(DesktopAction::OpenWindow {
                window_id: WindowId::Resume,
                data: None,
            });
        }
        (Some(file_type), Some(href)) if file_type.is_external() => {
            return Ok(DesktopAction::OpenExternalUrl {
                url: href.to_string(),
            });
        }
        _ => {}
    }

    let key = item
        .window_key()
        .ok_or_else(|| DesktopError::UnknownWindow(item.id.clone()))?;
    let window_id = registry.resolve(&key)?;
    Ok(DesktopAction::OpenWindow {
        window_id,
        data: item.payload_for(window_id),
    })
}
