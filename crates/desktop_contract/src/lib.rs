//! Shared contract types between the desktop window manager runtime, its launch sources, and
//! the window content views.
//!
//! Everything here is plain data: stable window identifiers, geometry, the per-window payload
//! variant, and the Finder item model that file clicks are resolved from.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Stable identifier for one of the desktop's fixed windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    /// File browser over the portfolio locations.
    Finder,
    /// Terminal-styled skills window.
    Terminal,
    /// Browser-styled articles window.
    Safari,
    /// Resume document viewer.
    Resume,
    /// Contact card.
    Contact,
    /// Text document viewer.
    TxtFile,
    /// Image viewer.
    ImgFile,
}

impl WindowId {
    /// Every window identifier, in declaration order.
    pub const ALL: [WindowId; 7] = [
        Self::Finder,
        Self::Terminal,
        Self::Safari,
        Self::Resume,
        Self::Contact,
        Self::TxtFile,
        Self::ImgFile,
    ];

    /// Returns the stable string key of the window.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Terminal => "terminal",
            Self::Safari => "safari",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::TxtFile => "txtfile",
            Self::ImgFile => "imgfile",
        }
    }

    /// Parses a stable string key. Returns `None` for keys outside the fixed set.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw)
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-left screen coordinates of a window, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    /// Horizontal offset from the desktop origin.
    pub x: i32,
    /// Vertical offset from the desktop origin.
    pub y: i32,
}

impl WindowPosition {
    /// Creates a position from coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position translated by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Fixed window dimensions, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width.
    pub width: i32,
    /// Window height.
    pub height: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 420,
        }
    }
}

/// Payload shown by the text viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFileData {
    /// Document title.
    pub name: String,
    /// Optional heading rendered above the paragraphs.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Optional illustration URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Body paragraphs, in display order.
    #[serde(default)]
    pub description: Vec<String>,
}

/// Payload shown by the image viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFileData {
    /// Image title.
    pub name: String,
    /// Image source URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload describing what the Finder is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderData {
    /// Id of the folder whose children are listed.
    pub active_location: String,
}

/// Runtime payload bound to a data-bearing window.
///
/// The window manager stores and returns it verbatim; each window view narrows it to its own
/// variant and treats anything else as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowData {
    /// Text document payload.
    TextFile(TextFileData),
    /// Image payload.
    ImageFile(ImageFileData),
    /// Finder location payload.
    Finder(FinderData),
}

impl WindowData {
    /// Returns the text payload, if this is one.
    pub fn as_text_file(&self) -> Option<&TextFileData> {
        match self {
            Self::TextFile(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the image payload, if this is one.
    pub fn as_image_file(&self) -> Option<&ImageFileData> {
        match self {
            Self::ImageFile(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the Finder payload, if this is one.
    pub fn as_finder(&self) -> Option<&FinderData> {
        match self {
            Self::Finder(data) => Some(data),
            _ => None,
        }
    }
}

/// Whether a Finder entry is a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Navigable container.
    Folder,
    /// Openable leaf.
    File,
}

impl ItemKind {
    /// Returns the stable string form used when composing window keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

/// File type of a Finder file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Plain text document.
    Txt,
    /// Image.
    Img,
    /// The resume document.
    Pdf,
    /// Design file hosted externally.
    Fig,
    /// External link.
    Url,
}

impl FileType {
    /// Returns the stable string form used when composing window keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Img => "img",
            Self::Pdf => "pdf",
            Self::Fig => "fig",
            Self::Url => "url",
        }
    }

    /// Whether items of this type open outside the desktop.
    pub const fn is_external(self) -> bool {
        matches!(self, Self::Fig | Self::Url)
    }
}

/// One entry of the Finder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderItem {
    /// Stable item id, unique within the tree.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon URL.
    #[serde(default)]
    pub icon: Option<String>,
    /// Folder or file.
    pub kind: ItemKind,
    /// File type; absent for folders.
    #[serde(default)]
    pub file_type: Option<FileType>,
    /// External target for `fig`/`url` files.
    #[serde(default)]
    pub href: Option<String>,
    /// Image source for `img` files.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Illustration for `txt` files.
    #[serde(default)]
    pub image: Option<String>,
    /// Heading for `txt` files.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Paragraphs for `txt` files.
    #[serde(default)]
    pub description: Vec<String>,
    /// Children of a folder.
    #[serde(default)]
    pub children: Vec<FinderItem>,
}

impl FinderItem {
    /// Creates a folder entry with the given children.
    pub fn folder(id: impl Into<String>, name: impl Into<String>, children: Vec<FinderItem>) -> Self {
        Self {
            children,
            ..Self::leaf(id, name, ItemKind::Folder, None)
        }
    }

    /// Creates a file entry of `file_type`.
    pub fn file(id: impl Into<String>, name: impl Into<String>, file_type: FileType) -> Self {
        Self::leaf(id, name, ItemKind::File, Some(file_type))
    }

    fn leaf(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ItemKind,
        file_type: Option<FileType>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            kind,
            file_type,
            href: None,
            image_url: None,
            image: None,
            subtitle: None,
            description: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Key of the window that displays this file, e.g. `txtfile` or `imgfile`.
    ///
    /// Returns `None` for folders and for files without a type.
    pub fn window_key(&self) -> Option<String> {
        match (self.kind, self.file_type) {
            (ItemKind::File, Some(file_type)) => {
                Some(format!("{}{}", file_type.as_str(), self.kind.as_str()))
            }
            _ => None,
        }
    }

    /// Builds the payload the target window expects for this file.
    pub fn payload_for(&self, window_id: WindowId) -> Option<WindowData> {
        match window_id {
            WindowId::TxtFile => Some(WindowData::TextFile(TextFileData {
                name: self.name.clone(),
                subtitle: self.subtitle.clone(),
                image: self.image.clone(),
                description: self.description.clone(),
            })),
            WindowId::ImgFile => Some(WindowData::ImageFile(ImageFileData {
                name: self.name.clone(),
                image_url: self.image_url.clone(),
            })),
            _ => None,
        }
    }

    /// Finds an item by id in this subtree, including `self`.
    pub fn find(&self, id: &str) -> Option<&FinderItem> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
