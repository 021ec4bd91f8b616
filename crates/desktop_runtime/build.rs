use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MANIFEST_FILE: &str = "desktop.manifest.toml";
const KNOWN_WINDOW_IDS: [&str; 7] = [
    "finder", "terminal", "safari", "resume", "contact", "txtfile", "imgfile",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Size {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    data_bearing: bool,
    z_bias: u32,
    position: Point,
    size: Size,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinkManifest {
    id: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    title: String,
    windows: Vec<WindowManifest>,
    #[serde(default)]
    dock: Vec<LinkManifest>,
    #[serde(default)]
    navbar: Vec<LinkManifest>,
    #[serde(default)]
    finder: Vec<serde_json::Value>,
}

fn check_links(section: &str, links: &[LinkManifest], windows: &HashSet<&str>) {
    let mut seen = HashSet::new();
    for link in links {
        if !seen.insert(link.id.as_str()) {
            panic!("{section} item `{}` is declared more than once", link.id);
        }
        if let Some(window) = link.window.as_deref() {
            if !windows.contains(window) {
                panic!(
                    "{section} item `{}` references undeclared window `{window}`",
                    link.id
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(MANIFEST_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut windows = HashSet::new();
    for window in &manifest.windows {
        if !KNOWN_WINDOW_IDS.contains(&window.id.as_str()) {
            panic!("window `{}` is not a known window id", window.id);
        }
        if !windows.insert(window.id.as_str()) {
            panic!("window `{}` is declared more than once", window.id);
        }
        if window.size.width <= 0 || window.size.height <= 0 {
            panic!("window `{}` must have a positive size", window.id);
        }
    }
    check_links("dock", &manifest.dock, &windows);
    check_links("navbar", &manifest.navbar, &windows);

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
