//! Tab bar manifest data model for the WeChat mini program.
//!
//! Mirrors the `tabBar` schema used by the app's custom tab bar component
//! (`color`, `selectedColor` and a `list` of page/icon entries), so the
//! generated icons can be wired into `app.json` without retyping paths.

use crate::{palette, pictogram::IconSpec};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of the generated `tabbar.json` file.
#[derive(Serialize, Debug, Clone)]
pub struct TabBarFile {
    /// Text color for unselected tabs.
    pub color: String,

    /// Text color for the selected tab.
    #[serde(rename = "selectedColor")]
    pub selected_color: String,

    /// Tab entries in display order.
    pub list: Vec<TabBarItem>,
}

/// One tab entry pointing at a page and its icon pair.
#[derive(Serialize, Debug, Clone)]
pub struct TabBarItem {
    /// Route of the page the tab opens.
    #[serde(rename = "pagePath")]
    pub page_path: String,

    /// Visible tab label.
    pub text: String,

    /// Icon shown when the tab is not selected.
    #[serde(rename = "iconPath")]
    pub icon_path: String,

    /// Icon shown when the tab is selected.
    #[serde(rename = "selectedIconPath")]
    pub selected_icon_path: String,
}

impl TabBarFile {
    /// Creates a manifest with the fixed tab bar palette and no entries.
    pub fn new() -> Self {
        Self {
            color: palette::NORMAL.to_string(),
            selected_color: palette::ACTIVE.to_string(),
            list: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: TabBarItem) {
        self.list.push(item);
    }
}

impl Default for TabBarFile {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBarItem {
    /// Builds the manifest entry for one logical icon, using the app's
    /// `/pages/<stem>/index` route and `/images/` icon path conventions.
    pub fn for_icon(spec: &IconSpec) -> Self {
        Self {
            page_path: format!("/pages/{}/index", spec.stem),
            text: spec.label.to_string(),
            icon_path: format!("/images/{}.png", spec.stem),
            selected_icon_path: format!("/images/{}-active.png", spec.stem),
        }
    }
}

/// Writes `tabbar.json` into the given directory.
pub fn write_tabbar_json(dir: &Path, items: Vec<TabBarItem>) -> Result<()> {
    let mut file = TabBarFile::new();
    for item in items {
        file.add_item(item);
    }

    let json = serde_json::to_string_pretty(&file).context("Failed to serialize tabbar.json")?;
    std::fs::write(dir.join("tabbar.json"), json).context("Failed to write tabbar.json")?;

    println!("  ✓ Generated tabbar.json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictogram::TABBAR_ICONS;

    #[test]
    fn manifest_uses_tab_bar_palette() {
        let file = TabBarFile::new();
        assert_eq!(file.color, "#999999");
        assert_eq!(file.selected_color, "#007AFF");
        assert!(file.list.is_empty());
    }

    #[test]
    fn item_paths_follow_app_conventions() {
        let item = TabBarItem::for_icon(&TABBAR_ICONS[0]);
        assert_eq!(item.page_path, "/pages/calc/index");
        assert_eq!(item.icon_path, "/images/calc.png");
        assert_eq!(item.selected_icon_path, "/images/calc-active.png");
    }

    #[test]
    fn serialization_uses_camel_case_keys() {
        let mut file = TabBarFile::new();
        file.add_item(TabBarItem::for_icon(&TABBAR_ICONS[1]));

        let json = serde_json::to_string_pretty(&file).unwrap();
        assert!(json.contains("\"selectedColor\": \"#007AFF\""));
        assert!(json.contains("\"pagePath\": \"/pages/savings/index\""));
        assert!(json.contains("\"iconPath\": \"/images/savings.png\""));
        assert!(json.contains("\"selectedIconPath\": \"/images/savings-active.png\""));
    }

    #[test]
    fn write_tabbar_json_creates_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let items = TABBAR_ICONS.iter().map(TabBarItem::for_icon).collect();
        write_tabbar_json(dir.path(), items).unwrap();

        let content = std::fs::read_to_string(dir.path().join("tabbar.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["list"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["list"][3]["iconPath"], "/images/history.png");
    }
}
