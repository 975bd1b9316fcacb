//! Inventory data returned by the backend.
//!
//! Field names follow the backend JSON exactly (`box_id`, `photo_path`, ...).

use serde::{Deserialize, Serialize};

/// A single catalogued item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub box_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub category: Option<String>,
    /// App-relative photo URL (e.g. `/api/photos/abc.jpg`).
    #[serde(default)]
    pub photo_path: Option<String>,
    /// Owning box; only present on search results.
    #[serde(default, rename = "box")]
    pub storage_box: Option<BoxRef>,
}

fn default_quantity() -> i64 {
    1
}

impl Item {
    /// Name of the owning box, if the backend embedded it.
    pub fn box_name(&self) -> Option<&str> {
        self.storage_box.as_ref().map(|b| b.name.as_str())
    }
}

/// Box summary without its items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxRef {
    pub id: u64,
    pub unit_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A storage box with its items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageBox {
    pub id: u64,
    pub unit_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl StorageBox {
    /// This box without its items.
    pub fn summary(&self) -> BoxRef {
        BoxRef {
            id: self.id,
            unit_id: self.unit_id,
            name: self.name.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
        }
    }

    /// Items with their owning box filled in.
    ///
    /// The box endpoint returns items without the embedded `box`, which the
    /// detail dialog needs for its location line.
    pub fn located_items(&self) -> Vec<Item> {
        let summary = self.summary();
        self.items
            .iter()
            .cloned()
            .map(|mut item| {
                item.storage_box.get_or_insert_with(|| summary.clone());
                item
            })
            .collect()
    }
}

/// A storage unit (shelf, cabinet, room) holding boxes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub boxes: Vec<StorageBox>,
}

/// Response of `GET /api/search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub boxes: Vec<StorageBox>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty() && self.items.is_empty()
    }
}
