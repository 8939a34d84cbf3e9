// Response shapes for the endpoints the CLI consumes. Only the fields the
// client reads are modelled; anything else the server sends is ignored.

use serde::{Deserialize, Serialize};

/// A server-defined filter template from `/search/aql/presets`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Preset {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub values: Vec<PresetValue>,
}

/// One selectable value of a preset, e.g. a category or a repository.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PresetValue {
    #[serde(rename = "aqlKey")]
    pub aql_key: String,
    pub name: Option<String>,
}

/// One hit from `/search/aql`. Every field may be missing; only the chosen
/// item needs an id and category.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchResultItem {
    pub id: Option<String>,
    pub category: Option<u32>,
    pub name: String,
    pub group: Option<String>,
}

impl SearchResultItem {
    /// `(id, category)` used to address the item's entries, if both are known.
    pub fn locator(&self) -> Option<(&str, u32)> {
        Some((self.id.as_deref()?, self.category?))
    }

    /// `name (group)`, or just the name when no group is known.
    pub fn label(&self) -> String {
        match &self.group {
            Some(group) => format!("{} ({})", self.name, group),
            None => self.name.clone(),
        }
    }
}

/// Body of `/search/entries/{id}/{category}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContentEntries {
    #[serde(rename = "contentEntry", default)]
    pub content_entry: Vec<ContentItem>,
}

/// A downloadable file belonging to a search result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub path: String,
}
