use crate::ir::{Category, SENTINEL};
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json5");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json5(BUILTIN_CATALOG).expect("built-in catalog must parse")
});

/// Visual metadata for one item key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMetadata {
    pub name: String,
    pub color_from: String,
    pub color_to: String,
    /// Inline SVG markup. `None` renders the tile without an icon.
    pub icon: Option<String>,
    pub width: f32,
    pub height: f32,
    pub x_offset: f32,
}

impl Default for ItemMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            color_from: "#FFFFFF".to_string(),
            color_to: "#808080".to_string(),
            icon: None,
            width: -1.0,
            height: -1.0,
            x_offset: 0.0,
        }
    }
}

pub type MetadataTable = BTreeMap<String, ItemMetadata>;

/// Five independent metadata tables, one per category.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: [MetadataTable; 5],
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog = Self::from_json5(&contents)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_json5(input: &str) -> anyhow::Result<Self> {
        let parsed: CatalogFile = json5::from_str(input)?;
        let mut catalog = Self::empty();
        for (category, table) in [
            (Category::Languages, parsed.languages),
            (Category::Frameworks, parsed.frameworks),
            (Category::Libraries, parsed.libraries),
            (Category::Tools, parsed.tools),
            (Category::Software, parsed.software),
        ] {
            for (key, entry) in table {
                catalog.insert(category, key, entry.into_metadata());
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, table: Category, key: impl Into<String>, metadata: ItemMetadata) {
        self.tables[table.index()].insert(key.into(), metadata);
    }

    /// Exact, case-sensitive lookup in a single table.
    pub fn lookup(&self, table: Category, key: &str) -> Option<&ItemMetadata> {
        self.tables[table.index()].get(key)
    }

    /// First hit across all tables in category order, or the default gray tile.
    pub fn resolve(&self, key: &str) -> ItemMetadata {
        Category::ALL
            .iter()
            .find_map(|table| self.lookup(*table, key))
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tables.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlays every entry of `other` on top of this catalog.
    pub fn merge(&mut self, other: Catalog) {
        for (idx, table) in other.tables.into_iter().enumerate() {
            self.tables[idx].extend(table);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CatalogFile {
    languages: BTreeMap<String, CatalogEntry>,
    frameworks: BTreeMap<String, CatalogEntry>,
    libraries: BTreeMap<String, CatalogEntry>,
    tools: BTreeMap<String, CatalogEntry>,
    #[serde(alias = "softwareIDEs")]
    software: BTreeMap<String, CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    #[serde(default)]
    name: Option<NameField>,
    color_from: Option<String>,
    color_to: Option<String>,
    icon: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    x_offset: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NameField {
    Single(String),
    Lines(Vec<String>),
}

impl NameField {
    fn first_line(self) -> String {
        match self {
            NameField::Single(value) => value,
            NameField::Lines(lines) => lines.into_iter().next().unwrap_or_default(),
        }
    }
}

impl CatalogEntry {
    fn into_metadata(self) -> ItemMetadata {
        let defaults = ItemMetadata::default();
        let icon = self
            .icon
            .filter(|icon| !icon.is_empty() && !icon.eq_ignore_ascii_case(SENTINEL));
        ItemMetadata {
            name: self.name.map(NameField::first_line).unwrap_or_default(),
            color_from: self.color_from.unwrap_or(defaults.color_from),
            color_to: self.color_to.unwrap_or(defaults.color_to),
            icon,
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            x_offset: self.x_offset.unwrap_or(defaults.x_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        languages: {
            swift: { name: ["Swift"], colorFrom: "#FFAC45", colorTo: "#FE2E2D", icon: "<path d='M0 0'/>", width: 40, height: 36 },
        },
        frameworks: {
            swift: { name: "SwiftUI", colorFrom: "#000000", colorTo: "#111111" },
            vue: { name: "Vue", colorFrom: "#41B883", colorTo: "#35495E", icon: "undefined", xOffset: 2 },
        },
    }"##;

    #[test]
    fn collision_resolves_to_languages() {
        let catalog = Catalog::from_json5(SAMPLE).unwrap();
        let meta = catalog.resolve("swift");
        assert_eq!(meta.name, "Swift");
        assert_eq!(meta.color_from, "#FFAC45");
        assert_eq!(catalog.lookup(Category::Frameworks, "swift").unwrap().name, "SwiftUI");
    }

    #[test]
    fn undefined_icon_marker_means_no_icon() {
        let catalog = Catalog::from_json5(SAMPLE).unwrap();
        let vue = catalog.resolve("vue");
        assert!(vue.icon.is_none());
        assert_eq!(vue.x_offset, 2.0);
    }

    #[test]
    fn unknown_key_resolves_to_default_tile() {
        let catalog = Catalog::from_json5(SAMPLE).unwrap();
        let meta = catalog.resolve("Swift");
        assert_eq!(meta, ItemMetadata::default());
        assert_eq!(meta.color_from, "#FFFFFF");
        assert_eq!(meta.color_to, "#808080");
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.lookup(Category::Languages, "rust").is_some());
    }

    #[test]
    fn merge_overrides_entries() {
        let mut catalog = Catalog::from_json5(SAMPLE).unwrap();
        let mut extra = Catalog::empty();
        extra.insert(
            Category::Languages,
            "swift",
            ItemMetadata {
                name: "Swift 6".to_string(),
                ..ItemMetadata::default()
            },
        );
        catalog.merge(extra);
        assert_eq!(catalog.resolve("swift").name, "Swift 6");
        assert_eq!(catalog.len(), 3);
    }
}
