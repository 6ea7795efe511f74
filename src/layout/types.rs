use serde::Serialize;

use crate::catalog::ItemMetadata;
use crate::ir::Category;

use super::grid::GridCell;

/// Per-category inputs of the vertical stacking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionMetrics {
    pub visible: bool,
    /// Wrapped row count. At least one, even for the sentinel list.
    pub rows: usize,
    /// List length, the sentinel counting as one item.
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionOffsets {
    /// Baseline of the section header, relative to the title block.
    pub title: f32,
    /// Top of the section's tile grid, relative to the canvas.
    pub grid: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
    /// The global label-row term folded into `height`.
    pub label_adjustment: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPlacement {
    pub x: f32,
    pub y: f32,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayout {
    pub key: String,
    pub id: u64,
    pub cell: GridCell,
    pub x: f32,
    pub y: f32,
    pub metadata: ItemMetadata,
    pub icon: Option<IconPlacement>,
    pub label: Option<LabelPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionLayout {
    pub category: Category,
    pub type_tag: u32,
    pub visible: bool,
    pub rows: usize,
    pub title_offset: f32,
    pub grid_origin: f32,
    pub tiles: Vec<TileLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsLayout {
    pub width: f32,
    pub height: f32,
    pub include_names: bool,
    pub label_adjustment: f32,
    pub sections: Vec<SectionLayout>,
}

impl SkillsLayout {
    pub fn section(&self, category: Category) -> Option<&SectionLayout> {
        self.sections.iter().find(|section| section.category == category)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &TileLayout> {
        self.sections.iter().flat_map(|section| section.tiles.iter())
    }
}
