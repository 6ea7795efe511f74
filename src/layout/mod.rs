pub mod canvas;
pub mod grid;
pub mod stack;
pub mod tiles;
pub(crate) mod types;
pub use types::*;

use crate::catalog::Catalog;
use crate::config::{LayoutConfig, SkillsLayoutConfig};
use crate::ir::{CategoryList, SkillSet};

impl SectionMetrics {
    pub fn measure(list: &CategoryList, config: &SkillsLayoutConfig) -> Self {
        Self {
            visible: list.is_visible(),
            rows: grid::row_count(list.len(), config.columns),
            len: list.len(),
        }
    }
}

/// Lays out the whole skills card.
///
/// The stacking pass runs once; its offsets place the section groups and the same
/// section metrics size the canvas, so the two can never disagree.
pub fn compute_skills_layout(
    skills: &SkillSet,
    catalog: &Catalog,
    config: &LayoutConfig,
    include_names: bool,
) -> SkillsLayout {
    let cfg = &config.skills;
    let metrics: Vec<SectionMetrics> = skills
        .iter()
        .map(|(_, list)| SectionMetrics::measure(list, cfg))
        .collect();
    let offsets = stack::accumulate(&metrics, include_names, cfg);
    let canvas = canvas::canvas_size(&metrics, include_names, cfg);

    let sections: Vec<SectionLayout> = skills
        .iter()
        .zip(metrics.iter().zip(offsets.iter()))
        .map(|((category, list), (section, offset))| SectionLayout {
            category,
            type_tag: category.type_tag(),
            visible: section.visible,
            rows: section.rows,
            title_offset: offset.title,
            grid_origin: offset.grid,
            tiles: tiles::place_tiles(list, category, catalog, include_names, cfg),
        })
        .collect();

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        visible = sections.iter().filter(|section| section.visible).count(),
        tiles = sections.iter().map(|section| section.tiles.len()).sum::<usize>(),
        "computed skills layout"
    );

    SkillsLayout {
        width: canvas.width,
        height: canvas.height,
        include_names,
        label_adjustment: canvas.label_adjustment,
        sections,
    }
}
