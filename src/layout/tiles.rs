use crate::catalog::Catalog;
use crate::config::SkillsLayoutConfig;
use crate::ir::{Category, CategoryList};

use super::grid::cell_for;
use super::types::{IconPlacement, LabelPlacement, TileLayout};

/// Document-wide tile id: the per-section index shifted left by the decimal width of
/// the section's type tag, with the tag in the low digits.
pub fn tile_id(index: usize, type_tag: u32) -> u64 {
    let shift = 10u64.pow(decimal_digits(type_tag));
    index as u64 * shift + u64::from(type_tag)
}

fn decimal_digits(value: u32) -> u32 {
    value.checked_ilog10().unwrap_or(0) + 1
}

/// Positions every item of one section relative to the section's grid origin.
pub fn place_tiles(
    list: &CategoryList,
    category: Category,
    catalog: &Catalog,
    include_names: bool,
    config: &SkillsLayoutConfig,
) -> Vec<TileLayout> {
    let type_tag = category.type_tag();
    list.items()
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let metadata = catalog.resolve(key);
            let cell = cell_for(index, config.columns);
            let row = cell.row as f32;
            let x = config.column_pitch * cell.column as f32;
            let label_shift = if include_names && cell.row > 0 {
                config.label_row_height * row
            } else {
                0.0
            };
            let y = config.row_pitch * row + label_shift;

            let icon = metadata.icon.as_ref().map(|markup| IconPlacement {
                x: x + (config.tile_size - metadata.width) / 2.0,
                y: y + (config.tile_size - metadata.height) / 2.0,
                markup: markup.clone(),
            });

            let label = include_names.then(|| {
                let approx_width = metadata.name.chars().count() as f32 * config.label_char_width;
                LabelPlacement {
                    x: x + (config.tile_size - approx_width) / config.label_center_divisor
                        + metadata.x_offset,
                    y: config.label_base_y + config.label_row_pitch * row,
                    text: metadata.name.clone(),
                }
            });

            TileLayout {
                key: key.clone(),
                id: tile_id(index, type_tag),
                cell,
                x,
                y,
                metadata,
                icon,
                label,
            }
        })
        .collect()
}
