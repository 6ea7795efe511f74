use crate::layout::SkillsLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub include_names: bool,
    pub label_adjustment: f32,
    pub sections: Vec<SectionDump>,
}

#[derive(Debug, Serialize)]
pub struct SectionDump {
    pub category: String,
    pub type_tag: u32,
    pub visible: bool,
    pub rows: usize,
    pub title_offset: f32,
    pub grid_origin: f32,
    pub tiles: Vec<TileDump>,
}

#[derive(Debug, Serialize)]
pub struct TileDump {
    pub key: String,
    pub id: u64,
    pub row: usize,
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub name: String,
    pub has_icon: bool,
    pub label: Option<[f32; 2]>,
}

impl LayoutDump {
    pub fn from_layout(layout: &SkillsLayout) -> Self {
        let sections = layout
            .sections
            .iter()
            .map(|section| SectionDump {
                category: section.category.title().to_string(),
                type_tag: section.type_tag,
                visible: section.visible,
                rows: section.rows,
                title_offset: section.title_offset,
                grid_origin: section.grid_origin,
                tiles: section
                    .tiles
                    .iter()
                    .map(|tile| TileDump {
                        key: tile.key.clone(),
                        id: tile.id,
                        row: tile.cell.row,
                        column: tile.cell.column,
                        x: tile.x,
                        y: tile.y,
                        name: tile.metadata.name.clone(),
                        has_icon: tile.icon.is_some(),
                        label: tile.label.as_ref().map(|label| [label.x, label.y]),
                    })
                    .collect(),
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            include_names: layout.include_names,
            label_adjustment: layout.label_adjustment,
            sections,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &SkillsLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::LayoutConfig;
    use crate::ir::SkillSet;
    use crate::layout::compute_skills_layout;

    #[test]
    fn dump_round_trips_through_json() {
        let skills = SkillSet::from_inputs(Some("rust"), None, None, None, Some("vim"));
        let layout =
            compute_skills_layout(&skills, Catalog::builtin(), &LayoutConfig::default(), false);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        write_layout_dump(&path, &layout).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["width"], 812.0);
        assert_eq!(value["sections"][4]["category"], "Software");
        assert_eq!(value["sections"][4]["tiles"][0]["id"], 5);
        assert_eq!(value["sections"][0]["tiles"][0]["has_icon"], true);
    }
}
