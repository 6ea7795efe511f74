use crate::config::SkillsLayoutConfig;

use super::types::{SectionMetrics, SectionOffsets};

/// Walks the sections top to bottom and returns each header baseline and grid origin.
///
/// Every section is shifted by what the previous section occupies: its pad, its tile
/// rows and, with names enabled, one label row per row of the *current* section. All
/// three terms are dropped when the previous section is hidden, but the label term
/// still reads the current section's row count.
pub fn accumulate(
    metrics: &[SectionMetrics],
    include_names: bool,
    config: &SkillsLayoutConfig,
) -> Vec<SectionOffsets> {
    let mut offsets = Vec::with_capacity(metrics.len());
    let mut title = config.first_row;
    let mut previous: Option<&SectionMetrics> = None;

    for current in metrics {
        if let Some(prev) = previous.filter(|prev| prev.visible) {
            title += config.pad;
            title += prev.rows as f32 * config.row_pitch;
            if include_names {
                title += current.rows as f32 * config.label_row_height;
            }
        }
        offsets.push(SectionOffsets {
            title,
            grid: title + config.grid_offset,
        });
        previous = Some(current);
    }

    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(visible: bool, len: usize) -> SectionMetrics {
        SectionMetrics {
            visible,
            rows: len.div_ceil(7),
            len,
        }
    }

    #[test]
    fn all_hidden_sections_share_the_first_row() {
        let config = SkillsLayoutConfig::default();
        let metrics = vec![section(false, 1); 5];
        for offset in accumulate(&metrics, true, &config) {
            assert_eq!(offset.title, 90.0);
            assert_eq!(offset.grid, 190.0);
        }
    }

    #[test]
    fn three_languages_push_frameworks_one_row_down() {
        let config = SkillsLayoutConfig::default();
        let mut metrics = vec![section(false, 1); 5];
        metrics[0] = section(true, 3);
        let offsets = accumulate(&metrics, false, &config);
        assert_eq!(offsets[1].title, 90.0 + 60.0 + 114.0);
        assert_eq!(offsets[1].grid, offsets[0].title + 60.0 + 114.0 + 100.0);
        assert_eq!(offsets[4].title, offsets[1].title);
    }

    #[test]
    fn label_term_uses_current_rows_gated_by_previous_visibility() {
        let config = SkillsLayoutConfig::default();
        // languages: 1 row, frameworks: 3 rows, libraries hidden, tools: 2 rows
        let metrics = vec![
            section(true, 5),
            section(true, 15),
            section(false, 1),
            section(true, 8),
            section(false, 1),
        ];
        let offsets = accumulate(&metrics, true, &config);
        let frameworks = 90.0 + 60.0 + 114.0 + 3.0 * 25.0;
        assert_eq!(offsets[1].title, frameworks);
        let libraries = frameworks + 60.0 + 3.0 * 114.0 + 25.0;
        assert_eq!(offsets[2].title, libraries);
        // hidden libraries contribute nothing, including the tools label rows
        assert_eq!(offsets[3].title, libraries);
        let software = libraries + 60.0 + 2.0 * 114.0 + 25.0;
        assert_eq!(offsets[4].title, software);
    }

    #[test]
    fn hidden_first_section_does_not_shift_the_second() {
        let config = SkillsLayoutConfig::default();
        let mut metrics = vec![section(false, 1); 5];
        metrics[1] = section(true, 20);
        let offsets = accumulate(&metrics, true, &config);
        assert_eq!(offsets[1].title, 90.0);
        assert_eq!(offsets[2].title, 90.0 + 60.0 + 3.0 * 114.0 + 25.0);
    }
}
