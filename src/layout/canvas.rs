use crate::config::SkillsLayoutConfig;

use super::types::{CanvasSize, SectionMetrics};

pub fn canvas_size(
    metrics: &[SectionMetrics],
    include_names: bool,
    config: &SkillsLayoutConfig,
) -> CanvasSize {
    let visible_rows: usize = metrics
        .iter()
        .filter(|section| section.visible)
        .map(|section| section.rows)
        .sum();
    let visible_sections = metrics.iter().filter(|section| section.visible).count();

    let label_adjustment = if include_names {
        let total_len = metrics.iter().map(|section| section.len).sum();
        label_adjustment(total_len, config)
    } else {
        0.0
    };

    let height = config.base_height
        + config.row_pitch * visible_rows as f32
        + config.pad * (1 + visible_sections) as f32
        + label_adjustment;

    CanvasSize {
        width: config.base_width,
        height,
        label_adjustment,
    }
}

/// Label rows reserved for the whole card, estimated from the combined list length
/// rather than from the per-section row counts.
pub fn label_adjustment(total_len: usize, config: &SkillsLayoutConfig) -> f32 {
    let columns = config.columns.max(1) as f64;
    let rows = ((total_len as f64 - 0.1) / columns).round() + 1.0;
    rows as f32 * config.label_row_height
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
    fn empty_card_is_base_plus_one_pad() {
        let config = SkillsLayoutConfig::default();
        let size = canvas_size(&vec![section(false, 1); 5], false, &config);
        assert_eq!(size.width, 812.0);
        assert_eq!(size.height, 125.0 + 60.0);
        assert_eq!(size.label_adjustment, 0.0);
    }

    #[test]
    fn label_adjustment_rounds_combined_length() {
        let config = SkillsLayoutConfig::default();
        // five sentinel lists: round(4.9 / 7) + 1 = 2 rows
        assert_eq!(label_adjustment(5, &config), 50.0);
        // round(10.9 / 7) + 1 = 3 rows
        assert_eq!(label_adjustment(11, &config), 75.0);
        // round(6.9 / 7) + 1 = 2 rows
        assert_eq!(label_adjustment(7, &config), 50.0);
    }

    #[test]
    fn visible_sections_add_rows_and_pads() {
        let config = SkillsLayoutConfig::default();
        let metrics = vec![
            section(true, 9),
            section(false, 1),
            section(true, 1),
            section(false, 1),
            section(false, 1),
        ];
        let size = canvas_size(&metrics, false, &config);
        assert_eq!(size.height, 125.0 + 114.0 * 3.0 + 60.0 * 3.0);
        let named = canvas_size(&metrics, true, &config);
        // total length 13: round(12.9 / 7) + 1 = 3 rows
        assert_eq!(named.height, size.height + 75.0);
    }
}
