use crate::config::{ProfileLayoutConfig, RenderConfig, SkillsLayoutConfig};
use crate::error::ErrorCard;
use crate::layout::{SectionLayout, SkillsLayout, TileLayout};
use crate::profile::{ProfileCard, StatIcon, StatPill};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

pub fn render_svg(layout: &SkillsLayout, theme: &Theme, config: &SkillsLayoutConfig) -> String {
    let mut svg = String::new();
    let width = num(layout.width);
    let height = num(layout.height);

    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">",
    ));
    svg.push_str(&style_block(theme, CardKind::Skills));
    svg.push_str(&card_svg(layout.width, layout.height, config.corner_radius, theme));

    svg.push_str(&format!(
        "<g transform=\"translate({} {})\">",
        num(config.margin_x),
        num(config.margin_y)
    ));
    svg.push_str(&format!(
        "<text class=\"title\" transform=\"translate(0 {})\" font-size=\"{}\" font-family=\"{}\" font-weight=\"500\"><tspan x=\"0\" y=\"0\">{}</tspan></text>",
        num(config.heading_baseline),
        num(config.heading_font_size),
        escape_xml(&theme.title_font),
        escape_xml(&config.heading)
    ));
    for section in &layout.sections {
        svg.push_str(&format!(
            "<text style=\"display:{}\" class=\"subtitle\" transform=\"translate(0 {})\" font-size=\"{}\" font-family=\"{}\"><tspan x=\"0\" y=\"0\">{}</tspan></text>",
            display(section.visible),
            num(section.title_offset),
            num(config.subtitle_font_size),
            escape_xml(&theme.subtitle_font),
            section.category.title()
        ));
    }
    svg.push_str("</g>");

    for section in &layout.sections {
        svg.push_str(&section_svg(section, theme, config));
    }

    svg.push_str("</svg>");
    svg
}

fn section_svg(section: &SectionLayout, theme: &Theme, config: &SkillsLayoutConfig) -> String {
    let mut group = format!(
        "<g id=\"{}\" style=\"display:{}\" transform=\"translate({} {})\">",
        section.category.title().to_ascii_lowercase(),
        display(section.visible),
        num(config.margin_x),
        num(section.grid_origin)
    );
    for tile in &section.tiles {
        group.push_str(&tile_svg(tile, theme, config));
    }
    group.push_str("</g>");
    group
}

/// Gradient tile, then the optional icon, then the optional name label.
fn tile_svg(tile: &TileLayout, theme: &Theme, config: &SkillsLayoutConfig) -> String {
    let mut out = gradient_box_svg(
        tile.id,
        &tile.metadata.color_from,
        &tile.metadata.color_to,
        tile.x,
        tile.y,
        config,
    );
    if let Some(icon) = &tile.icon {
        out.push_str(&format!(
            "<g transform=\"translate({} {})\">{}</g>",
            num(icon.x),
            num(icon.y),
            icon.markup
        ));
    }
    if let Some(label) = &tile.label {
        out.push_str(&format!(
            "<g transform=\"translate({} {})\"><text class=\"skill-name\" transform=\"translate(0 {})\" font-size=\"{}\" font-family=\"{}\" font-weight=\"300\"><tspan x=\"0\" y=\"0\">{}</tspan></text></g>",
            num(label.x),
            num(label.y),
            num(config.label_baseline),
            num(config.label_font_size),
            escape_xml(&theme.label_font),
            escape_xml(&label.text)
        ));
    }
    out
}

fn gradient_box_svg(
    id: u64,
    color_from: &str,
    color_to: &str,
    x: f32,
    y: f32,
    config: &SkillsLayoutConfig,
) -> String {
    let size = num(config.tile_size);
    format!(
        "<defs><linearGradient id=\"tile-gradient-{id}\" x1=\"0.5\" x2=\"0.5\" y2=\"1\" gradientUnits=\"objectBoundingBox\"><stop offset=\"0\" stop-color=\"{}\"/><stop offset=\"1\" stop-color=\"{}\"/></linearGradient></defs><rect id=\"tile-{id}\" width=\"{size}\" height=\"{size}\" rx=\"{}\" transform=\"translate({} {})\" fill=\"url(#tile-gradient-{id})\"/>",
        escape_xml(color_from),
        escape_xml(color_to),
        num(config.tile_radius),
        num(x),
        num(y)
    )
}

pub fn render_profile_svg(card: &ProfileCard, theme: &Theme, config: &ProfileLayoutConfig) -> String {
    let mut svg = String::new();
    let width = num(config.width);
    let height = num(config.height);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&style_block(theme, CardKind::Profile));
    svg.push_str(&card_svg(config.width, config.height, config.corner_radius, theme));

    let avatar = num(config.avatar_size);
    svg.push_str(&format!(
        "<g transform=\"translate({} {})\"><defs><pattern id=\"avatar\" width=\"100%\" height=\"100%\"><image width=\"{avatar}\" height=\"{avatar}\" xlink:href=\"data:image/jpeg;base64,{}\"/></pattern></defs><rect width=\"{avatar}\" height=\"{avatar}\" rx=\"{}\" fill=\"url(#avatar)\"/></g>",
        num(config.avatar_x),
        num(config.avatar_y),
        card.avatar_base64,
        num(config.avatar_radius)
    ));
    svg.push_str(&format!(
        "<text class=\"title\" transform=\"translate({} {})\" font-size=\"{}\" font-family=\"{}\" font-weight=\"500\">{}</text>",
        num(config.name_x),
        num(config.name_y),
        num(config.name_font_size),
        escape_xml(&theme.title_font),
        escape_xml(&card.display_name)
    ));
    svg.push_str(&format!(
        "<text class=\"subtitle\" transform=\"translate({} {})\" font-size=\"{}\" font-family=\"{}\">GitHub.com/{}</text>",
        num(config.name_x),
        num(config.handle_y),
        num(config.handle_font_size),
        escape_xml(&theme.subtitle_font),
        escape_xml(&card.login)
    ));

    svg.push_str(&format!(
        "<g transform=\"translate({} {})\">",
        num(config.width - config.margin_x),
        num((config.height - config.pill_height) / 2.0)
    ));
    for pill in &card.pills {
        svg.push_str(&pill_svg(pill, theme, config));
    }
    svg.push_str("</g></svg>");
    svg
}

fn pill_svg(pill: &StatPill, theme: &Theme, config: &ProfileLayoutConfig) -> String {
    let id = pill.kind.id();
    let accent = pill.kind.accent();
    let icon = match pill.kind.icon() {
        StatIcon::Path { d, dy } => format!(
            "<path transform=\"translate(-71 {})\" fill=\"{accent}\" d=\"{d}\"/>",
            num(dy)
        ),
        StatIcon::Markup(markup) => markup.to_string(),
    };
    format!(
        "<g id=\"{id}\" transform=\"translate({} 0)\"><rect id=\"{id}-box\" width=\"{}\" height=\"{}\" rx=\"{}\" transform=\"translate({} 0)\" fill=\"{}\"/><text id=\"{id}-text\" transform=\"translate({} 25)\" fill=\"{accent}\" font-size=\"{}\" font-family=\"{}\"><tspan x=\"0\" y=\"0\">{}</tspan></text>{icon}</g>",
        num(pill.x),
        num(config.pill_width),
        num(config.pill_height),
        num(config.pill_height / 2.0),
        num(-config.pill_width),
        pill.kind.fill(),
        num(pill.kind.text_x()),
        num(config.pill_font_size),
        escape_xml(&theme.subtitle_font),
        pill.count
    )
}

pub fn render_error_svg(card: &ErrorCard, theme: &Theme, config: &ProfileLayoutConfig) -> String {
    let width = num(config.error_width);
    let height = num(config.error_height);
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    );
    svg.push_str(&style_block(theme, CardKind::Profile));
    svg.push_str(&card_svg(config.error_width, config.error_height, config.corner_radius, theme));
    svg.push_str(&format!(
        "<text class=\"title\" x=\"50%\" y=\"45\" dx=\"{}\" font-size=\"{}\" font-family=\"{}\" font-weight=\"500\">{}</text>",
        escape_xml(&card.title_dx),
        num(config.error_title_font_size),
        escape_xml(&theme.title_font),
        escape_xml(&card.title)
    ));
    svg.push_str(&format!(
        "<text class=\"error\" x=\"50%\" y=\"85\" dx=\"{}\" fill=\"#e11d48\" font-size=\"{}\" font-family=\"{}\">{}</text>",
        escape_xml(&card.message_dx),
        num(config.error_message_font_size),
        escape_xml(&theme.subtitle_font),
        escape_xml(&card.message)
    ));
    svg.push_str("</svg>");
    svg
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardKind {
    Skills,
    Profile,
}

/// Class colors. Adaptive themes follow the viewer's color scheme.
fn style_block(theme: &Theme, kind: CardKind) -> String {
    let mut css = String::from("<style>");
    if theme.adaptive {
        for (query, scheme) in [("dark", &theme.dark), ("light", &theme.light)] {
            let subtitle = match kind {
                CardKind::Skills => &scheme.subtitle,
                CardKind::Profile => &scheme.handle,
            };
            css.push_str(&format!(
                "@media (prefers-color-scheme: {query}) {{ .bg {{ fill: {}; }} .title {{ fill: {}; }} .subtitle {{ fill: {}; }}",
                scheme.background, scheme.title, subtitle
            ));
            if kind == CardKind::Skills {
                css.push_str(&format!(" .skill-name {{ fill: {}; }}", scheme.label));
            }
            css.push_str(" }");
        }
    } else {
        let subtitle = match kind {
            CardKind::Skills => &theme.subtitle_color,
            CardKind::Profile => &theme.handle_color,
        };
        css.push_str(&format!(
            ".bg {{ fill: {}; }} .title {{ fill: {}; }} .subtitle {{ fill: {}; }}",
            theme.background, theme.title_color, subtitle
        ));
        if kind == CardKind::Skills {
            css.push_str(&format!(" .skill-name {{ fill: {}; }}", theme.label_color));
        }
    }
    css.push_str("</style>");
    css
}

/// Rounded background plus a hairline border.
fn card_svg(width: f32, height: f32, radius: f32, theme: &Theme) -> String {
    format!(
        "<rect class=\"bg\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/><rect x=\"0.5\" y=\"0.5\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"none\" stroke=\"{}\"/>",
        num(width),
        num(height),
        num(radius),
        escape_xml(&theme.background),
        num(width - 1.0),
        num(height - 1.0),
        num((radius - 0.5).max(0.0)),
        escape_xml(&theme.border_color)
    )
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn num(value: f32) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Roboto".to_string();
    if let Some(size) = usvg::Size::from_wh(render_cfg.width, render_cfg.height) {
        opt.default_size = size;
    }

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::LayoutConfig;
    use crate::ir::SkillSet;
    use crate::layout::compute_skills_layout;

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(190.0), "190");
        assert_eq!(num(8.5), "8.5");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(21.739_13), "21.74");
    }

    #[test]
    fn render_svg_basic() {
        let skills = SkillSet::from_inputs(Some("rust,go"), None, None, Some("git"), None);
        let config = LayoutConfig::default();
        let layout = compute_skills_layout(&skills, Catalog::builtin(), &config, true);
        let svg = render_svg(&layout, &Theme::adaptive_default(), &config.skills);
        assert!(svg.starts_with("<svg width=\"812\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("id=\"tile-1\""));
        assert!(svg.contains("id=\"tile-11\""));
        assert!(svg.contains("id=\"tile-4\""));
        assert!(svg.contains(">Rust</tspan>"));
        assert!(svg.contains("prefers-color-scheme: dark"));
        assert!(svg.contains("<g id=\"frameworks\" style=\"display:none\""));
        assert!(svg.contains("<g id=\"languages\" style=\"display:block\" transform=\"translate(60 190)\""));
    }

    #[test]
    fn labels_are_escaped() {
        let mut catalog = Catalog::empty();
        catalog.insert(
            crate::ir::Category::Tools,
            "amp",
            crate::catalog::ItemMetadata {
                name: "A&B".to_string(),
                ..Default::default()
            },
        );
        let skills = SkillSet::from_inputs(None, None, None, Some("amp"), None);
        let config = LayoutConfig::default();
        let layout = compute_skills_layout(&skills, &catalog, &config, true);
        let svg = render_svg(&layout, &Theme::dark(), &config.skills);
        assert!(svg.contains("A&amp;B"));
        assert!(!svg.contains("prefers-color-scheme"));
    }

    #[test]
    fn profile_cards_use_the_lighter_subtitle_scheme() {
        let theme = Theme::adaptive_default();
        let profile = style_block(&theme, CardKind::Profile);
        assert!(profile.contains("prefers-color-scheme: dark) { .bg { fill: #0f172a; } .title { fill: #f1f5f9; } .subtitle { fill: #cbd5e1; }"));
        assert!(profile.contains(".subtitle { fill: #64748b; }"));
        assert!(!profile.contains("skill-name"));

        let skills = style_block(&theme, CardKind::Skills);
        assert!(skills.contains(".subtitle { fill: #94a3b8; }"));
        assert!(skills.contains(".subtitle { fill: #475569; }"));

        let fixed = style_block(&Theme::dark(), CardKind::Profile);
        assert!(fixed.contains(".subtitle { fill: #cbd5e1; }"));
    }
}
