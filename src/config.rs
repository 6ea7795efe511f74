use crate::theme::{Theme, resolve_theme};
use anyhow::bail;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#[0-9A-Fa-f]{3}|#[0-9A-Fa-f]{4}|#[0-9A-Fa-f]{6}|#[0-9A-Fa-f]{8}|rgba?\(\s*[0-9.,%\s]+\)|[a-zA-Z]+)$")
        .unwrap()
});

/// Geometry of the skills card. Every value is a fixed constant of the layout;
/// overriding them is supported for experimentation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsLayoutConfig {
    pub base_width: f32,
    pub base_height: f32,
    pub first_row: f32,
    pub row_pitch: f32,
    pub pad: f32,
    pub columns: usize,
    pub column_pitch: f32,
    pub tile_size: f32,
    pub tile_radius: f32,
    pub grid_offset: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub corner_radius: f32,
    pub heading: String,
    pub heading_font_size: f32,
    pub heading_baseline: f32,
    pub subtitle_font_size: f32,
    pub label_row_height: f32,
    pub label_char_width: f32,
    pub label_center_divisor: f32,
    pub label_base_y: f32,
    pub label_row_pitch: f32,
    pub label_baseline: f32,
    pub label_font_size: f32,
}

impl Default for SkillsLayoutConfig {
    fn default() -> Self {
        Self {
            base_width: 812.0,
            base_height: 125.0,
            first_row: 90.0,
            row_pitch: 114.0,
            pad: 60.0,
            columns: 7,
            column_pitch: 102.0,
            tile_size: 80.0,
            tile_radius: 15.0,
            grid_offset: 100.0,
            margin_x: 60.0,
            margin_y: 60.0,
            corner_radius: 12.0,
            heading: "Skills".to_string(),
            heading_font_size: 42.0,
            heading_baseline: 44.0,
            subtitle_font_size: 24.0,
            label_row_height: 25.0,
            label_char_width: 7.5,
            label_center_divisor: 2.3,
            label_base_y: 60.0,
            label_row_pitch: 140.0,
            label_baseline: 44.0,
            label_font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLayoutConfig {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub corner_radius: f32,
    pub max_stats: usize,
    pub avatar_x: f32,
    pub avatar_y: f32,
    pub avatar_size: f32,
    pub avatar_radius: f32,
    pub name_x: f32,
    pub name_y: f32,
    pub name_font_size: f32,
    pub handle_y: f32,
    pub handle_font_size: f32,
    pub pill_width: f32,
    pub pill_height: f32,
    pub pill_pitch: f32,
    pub pill_font_size: f32,
    pub error_width: f32,
    pub error_height: f32,
    pub error_title_font_size: f32,
    pub error_message_font_size: f32,
}

impl Default for ProfileLayoutConfig {
    fn default() -> Self {
        Self {
            width: 842.0,
            height: 165.0,
            margin_x: 52.0,
            corner_radius: 12.0,
            max_stats: 4,
            avatar_x: 52.0,
            avatar_y: 47.0,
            avatar_size: 65.0,
            avatar_radius: 30.0,
            name_x: 145.0,
            name_y: 78.0,
            name_font_size: 26.0,
            handle_y: 102.0,
            handle_font_size: 16.0,
            pill_width: 90.0,
            pill_height: 37.0,
            pill_pitch: 108.0,
            pill_font_size: 16.0,
            error_width: 495.0,
            error_height: 120.0,
            error_title_font_size: 26.0,
            error_message_font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub skills: SkillsLayoutConfig,
    pub profile: ProfileLayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub graphql_url: String,
    pub user_agent: String,
    /// Whole-request timeout. `None` leaves the client without one.
    pub timeout_ms: Option<u64>,
    pub token_env: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            graphql_url: "https://api.github.com/graphql".to_string(),
            user_agent: concat!("skills-svg-renderer/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
            token_env: "GITHUB_TOKEN".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 812.0,
            height: 600.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub github: GithubConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::adaptive_default();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
            github: GithubConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    skills: Option<SkillsConfigFile>,
    profile: Option<ProfileConfigFile>,
    github: Option<GithubConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    background: Option<String>,
    title_color: Option<String>,
    subtitle_color: Option<String>,
    handle_color: Option<String>,
    label_color: Option<String>,
    border_color: Option<String>,
    title_font: Option<String>,
    subtitle_font: Option<String>,
    label_font: Option<String>,
    adaptive: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SkillsConfigFile {
    heading: Option<String>,
    margin_x: Option<f32>,
    margin_y: Option<f32>,
    corner_radius: Option<f32>,
    tile_radius: Option<f32>,
    heading_font_size: Option<f32>,
    subtitle_font_size: Option<f32>,
    label_font_size: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ProfileConfigFile {
    corner_radius: Option<f32>,
    name_font_size: Option<f32>,
    handle_font_size: Option<f32>,
    pill_font_size: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GithubConfigFile {
    graphql_url: Option<String>,
    user_agent: Option<String>,
    timeout_ms: Option<u64>,
    token_env: Option<String>,
}

fn checked_color(field: &str, value: String) -> anyhow::Result<String> {
    if !COLOR_RE.is_match(value.trim()) {
        bail!("invalid color for themeVariables.{field}: {value:?}");
    }
    Ok(value.trim().to_string())
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), theme = %config.theme.name, "loaded config");
    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if parsed.theme.is_some() {
        config.theme = resolve_theme(parsed.theme.as_deref());
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.background {
            config.theme.background = checked_color("background", v)?;
        }
        if let Some(v) = vars.title_color {
            config.theme.title_color = checked_color("titleColor", v)?;
        }
        if let Some(v) = vars.subtitle_color {
            config.theme.subtitle_color = checked_color("subtitleColor", v)?;
        }
        if let Some(v) = vars.handle_color {
            config.theme.handle_color = checked_color("handleColor", v)?;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = checked_color("labelColor", v)?;
        }
        if let Some(v) = vars.border_color {
            config.theme.border_color = checked_color("borderColor", v)?;
        }
        if let Some(v) = vars.title_font {
            config.theme.title_font = v;
        }
        if let Some(v) = vars.subtitle_font {
            config.theme.subtitle_font = v;
        }
        if let Some(v) = vars.label_font {
            config.theme.label_font = v;
        }
        if let Some(v) = vars.adaptive {
            config.theme.adaptive = v;
        }
    }

    if let Some(skills) = parsed.skills {
        if let Some(v) = skills.heading {
            config.layout.skills.heading = v;
        }
        if let Some(v) = skills.margin_x {
            config.layout.skills.margin_x = v;
        }
        if let Some(v) = skills.margin_y {
            config.layout.skills.margin_y = v;
        }
        if let Some(v) = skills.corner_radius {
            config.layout.skills.corner_radius = v;
        }
        if let Some(v) = skills.tile_radius {
            config.layout.skills.tile_radius = v;
        }
        if let Some(v) = skills.heading_font_size {
            config.layout.skills.heading_font_size = v;
        }
        if let Some(v) = skills.subtitle_font_size {
            config.layout.skills.subtitle_font_size = v;
        }
        if let Some(v) = skills.label_font_size {
            config.layout.skills.label_font_size = v;
        }
    }

    if let Some(profile) = parsed.profile {
        if let Some(v) = profile.corner_radius {
            config.layout.profile.corner_radius = v;
        }
        if let Some(v) = profile.name_font_size {
            config.layout.profile.name_font_size = v;
        }
        if let Some(v) = profile.handle_font_size {
            config.layout.profile.handle_font_size = v;
        }
        if let Some(v) = profile.pill_font_size {
            config.layout.profile.pill_font_size = v;
        }
    }

    if let Some(github) = parsed.github {
        if let Some(v) = github.graphql_url {
            config.github.graphql_url = v;
        }
        if let Some(v) = github.user_agent {
            config.github.user_agent = v;
        }
        if github.timeout_ms.is_some() {
            config.github.timeout_ms = github.timeout_ms;
        }
        if let Some(v) = github.token_env {
            config.github.token_env = v;
        }
    }

    config.render.background = config.theme.background.clone();

    Ok(config)
}
