use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Emit `prefers-color-scheme` rules instead of pinning class colors.
    pub adaptive: bool,
    pub background: String,
    pub title_color: String,
    pub subtitle_color: String,
    /// Subtitle color on the profile and error cards.
    pub handle_color: String,
    pub label_color: String,
    pub border_color: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
    pub title_font: String,
    pub subtitle_font: String,
    pub label_font: String,
}

/// Class colors for one `prefers-color-scheme` branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: String,
    pub title: String,
    pub subtitle: String,
    pub handle: String,
    pub label: String,
}

impl ColorScheme {
    fn slate_dark() -> Self {
        Self {
            background: "#0f172a".to_string(),
            title: "#f1f5f9".to_string(),
            subtitle: "#94a3b8".to_string(),
            handle: "#cbd5e1".to_string(),
            label: "#cbd5e1".to_string(),
        }
    }

    fn slate_light() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            title: "#0f172a".to_string(),
            subtitle: "#475569".to_string(),
            handle: "#64748b".to_string(),
            label: "#334155".to_string(),
        }
    }
}

impl Theme {
    pub fn adaptive_default() -> Self {
        let light = ColorScheme::slate_light();
        Self {
            name: DEFAULT_THEME.to_string(),
            adaptive: true,
            background: light.background.clone(),
            title_color: light.title.clone(),
            subtitle_color: light.subtitle.clone(),
            handle_color: light.handle.clone(),
            label_color: light.label.clone(),
            border_color: "#e4e2e2".to_string(),
            dark: ColorScheme::slate_dark(),
            light,
            title_font: "Roboto-Medium, Roboto, sans-serif".to_string(),
            subtitle_font: "Roboto-Regular, Roboto, sans-serif".to_string(),
            label_font: "Roboto-Light, Roboto, sans-serif".to_string(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            adaptive: false,
            ..Self::adaptive_default()
        }
    }

    pub fn dark() -> Self {
        let dark = ColorScheme::slate_dark();
        Self {
            name: "dark".to_string(),
            adaptive: false,
            background: dark.background.clone(),
            title_color: dark.title.clone(),
            subtitle_color: dark.subtitle.clone(),
            handle_color: dark.handle.clone(),
            label_color: dark.label.clone(),
            border_color: "#1e293b".to_string(),
            ..Self::adaptive_default()
        }
    }

    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            adaptive: false,
            background: "#0d1117".to_string(),
            title_color: "#58a6ff".to_string(),
            subtitle_color: "#8b949e".to_string(),
            handle_color: "#8b949e".to_string(),
            label_color: "#c9d1d9".to_string(),
            border_color: "#30363d".to_string(),
            ..Self::adaptive_default()
        }
    }

    pub fn sunset() -> Self {
        Self {
            name: "sunset".to_string(),
            adaptive: false,
            background: "#fff7ed".to_string(),
            title_color: "#9a3412".to_string(),
            subtitle_color: "#c2410c".to_string(),
            handle_color: "#c2410c".to_string(),
            label_color: "#7c2d12".to_string(),
            border_color: "#fed7aa".to_string(),
            ..Self::adaptive_default()
        }
    }

    pub fn presets() -> Vec<Theme> {
        vec![
            Self::adaptive_default(),
            Self::light(),
            Self::dark(),
            Self::midnight(),
            Self::sunset(),
        ]
    }

    pub fn by_name(name: &str) -> Option<Self> {
        Self::presets()
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::adaptive_default()
    }
}

/// Looks a theme up by name. Absent or unknown names resolve to the default theme.
pub fn resolve_theme(name: Option<&str>) -> Theme {
    let Some(name) = name.filter(|value| !value.trim().is_empty()) else {
        return Theme::adaptive_default();
    };
    match Theme::by_name(name.trim()) {
        Some(theme) => theme,
        None => {
            tracing::warn!(theme = name, "unknown theme, falling back to default");
            Theme::adaptive_default()
        }
    }
}
