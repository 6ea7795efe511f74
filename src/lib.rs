pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "github")]
pub mod github;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod profile;
pub mod render;
pub mod theme;

pub use catalog::{Catalog, ItemMetadata};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig};
pub use ir::{Category, CategoryList, SkillSet};
pub use layout::{SkillsLayout, compute_skills_layout};
pub use profile::{ProfileSource, ProfileStats, render_profile, render_unreachable_profile};
pub use render::render_svg;
pub use theme::{Theme, resolve_theme};

/// Everything a skills render needs besides the item lists.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub include_names: bool,
}

impl RenderOptions {
    pub fn themed(name: Option<&str>) -> Self {
        Self {
            theme: resolve_theme(name),
            ..Self::default()
        }
    }

    pub fn with_names(mut self, include_names: bool) -> Self {
        self.include_names = include_names;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::adaptive_default(),
            layout: LayoutConfig::default(),
            include_names: false,
        }
    }
}

pub fn render_with_options(skills: &SkillSet, catalog: &Catalog, options: &RenderOptions) -> String {
    let layout = compute_skills_layout(skills, catalog, &options.layout, options.include_names);
    render_svg(&layout, &options.theme, &options.layout.skills)
}

/// Skills card from five comma-joined lists against the built-in catalog.
pub fn render_skills_widget(
    languages: Option<&str>,
    frameworks: Option<&str>,
    libraries: Option<&str>,
    tools: Option<&str>,
    software: Option<&str>,
    include_names: bool,
    theme: Option<&str>,
) -> String {
    let skills = SkillSet::from_inputs(languages, frameworks, libraries, tools, software);
    let options = RenderOptions::themed(theme).with_names(include_names);
    render_with_options(&skills, Catalog::builtin(), &options)
}
