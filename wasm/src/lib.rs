use serde::Deserialize;
use skills_svg_renderer::{Catalog, RenderOptions, SkillSet, render_with_options};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillsRenderOptions {
    languages: Option<String>,
    frameworks: Option<String>,
    libraries: Option<String>,
    tools: Option<String>,
    software: Option<String>,
    include_names: Option<bool>,
    theme: Option<String>,
    /// Extra JSON5 catalog layered over the built-in one.
    catalog: Option<String>,
}

fn build_render_options(options: &SkillsRenderOptions) -> RenderOptions {
    RenderOptions::themed(options.theme.as_deref()).with_names(options.include_names.unwrap_or(false))
}

fn build_skill_set(options: &SkillsRenderOptions) -> SkillSet {
    SkillSet::from_inputs(
        options.languages.as_deref(),
        options.frameworks.as_deref(),
        options.libraries.as_deref(),
        options.tools.as_deref(),
        options.software.as_deref(),
    )
}

#[wasm_bindgen]
pub fn render_skills_svg(options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<SkillsRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        SkillsRenderOptions::default()
    };

    let mut catalog = Catalog::builtin().clone();
    if let Some(extra) = options.catalog.as_deref() {
        let extra = Catalog::from_json5(extra).map_err(|error| JsValue::from_str(&error.to_string()))?;
        catalog.merge(extra);
    }

    Ok(render_with_options(
        &build_skill_set(&options),
        &catalog,
        &build_render_options(&options),
    ))
}
