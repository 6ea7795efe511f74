use std::collections::HashSet;

use skills_svg_renderer::{
    Catalog, Category, LayoutConfig, SkillSet, Theme, compute_skills_layout, render_skills_widget,
    render_svg,
};

fn assert_valid_svg(svg: &str, case: &str) {
    assert!(svg.contains("<svg"), "{case}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{case}: missing </svg tag");
}

fn keys(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| format!("{prefix}{i}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn render_all_cases() {
    // Keep this list explicit so new shapes of input are added intentionally.
    let cases: [(&str, [Option<&str>; 5], bool); 8] = [
        ("empty", [None, None, None, None, None], false),
        ("empty_named", [None, None, None, None, None], true),
        ("languages_only", [Some("rust,go,typescript"), None, None, None, None], false),
        ("software_only", [None, None, None, None, Some("vim,vscode")], true),
        ("duplicates", [Some("go,go"), None, None, None, None], true),
        ("unknown_keys", [Some("cobol"), Some("nope"), None, Some("???"), None], true),
        (
            "all_sections",
            [Some("rust,go"), Some("react,vue"), Some("tokio"), Some("git,docker"), Some("vim")],
            true,
        ),
        (
            "gaps",
            [Some("rust"), None, Some("serde,redux"), None, Some("figma")],
            false,
        ),
    ];

    for (name, lists, names) in cases {
        let svg = render_skills_widget(
            lists[0], lists[1], lists[2], lists[3], lists[4], names, Some("default"),
        );
        assert_valid_svg(&svg, name);
        assert!(svg.contains("width=\"812\""), "{name}: width must be constant");
    }
}

#[test]
fn empty_card_height_is_base_plus_one_pad() {
    let layout = compute_skills_layout(
        &SkillSet::new(),
        Catalog::builtin(),
        &LayoutConfig::default(),
        false,
    );
    assert_eq!(layout.height, 125.0 + 60.0);
    assert!(layout.sections.iter().all(|section| !section.visible));
}

#[test]
fn first_category_pushes_second_by_pad_and_one_row() {
    let skills = SkillSet::from_inputs(Some("rust,go,python"), None, None, None, None);
    let layout = compute_skills_layout(&skills, Catalog::builtin(), &LayoutConfig::default(), false);
    let languages = layout.section(Category::Languages).unwrap();
    let frameworks = layout.section(Category::Frameworks).unwrap();
    assert_eq!(languages.rows, 1);
    assert_eq!(
        frameworks.grid_origin,
        languages.title_offset + 60.0 + 114.0 + 100.0
    );
}

#[test]
fn tile_ids_are_distinct_at_fifty_per_category() {
    let skills = SkillSet::from_inputs(
        Some(&keys("l", 50)),
        Some(&keys("f", 50)),
        Some(&keys("b", 50)),
        Some(&keys("t", 50)),
        Some(&keys("s", 50)),
    );
    let layout = compute_skills_layout(&skills, &Catalog::empty(), &LayoutConfig::default(), true);
    let mut seen = HashSet::new();
    for tile in layout.tiles() {
        assert!(seen.insert(tile.id), "duplicate tile id {}", tile.id);
    }
    assert_eq!(seen.len(), 250);
}

#[test]
fn height_is_monotone_in_each_category() {
    let config = LayoutConfig::default();
    for category in Category::ALL {
        for names in [false, true] {
            let mut previous = 0.0_f32;
            for count in 0..=40 {
                let mut skills =
                    SkillSet::from_inputs(Some("rust"), None, Some("tokio,serde"), None, None);
                let raw = keys("item", count);
                skills.set(category, Some(&raw));
                let height = compute_skills_layout(&skills, &Catalog::empty(), &config, names).height;
                assert!(
                    height >= previous,
                    "{category:?} names={names}: {height} < {previous} at {count}"
                );
                previous = height;
            }
        }
    }
}

#[test]
fn hidden_sections_keep_markup_but_not_display() {
    let skills = SkillSet::from_inputs(None, Some("react"), None, None, None);
    let config = LayoutConfig::default();
    let layout = compute_skills_layout(&skills, Catalog::builtin(), &config, false);
    let svg = render_svg(&layout, &Theme::light(), &config.skills);
    assert!(svg.contains("<g id=\"languages\" style=\"display:none\" transform=\"translate(60 190)\">"));
    assert!(svg.contains("<g id=\"frameworks\" style=\"display:block\" transform=\"translate(60 190)\">"));
    assert!(svg.contains("<tspan x=\"0\" y=\"0\">Tools</tspan>"));
    assert!(svg.contains("id=\"tile-2\""));
}

#[test]
fn catalog_collision_prefers_languages_table() {
    let catalog = Catalog::from_json5(
        r##"{
            languages: { dart: { name: "Dart", colorFrom: "#01579B", colorTo: "#29B6F6" } },
            frameworks: { dart: { name: "Dart Frog", colorFrom: "#000000", colorTo: "#000000" } },
        }"##,
    )
    .unwrap();
    let skills = SkillSet::from_inputs(None, Some("dart"), None, None, None);
    let layout = compute_skills_layout(&skills, &catalog, &LayoutConfig::default(), true);
    let tile = &layout.section(Category::Frameworks).unwrap().tiles[0];
    assert_eq!(tile.metadata.name, "Dart");
    assert_eq!(tile.label.as_ref().unwrap().text, "Dart");
}
