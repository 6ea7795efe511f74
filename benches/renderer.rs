use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use skills_svg_renderer::catalog::Catalog;
use skills_svg_renderer::config::LayoutConfig;
use skills_svg_renderer::ir::SkillSet;
use skills_svg_renderer::layout::compute_skills_layout;
use skills_svg_renderer::render::render_svg;
use skills_svg_renderer::theme::Theme;
use std::hint::black_box;

fn keys(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| format!("{prefix}{i}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn skill_set(per_category: usize) -> SkillSet {
    SkillSet::from_inputs(
        Some(&keys("rust", per_category)),
        Some(&keys("react", per_category)),
        Some(&keys("tokio", per_category)),
        Some(&keys("git", per_category)),
        Some(&keys("vim", per_category)),
    )
}

const SIZES: [usize; 4] = [1, 7, 20, 50];

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = LayoutConfig::default();
    let catalog = Catalog::builtin();
    for size in SIZES {
        let skills = skill_set(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &skills, |b, skills| {
            b.iter(|| {
                let layout = compute_skills_layout(black_box(skills), catalog, &config, true);
                black_box(layout.height);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::adaptive_default();
    let config = LayoutConfig::default();
    for size in SIZES {
        let layout = compute_skills_layout(&skill_set(size), Catalog::builtin(), &config, true);
        group.bench_with_input(BenchmarkId::from_parameter(size), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &theme, &config.skills);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    for size in SIZES {
        let raw = keys("rust", size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| {
                let svg = skills_svg_renderer::render_skills_widget(
                    Some(black_box(raw)),
                    Some(raw),
                    None,
                    Some(raw),
                    None,
                    true,
                    Some("dark"),
                );
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_layout, bench_render, bench_end_to_end
);
criterion_main!(benches);
