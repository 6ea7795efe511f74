use crate::catalog::Catalog;
use crate::config::{Config, load_config};
use crate::ir::SkillSet;
use crate::layout::compute_skills_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::theme::resolve_theme;
use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "skillsvg", version, about = "Skill-card and profile-card SVG renderer")]
pub struct Args {
    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the tiled skills card
    Skills(SkillsArgs),
    /// Render the account summary card (needs network access)
    #[cfg(feature = "github")]
    Profile(ProfileArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme name, themeVariables, layout overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Theme preset; overrides the config file
    #[arg(long = "theme")]
    pub theme: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SkillsArgs {
    /// Comma-joined language keys
    #[arg(short = 'l', long = "languages")]
    pub languages: Option<String>,

    /// Comma-joined framework keys
    #[arg(short = 'f', long = "frameworks")]
    pub frameworks: Option<String>,

    /// Comma-joined library keys
    #[arg(short = 'b', long = "libraries")]
    pub libraries: Option<String>,

    /// Comma-joined tool keys
    #[arg(short = 't', long = "tools")]
    pub tools: Option<String>,

    /// Comma-joined software/IDE keys
    #[arg(short = 's', long = "software")]
    pub software: Option<String>,

    /// Print item names under the tiles
    #[arg(short = 'n', long = "names")]
    pub names: bool,

    /// JSON5 metadata catalog layered over the built-in one
    #[arg(long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Write the computed layout as JSON
    #[arg(long = "dump-layout")]
    pub dump_layout: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(feature = "github")]
#[derive(ClapArgs, Debug)]
pub struct ProfileArgs {
    /// GitHub login
    #[arg(short = 'u', long = "user")]
    pub user: String,

    /// Up to four of followers, repositories, stars, contributions, commits
    #[arg(short = 'd', long = "data", default_value = "")]
    pub data: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Skills(skills) => run_skills(skills),
        #[cfg(feature = "github")]
        Command::Profile(profile) => run_profile(profile),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn load_base_config(output: &OutputArgs) -> Result<Config> {
    let mut config = load_config(output.config.as_deref())?;
    if let Some(theme) = output.theme.as_deref() {
        config.theme = resolve_theme(Some(theme));
        config.render.background = config.theme.background.clone();
    }
    Ok(config)
}

fn run_skills(args: SkillsArgs) -> Result<()> {
    let mut config = load_base_config(&args.output)?;

    let catalog = match args.catalog.as_deref() {
        Some(path) => {
            let mut catalog = Catalog::builtin().clone();
            catalog.merge(Catalog::load(path)?);
            catalog
        }
        None => Catalog::builtin().clone(),
    };

    let skills = SkillSet::from_inputs(
        args.languages.as_deref(),
        args.frameworks.as_deref(),
        args.libraries.as_deref(),
        args.tools.as_deref(),
        args.software.as_deref(),
    );
    let layout = compute_skills_layout(&skills, &catalog, &config.layout, args.names);
    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout)?;
        tracing::info!(path = %path.display(), "wrote layout dump");
    }

    let svg = render_svg(&layout, &config.theme, &config.layout.skills);
    config.render.width = layout.width;
    config.render.height = layout.height;
    emit(&svg, &args.output, &config)
}

#[cfg(feature = "github")]
fn run_profile(args: ProfileArgs) -> Result<()> {
    use crate::github::GithubClient;

    let mut config = load_base_config(&args.output)?;
    let client = GithubClient::from_env(&config.github);
    let svg = profile_svg(&args.user, &args.data, client, &config)?;

    config.render.width = config.layout.profile.width;
    config.render.height = config.layout.profile.height;
    emit(&svg, &args.output, &config)
}

/// A client that cannot be built still yields an error card, never an exit.
#[cfg(feature = "github")]
fn profile_svg(
    user: &str,
    data: &str,
    client: std::result::Result<crate::github::GithubClient, crate::error::FetchError>,
    config: &Config,
) -> Result<String> {
    use crate::profile::{render_profile, render_unreachable_profile};

    let client = match client {
        Ok(client) => client,
        Err(err) => return Ok(render_unreachable_profile(user, data, err, config)),
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(render_profile(user, data, None, &client, config)))
}

fn emit(svg: &str, output: &OutputArgs, config: &Config) -> Result<()> {
    match output.output_format {
        OutputFormat::Svg => write_output_svg(svg, output.output.as_deref()),
        OutputFormat::Png => {
            let path = ensure_output(output.output.as_deref(), "png")?;
            write_output_png(svg, path, &config.render)
        }
    }
}

fn ensure_output<'a>(output: Option<&'a Path>, ext: &str) -> Result<&'a Path> {
    output.ok_or_else(|| anyhow::anyhow!("Output path required for {} output", ext))
}
