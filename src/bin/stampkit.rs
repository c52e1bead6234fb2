use std::path::PathBuf;
use std::str::FromStr as _;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stampkit::{ColorSpec, StampConfig};

#[derive(Parser, Debug)]
#[command(name = "stampkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a stamp onto a profile picture.
    Render(RenderArgs),
    /// List the named colors.
    Colors,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// JSON config; flags given on the command line override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Profile picture.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Caption set along the arc.
    #[arg(long)]
    text: Option<String>,

    /// Output image; format follows the extension.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Band color: a name, `r,g,b[,a]` or `#rrggbb[aa]`.
    #[arg(long, value_parser = ColorSpec::from_str)]
    stamp_color: Option<ColorSpec>,

    /// Caption color: a name, `r,g,b[,a]` or `#rrggbb[aa]`.
    #[arg(long, value_parser = ColorSpec::from_str)]
    text_color: Option<ColorSpec>,

    /// Fade the band toward both ends of the arc.
    #[arg(long, overrides_with = "no_gradient")]
    gradient: bool,

    /// Draw the band at full opacity, even if the config turns the fade on.
    #[arg(long)]
    no_gradient: bool,

    /// TrueType/OpenType font for the caption.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Caption size in pixels.
    #[arg(long)]
    font_size: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Colors => cmd_colors(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(p) => StampConfig::from_path(p)?,
        None => StampConfig::default(),
    };
    if let Some(p) = args.profile {
        cfg.profile_path = p;
    }
    if let Some(t) = args.text {
        cfg.stamp_text = t;
    }
    if let Some(o) = args.out {
        cfg.output_path = o;
    }
    if let Some(c) = args.stamp_color {
        cfg.stamp_color = c;
    }
    if let Some(c) = args.text_color {
        cfg.text_color = c;
    }
    if args.gradient {
        cfg.gradient = true;
    } else if args.no_gradient {
        cfg.gradient = false;
    }
    if let Some(f) = args.font {
        cfg.font_path = f;
    }
    if let Some(s) = args.font_size {
        cfg.font_size = s;
    }
    if cfg.profile_path.as_os_str().is_empty() {
        anyhow::bail!("no profile picture given (use --profile or set profile_path in --config)");
    }

    if let Some(parent) = cfg.output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let out = stampkit::generate_profile_stamp(&cfg)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_colors() -> anyhow::Result<()> {
    for (name, c) in stampkit::NAMED_COLORS {
        println!("{name:<12} {},{},{},{}", c.r, c.g, c.b, c.a);
    }
    Ok(())
}
