use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use svgline::{AnimationConfig, Direction, IterationCount, TimingFunction};

/// Add a stroke draw-on animation to every shape of an SVG file.
///
/// See https://developer.mozilla.org/docs/Web/CSS/animation for what each animation
/// property does.
#[derive(Parser, Debug)]
#[command(name = "svgline", version)]
struct Cli {
    /// Path to the original SVG file.
    #[arg(short = 'f', long)]
    file: PathBuf,

    /// Where to save the animated file [default: <file stem>-animated.svg].
    #[arg(short = 'd', long)]
    destination: Option<PathBuf>,

    /// JSON file with animation settings; flags below override its values.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Duration of the animation in ms [default: 1500].
    #[arg(short = 's', long)]
    duration: Option<u64>,

    /// Delay before the animation starts in ms [default: 0].
    #[arg(short = 'w', long)]
    delay: Option<u64>,

    /// Number of iterations, or `infinite` [default: 1].
    #[arg(short = 'i', long)]
    iteration: Option<IterationCount>,

    /// Timing function, e.g. `ease-in` or `cubic-bezier(0.4,0,0.2,1)` [default: linear].
    #[arg(short = 't', long)]
    timing: Option<TimingFunction>,

    /// Animation direction or fill mode [default: forwards].
    #[arg(short = 'p', long)]
    direction: Option<Direction>,

    /// Log every animated shape to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = resolve_config(&cli)?;
    let dst = cli
        .destination
        .clone()
        .unwrap_or_else(|| svgline::default_destination(&cli.file));

    let report = svgline::animate_file(&cli.file, &dst, &cfg)
        .with_context(|| format!("animate '{}'", cli.file.display()))?;

    eprintln!("wrote {} ({} shapes)", dst.display(), report.shapes);
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<AnimationConfig> {
    let mut cfg = match &cli.config {
        Some(path) => AnimationConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => AnimationConfig::default(),
    };

    if let Some(v) = cli.duration {
        cfg.duration_ms = v;
    }
    if let Some(v) = cli.delay {
        cfg.delay_ms = v;
    }
    if let Some(v) = cli.iteration {
        cfg.iteration_count = v;
    }
    if let Some(v) = cli.timing {
        cfg.timing = v;
    }
    if let Some(v) = cli.direction {
        cfg.direction = v;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
