use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "trailfx", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a synthetic cursor path and write the final frame as a PNG.
    Frame(FrameArgs),
    /// Run a synthetic cursor path and write the final frame's primitives as JSON.
    Dump(DumpArgs),
    /// Print the normalized configuration.
    Config(ConfigArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Configuration JSON; defaults apply to missing keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured effect style.
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,

    /// Enable forked lightning branches.
    #[arg(long)]
    branches: bool,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 90)]
    frames: u32,

    /// Cursor trajectory.
    #[arg(long, value_enum, default_value_t = PathChoice::Circle)]
    path: PathChoice,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 360)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Keep earlier frames underneath instead of clearing each frame.
    #[arg(long)]
    accumulate: bool,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Configuration JSON to normalize; prints the defaults when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Smooth,
    Lightning,
    Rainbow,
    Magic,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PathChoice {
    Circle,
    Lissajous,
    Line,
}

#[derive(serde::Serialize)]
struct FrameDump<'a> {
    style: trailfx::EffectStyle,
    path: &'a str,
    frame: u64,
    points: usize,
    uniforms: &'a trailfx::FrameUniforms,
    primitives: &'a [trailfx::Primitive],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &RunArgs) -> anyhow::Result<trailfx::TrailConfig> {
    let mut config = match &args.config {
        Some(path) => trailfx::TrailConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => trailfx::TrailConfig::default(),
    };
    if let Some(style) = args.style {
        config.effect_style = match style {
            StyleChoice::Smooth => trailfx::EffectStyle::Smooth,
            StyleChoice::Lightning => trailfx::EffectStyle::Lightning,
            StyleChoice::Rainbow => trailfx::EffectStyle::Rainbow,
            StyleChoice::Magic => trailfx::EffectStyle::Magic,
        };
    }
    if args.branches {
        config.lightning_branches = true;
    }
    Ok(config)
}

fn scripted_run(args: &RunArgs) -> trailfx::ScriptedRun {
    let path = match args.path {
        PathChoice::Circle => trailfx::CursorPath::Circle,
        PathChoice::Lissajous => trailfx::CursorPath::Lissajous,
        PathChoice::Line => trailfx::CursorPath::Line,
    };
    trailfx::ScriptedRun {
        path,
        frames: args.frames,
        frame_interval: Duration::from_secs_f64(trailfx::NOMINAL_STEP_SECS),
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(&args.run)?;
    let surface = trailfx::RasterSurface::new(args.run.width, args.run.height)?
        .accumulate(args.accumulate);

    let mut driver = trailfx::FrameDriver::new(config);
    driver.attach(surface);
    let report = scripted_run(&args.run).play(&mut driver)?;
    let surface = driver
        .surface()
        .context("raster surface detached during run")?;

    ensure_parent(&args.out)?;
    surface
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} points, {} primitives)",
        args.out.display(),
        report.points,
        report.primitives
    );
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let config = load_config(&args.run)?;
    let viewport = trailfx::Size::new(f64::from(args.run.width), f64::from(args.run.height));

    let mut driver = trailfx::FrameDriver::new(config);
    driver.attach(trailfx::RecordingSurface::new(viewport));
    let run = scripted_run(&args.run);
    let report = run.play(&mut driver)?;
    if !report.drawn {
        anyhow::bail!("final frame {} drew nothing", report.frame);
    }
    let last = driver
        .surface()
        .and_then(|s| s.last())
        .context("no frame was drawn")?;

    let dump = FrameDump {
        style: config.effect_style,
        path: run.path.name(),
        frame: report.frame,
        points: report.points,
        uniforms: &last.uniforms,
        primitives: &last.primitives,
    };

    ensure_parent(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &dump)
        .with_context(|| format!("write json '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} primitives)",
        args.out.display(),
        last.primitives.len()
    );
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = match &args.in_path {
        Some(path) => trailfx::TrailConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => trailfx::TrailConfig::default(),
    };
    println!("{}", config.to_json_pretty()?);
    Ok(())
}
