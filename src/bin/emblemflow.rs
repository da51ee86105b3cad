use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use emblemflow::{EngineConfig, FrameOutput, HeadlessHost, ParticleSession, ViewportInfo};

#[derive(Parser, Debug)]
#[command(name = "emblemflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scene at one progress value as a PNG.
    Frame(FrameArgs),
    /// Render an evenly spaced progress sweep as numbered PNGs.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Engine config JSON. Defaults apply to anything it leaves out.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Frames simulated before the captured one.
    #[arg(long, default_value_t = 0)]
    warmup: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print the frame's data outputs as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Number of frames across [0, 1].
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Sweep back down to 0 after reaching 1.
    #[arg(long)]
    reverse: bool,

    /// Output directory for `frame_NNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn mount(view: &ViewArgs) -> anyhow::Result<(ParticleSession, HeadlessHost)> {
    let config = match &view.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };
    let viewport = ViewportInfo::new(view.width, view.height, view.dpr)?;
    let mut session = ParticleSession::new(config)?;
    let mut host = HeadlessHost::new();
    session.mount(&mut host, viewport)?;
    Ok((session, host))
}

fn step(session: &mut ParticleSession, host: &mut HeadlessHost) -> anyhow::Result<FrameOutput> {
    host.fire()
        .context("no frame scheduled; the frame loop has stalled")?;
    session
        .on_frame(host)
        .context("frame produced no output (surface unavailable)")
}

fn write_png(session: &ParticleSession, out: &Path) -> anyhow::Result<()> {
    let frame = session.snapshot().context("no surface to read back")?;
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut session, mut host) = mount(&args.view)?;
    session.progress_handle().set(args.progress);
    let mut output = step(&mut session, &mut host)?;
    for _ in 0..args.warmup {
        output = step(&mut session, &mut host)?;
    }
    write_png(&session, &args.out)?;
    session.dispose(&mut host);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.frames < 2 {
        anyhow::bail!("--frames must be at least 2");
    }
    let (mut session, mut host) = mount(&args.view)?;
    let progress = session.progress_handle();

    let n = args.frames;
    let up = (0..n).map(|i| f64::from(i) / f64::from(n - 1));
    let down = (0..n - 1).rev().map(|i| f64::from(i) / f64::from(n - 1));
    let values: Vec<f64> = if args.reverse {
        up.chain(down).collect()
    } else {
        up.collect()
    };

    for (i, p) in values.iter().enumerate() {
        progress.set(*p);
        let output = step(&mut session, &mut host)?;
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&session, &out)?;
        tracing::info!(
            progress = p,
            particles = output.stats.particles,
            lines = output.stats.lines,
            "rendered {}",
            out.display()
        );
    }
    session.dispose(&mut host);
    eprintln!("wrote {} frames to {}", values.len(), args.out_dir.display());
    Ok(())
}
