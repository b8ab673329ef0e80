use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use showreel::{Composition, FrameIndex, LoopStyle, Mode, Timeline};

#[derive(Parser, Debug)]
#[command(name = "showreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single frame of the hero demo and emit its frame graph as JSON.
    Frame(FrameArgs),
    /// Print the scene boundary table for the default timeline.
    Timing,
    /// Serve the contact-form endpoint.
    #[cfg(feature = "server")]
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Canvas layout to evaluate.
    #[arg(long, value_enum, default_value_t = Mode::Desktop)]
    mode: Mode,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// What the last scene does at the loop seam.
    #[arg(long, value_enum, default_value_t = LoopStyle::Hold)]
    loop_style: LoopStyle,

    /// Output JSON path; prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[cfg(feature = "server")]
#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8787")]
    addr: std::net::SocketAddr,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timing => cmd_timing(),
        #[cfg(feature = "server")]
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = Composition::hero_demo(args.mode, args.loop_style)?;
    let graph = comp.eval_frame(FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&graph).context("serialize frame graph")?;

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write frame graph '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_timing() -> anyhow::Result<()> {
    let timeline = Timeline::default();
    timeline.validate()?;

    println!(
        "{} scenes x {} frames at {} fps ({} frames total)",
        timeline.scene_count,
        timeline.scene_frames,
        timeline.fps.as_f64(),
        timeline.total_frames()
    );
    println!("scene  range        fade-in      fade-out");
    for index in 0..timeline.scene_count {
        let b = timeline.boundaries(index)?;
        println!(
            "{index:>5}  [{:>3}, {:>3})  [{:>3}, {:>3})  [{:>3}, {:>3})",
            b.range.start.0,
            b.range.end.0,
            b.fade_in.start.0,
            b.fade_in.end.0,
            b.fade_out.start.0,
            b.fade_out.end.0,
        );
    }
    Ok(())
}

#[cfg(feature = "server")]
fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("build tokio runtime")?;
    runtime.block_on(showreel::server::serve(args.addr))?;
    Ok(())
}
