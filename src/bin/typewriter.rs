use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "typewriter", version)]
struct Cli {
    /// Log filter decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the title markup as it is rendered at one frame.
    Frame(FrameArgs),
    /// Print the title markup for a range of frames, one line per frame.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input title document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame position (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input title document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive).
    #[arg(long)]
    to: u64,

    /// Frames between printed lines.
    #[arg(long, default_value_t = 1)]
    step: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn read_doc(path: &Path) -> anyhow::Result<typewriter::TitleDocument> {
    typewriter::TitleDocument::from_path(path)
        .with_context(|| format!("load title document '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let doc = read_doc(&args.in_path)?;
    let frames = doc.render_frames([typewriter::FrameIndex(args.frame)])?;
    for (_, text, _) in frames {
        println!("{text}");
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let doc = read_doc(&args.in_path)?;
    let range = typewriter::FrameRange::new(
        typewriter::FrameIndex(args.from),
        typewriter::FrameIndex(args.to),
    )?;

    let frames = doc.render_frames(range.step_by(args.step))?;
    for (position, text, outcome) in frames {
        let tag = if outcome.is_patched() { "tw" } else { "--" };
        // One line per frame; embedded newlines are escaped.
        println!("{:>6} {tag} {}", position.0, text.escape_debug());
    }
    Ok(())
}
