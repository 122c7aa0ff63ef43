use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use overlay_engine::{
    ImageDimensions, OverlaySettings, TextLayoutEngine, TextSource, normalize_overlay_text,
    plan_folder,
};

#[derive(Parser, Debug)]
#[command(name = "overlay", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the overlay layout for one image size.
    Layout(LayoutArgs),
    /// Plan overlays for every image in a folder.
    Plan(PlanArgs),
}

/// Settings file plus per-field overrides.
#[derive(Args, Debug)]
struct SettingsArgs {
    /// JSON settings file; flags below override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Base font size at the 400x300 reference area.
    #[arg(long)]
    font_size: Option<i32>,

    /// Right anchor, percent of the image width.
    #[arg(long)]
    right: Option<i32>,

    /// Bottom anchor, percent of the image height.
    #[arg(long)]
    bottom: Option<i32>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Image width in pixels.
    #[arg(long)]
    width: u32,

    /// Image height in pixels.
    #[arg(long)]
    height: u32,

    /// Overlay text.
    #[arg(long, default_value = "")]
    text: String,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Folder of source images.
    #[arg(long)]
    dir: PathBuf,

    /// Custom text for every image; defaults to each file's name without extension.
    #[arg(long)]
    text: Option<String>,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn load_settings(args: &SettingsArgs) -> anyhow::Result<OverlaySettings> {
    let mut settings = match &args.settings {
        Some(path) => OverlaySettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => OverlaySettings::default(),
    };
    if let Some(font_size) = args.font_size {
        settings.font_size = font_size;
    }
    if let Some(right) = args.right {
        settings.anchor_right_percent = right;
    }
    if let Some(bottom) = args.bottom {
        settings.anchor_bottom_percent = bottom;
    }
    settings.validate()?;
    Ok(settings)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let settings = load_settings(&args.settings)?;
    let dims = ImageDimensions::new(args.width, args.height)?;
    let request = settings.layout_request(normalize_overlay_text(&args.text));
    let layout = TextLayoutEngine::compute_request(dims, &request);

    println!(
        "{}",
        serde_json::to_string_pretty(&layout).context("serialize layout")?
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut settings = load_settings(&args.settings)?;
    if let Some(text) = args.text {
        settings.text = TextSource::Custom(text);
    }

    let plan = plan_folder(&args.dir, &settings)
        .with_context(|| format!("plan overlays for '{}'", args.dir.display()))?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &plan).context("write plan JSON")?;
            w.flush().with_context(|| format!("flush '{}'", out.display()))?;
            eprintln!("wrote {} entries to {}", plan.len(), out.display());
        }
        None => {
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).context("serialize plan")?
            );
        }
    }
    Ok(())
}
