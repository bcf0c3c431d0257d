mod console;
mod logger;

use anyhow::Result;
use carousel_core::constants::{DEFAULT_BACKGROUND, DEFAULT_OUTPUT, DEFAULT_QUALITY};
use carousel_core::{
    CanvasLayout, CanvasSize, CarouselOptions, CarouselSummary, FitMode, ProgressSink, Rgb,
};
use clap::{Parser, ValueEnum};
use console::Console;
use logger::ConsoleLogger;
use std::path::PathBuf;

/// Convert PNG/JPG/WebP images to a LinkedIn-ready PDF carousel.
///
/// Defaults to 1080x1350 (portrait, 4:5). Use --square for 1080x1080 (1:1).
/// All pages share the same size and images are natural-sorted by file name.
#[derive(Parser, Debug)]
#[command(name = "carousel-pdf", version)]
struct Cli {
    /// Files and/or folders with PNG/JPG/WebP images
    #[arg(required = true, num_args = 1..)]
    paths: Vec<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Use 1080x1080 instead of 1080x1350
    #[arg(long)]
    square: bool,

    /// Custom width in pixels (overrides --square, requires --height)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Custom height in pixels (overrides --square, requires --width)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Image fit strategy
    #[arg(long, default_value = "contain", value_enum)]
    fit: FitArg,

    /// Canvas background color (hex, rgb() or CSS name)
    #[arg(long, default_value = DEFAULT_BACKGROUND, value_parser = parse_background)]
    bg: Rgb,

    /// Uniform margin in pixels inside the target canvas
    #[arg(long, default_value = "0")]
    margin: u32,

    /// JPEG quality for PDF embedding and slide export (lower = smaller file)
    #[arg(
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=95)
    )]
    quality: u8,

    /// Optional directory to export normalized per-slide JPEGs
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Load canvas and encoding settings from a JSON file
    #[arg(
        long,
        conflicts_with_all = ["square", "width", "height", "fit", "bg", "margin", "quality"]
    )]
    config: Option<PathBuf>,

    /// Write the resolved settings to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Log each processing step to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FitArg {
    /// Pad to fit, keeping the whole image
    Contain,
    /// Crop to fill the canvas
    Cover,
}

impl From<FitArg> for FitMode {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Contain => Self::Contain,
            FitArg::Cover => Self::Cover,
        }
    }
}

fn parse_background(s: &str) -> std::result::Result<Rgb, String> {
    carousel_core::parse_color(s).map_err(|e| e.to_string())
}

/// Turn parsed arguments into build options.
///
/// With `--config`, canvas and encoding settings come from the file while
/// inputs and output locations still come from the command line.
async fn resolve_options(cli: &Cli) -> Result<CarouselOptions> {
    let mut options = match &cli.config {
        Some(path) => CarouselOptions::load(path).await?,
        None => CarouselOptions {
            layout: CanvasLayout {
                size: CanvasSize::resolve(cli.square, cli.width, cli.height)?,
                fit: cli.fit.into(),
                background: cli.bg,
                margin: cli.margin,
            },
            quality: cli.quality,
            ..Default::default()
        },
    };

    options.inputs = cli.paths.clone();
    options.output = cli.output.clone();
    options.export_dir = cli.export_dir.clone();
    options.validate()?;

    Ok(options)
}

/// Build the carousel, then write `--save-config` only once the PDF exists
async fn run(cli: &Cli, sink: &mut dyn ProgressSink) -> Result<CarouselSummary> {
    let options = resolve_options(cli).await?;
    let summary = carousel_core::build_carousel(&options, sink).await?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        log::info!("Wrote settings to {}", path.display());
    }

    Ok(summary)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ConsoleLogger::new(cli.verbose).init()?;

    let mut console = Console::stdout();
    run(&cli, &mut console).await?;

    Ok(())
}
