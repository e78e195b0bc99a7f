use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorplot::assets::AssetLoader;
use colorplot::models::{AppConfig, Visualization};
use colorplot::rendering::SvgRenderer;
use colorplot::services::{
    FigureSink, PlotPipeline, PlotRequest, PngFileSink, PreviewSink, SweepDriver,
};

#[derive(Parser)]
#[command(name = "colorplot")]
#[command(about = "Visualize the RGB and YCbCr color spaces")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Samples along each grid axis (overrides the config file)
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..=256))]
    samples: Option<u16>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// RGB color space, red held constant (Green on x, Blue on y)
    Rgb {
        #[command(subcommand)]
        action: RgbAction,
    },
    /// YCbCr color space, luminance held constant (Cr on x, Cb on y)
    Ycbcr {
        #[command(subcommand)]
        action: YcbcrAction,
    },
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum RgbAction {
    /// Create a RGB color space image
    Single {
        /// The constant value of the red channel
        #[arg(long, default_value_t = 127)]
        red: u8,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Create multiple RGB color space images
    Multiple {
        #[command(flatten)]
        sweep: SweepArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print corner and center pixels before and after conversion
    Probe {
        /// The constant value of the red channel
        #[arg(long, default_value_t = 127)]
        red: u8,
    },
}

#[derive(Subcommand)]
enum YcbcrAction {
    /// Create a YCbCr color space image
    Single {
        /// The luminance of the Y-channel
        #[arg(long, default_value_t = 127)]
        luminance: u8,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Create multiple YCbCr color space images
    Multiple {
        #[command(flatten)]
        sweep: SweepArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print corner and center pixels before and after conversion
    Probe {
        /// The luminance of the Y-channel
        #[arg(long, default_value_t = 127)]
        luminance: u8,
    },
}

#[derive(Args)]
struct SweepArgs {
    /// The number of visualizations across the constant channel's range (1..=256)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=256))]
    steps: u16,
}

#[derive(Args)]
struct OutputArgs {
    /// The file to save the image to (PNG)
    #[arg(long)]
    save_to: Option<PathBuf>,

    /// Save the raw color grids instead of the labelled figure
    #[arg(long, requires = "save_to")]
    raw: bool,

    /// Do not show the figure
    #[arg(long)]
    no_show: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorplot=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = AssetLoader::from_env(cli.config.clone());

    match cli.command {
        Commands::Init { force } => run_init_command(&loader, force),
        Commands::Rgb { action } => {
            let viz = Visualization::RGB;
            match action {
                RgbAction::Single { red, output } => {
                    run_plot_command(&loader, cli.samples, &viz, PlotRequest::Single(red), output)
                }
                RgbAction::Multiple { sweep, output } => run_plot_command(
                    &loader,
                    cli.samples,
                    &viz,
                    PlotRequest::Multiple(sweep.steps as usize),
                    output,
                ),
                RgbAction::Probe { red } => run_probe_command(&loader, cli.samples, &viz, red),
            }
        }
        Commands::Ycbcr { action } => {
            let viz = Visualization::YCBCR;
            match action {
                YcbcrAction::Single { luminance, output } => run_plot_command(
                    &loader,
                    cli.samples,
                    &viz,
                    PlotRequest::Single(luminance),
                    output,
                ),
                YcbcrAction::Multiple { sweep, output } => run_plot_command(
                    &loader,
                    cli.samples,
                    &viz,
                    PlotRequest::Multiple(sweep.steps as usize),
                    output,
                ),
                YcbcrAction::Probe { luminance } => {
                    run_probe_command(&loader, cli.samples, &viz, luminance)
                }
            }
        }
    }
}

/// Load config, applying the --samples override
fn load_config(loader: &AssetLoader, samples: Option<u16>) -> AppConfig {
    let mut config = AppConfig::load_from_assets(loader);
    if let Some(samples) = samples {
        config.samples = samples as usize;
    }
    config
}

/// Build the figure, then save and/or show it
fn run_plot_command(
    loader: &AssetLoader,
    samples: Option<u16>,
    viz: &Visualization,
    request: PlotRequest,
    output: OutputArgs,
) -> anyhow::Result<()> {
    let config = Arc::new(load_config(loader, samples));
    let renderer = Arc::new(SvgRenderer::with_fonts(loader.get_fonts()));
    let pipeline = PlotPipeline::new(config.clone(), renderer);

    let mut sinks: Vec<Box<dyn FigureSink>> = Vec::new();
    if let Some(path) = output.save_to {
        sinks.push(Box::new(PngFileSink::new(path, output.raw)?));
    }
    if !output.no_show {
        let viewer = config.viewer_command().map(str::to_string);
        sinks.push(Box::new(PreviewSink::in_temp_dir(viewer)));
    }

    let rendered = pipeline.run(viz, request, &sinks)?;
    tracing::info!(
        space = %viz.space,
        panels = rendered.figure.panels.len(),
        "Done"
    );

    Ok(())
}

/// Print landmark pixels of one grid
fn run_probe_command(
    loader: &AssetLoader,
    samples: Option<u16>,
    viz: &Visualization,
    value: u8,
) -> anyhow::Result<()> {
    let config = load_config(loader, samples);
    let probe = SweepDriver::new(config.samples).probe(viz, value)?;
    println!("{probe}");
    Ok(())
}

/// Extract embedded config
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    for f in &report.skipped {
        println!("  - {f} (exists, use --force to overwrite)");
    }

    Ok(())
}
