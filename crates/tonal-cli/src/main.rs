//! tonal - brightness/contrast and hue/saturation/lightness for image files
//!
//! A thin host around `tonal-core`: decode, pack into a channel layout, run
//! the buffer passes, unpack, encode.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tonal_core::{ChannelLayout, EnhanceConfig};

mod image_loader;

#[derive(Parser, Debug)]
#[command(name = "tonal")]
#[command(author, version, about = "Adjust brightness, contrast, hue, saturation and lightness")]
#[command(long_about = "
Adjust brightness, contrast, hue, saturation and lightness of an image.

Flags override the values of a JSON config given with --config.

Examples:
  tonal photo.png -o out.png --brightness 0.2
  tonal photo.jpg -o out.png --contrast -0.3 --saturation 0.5
  tonal photo.png -o out.png --hue 120 --layout big
  tonal photo.png -o out.png --config preset.json --parallel
")]
struct Cli {
    /// Input image
    input: PathBuf,

    /// Output image; format follows the extension
    #[arg(short, long)]
    output: PathBuf,

    /// Brightness in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    brightness: Option<f32>,

    /// Contrast in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    contrast: Option<f32>,

    /// Hue rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    hue: Option<f32>,

    /// Saturation delta in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    saturation: Option<f32>,

    /// Lightness delta in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    lightness: Option<f32>,

    /// JSON config with layout, parallel flag and adjustments
    #[arg(long)]
    config: Option<PathBuf>,

    /// Channel byte order used for processing
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Split the image across threads
    #[arg(short, long)]
    parallel: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    /// Byte order of this machine
    Native,
    /// B G R A
    Little,
    /// A R G B
    Big,
    /// R A G B
    Other,
}

impl From<LayoutArg> for ChannelLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Native => ChannelLayout::native(),
            LayoutArg::Little => ChannelLayout::LittleEndian,
            LayoutArg::Big => ChannelLayout::BigEndian,
            LayoutArg::Other => ChannelLayout::Other,
        }
    }
}

impl Cli {
    /// Config file (if any) with command-line overrides applied.
    fn resolve_config(&self) -> Result<EnhanceConfig> {
        let mut config = match &self.config {
            Some(path) => EnhanceConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => EnhanceConfig::default(),
        };

        if let Some(layout) = self.layout {
            config.layout = layout.into();
        }
        config.parallel |= self.parallel;

        let adjustments = &mut config.adjustments;
        let overrides = [
            (&mut adjustments.brightness, self.brightness),
            (&mut adjustments.contrast, self.contrast),
            (&mut adjustments.hue, self.hue),
            (&mut adjustments.saturation, self.saturation),
            (&mut adjustments.lightness, self.lightness),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    tracing::info!(
        "layout={}, parallel={}, adjustments={:?}",
        config.layout,
        config.parallel,
        config.adjustments
    );

    let mut image = image_loader::load_image(&cli.input, config.layout)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    if config.adjustments.is_identity() {
        tracing::warn!("no adjustment given, writing the image unchanged");
    }
    config
        .apply(&mut image.data)
        .context("Failed to adjust pixels")?;

    image_loader::save_image(image, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    if cli.verbose {
        println!("{} -> {}", cli.input.display(), cli.output.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    #[cfg(feature = "parallel")]
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    run(&cli)
}
