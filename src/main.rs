use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use tryon_compositor::{
    capture::{CaptureSession, StillImageSource},
    compositor::TryOnEngine,
    config::Config,
    face::JsonLandmarkSource,
    product::{ApplicationMethod, Category, MakeupProduct},
    render::Shade,
};

#[derive(Parser)]
#[command(
    name = "tryon-compositor",
    version,
    about = "Paint a virtual makeup overlay onto a face photo",
    long_about = "Try-On Compositor paints one product overlay (lip tint, eyeliner, eyeshadow, foundation, or blush) onto a face photograph, positioned from a detector's landmark file."
)]
struct Cli {
    /// Face photo (PNG, JPEG)
    #[arg(short, long)]
    image: PathBuf,

    /// Landmark file written by the face detector (JSON point groups)
    #[arg(short, long)]
    landmarks: PathBuf,

    /// Product category (lips, eyes, face, blush)
    #[arg(long)]
    category: String,

    /// Application method (overlay, highlight, line, enhance, base, blend)
    #[arg(short, long, default_value = "overlay")]
    method: String,

    /// Product shade as a hex color
    #[arg(long, default_value = "#c0392b")]
    color: String,

    /// Overlay intensity (0.1-1.0); overrides the config file
    #[arg(long)]
    intensity: Option<f32>,

    /// Output image path
    #[arg(short, long)]
    output: PathBuf,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Try-On Compositor v{}", env!("CARGO_PKG_VERSION"));
    info!("Image: {:?}", cli.image);
    info!("Landmarks: {:?}", cli.landmarks);
    info!("Product: {} / {} @ {}", cli.category, cli.method, cli.color);

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    if let Some(intensity) = cli.intensity {
        config.render.intensity = intensity;
    }
    config.validate()?;

    // Resolve the product selection
    let category = Category::parse(&cli.category)
        .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", cli.category))?;
    let method = ApplicationMethod::parse(&cli.method)
        .ok_or_else(|| anyhow::anyhow!("Unknown application method: {}", cli.method))?;
    let shade = Shade::from_hex(&cli.color).map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let product = MakeupProduct::new("cli selection", category, method, vec![shade]);

    // Acquire the base frame through a scoped capture session
    let source = StillImageSource::from_file(&cli.image)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let mut session = CaptureSession::start(source, &config.capture);
    let base = session
        .next_frame()
        .await?
        .ok_or_else(|| anyhow::anyhow!("Image source produced no frame"))?;
    session.stop();

    // Load the detector's landmark output
    let landmark_source = JsonLandmarkSource::from_file(&cli.landmarks)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    // Run one apply
    let engine = TryOnEngine::new(config, base);
    let painted = match engine.apply(&product, landmark_source.landmarks()) {
        Ok(surface) => surface,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    painted
        .save_png(&cli.output)
        .map_err(|e| anyhow::anyhow!("Failed to save {:?}: {e}", cli.output))?;

    info!("Overlay complete! Output saved to: {:?}", cli.output);
    Ok(())
}
