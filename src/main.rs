mod composite;
mod config;
mod edges;
mod error;
mod pipeline;
mod sink;
mod smooth;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use composite::weight_to_rgb;
use config::SmoothingConfig;
use edges::{EdgeSource, EdgeWeightModel};
use sink::{FileSink, ImageSink};
use source::{FileSource, ImageSource};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Edge-aware selective blur", long_about = None)]
struct Args {
    /// Input image path
    #[arg(short, long)]
    input: PathBuf,

    /// Output image path (format chosen from the extension)
    #[arg(short, long, default_value = "smoothed.jpg")]
    output: PathBuf,

    /// Intensity plane the edge gradient is measured on
    #[arg(long, value_enum, default_value_t = EdgeSource::Luma)]
    edge_source: EdgeSource,

    /// Write the edge weight map (grayscale) instead of the smoothed image
    #[arg(long)]
    show_weight: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = SmoothingConfig::default();
    tracing::info!("edge-smooth starting");
    tracing::info!("Input: {}", args.input.display());
    tracing::info!("Output: {}", args.output.display());
    tracing::info!(
        "Median aperture: {}, gamma: {}",
        config.aperture,
        config.gamma
    );

    let source = FileSource::new(&args.input);
    let sink = FileSink::new(&args.output);
    let model = edges::create_model(args.edge_source);

    run_pipeline(&source, &sink, model.as_ref(), &config, args.show_weight)?;

    Ok(())
}

fn run_pipeline<S, K>(
    source: &S,
    sink: &K,
    model: &dyn EdgeWeightModel,
    config: &SmoothingConfig,
    show_weight: bool,
) -> Result<()>
where
    S: ImageSource,
    K: ImageSink,
{
    let run_start = Instant::now();

    let frame = source
        .load()
        .with_context(|| format!("Failed to load {}", source.location().display()))?;

    tracing::info!("Edge source: {}", model.name());
    let result = pipeline::smooth_edges(&frame, model, config).context("Failed to smooth image")?;

    tracing::info!(
        "edges={:.1}ms, blur={:.1}ms, composite={:.1}ms",
        result.timings.edges.as_secs_f64() * 1000.0,
        result.timings.blur.as_secs_f64() * 1000.0,
        result.timings.composite.as_secs_f64() * 1000.0
    );

    let output_frame = if show_weight {
        // Visualize the weight map instead of the blend
        weight_to_rgb(&result.weight)
    } else {
        result.output
    };

    sink.save(&output_frame)
        .with_context(|| format!("Failed to write {}", sink.location().display()))?;

    tracing::info!(
        "Done in {:.1}ms",
        run_start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
