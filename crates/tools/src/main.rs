use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use distortion::{GridConfig, IndicatrixDescriptor, Tunables, sample_grid};
use projection::ProjectionKind;

const SPACING_CHOICES: [u32; 4] = [15, 30, 45, 60];

/// Sample a map projection's local distortion on a lon/lat grid and emit the
/// indicatrix descriptors as JSON.
#[derive(Debug, Parser)]
#[command(name = "indicatrix", version)]
struct Args {
    /// Projection to analyze: mercator, natural, orthographic,
    /// equirectangular or azimuthal.
    #[arg(long, default_value = "mercator")]
    projection: String,

    /// Grid spacing in degrees (15, 30, 45 or 60).
    #[arg(long, default_value_t = 30)]
    spacing: u32,

    /// Canvas width in output units.
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height in output units.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Base ellipse radius: reported pixel radii are base_radius * scale.
    #[arg(long, default_value_t = 3.0)]
    base_radius: f64,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    projection: ProjectionKind,
    spacing_deg: u32,
    width: f64,
    height: f64,
    base_radius: f64,
    grid_points: usize,
    accepted: usize,
    samples: Vec<Sample>,
}

#[derive(Debug, Serialize)]
struct Sample {
    #[serde(flatten)]
    descriptor: IndicatrixDescriptor,
    radius_x: f64,
    radius_y: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let kind: ProjectionKind = args.projection.parse().map_err(|e| format!("{e}"))?;
    if !SPACING_CHOICES.contains(&args.spacing) {
        return Err(format!(
            "grid spacing must be one of {SPACING_CHOICES:?}, got {}",
            args.spacing
        ));
    }
    if !(args.width > 0.0) || !(args.height > 0.0) {
        return Err("canvas dimensions must be positive".to_string());
    }

    let mut config = GridConfig::new(args.spacing).map_err(|e| format!("{e}"))?;
    config.base_radius = args.base_radius;

    let proj = kind.build(args.width, args.height);
    let tun = Tunables::for_canvas_width(args.width);
    let descriptors = sample_grid(proj.as_ref(), &config, &tun);
    info!(
        projection = kind.name(),
        accepted = descriptors.len(),
        grid_points = config.grid_points(),
        "sampling complete"
    );

    let samples: Vec<Sample> = descriptors
        .into_iter()
        .map(|descriptor| Sample {
            radius_x: config.base_radius * descriptor.major_scale,
            radius_y: config.base_radius * descriptor.minor_scale,
            descriptor,
        })
        .collect();

    let report = Report {
        projection: kind,
        spacing_deg: config.spacing_deg,
        width: args.width,
        height: args.height,
        base_radius: config.base_radius,
        grid_points: config.grid_points(),
        accepted: samples.len(),
        samples,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(|e| format!("serialize report: {e}"))?;

    println!("{json}");
    Ok(())
}
