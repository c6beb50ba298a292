use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use windzone::AssessmentScene;

mod config;
mod display;
mod report;

use config::{Config, OutputFormat};

const INPUT_HINT: &str =
    "Please ensure coordinates are in 'Lat, Lon' format and height is a valid number.";

#[derive(Parser, Debug)]
#[command(name = "windzone")]
#[command(author, version, about = "AS1170.2 wind assessment influence zone generator")]
struct Args {
    /// Center coordinates as "Lat,Lon", e.g. "-33.8688,151.2093"
    #[arg(short, long, allow_hyphen_values = true, required_unless_present = "init_config")]
    center: Option<String>,

    /// Average roof height of the structure (m)
    #[arg(short = 'z', long, allow_hyphen_values = true, required_unless_present = "init_config")]
    height: Option<String>,

    /// Output format: table, json or csv
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Decimal places for coordinates
    #[arg(long)]
    precision: Option<usize>,

    /// Place direction labels at this multiple of the total radius
    #[arg(long)]
    label_factor: Option<f64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default config file (to --config or the XDG path) and exit
    #[arg(long)]
    init_config: bool,

    /// Show the zone in an interactive terminal preview instead of printing it
    #[arg(short, long)]
    preview: bool,

    /// Start the preview with grid rings hidden
    #[arg(long)]
    no_rings: bool,

    /// Preview outer boundary color (hex, e.g. "#FF0000")
    #[arg(long)]
    outer_color: Option<String>,

    /// Preview direction label color (hex)
    #[arg(long)]
    label_color: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so json/csv on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("windzone=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config(args.config.as_deref())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    let center = args
        .center
        .as_deref()
        .ok_or_else(|| anyhow!("--center is required"))?;
    let height = args
        .height
        .as_deref()
        .ok_or_else(|| anyhow!("--height is required"))?;

    let scene =
        AssessmentScene::from_input(center, height, config.assessment.label_distance_factor)
            .map_err(|e| anyhow!("{} {}", INPUT_HINT, e))?;

    info!(
        "Total assessment radius {:.1}m around {}",
        scene.zone().total_radius,
        scene.center()
    );

    if args.preview {
        display::terminal::run(&scene, &config.preview)?;
    } else {
        print!(
            "{}",
            report::render(&scene, config.output.format, config.output.precision)?
        );
    }

    Ok(())
}
