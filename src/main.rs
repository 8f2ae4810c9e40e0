//! Madhya - corridor centerline planner
//!
//! Loads a YAML scenario of left/right boundary markers, plans the
//! centerline between them and optionally writes an SVG audit file.
//!
//! Usage:
//!   madhya tests/integration/scenarios/straight_corridor.yaml
//!   madhya tests/integration/scenarios/curved_track.yaml --steps 4 --svg output/curved.svg

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use madhya_path::io::{CenterlineSvg, Scenario, SvgConfig};
use madhya_path::{
    CenterlinePlanner, DirectionSign, MadhyaConfig, PlannerError, Result, RunStatus, StepHistory,
};

/// Plan a centerline between paired boundary markers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file (YAML)
    scenario: PathBuf,

    /// Configuration file (default: madhya.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps, overrides scenario and config
    #[arg(short, long)]
    steps: Option<usize>,

    /// Traversal direction (1 or -1), overrides scenario and config
    #[arg(short, long, allow_hyphen_values = true)]
    direction: Option<i8>,

    /// Write an SVG visualization to this path
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("madhya_path=info".parse().unwrap())
                .add_directive("madhya=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MadhyaConfig::load(path)?
        }
        None if Path::new("madhya.toml").exists() => {
            info!("Loading configuration from madhya.toml");
            MadhyaConfig::load(Path::new("madhya.toml"))?
        }
        None => {
            info!("Using default configuration");
            MadhyaConfig::default()
        }
    };

    let scenario = Scenario::load(&args.scenario)?;
    info!("Madhya v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Scenario '{}': {} left / {} right markers",
        scenario.name,
        scenario.left.len(),
        scenario.right.len()
    );

    let direction = match args.direction {
        Some(d) => DirectionSign::try_from(d).map_err(PlannerError::Config)?,
        None => scenario.direction.unwrap_or(config.planner.direction),
    };
    let steps = args
        .steps
        .or(scenario.steps)
        .unwrap_or(config.planner.steps);

    let left = scenario.left_markers();
    let right = scenario.right_markers();

    let mut planner = CenterlinePlanner::new(scenario.start, direction);
    let mut history = StepHistory::new();
    let result = planner.run_with_observer(&left, &right, steps, &mut history)?;

    match result.status {
        RunStatus::Completed => info!("Completed {} of {} steps", result.completed_steps, steps),
        RunStatus::PathExhausted => warn!(
            "Path exhausted after {} of {} steps",
            result.completed_steps, steps
        ),
    }
    for (i, p) in result.centerline.iter().enumerate() {
        info!("  [{}] ({:.3}, {:.3})", i, p.x, p.y);
    }
    if !history.flips().is_empty() {
        info!("Direction reversed at steps {:?}", history.flips());
    }

    if let Some(expected) = &scenario.expected {
        let mismatches = expected.mismatches(&result, planner.direction());
        if mismatches.is_empty() {
            info!("Result matches scenario expectation");
        } else {
            for m in &mismatches {
                warn!("Expectation mismatch: {}", m);
            }
        }
    }

    let svg_path = match args.svg {
        Some(path) => Some(path),
        None if config.output.write_svg => {
            Some(Path::new(&config.output.svg_dir).join(scenario.svg_filename()))
        }
        None => None,
    };

    if let Some(svg_path) = svg_path {
        let svg_config = SvgConfig {
            scale: scenario.svg_output.scale,
            ..Default::default()
        };
        let pairs = history.records.iter().map(|r| (r.left, r.right)).collect();

        CenterlineSvg::new(svg_config)
            .with_title(scenario.name.as_str())
            .with_boundaries(&left, &right)
            .with_pairs(pairs)
            .with_centerline(&result.centerline)
            .save(&svg_path)?;
        info!("SVG saved to {:?}", svg_path);
    }

    Ok(())
}
