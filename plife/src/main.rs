use plife::{Scenario, ScenarioConfig};
use plife::bench_step;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Particle life on a toroidal 2D surface")]
struct Args {
    /// Scenario file: a path, or a name under the crate's `scenarios/` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Number of ticks for a headless run
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Time the step for growing populations and exit
    #[arg(long)]
    bench: bool,

    /// Debug logging (prints the matrices on every randomization)
    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_headless(mut scenario: Scenario, ticks: u64) {
    let report_every = (ticks / 10).max(1);

    for _ in 0..ticks {
        scenario.advance();
        let tick = scenario.world.tick();
        if tick % report_every == 0 {
            info!(tick, mean_speed = scenario.world.mean_speed(), "headless");
        }
    }

    let world = &scenario.world;
    let contained = world.particles().iter().all(|p| world.torus().contains(&p.x));
    info!(
        ticks = world.tick(),
        particles = world.particles().len(),
        mean_speed = world.mean_speed(),
        contained,
        "headless run finished"
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.headless {
        run_headless(scenario, args.ticks);
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    plife::run_2d(scenario);

    #[cfg(not(feature = "viewer"))]
    {
        info!("built without the viewer feature, running headless");
        run_headless(scenario, args.ticks);
    }

    Ok(())
}
