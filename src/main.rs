use orbsim::{bench_step, run_2d, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Override the scenario's planet-B separation, in meters.
    /// Non-numeric input is rejected here, before any seeding.
    #[arg(short, long)]
    separation: Option<f64>,

    /// Time the O(n^2) step instead of running the viewer.
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(separation) = args.separation {
        scenario_cfg.parameters.separation_m = separation;
    }

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    run_2d(scenario);

    Ok(())
}
