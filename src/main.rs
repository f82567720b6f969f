use planetsim::{ScenarioConfig, Scenario};
use planetsim::run_2d;

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario file {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;

    // The view section belongs to the renderer; the physics bundle never
    // sees it
    let view = scenario_cfg.view.clone();
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario configuration")?;

    run_2d(scenario, view);

    Ok(())
}
