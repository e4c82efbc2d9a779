use ballsim::{run_2d, DemoConfig, Scenario};

use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Drag inside the box to launch up to two bouncing balls; P saves a snapshot, Esc quits")]
struct Args {
    /// YAML file overriding the built-in settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// no file given means the stock demo
fn load_config(args: &Args) -> Result<DemoConfig> {
    match &args.config {
        Some(path) => DemoConfig::load(path),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let scenario = Scenario::build_scenario(&cfg);
    run_2d(scenario);

    Ok(())
}
