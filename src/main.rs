use std::{env, path::Path, process};

use anyhow::Context;
use log::info;

use score_predictor::configs::{load_config, PredictorConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => {
            info!("loading config from {path}");
            load_config(Path::new(path)).with_context(|| format!("cannot load '{path}'"))?
        }
        None => {
            info!("no config given, using the sample study-hours data");
            PredictorConfig::default()
        }
    };

    let report = score_predictor::run(&config).context("prediction run failed")?;
    println!("{}", report.to_json()?);

    Ok(())
}
