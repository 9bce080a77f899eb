use stronghold_locator::config::locate::{self, LocateDemoConfig, LocateOutputConfig};
use stronghold_locator::io::write_json_file;
use stronghold_locator::report::render_text;
use stronghold_locator::{DetailedEstimate, Estimator, EstimatorParams, Observation};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.as_slice() {
        [path] => locate::load_config(Path::new(path))?,
        [x1, z1, x2, z2] => inline_config(x1, z1, x2, z2, "")?,
        [x1, z1, x2, z2, delta] => inline_config(x1, z1, x2, z2, delta)?,
        _ => return Err(usage()),
    };

    let estimator = Estimator::new(config.estimator.clone());
    let detailed: Vec<DetailedEstimate> = config
        .observations
        .iter()
        .map(|obs| estimator.estimate_with_diagnostics(obs.strategy()))
        .collect();

    let format = config.output.format;
    if format.includes_text() {
        for (i, d) in detailed.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", render_text(&d.result));
            println!(
                "({} samples, {} regions touched, {:.3} ms)",
                d.trace.sample_count, d.trace.touched_regions, d.trace.timing.total_ms
            );
        }
    }

    if format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &detailed)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(&detailed)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn inline_config(
    x1: &str,
    z1: &str,
    x2: &str,
    z2: &str,
    delta: &str,
) -> Result<LocateDemoConfig, String> {
    let observation = Observation::parse(x1, z1, x2, z2, delta).map_err(|e| e.to_string())?;
    Ok(LocateDemoConfig {
        observations: vec![observation],
        estimator: EstimatorParams::default(),
        output: LocateOutputConfig::default(),
    })
}

fn usage() -> String {
    "Usage: locate_demo <config.json> | locate_demo <x1> <z1> <x2> <z2> [pixel_change]".to_string()
}
