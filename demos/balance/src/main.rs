//! Ship Balance Example
//!
//! Reads a manifest, plans the crane moves that bring port and starboard
//! within tolerance, prints the plan with its PARK legs, and writes the
//! outbound manifest next to the input.
//!
//! ```text
//! cargo run -p balance -- demos/balance/manifests/KeoghsPort.txt [planner.toml]
//! ```

use std::env;
use std::process::ExitCode;

use stowage::prelude::*;
use stowage::{outbound_file_name, SessionError};

const DEFAULT_MANIFEST: &str = "demos/balance/manifests/KeoghsPort.txt";

fn main() -> ExitCode {
    stowage::console::init();

    let mut args = env::args().skip(1);
    let manifest_path = args.next().unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
    let config_path = args.next();

    match run(&manifest_path, config_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(manifest_path: &str, config_path: Option<&str>) -> Result<(), SessionError> {
    let config = match config_path {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };

    let manifest = Manifest::load(manifest_path)?;
    if manifest.dropped_lines() > 0 {
        println!(
            "Skipped {} unreadable manifest lines.",
            manifest.dropped_lines()
        );
    }
    println!(
        "Loaded {} containers from {}\n",
        manifest.container_count(),
        manifest_path
    );

    let report = run_session(&manifest, &config)?;

    println!("\nBefore:\n{}\n", report.initial_plan);
    println!("After:\n{}\n", report.final_plan);
    println!("{report}");

    let outbound_path = outbound_file_name(manifest_path);
    report.outbound.save(&outbound_path)?;
    println!("\nOutbound manifest written to {}", outbound_path.display());
    Ok(())
}
