//! One-shot composition query from the command line
//!
//! Usage: nutricomp-query <ingredient> [quantity] [unit]

use std::process::ExitCode;

use nutricomp::config::ServiceConfig;
use nutricomp::corpus::{loader, LoadGate};
use nutricomp::tools::compositions;
use nutricomp::CompositionService;

const USAGE: &str = "Usage: nutricomp-query <ingredient> [quantity] [unit]";

/// Parse a finite quantity; "inf" and "NaN" parse as f64 but are rejected
fn parse_quantity(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite())
        .ok_or_else(|| format!("Invalid quantity '{}'. {}", raw, USAGE))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let Some(ingredient) = args.next() else {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::from(2));
    };
    let quantity = match args.next() {
        Some(raw) => parse_quantity(&raw)?,
        None => 100.0,
    };
    let unit = args.next().unwrap_or_else(|| "gram".to_string());

    let config = ServiceConfig::from_env();
    let units = loader::load_units(config.units_path.as_deref())?;
    let reference = LoadGate::ready(loader::load_reference_data(&config)?);
    let service = CompositionService::new(units, reference);

    match compositions::get_composition(&service, &ingredient, quantity, &unit) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} ({})", e, e.kind());
            Ok(ExitCode::FAILURE)
        }
    }
}
