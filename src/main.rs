//! Nutrient Composition Service (nutricomp)
//!
//! An MCP server answering nutrient composition queries.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutricomp::build_info;
use nutricomp::config::ServiceConfig;
use nutricomp::corpus::{loader, LoadGate};
use nutricomp::mcp::NutricompService;
use nutricomp::tools::status::StatusTracker;
use nutricomp::CompositionService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutricomp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServiceConfig::from_env();
    eprintln!("Compositions: {}", config.compositions_path.display());
    eprintln!("Nutrients: {}", config.nutrients_path.display());

    let units = loader::load_units(config.units_path.as_deref())?;

    // Requests fail with NotReady until the background load opens the gate
    let reference = LoadGate::new();
    let _load_task = loader::spawn_reference_load(config.clone(), reference.clone());

    let service = NutricompService::new(
        StatusTracker::new(&config),
        CompositionService::new(units, reference),
    );

    eprintln!("Starting MCP server on stdio...");
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
