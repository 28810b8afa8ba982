//! Hexsettle self-play simulator.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod sim;

use config::SimConfig;
use sim::Simulation;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimConfig::from_env()?;
    info!("Starting hexsettle simulation...");

    let mut simulation = Simulation::new(&config);
    let summary = simulation.run()?;
    info!(
        rounds = summary.rounds,
        effects = summary.effects,
        rejected = summary.rejected,
        "simulation finished"
    );

    if !simulation.verify_replay(&config)? {
        anyhow::bail!("replaying the effect history did not reproduce the final board");
    }

    if config.dump {
        let snapshot = simulation.game().board().snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
