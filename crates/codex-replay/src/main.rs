//! Codex board replay tool.
//!
//! Reads a replay document (starter, placements, objectives), rebuilds the
//! board, and prints the resulting scores as JSON.

use anyhow::Context;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod replay;

use replay::ReplayInput;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Input path from the first argument, or from the environment
    let path: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CODEX_REPLAY_FILE").ok())
        .context("usage: codex-replay <replay.json> (or set CODEX_REPLAY_FILE)")?
        .into();

    info!("Replaying {}", path.display());

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let input: ReplayInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;

    let summary = match replay::run(&input) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Replay failed: {}", e);
            return Err(e.into());
        }
    };

    info!(
        placement_points = summary.placement_points,
        objective_points = summary.objective_total(),
        total = summary.total,
        "Replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
