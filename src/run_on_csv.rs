use anyhow::{Context, Result};
use clap::Parser;

use risk_router::cost::{Factor, Toggles};
use risk_router::dijkstra::find_optimal_route;
use risk_router::loader;

#[derive(Parser, Debug)]
#[command(name = "route-bench")]
#[command(about = "Load a road graph from CSV and time repeated multi-factor route queries.", long_about = None)]
struct Cli {
    /// Locations CSV (id,name)
    #[arg(short, long)]
    locations: String,

    /// Edges CSV (from,to,distance,traffic,weather,elevation,hazard)
    #[arg(short, long)]
    edges: String,

    /// Number of runs. Picks a new (deterministic) origin per run, in increasing id order.
    #[arg(short, long)]
    num_runs: usize,

    /// Factor whose surcharge is left out (repeatable)
    #[arg(short, long, value_enum)]
    ignore: Vec<Factor>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = loader::load_graph(&cli.locations, &cli.edges)
        .with_context(|| format!("loading graph from {} and {}", cli.locations, cli.edges))?;
    let toggles = cli
        .ignore
        .iter()
        .fold(Toggles::ALL, |t, &factor| t.without(factor));

    let mut origins: Vec<_> = graph.locations().iter().map(|l| l.id()).collect();
    origins.sort_unstable();

    let mut duration_millis = Vec::new();
    for &origin in origins.iter().take(cli.num_runs) {
        use std::time::SystemTime;
        let now = SystemTime::now();
        let dist = find_optimal_route(&graph, origin, toggles)?;
        if let Ok(elapsed) = now.elapsed() {
            duration_millis.push(elapsed.as_secs_f64() * 1000.0);
        }
        log::debug!("origin {}: {} reachable", origin, dist.reachable_count());
    }
    println!("{:?}", duration_millis);

    Ok(())
}
