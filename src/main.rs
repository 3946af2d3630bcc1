use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;

use risk_router::cost::{Factor, Toggles};
use risk_router::dijkstra::find_optimal_route;
use risk_router::graph::{LocationId, RoadGraph};
use risk_router::{demo, loader, report};

#[derive(Parser, Debug)]
#[command(name = "router")]
#[command(about = "Compute least-cost distances from one location to every other, weighting roads by traffic, weather, elevation and hazard.", long_about = None)]
struct Cli {
    /// Locations CSV (id,name). The built-in demo network is used when omitted.
    #[arg(short, long, requires = "edges")]
    locations: Option<String>,

    /// Edges CSV (from,to,distance,traffic,weather,elevation,hazard)
    #[arg(short, long, requires = "locations")]
    edges: Option<String>,

    /// Origin location id
    #[arg(short = 's', long, default_value_t = demo::DEMO_ORIGIN)]
    origin: LocationId,

    /// Factor whose surcharge is left out (repeatable)
    #[arg(short, long, value_enum)]
    ignore: Vec<Factor>,

    /// Run the three demo scenarios instead of a single query
    #[arg(long, default_value_t = false, conflicts_with = "ignore")]
    compare: bool,

    /// Output CSV (location_id, name, distance). Only for single queries.
    #[arg(short, long, conflicts_with = "compare")]
    out: Option<String>,

    /// Include unreachable locations in the CSV with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn load(cli: &Cli) -> Result<RoadGraph> {
    match (&cli.locations, &cli.edges) {
        (Some(locations), Some(edges)) => loader::load_graph(locations, edges)
            .with_context(|| format!("loading graph from {} and {}", locations, edges)),
        _ => demo::demo_graph().context("building demo network"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = load(&cli)?;

    if cli.compare {
        for (label, toggles) in demo::demo_scenarios() {
            let dist = find_optimal_route(&graph, cli.origin, toggles)?;
            println!("Optimized route distances ({}):", label);
            print!("{}", report::format_distances(&graph, &dist));
            println!();
        }
        return Ok(());
    }

    let toggles = cli
        .ignore
        .iter()
        .fold(Toggles::ALL, |t, &factor| t.without(factor));
    log::info!("querying from {} with {:?}", cli.origin, toggles);

    use std::time::SystemTime;
    let now = SystemTime::now();
    let dist = find_optimal_route(&graph, cli.origin, toggles)?;
    if let Ok(elapsed) = now.elapsed() {
        log::info!("{} s", elapsed.as_secs_f64());
    }

    print!("{}", report::format_distances(&graph, &dist));
    print!("{}", report::summary(&dist));

    if let Some(out_path) = cli.out {
        let file =
            File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let written = report::write_csv(&graph, &dist, file, cli.include_unreachable)
            .with_context(|| format!("writing CSV {}", &out_path))?;
        println!("Wrote distances for {} locations to {}", written, out_path);
    }

    Ok(())
}
