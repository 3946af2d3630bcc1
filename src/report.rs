use std::fmt::Write as _;
use std::io;

use csv::Writer;

use crate::dijkstra::Distances;
use crate::graph::RoadGraph;

/// One `Location <name>: <distance> units` line per location, by id.
pub fn format_distances(graph: &RoadGraph, distances: &Distances) -> String {
    let mut locations: Vec<_> = graph.locations().iter().collect();
    locations.sort_by_key(|l| l.id());

    let mut out = String::new();
    for loc in locations {
        match distances.get(loc.id()) {
            Some(d) if d.is_finite() => {
                let _ = writeln!(out, "Location {}: {} units", loc.name(), d);
            }
            _ => {
                let _ = writeln!(out, "Location {}: unreachable", loc.name());
            }
        }
    }
    out
}

/// Node count, reachable count and the farthest finite distance.
pub fn summary(distances: &Distances) -> String {
    let mut out = format!(
        "Locations: {}\nReachable from {}: {}\n",
        distances.len(),
        distances.origin(),
        distances.reachable_count()
    );
    if let Some(maxd) = distances.max_finite() {
        let _ = writeln!(out, "Max finite distance: {:.2}", maxd);
    }
    out
}

/// CSV rows `location_id,name,distance` in increasing distance order.
/// Unreachable locations are written as `inf` when requested, skipped otherwise.
pub fn write_csv<W: io::Write>(
    graph: &RoadGraph,
    distances: &Distances,
    writer: W,
    include_unreachable: bool,
) -> csv::Result<usize> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["location_id", "name", "distance"])?;
    let mut written = 0;
    for (id, d) in distances.sorted_by_distance() {
        if !d.is_finite() && !include_unreachable {
            continue;
        }
        let name = graph.location(id).map(|l| l.name()).unwrap_or("");
        let val = if d.is_finite() {
            format!("{:.6}", d)
        } else {
            String::from("inf")
        };
        wtr.write_record([id.to_string().as_str(), name, val.as_str()])?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}
