//! Reads a road graph from two CSV files:
//!
//! * locations: `id,name`
//! * edges: `from,to,distance,traffic,weather,elevation,hazard`, where the
//!   last three columns are condition labels (`rain`, `hilly`, `high_risk`, ...).

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};

use crate::conditions::RoadConditions;
use crate::error::LoadError;
use crate::graph::RoadGraph;

const LOCATIONS: &str = "locations";
const EDGES: &str = "edges";

fn field<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    file: &'static str,
    name: &'static str,
) -> Result<T, LoadError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse().map_err(|_| LoadError::Parse {
        file,
        line: record.position().map(|p| p.line()).unwrap_or(0),
        field: name,
        value: raw.to_string(),
    })
}

fn label(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("").trim()
}

pub fn read_graph<L: Read, E: Read>(locations: L, edges: E) -> Result<RoadGraph, LoadError> {
    let mut builder = RoadGraph::builder();

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(locations);
    for result in rdr.records() {
        let record = result?;
        let id = field(&record, 0, LOCATIONS, "id")?;
        builder.add_location(id, label(&record, 1));
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(edges);
    for result in rdr.records() {
        let record = result?;
        let from = field(&record, 0, EDGES, "from")?;
        let to = field(&record, 1, EDGES, "to")?;
        let distance = field(&record, 2, EDGES, "distance")?;
        let conditions = RoadConditions {
            traffic: field(&record, 3, EDGES, "traffic")?,
            weather: label(&record, 4),
            elevation: label(&record, 5),
            hazard: label(&record, 6),
        };
        builder.add_edge(conditions.edge(from, to, distance));
    }

    Ok(builder.build()?)
}

pub fn load_graph(
    locations: impl AsRef<Path>,
    edges: impl AsRef<Path>,
) -> Result<RoadGraph, LoadError> {
    let graph = read_graph(
        File::open(locations.as_ref()).map_err(csv::Error::from)?,
        File::open(edges.as_ref()).map_err(csv::Error::from)?,
    )?;
    log::info!(
        "loaded {} locations and {} edges from {} / {}",
        graph.len(),
        graph.edges().len(),
        locations.as_ref().display(),
        edges.as_ref().display()
    );
    Ok(graph)
}
