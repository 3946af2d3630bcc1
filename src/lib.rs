//! Single-source least-cost routing over a road network whose edge costs are
//! built from traffic, weather, elevation and hazard factors.
//!
//! ```
//! use risk_router::{demo, dijkstra::find_optimal_route, cost::Toggles};
//!
//! let graph = demo::demo_graph().unwrap();
//! let dist = find_optimal_route(&graph, 1, Toggles::ALL).unwrap();
//! assert_eq!(dist.get(1), Some(0.0));
//! ```

pub mod conditions;
pub mod cost;
pub mod demo;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod loader;
pub mod report;

pub use cost::{Factor, Toggles};
pub use dijkstra::{find_optimal_route, Distances, UNREACHED};
pub use error::{LoadError, RouteError};
pub use graph::{Edge, Location, LocationId, RoadGraph, RoadGraphBuilder};
