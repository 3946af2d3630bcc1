use thiserror::Error;

use crate::graph::LocationId;

/// Failures from building a graph or querying it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The query origin is not a location of the graph.
    #[error("unknown origin location {0}")]
    UnknownOrigin(LocationId),

    /// Two locations share the same id.
    #[error("duplicate location id {0}")]
    DuplicateLocation(LocationId),

    /// An edge references a location that was never added.
    #[error("edge {from} -> {to} references unknown location {missing}")]
    MalformedEdge {
        from: LocationId,
        to: LocationId,
        missing: LocationId,
    },

    /// An edge has a non-positive distance or a negative/non-finite factor.
    #[error("edge {from} -> {to} has invalid {field}: {value}")]
    InvalidEdge {
        from: LocationId,
        to: LocationId,
        field: &'static str,
        value: f64,
    },
}

/// Failures from reading a graph out of CSV input.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{file} line {line}: cannot parse {field} from {value:?}")]
    Parse {
        file: &'static str,
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Graph(#[from] RouteError),
}
