use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;
use ordered_float::OrderedFloat;

use crate::cost::{adjusted_cost, Toggles};
use crate::error::RouteError;
use crate::graph::{LocationId, RoadGraph};

/// Distance reported for locations that cannot be reached from the origin.
pub const UNREACHED: f64 = f64::INFINITY;

#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<f64>,
    node_idx: usize,
}

// Min-heap by cost, lower index first on ties
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Least costs from one origin to every location of a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Distances {
    origin: LocationId,
    by_id: HashMap<LocationId, f64>,
}

impl Distances {
    pub fn origin(&self) -> LocationId {
        self.origin
    }

    /// `None` if `id` is not a location of the queried graph.
    pub fn get(&self, id: LocationId) -> Option<f64> {
        self.by_id.get(&id).copied()
    }

    pub fn is_reachable(&self, id: LocationId) -> bool {
        self.get(id).is_some_and(f64::is_finite)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, f64)> + '_ {
        self.by_id.iter().map(|(&id, &d)| (id, d))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn reachable_count(&self) -> usize {
        self.by_id.values().filter(|d| d.is_finite()).count()
    }

    pub fn max_finite(&self) -> Option<f64> {
        self.by_id
            .values()
            .copied()
            .filter(|d| d.is_finite())
            .max_by_key(|&d| OrderedFloat(d))
    }

    /// Entries by increasing distance, ties by id. Unreachable ones come last.
    pub fn sorted_by_distance(&self) -> Vec<(LocationId, f64)> {
        let mut entries: Vec<(LocationId, f64)> = self.iter().collect();
        entries.sort_by_key(|&(id, d)| (OrderedFloat(d), id));
        entries
    }
}

/// Dijkstra from `origin` to all locations under the cost model selected by
/// `toggles`. Unreachable locations map to [`UNREACHED`].
pub fn find_optimal_route(
    graph: &RoadGraph,
    origin: LocationId,
    toggles: Toggles,
) -> Result<Distances, RouteError> {
    let start = graph
        .index_of(origin)
        .ok_or(RouteError::UnknownOrigin(origin))?;

    let dist = dijkstra_all(graph, start, toggles);

    let by_id = dist
        .iter()
        .enumerate()
        .map(|(idx, &d)| (graph.location_at(idx).id(), d))
        .collect();
    Ok(Distances { origin, by_id })
}

fn dijkstra_all(graph: &RoadGraph, start: usize, toggles: Toggles) -> Vec<f64> {
    let n = graph.len();
    let mut dist = vec![UNREACHED; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[start] = 0.0;
    heap.push(State {
        cost: OrderedFloat(0.0),
        node_idx: start,
    });

    let mut settled = 0usize;
    while let Some(State { cost, node_idx }) = heap.pop() {
        // Stale duplicate of an already finalized node.
        if visited[node_idx] {
            continue;
        }
        visited[node_idx] = true;
        settled += 1;

        let current = graph.location_at(node_idx).id();
        for edge in graph.incident_at(node_idx) {
            let Some(next) = edge.other_end(current) else {
                continue;
            };
            let Some(next_idx) = graph.index_of(next) else {
                continue;
            };
            let next_cost = cost.0 + adjusted_cost(edge, toggles);
            if next_cost < dist[next_idx] {
                log::trace!("relax {} -> {}: {:.4}", current, next, next_cost);
                dist[next_idx] = next_cost;
                heap.push(State {
                    cost: OrderedFloat(next_cost),
                    node_idx: next_idx,
                });
            }
        }
    }

    log::debug!(
        "settled {} of {} locations from {}",
        settled,
        n,
        graph.location_at(start).id()
    );
    dist
}
