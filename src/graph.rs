use fnv::FnvHashMap;

use crate::error::RouteError;

pub type LocationId = i64;

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    id: LocationId,
    name: String,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Undirected road segment. `distance` is the base length, the four factors
/// are non-negative contributions layered on top of it by the cost model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: LocationId,
    pub to: LocationId,
    pub distance: f64,
    pub traffic_factor: f64,
    pub weather_impact: f64,
    pub elevation_impact: f64,
    pub hazard_risk: f64,
}

impl Edge {
    pub fn new(from: LocationId, to: LocationId, distance: f64) -> Self {
        Self {
            from,
            to,
            distance,
            traffic_factor: 0.0,
            weather_impact: 0.0,
            elevation_impact: 0.0,
            hazard_risk: 0.0,
        }
    }

    pub fn traffic(mut self, factor: f64) -> Self {
        self.traffic_factor = factor;
        self
    }

    pub fn weather(mut self, impact: f64) -> Self {
        self.weather_impact = impact;
        self
    }

    pub fn elevation(mut self, impact: f64) -> Self {
        self.elevation_impact = impact;
        self
    }

    pub fn hazard(mut self, risk: f64) -> Self {
        self.hazard_risk = risk;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The endpoint opposite to `current`. `None` for self-loops and for
    /// edges that do not touch `current`.
    pub fn other_end(&self, current: LocationId) -> Option<LocationId> {
        if self.is_self_loop() {
            None
        } else if self.from == current {
            Some(self.to)
        } else if self.to == current {
            Some(self.from)
        } else {
            None
        }
    }

    fn validate(&self) -> Result<(), RouteError> {
        let invalid = |field, value| RouteError::InvalidEdge {
            from: self.from,
            to: self.to,
            field,
            value,
        };
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(invalid("distance", self.distance));
        }
        for (field, value) in [
            ("traffic_factor", self.traffic_factor),
            ("weather_impact", self.weather_impact),
            ("elevation_impact", self.elevation_impact),
            ("hazard_risk", self.hazard_risk),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, value));
            }
        }
        Ok(())
    }
}

/// Immutable road network. Locations are addressed by id externally and by
/// dense index internally.
#[derive(Clone, Debug)]
pub struct RoadGraph {
    locations: Vec<Location>,
    id_to_idx: FnvHashMap<LocationId, usize>,
    edges: Vec<Edge>,
    // Edge indices touching each location, self-loops included once.
    incident: Vec<Vec<usize>>,
}

impl RoadGraph {
    pub fn builder() -> RoadGraphBuilder {
        RoadGraphBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.id_to_idx.contains_key(&id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.id_to_idx.get(&id).map(|&idx| &self.locations[idx])
    }

    pub(crate) fn index_of(&self, id: LocationId) -> Option<usize> {
        self.id_to_idx.get(&id).copied()
    }

    pub(crate) fn location_at(&self, idx: usize) -> &Location {
        &self.locations[idx]
    }

    pub(crate) fn incident_at(&self, idx: usize) -> impl Iterator<Item = &Edge> {
        self.incident[idx].iter().map(move |&e| &self.edges[e])
    }

    /// Every edge with `id` as one of its endpoints.
    pub fn incident_edges(&self, id: LocationId) -> impl Iterator<Item = &Edge> {
        let slice: &[usize] = match self.id_to_idx.get(&id) {
            Some(&idx) => &self.incident[idx],
            None => &[],
        };
        slice.iter().map(move |&e| &self.edges[e])
    }
}

#[derive(Clone, Debug, Default)]
pub struct RoadGraphBuilder {
    locations: Vec<Location>,
    edges: Vec<Edge>,
}

impl RoadGraphBuilder {
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) -> &mut Self {
        self.locations.push(Location::new(id, name));
        self
    }

    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    pub fn build(&self) -> Result<RoadGraph, RouteError> {
        let mut id_to_idx: FnvHashMap<LocationId, usize> = FnvHashMap::default();
        for (idx, loc) in self.locations.iter().enumerate() {
            if id_to_idx.insert(loc.id, idx).is_some() {
                return Err(RouteError::DuplicateLocation(loc.id));
            }
        }

        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); self.locations.len()];
        for (e, edge) in self.edges.iter().enumerate() {
            let lookup = |id| {
                id_to_idx.get(&id).copied().ok_or(RouteError::MalformedEdge {
                    from: edge.from,
                    to: edge.to,
                    missing: id,
                })
            };
            let u = lookup(edge.from)?;
            let v = lookup(edge.to)?;
            edge.validate()?;
            incident[u].push(e);
            if v != u {
                incident[v].push(e);
            }
        }

        log::debug!(
            "built road graph: {} locations, {} edges",
            self.locations.len(),
            self.edges.len()
        );

        Ok(RoadGraph {
            locations: self.locations.clone(),
            id_to_idx,
            edges: self.edges.clone(),
            incident,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> RoadGraphBuilder {
        let mut b = RoadGraph::builder();
        b.add_location(1, "A").add_location(2, "B").add_location(3, "C");
        b.add_edge(Edge::new(1, 2, 1.0))
            .add_edge(Edge::new(2, 3, 2.0))
            .add_edge(Edge::new(3, 1, 4.0));
        b
    }

    #[test]
    fn builds_incidence_lists() {
        let graph = triangle().build().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.incident_edges(1).count(), 2);
        assert_eq!(graph.incident_edges(2).count(), 2);
        assert_eq!(graph.incident_edges(42).count(), 0);
        assert_eq!(graph.location(3).map(Location::name), Some("C"));
        assert!(graph.contains(2));
        assert!(!graph.contains(4));
    }

    #[test]
    fn other_end_works_from_both_sides() {
        let edge = Edge::new(1, 2, 3.0);
        assert_eq!(edge.other_end(1), Some(2));
        assert_eq!(edge.other_end(2), Some(1));
        assert_eq!(edge.other_end(7), None);
        assert_eq!(Edge::new(5, 5, 1.0).other_end(5), None);
    }

    #[test]
    fn self_loop_is_listed_once() {
        let mut b = triangle();
        b.add_edge(Edge::new(2, 2, 1.0));
        let graph = b.build().unwrap();
        assert_eq!(graph.incident_edges(2).count(), 3);
    }

    #[test]
    fn rejects_edge_to_unknown_location() {
        let mut b = triangle();
        b.add_edge(Edge::new(3, 9, 1.0));
        assert_eq!(
            b.build().unwrap_err(),
            RouteError::MalformedEdge {
                from: 3,
                to: 9,
                missing: 9
            }
        );
    }

    #[test]
    fn rejects_duplicate_location() {
        let mut b = triangle();
        b.add_location(2, "B again");
        assert_eq!(b.build().unwrap_err(), RouteError::DuplicateLocation(2));
    }

    #[test]
    fn rejects_bad_attributes() {
        let mut b = triangle();
        b.add_edge(Edge::new(1, 3, 0.0));
        assert!(matches!(
            b.build(),
            Err(RouteError::InvalidEdge { field: "distance", .. })
        ));

        let mut b = triangle();
        b.add_edge(Edge::new(1, 3, 2.0).hazard(-0.1));
        assert!(matches!(
            b.build(),
            Err(RouteError::InvalidEdge { field: "hazard_risk", .. })
        ));

        let mut b = triangle();
        b.add_edge(Edge::new(1, 3, 2.0).weather(f64::NAN));
        assert!(matches!(
            b.build(),
            Err(RouteError::InvalidEdge { field: "weather_impact", .. })
        ));
    }
}
