//! The four-town demo network and the query scenarios run against it.

use crate::conditions::RoadConditions;
use crate::cost::{Factor, Toggles};
use crate::error::RouteError;
use crate::graph::{LocationId, RoadGraph};

pub const DEMO_ORIGIN: LocationId = 1;

pub fn demo_graph() -> Result<RoadGraph, RouteError> {
    let mut b = RoadGraph::builder();
    b.add_location(1, "A")
        .add_location(2, "B")
        .add_location(3, "C")
        .add_location(4, "D");

    let roads = [
        (1, 2, 5.0, 0.2, "rain", "flat", "no_risk"),
        (2, 3, 10.0, 0.3, "snow", "hilly", "high_risk"),
        (3, 4, 7.0, 0.1, "clear", "mountainous", "moderate_risk"),
        (1, 4, 15.0, 0.4, "rain", "flat", "no_risk"),
    ];
    for (from, to, distance, traffic, weather, elevation, hazard) in roads {
        let conditions = RoadConditions {
            traffic,
            weather,
            elevation,
            hazard,
        };
        b.add_edge(conditions.edge(from, to, distance));
    }
    b.build()
}

/// Named toggle sets compared side by side by the `router --compare` run.
pub fn demo_scenarios() -> Vec<(&'static str, Toggles)> {
    vec![
        ("with all factors considered", Toggles::ALL),
        (
            "without hazards considered",
            Toggles::ALL.without(Factor::Hazards),
        ),
        (
            "without traffic or weather considered",
            Toggles::ALL
                .without(Factor::Traffic)
                .without(Factor::Weather),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_graph_shape() {
        let graph = demo_graph().unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edges().len(), 4);
        let names: Vec<&str> = graph.locations().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        let bc = graph.edges()[1];
        assert_eq!(bc.weather_impact, 0.6);
        assert_eq!(bc.elevation_impact, 0.3);
        assert_eq!(bc.hazard_risk, 0.4);
    }

    #[test]
    fn scenarios() {
        let s = demo_scenarios();
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].1, Toggles::ALL);
        assert!(!s[1].1.hazards && s[1].1.traffic);
        assert!(!s[2].1.traffic && !s[2].1.weather && s[2].1.hazards && s[2].1.elevation);
    }
}
