//! Lookup tables turning road-condition labels into edge factors.
//! Unrecognised labels ("clear", "flat", "no_risk", ...) contribute nothing.

use crate::graph::{Edge, LocationId};

pub fn weather_impact(condition: &str) -> f64 {
    match condition {
        "rain" => 0.3,
        "snow" => 0.6,
        _ => 0.0,
    }
}

pub fn hazard_risk(condition: &str) -> f64 {
    match condition {
        "high_risk" => 0.4,
        "moderate_risk" => 0.2,
        _ => 0.0,
    }
}

pub fn elevation_impact(terrain: &str) -> f64 {
    match terrain {
        "hilly" => 0.3,
        "mountainous" => 0.5,
        _ => 0.0,
    }
}

/// Observed conditions on one road segment.
#[derive(Clone, Copy, Debug)]
pub struct RoadConditions<'a> {
    pub traffic: f64,
    pub weather: &'a str,
    pub elevation: &'a str,
    pub hazard: &'a str,
}

impl RoadConditions<'_> {
    pub fn edge(&self, from: LocationId, to: LocationId, distance: f64) -> Edge {
        Edge::new(from, to, distance)
            .traffic(self.traffic)
            .weather(weather_impact(self.weather))
            .elevation(elevation_impact(self.elevation))
            .hazard(hazard_risk(self.hazard))
    }
}
