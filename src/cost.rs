use crate::graph::Edge;

/// Traffic factor above which the congestion surcharge kicks in.
pub const CONGESTION_THRESHOLD: f64 = 1.5;
/// Share of the base distance added when an edge is congested.
pub const CONGESTION_PENALTY: f64 = 0.2;

/// A dynamic factor that can be switched on or off per query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Factor {
    Traffic,
    Weather,
    Hazards,
    Elevation,
}

/// Which dynamic surcharges are layered on top of the baseline cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Toggles {
    pub traffic: bool,
    pub weather: bool,
    pub hazards: bool,
    pub elevation: bool,
}

impl Toggles {
    pub const ALL: Toggles = Toggles {
        traffic: true,
        weather: true,
        hazards: true,
        elevation: true,
    };

    pub const NONE: Toggles = Toggles {
        traffic: false,
        weather: false,
        hazards: false,
        elevation: false,
    };

    fn slot(&mut self, factor: Factor) -> &mut bool {
        match factor {
            Factor::Traffic => &mut self.traffic,
            Factor::Weather => &mut self.weather,
            Factor::Hazards => &mut self.hazards,
            Factor::Elevation => &mut self.elevation,
        }
    }

    pub fn with(mut self, factor: Factor) -> Self {
        *self.slot(factor) = true;
        self
    }

    pub fn without(mut self, factor: Factor) -> Self {
        *self.slot(factor) = false;
        self
    }

    pub fn is_enabled(&self, factor: Factor) -> bool {
        match factor {
            Factor::Traffic => self.traffic,
            Factor::Weather => self.weather,
            Factor::Hazards => self.hazards,
            Factor::Elevation => self.elevation,
        }
    }
}

/// Cost of an edge from its static characteristics alone. Applied whatever
/// the toggles say.
pub fn baseline_cost(edge: &Edge) -> f64 {
    edge.distance
        * (1.0
            + edge.traffic_factor
            + edge.weather_impact
            + edge.elevation_impact
            + edge.hazard_risk)
}

/// Congestion surcharge for heavily trafficked edges.
pub fn predict_traffic(edge: &Edge) -> f64 {
    if edge.traffic_factor > CONGESTION_THRESHOLD {
        CONGESTION_PENALTY * edge.distance
    } else {
        0.0
    }
}

/// Scalar weight for traversing `edge` in either direction.
///
/// Enabled weather, hazard and elevation surcharges add the raw factor on top
/// of the baseline, which already counts it once. That double contribution is
/// kept as is so results match the established cost tables.
pub fn adjusted_cost(edge: &Edge, toggles: Toggles) -> f64 {
    let mut cost = baseline_cost(edge);
    if toggles.traffic {
        cost += predict_traffic(edge);
    }
    if toggles.weather {
        cost += edge.weather_impact;
    }
    if toggles.hazards {
        cost += edge.hazard_risk;
    }
    if toggles.elevation {
        cost += edge.elevation_impact;
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FACTORS: [Factor; 4] = [
        Factor::Traffic,
        Factor::Weather,
        Factor::Hazards,
        Factor::Elevation,
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn toggles_with_without() {
        assert_eq!(Toggles::default(), Toggles::NONE);
        let t = Toggles::ALL.without(Factor::Hazards);
        assert!(t.traffic && t.weather && t.elevation && !t.hazards);
        assert_eq!(t.with(Factor::Hazards), Toggles::ALL);
        for f in FACTORS {
            assert!(Toggles::ALL.is_enabled(f));
            assert!(!Toggles::NONE.is_enabled(f));
            assert!(Toggles::NONE.with(f).is_enabled(f));
        }
    }

    #[test]
    fn snowy_hilly_edge() {
        let edge = Edge::new(2, 3, 10.0)
            .traffic(0.3)
            .weather(0.6)
            .elevation(0.3)
            .hazard(0.4);
        assert!(close(baseline_cost(&edge), 26.0));
        assert!(close(adjusted_cost(&edge, Toggles::NONE), 26.0));
        assert!(close(adjusted_cost(&edge, Toggles::ALL), 27.3));
        assert!(close(
            adjusted_cost(&edge, Toggles::ALL.without(Factor::Hazards)),
            26.9
        ));
    }

    #[test]
    fn congestion_surcharge_needs_threshold() {
        let calm = Edge::new(1, 2, 10.0).traffic(1.5);
        assert_eq!(predict_traffic(&calm), 0.0);
        assert!(close(adjusted_cost(&calm, Toggles::ALL), 25.0));

        let jammed = Edge::new(1, 2, 10.0).traffic(2.0);
        assert!(close(predict_traffic(&jammed), 2.0));
        assert!(close(baseline_cost(&jammed), 30.0));
        assert!(close(adjusted_cost(&jammed, Toggles::NONE.with(Factor::Traffic)), 32.0));
        assert!(close(adjusted_cost(&jammed, Toggles::NONE), 30.0));
    }

    fn any_edge() -> impl Strategy<Value = Edge> {
        (0.01f64..1000.0, 0.0f64..3.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0).prop_map(
            |(d, t, w, e, h)| Edge::new(1, 2, d).traffic(t).weather(w).elevation(e).hazard(h),
        )
    }

    fn any_toggles() -> impl Strategy<Value = Toggles> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(traffic, weather, hazards, elevation)| Toggles {
                traffic,
                weather,
                hazards,
                elevation,
            },
        )
    }

    proptest! {
        /// With every toggle off the cost is exactly the baseline formula.
        #[test]
        fn toggles_off_is_baseline(edge in any_edge()) {
            let expected = edge.distance
                * (1.0 + edge.traffic_factor + edge.weather_impact + edge.elevation_impact + edge.hazard_risk);
            prop_assert_eq!(adjusted_cost(&edge, Toggles::NONE), expected);
        }

        /// Switching one more factor on never makes an edge cheaper.
        #[test]
        fn enabling_a_factor_never_decreases(edge in any_edge(), toggles in any_toggles(), idx in 0usize..4) {
            let factor = FACTORS[idx];
            let off = adjusted_cost(&edge, toggles.without(factor));
            let on = adjusted_cost(&edge, toggles.with(factor));
            prop_assert!(on >= off);
        }

        /// Reversing an edge does not change its cost.
        #[test]
        fn direction_does_not_matter(edge in any_edge(), toggles in any_toggles()) {
            let reversed = Edge { from: edge.to, to: edge.from, ..edge };
            prop_assert_eq!(adjusted_cost(&edge, toggles), adjusted_cost(&reversed, toggles));
        }
    }
}
