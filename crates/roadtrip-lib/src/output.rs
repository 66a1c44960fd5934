use std::fmt;

use serde::Serialize;

use crate::atlas::RouteAlgorithm;

/// One border crossing in a planned route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteHop {
    pub from: String,
    pub to: String,
    /// Land-border length listed in `from`'s border record.
    pub border_km: u32,
    /// Capital-to-capital distance used as the search weight.
    pub capital_km: u32,
}

impl fmt::Display for RouteHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {} ({} km)", self.from, self.to, self.border_km)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub hops: Vec<RouteHop>,
    pub total_capital_km: u64,
    pub total_border_km: u64,
}

impl RoutePlan {
    pub(crate) fn new(
        algorithm: RouteAlgorithm,
        start: &str,
        goal: &str,
        hops: Vec<RouteHop>,
    ) -> Self {
        let total_capital_km = hops.iter().map(|hop| u64::from(hop.capital_km)).sum();
        let total_border_km = hops.iter().map(|hop| u64::from(hop.border_km)).sum();
        Self {
            algorithm,
            start: start.to_string(),
            goal: goal.to_string(),
            hops,
            total_capital_km,
            total_border_km,
        }
    }

    /// Number of border crossings in the route.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Countries visited in order, including start and goal.
    pub fn countries(&self) -> Vec<&str> {
        let mut countries = vec![self.start.as_str()];
        countries.extend(self.hops.iter().map(|hop| hop.to.as_str()));
        countries
    }

    /// Render every hop as `A --> B (N km)`.
    pub fn render_hops(&self) -> Vec<String> {
        self.hops.iter().map(ToString::to_string).collect()
    }
}
