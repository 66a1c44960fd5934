//! Route engine over the fused country datasets.
//!
//! An [`Atlas`] owns the border table, capital distance table, and name alias
//! table, plus the routing graph built from them. It is assembled once and is
//! read-only afterwards.
//!
//! # Example
//!
//! ```ignore
//! use roadtrip_lib::{load_atlas, resolve_dataset};
//!
//! let atlas = load_atlas(&resolve_dataset(None)?)?;
//! for hop in atlas.find_path("France", "Germany") {
//!     println!("{hop}");
//! }
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::aliases::NameAliasTable;
use crate::borders::BorderTable;
use crate::capitals::CapitalDistanceTable;
use crate::dataset::DatasetPaths;
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::output::{RouteHop, RoutePlan};
use crate::path::{find_route_bfs, find_route_dijkstra};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
/// Maximum number of suggestions attached to an unknown country error.
const MAX_SUGGESTIONS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm weighted by capital distance.
    #[default]
    Dijkstra,
    /// Breadth-first search (fewest border crossings).
    Bfs,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Bfs => "bfs",
        };
        f.write_str(value)
    }
}

/// Counts describing a loaded atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AtlasStats {
    pub countries: usize,
    pub border_edges: usize,
    pub traversable_edges: usize,
    pub capital_codes: usize,
    pub aliases: usize,
}

/// Immutable route engine composed of the three datasets.
#[derive(Debug, Clone)]
pub struct Atlas {
    borders: BorderTable,
    capitals: CapitalDistanceTable,
    aliases: NameAliasTable,
    graph: Graph,
}

/// Load all three datasets and assemble an [`Atlas`].
///
/// Loading is sequential and completes before the atlas is returned.
pub fn load_atlas(paths: &DatasetPaths) -> Result<Atlas> {
    paths.ensure_exists()?;
    let borders = BorderTable::from_path(&paths.borders)?;
    let capitals = CapitalDistanceTable::from_path(&paths.capitals)?;
    let aliases = NameAliasTable::from_path(&paths.state_names)?;

    let atlas = Atlas::new(borders, capitals, aliases);
    let stats = atlas.stats();
    info!(
        countries = stats.countries,
        traversable_edges = stats.traversable_edges,
        "country datasets loaded"
    );
    Ok(atlas)
}

impl Atlas {
    /// Assemble an atlas from already loaded tables.
    pub fn new(
        borders: BorderTable,
        capitals: CapitalDistanceTable,
        aliases: NameAliasTable,
    ) -> Self {
        let graph = build_graph(&borders, &capitals, &aliases);
        Self {
            borders,
            capitals,
            aliases,
            graph,
        }
    }

    /// The border table as loaded, before any capital or alias filtering.
    pub fn borders(&self) -> &BorderTable {
        &self.borders
    }

    /// Whether `country` has a border record.
    pub fn has_country(&self, country: &str) -> bool {
        self.borders.has_country(country)
    }

    /// Every country with a border record, sorted by name.
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self.borders.countries().collect();
        countries.sort_unstable();
        countries
    }

    pub fn stats(&self) -> AtlasStats {
        AtlasStats {
            countries: self.borders.len(),
            border_edges: self.borders.edge_count(),
            traversable_edges: self.graph.edge_count(),
            capital_codes: self.capitals.len(),
            aliases: self.aliases.len(),
        }
    }

    /// Capital-to-capital distance between two bordering countries.
    ///
    /// The checks run in order and stop at the first failure: both countries
    /// have border records, `from`'s record lists `to`, both names resolve to
    /// a code, and a capital distance exists for the code pair.
    pub fn distance(&self, from: &str, to: &str) -> Result<u32> {
        let result = self.checked_distance(from, to);
        if let Err(err) = &result {
            debug!(from, to, error = %err, "distance query failed");
        }
        result
    }

    fn checked_distance(&self, from: &str, to: &str) -> Result<u32> {
        self.require_country(from)?;
        self.require_country(to)?;

        if self.borders.border_km(from, to).is_none() {
            return Err(Error::NoSharedBorder {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let from_code = self.code_of(from)?;
        let to_code = self.code_of(to)?;

        self.capitals
            .distance(from_code, to_code)
            .ok_or_else(|| Error::MissingCapitalDistance {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Shortest route by total capital distance, rendered as
    /// `A --> B (N km)` lines using the land-border length of each hop.
    ///
    /// Returns an empty list when either country is unknown, when no route
    /// exists, and when `from == to`.
    pub fn find_path(&self, from: &str, to: &str) -> Vec<String> {
        match self.plan_route(from, to, RouteAlgorithm::Dijkstra) {
            Ok(plan) => plan.render_hops(),
            Err(err) => {
                debug!(from, to, error = %err, "no path");
                Vec::new()
            }
        }
    }

    /// Plan a route with the requested algorithm.
    ///
    /// A route from a country to itself is a plan with no hops.
    pub fn plan_route(&self, from: &str, to: &str, algorithm: RouteAlgorithm) -> Result<RoutePlan> {
        self.require_country(from)?;
        self.require_country(to)?;

        let route = match algorithm {
            RouteAlgorithm::Dijkstra => find_route_dijkstra(&self.graph, from, to),
            RouteAlgorithm::Bfs => find_route_bfs(&self.graph, from, to),
        };
        let route_not_found = || Error::RouteNotFound {
            start: from.to_string(),
            goal: to.to_string(),
        };
        let route = route.ok_or_else(route_not_found)?;

        let hops = route
            .windows(2)
            .map(|pair| self.hop(&pair[0], &pair[1]))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(route_not_found)?;

        Ok(RoutePlan::new(algorithm, from, to, hops))
    }

    fn hop(&self, from: &str, to: &str) -> Option<RouteHop> {
        let edge = self
            .graph
            .neighbours(from)
            .iter()
            .find(|edge| edge.target == to)?;
        Some(RouteHop {
            from: from.to_string(),
            to: to.to_string(),
            border_km: edge.border_km,
            capital_km: edge.capital_km,
        })
    }

    /// Countries whose names resemble `name`, best match first.
    pub fn suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .borders
            .countries()
            .map(|country| {
                let score = strsim::jaro_winkler(&needle, &country.to_lowercase());
                (score, country)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, country)| country.to_string())
            .collect()
    }

    fn require_country(&self, name: &str) -> Result<()> {
        if self.borders.has_country(name) {
            return Ok(());
        }
        Err(Error::UnknownCountry {
            name: name.to_string(),
            suggestions: self.suggestions(name, MAX_SUGGESTIONS),
        })
    }

    fn code_of(&self, name: &str) -> Result<&str> {
        self.aliases
            .code_of(name)
            .ok_or_else(|| Error::MissingCountryCode {
                name: name.to_string(),
            })
    }
}
