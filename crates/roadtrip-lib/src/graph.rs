use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::aliases::NameAliasTable;
use crate::borders::BorderTable;
use crate::capitals::CapitalDistanceTable;

/// Traversable edge within the routing graph.
///
/// `capital_km` is the search weight; `border_km` is the land-border length
/// shown when the hop is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: String,
    pub capital_km: u32,
    pub border_km: u32,
}

/// Graph structure used by pathfinding algorithms.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
}

impl Graph {
    /// Return the traversable edges leaving `country`.
    pub fn neighbours(&self, country: &str) -> &[Edge] {
        self.adjacency
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `country` is a node of the graph.
    pub fn contains(&self, country: &str) -> bool {
        self.adjacency.contains_key(country)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed traversable edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Fuse the three tables into a routing graph.
///
/// Every country with a border record becomes a node. An edge `u -> v` is kept
/// only when `v` is listed in `u`'s border record, both names resolve to a
/// code, and a capital distance exists for that code pair. Edges are ordered by
/// target name so relaxation order is reproducible.
pub fn build_graph(
    borders: &BorderTable,
    capitals: &CapitalDistanceTable,
    aliases: &NameAliasTable,
) -> Graph {
    let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::with_capacity(borders.len());
    let mut dropped = 0usize;

    for country in borders.countries() {
        let source_code = aliases.code_of(country);
        let mut edges: Vec<Edge> = borders
            .neighbors(country)
            .into_iter()
            .flatten()
            .filter_map(|(neighbor, &border_km)| {
                let edge = source_code
                    .zip(aliases.code_of(neighbor))
                    .and_then(|(from, to)| capitals.distance(from, to))
                    .map(|capital_km| Edge {
                        target: neighbor.clone(),
                        capital_km,
                        border_km,
                    });
                if edge.is_none() {
                    dropped += 1;
                }
                edge
            })
            .collect();
        edges.sort_by(|a, b| a.target.cmp(&b.target));
        adjacency.insert(country.to_string(), edges);
    }

    let graph = Graph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dropped,
        "built routing graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (BorderTable, CapitalDistanceTable, NameAliasTable) {
        let borders = BorderTable::parse(
            "Alpha = Beta 10 km; Gamma 30 km\nBeta = Alpha 10 km; Gamma 20 km\nGamma = Beta 20 km",
        );
        let mut capitals = CapitalDistanceTable::default();
        capitals.insert("ALP", "BET", 15);
        capitals.insert("BET", "GAM", 25);
        let mut aliases = NameAliasTable::default();
        aliases.insert("Alpha", "ALP");
        aliases.insert("Beta", "BET");
        aliases.insert("Gamma", "GAM");
        (borders, capitals, aliases)
    }

    #[test]
    fn edges_carry_both_metrics() {
        let (borders, capitals, aliases) = tables();
        let graph = build_graph(&borders, &capitals, &aliases);

        assert_eq!(
            graph.neighbours("Beta"),
            [
                Edge {
                    target: "Alpha".to_string(),
                    capital_km: 15,
                    border_km: 10,
                },
                Edge {
                    target: "Gamma".to_string(),
                    capital_km: 25,
                    border_km: 20,
                },
            ]
        );
    }

    #[test]
    fn border_without_capital_distance_is_not_traversable() {
        let (borders, capitals, aliases) = tables();
        let graph = build_graph(&borders, &capitals, &aliases);

        let targets: Vec<_> = graph
            .neighbours("Alpha")
            .iter()
            .map(|edge| edge.target.as_str())
            .collect();
        assert_eq!(targets, vec!["Beta"]);
    }

    #[test]
    fn unresolved_code_isolates_country_but_keeps_node() {
        let (borders, capitals, _) = tables();
        let mut aliases = NameAliasTable::default();
        aliases.insert("Alpha", "ALP");
        aliases.insert("Beta", "BET");
        let graph = build_graph(&borders, &capitals, &aliases);

        assert!(graph.contains("Gamma"));
        assert!(graph.neighbours("Gamma").is_empty());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}
