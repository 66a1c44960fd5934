//! Roadtrip library entry points.
//!
//! This crate loads the three country datasets (land borders, capital
//! distances, and name/code aliases), fuses them into a routing graph, and
//! answers distance and shortest-path queries. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod aliases;
pub mod atlas;
pub mod borders;
pub mod capitals;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;

pub use aliases::NameAliasTable;
pub use atlas::{load_atlas, Atlas, AtlasStats, RouteAlgorithm};
pub use borders::BorderTable;
pub use capitals::CapitalDistanceTable;
pub use dataset::{default_data_dir, resolve_data_dir, resolve_dataset, DatasetPaths};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph};
pub use output::{RouteHop, RoutePlan};
pub use path::{find_route_bfs, find_route_dijkstra};
