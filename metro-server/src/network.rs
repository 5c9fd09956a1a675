//! The published, query-ready network.
//!
//! A [`Network`] bundles the graph, its name index and the travel-time
//! model. It is built once at startup and then only read, so an
//! `Arc<Network>` can be shared by every request handler without locking.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::StationCatalog;
use crate::domain::{LineCode, StationId};
use crate::graph::{BuildError, LineStop, Station, TransitGraph};
use crate::index::StationIndex;
use crate::planner::{Route, RouteConfig, RouteError, RoutePlanner};

/// Summary counts for the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    /// Line groups present in the source catalog, including empty ones.
    pub total_lines: usize,

    /// Station records across all lines; interchanges count once per line.
    pub total_stations: usize,

    /// Records per line.
    pub lines: BTreeMap<LineCode, usize>,
}

/// Immutable network ready to answer queries.
#[derive(Debug, Clone)]
pub struct Network {
    graph: TransitGraph,
    index: StationIndex,
    config: RouteConfig,
}

impl Network {
    /// Build the network from a finalized catalog.
    pub fn build(catalog: &StationCatalog, config: RouteConfig) -> Result<Self, BuildError> {
        let graph = TransitGraph::build(catalog)?;
        let index = StationIndex::new(&graph);
        Ok(Self {
            graph,
            index,
            config,
        })
    }

    /// The underlying graph.
    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Stations grouped by line, in line declaration order.
    pub fn stations_by_line(&self) -> &BTreeMap<LineCode, Vec<LineStop>> {
        self.graph.lines()
    }

    /// Display colour of every declared line.
    pub fn lines(&self) -> BTreeMap<LineCode, &'static str> {
        LineCode::ALL
            .iter()
            .map(|line| (*line, line.color()))
            .collect()
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.index.get(&self.graph, id)
    }

    /// Search stations by name, ascending by id.
    pub fn search(&self, query: &str) -> Vec<&Station> {
        self.index.search(&self.graph, query)
    }

    /// Shortest route between two stations.
    pub fn route(&self, from: StationId, to: StationId) -> Result<Route, RouteError> {
        RoutePlanner::new(&self.graph, &self.config).shortest_path(from, to)
    }

    /// Summary counts.
    pub fn stats(&self) -> NetworkStats {
        let lines: BTreeMap<LineCode, usize> = self
            .graph
            .lines()
            .iter()
            .map(|(line, stops)| (*line, stops.len()))
            .collect();

        NetworkStats {
            total_lines: lines.len(),
            total_stations: lines.values().sum(),
            lines,
        }
    }
}
