//! The transit graph.
//!
//! An undirected, distance-weighted graph with one node per station id and
//! one edge per pair of stations that are adjacent on some line. The graph
//! is built once from a [`StationCatalog`](crate::catalog::StationCatalog)
//! and never mutated afterwards, so it can be shared freely between
//! concurrent queries.

mod build;
mod error;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::{LineCode, StationId};

pub use error::BuildError;

/// Dense index of a node in the graph.
///
/// Indices follow first-seen order during construction.
pub type NodeIx = usize;

/// A station node as retained by the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Line of the record that last wrote this node.
    pub line: LineCode,
}

/// One direction of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeIx,
    /// Great-circle distance in kilometres.
    pub weight_km: f64,
    /// Line the two stations are adjacent on.
    pub line: LineCode,
}

/// A validated station record as listed on its line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStop {
    pub id: StationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub order: u32,
}

/// Immutable station graph.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    stations: Vec<Station>,
    by_id: HashMap<StationId, NodeIx>,
    adjacency: Vec<Vec<Edge>>,
    lines: BTreeMap<LineCode, Vec<LineStop>>,
    edge_count: usize,
}

impl TransitGraph {
    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.node_index(id).map(|ix| &self.stations[ix])
    }

    /// Dense index of a station id, if present.
    pub fn node_index(&self, id: StationId) -> Option<NodeIx> {
        self.by_id.get(&id).copied()
    }

    /// Station at a dense index.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is not an index handed out by this graph.
    pub fn station_at(&self, ix: NodeIx) -> &Station {
        &self.stations[ix]
    }

    /// Edges leaving a node, in insertion order.
    pub fn neighbors(&self, ix: NodeIx) -> &[Edge] {
        self.adjacency.get(ix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The edge between two nodes, if they are adjacent.
    pub fn edge_between(&self, from: NodeIx, to: NodeIx) -> Option<&Edge> {
        self.neighbors(from).iter().find(|e| e.to == to)
    }

    /// All stations, in first-seen order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of distinct station ids.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Validated per-line station lists, in line declaration order.
    pub fn lines(&self) -> &BTreeMap<LineCode, Vec<LineStop>> {
        &self.lines
    }
}
