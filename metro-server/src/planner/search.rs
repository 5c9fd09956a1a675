//! Dijkstra route search.
//!
//! Finds the shortest route between two stations and assembles the legs,
//! per-leg times and totals. All scratch state (distance table, predecessor
//! table, heap) is local to a call, so one planner can serve any number of
//! concurrent queries against the same graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use crate::domain::{LineCode, StationId};
use crate::graph::{Edge, NodeIx, Station, TransitGraph};

use super::config::RouteConfig;

/// Why no route could be produced.
///
/// Both variants are ordinary "not found" outcomes, not faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The station id is not in the graph
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Both stations exist but lie in disconnected parts of the network
    #[error("no route between stations {from} and {to}")]
    NoPath { from: StationId, to: StationId },
}

/// One traversed edge of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from_id: StationId,
    pub from_name: String,
    pub to_id: StationId,
    pub to_name: String,
    pub line: LineCode,
    /// Kilometres, rounded to 2 decimal places.
    pub distance: f64,
    /// Minutes, rounded to 1 decimal place.
    pub time: f64,
}

/// A planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Station ids from source to target inclusive.
    pub path: Vec<StationId>,

    /// Stations along the path.
    pub stations: Vec<Station>,

    /// One leg per consecutive pair in `path`.
    #[serde(rename = "route_details")]
    pub legs: Vec<RouteLeg>,

    /// Sum of unrounded leg distances, rounded once to 2 decimal places.
    pub total_distance: f64,

    /// Sum of unrounded leg times, rounded once to 1 decimal place.
    pub total_time: f64,

    /// Number of stations on the path, counting both ends.
    pub num_stations: usize,
}

/// Route planner over a transit graph.
pub struct RoutePlanner<'a> {
    graph: &'a TransitGraph,
    config: &'a RouteConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a TransitGraph, config: &'a RouteConfig) -> Self {
        Self { graph, config }
    }

    /// Find the shortest route from `from` to `to`.
    ///
    /// Equal-cost alternatives are resolved the same way on every call: a
    /// station's predecessor is only replaced by a strictly shorter
    /// candidate, and queue ties go to the lower node index.
    pub fn shortest_path(&self, from: StationId, to: StationId) -> Result<Route, RouteError> {
        let source = self
            .graph
            .node_index(from)
            .ok_or(RouteError::UnknownStation(from))?;
        let target = self
            .graph
            .node_index(to)
            .ok_or(RouteError::UnknownStation(to))?;

        let steps = dijkstra(self.graph, source, target).ok_or(RouteError::NoPath { from, to })?;
        let route = self.assemble(source, &steps);

        debug!(
            %from,
            %to,
            stations = route.num_stations,
            distance_km = route.total_distance,
            "found route"
        );

        Ok(route)
    }

    /// Turn a source node plus the edges walked from it into a route.
    fn assemble(&self, source: NodeIx, steps: &[Edge]) -> Route {
        let mut nodes = Vec::with_capacity(steps.len() + 1);
        nodes.push(source);
        nodes.extend(steps.iter().map(|e| e.to));

        let mut legs = Vec::with_capacity(steps.len());
        let mut total_km = 0.0;
        let mut total_mins = 0.0;

        for (pair, edge) in nodes.windows(2).zip(steps) {
            let from = self.graph.station_at(pair[0]);
            let to = self.graph.station_at(pair[1]);
            let time = self.config.leg_time_mins(edge.weight_km);

            total_km += edge.weight_km;
            total_mins += time;

            legs.push(RouteLeg {
                from_id: from.id,
                from_name: from.name.clone(),
                to_id: to.id,
                to_name: to.name.clone(),
                line: edge.line,
                distance: round_to(edge.weight_km, 2),
                time: round_to(time, 1),
            });
        }

        let stations: Vec<Station> = nodes
            .iter()
            .map(|&ix| self.graph.station_at(ix).clone())
            .collect();

        Route {
            path: stations.iter().map(|s| s.id).collect(),
            num_stations: stations.len(),
            stations,
            legs,
            total_distance: round_to(total_km, 2),
            total_time: round_to(total_mins, 1),
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the cheapest node first,
/// and the lower node index among equal costs.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: f64,
    node: NodeIx,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Shortest path by total edge weight.
///
/// Returns the edges walked from `source` to `target` in order (empty when
/// they are the same node), or `None` if `target` is unreachable.
fn dijkstra(graph: &TransitGraph, source: NodeIx, target: NodeIx) -> Option<Vec<Edge>> {
    let n = graph.station_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<(NodeIx, Edge)>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(QueueEntry {
        cost: 0.0,
        node: source,
    });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if node == target {
            break;
        }

        for edge in graph.neighbors(node) {
            if settled[edge.to] {
                continue;
            }
            let candidate = cost + edge.weight_km;
            if candidate < dist[edge.to] {
                dist[edge.to] = candidate;
                prev[edge.to] = Some((node, *edge));
                heap.push(QueueEntry {
                    cost: candidate,
                    node: edge.to,
                });
            }
        }
    }

    if !settled[target] {
        return None;
    }

    let mut steps = Vec::new();
    let mut at = target;
    while let Some((before, edge)) = prev[at] {
        steps.push(edge);
        at = before;
    }
    steps.reverse();
    Some(steps)
}

/// Round half away from zero to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
