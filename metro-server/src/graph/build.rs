//! Graph construction.

use tracing::info;

use super::{BuildError, Edge, LineStop, NodeIx, Station, TransitGraph};
use crate::catalog::{StationCatalog, StationRecord};
use crate::domain::{Coordinate, LineCode};
use crate::geo::haversine_km;

impl TransitGraph {
    /// Build the graph from a catalog.
    ///
    /// Lines are processed in declaration order. For each record the node
    /// with that id is added, or overwritten if an earlier line already
    /// added it, so an interchange node ends up with the name, position and
    /// line tag of the last line listing it. Each pair of consecutive
    /// records on a line becomes an edge weighted by the haversine distance
    /// between the two records' own coordinates.
    ///
    /// If two lines both connect the same pair of stations, the shorter
    /// edge is kept; on an exact tie the earlier line keeps it. Consecutive
    /// records sharing an id produce no edge.
    ///
    /// Fails on the first record with an unusable coordinate.
    pub fn build(catalog: &StationCatalog) -> Result<Self, BuildError> {
        let mut graph = TransitGraph::default();

        for (line, records) in catalog.lines() {
            let mut stops = Vec::with_capacity(records.len());
            let mut nodes = Vec::with_capacity(records.len());

            for record in records {
                let coordinate = Coordinate::parse(&record.latitude, &record.longitude)
                    .map_err(|source| BuildError::InvalidCoordinate {
                        line,
                        id: record.id,
                        source,
                    })?;
                nodes.push(graph.upsert_station(record, coordinate, line));
                stops.push(LineStop {
                    id: record.id,
                    name: record.name.clone(),
                    latitude: coordinate.latitude,
                    longitude: coordinate.longitude,
                    order: record.order,
                });
            }

            for (pair, ix) in stops.windows(2).zip(nodes.windows(2)) {
                let weight = haversine_km(coordinate_of(&pair[0]), coordinate_of(&pair[1]));
                graph.add_edge(ix[0], ix[1], weight, line);
            }

            graph.lines.insert(line, stops);
        }

        info!(
            lines = graph.lines.len(),
            stations = graph.stations.len(),
            edges = graph.edge_count,
            "built transit graph"
        );

        Ok(graph)
    }

    /// Insert a node, or overwrite the attributes of an existing one.
    fn upsert_station(
        &mut self,
        record: &StationRecord,
        coordinate: Coordinate,
        line: LineCode,
    ) -> NodeIx {
        let station = Station {
            id: record.id,
            name: record.name.clone(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            line,
        };

        match self.by_id.get(&record.id) {
            Some(&ix) => {
                self.stations[ix] = station;
                ix
            }
            None => {
                let ix = self.stations.len();
                self.stations.push(station);
                self.adjacency.push(Vec::new());
                self.by_id.insert(record.id, ix);
                ix
            }
        }
    }

    fn add_edge(&mut self, a: NodeIx, b: NodeIx, weight_km: f64, line: LineCode) {
        if a == b {
            return;
        }

        if let Some(existing) = self.adjacency[a].iter().position(|e| e.to == b) {
            if weight_km < self.adjacency[a][existing].weight_km {
                self.adjacency[a][existing] = Edge { to: b, weight_km, line };
                if let Some(back) = self.adjacency[b].iter_mut().find(|e| e.to == a) {
                    *back = Edge { to: a, weight_km, line };
                }
            }
            return;
        }

        self.adjacency[a].push(Edge { to: b, weight_km, line });
        self.adjacency[b].push(Edge { to: a, weight_km, line });
        self.edge_count += 1;
    }
}

fn coordinate_of(stop: &LineStop) -> Coordinate {
    Coordinate {
        latitude: stop.latitude,
        longitude: stop.longitude,
    }
}
