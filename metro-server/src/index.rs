//! Station lookup by id and by name.

use crate::domain::StationId;
use crate::graph::{NodeIx, Station, TransitGraph};

/// Name search over the stations of a graph.
///
/// Names are upper-cased once, when the index is built; results come back
/// in ascending id order.
#[derive(Debug, Clone)]
pub struct StationIndex {
    /// (id, upper-cased name, node) sorted by id.
    entries: Vec<(StationId, String, NodeIx)>,
}

impl StationIndex {
    /// Build the index for a graph.
    pub fn new(graph: &TransitGraph) -> Self {
        let mut entries: Vec<_> = graph
            .stations()
            .iter()
            .enumerate()
            .map(|(ix, s)| (s.id, s.name.to_uppercase(), ix))
            .collect();
        entries.sort_by_key(|(id, _, _)| *id);
        Self { entries }
    }

    /// Exact lookup by id.
    pub fn get<'g>(&self, graph: &'g TransitGraph, id: StationId) -> Option<&'g Station> {
        graph.station(id)
    }

    /// Case-insensitive substring search on station names.
    ///
    /// An empty query matches every station.
    pub fn search<'g>(&self, graph: &'g TransitGraph, query: &str) -> Vec<&'g Station> {
        let needle = query.to_uppercase();
        self.entries
            .iter()
            .filter(|(_, name, _)| name.contains(&needle))
            .map(|&(_, _, ix)| graph.station_at(ix))
            .collect()
    }

    /// Number of indexed stations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StationCatalog, StationRecord};
    use crate::domain::LineCode;

    fn graph() -> TransitGraph {
        let catalog = StationCatalog::new()
            .with_line(
                LineCode::MM,
                vec![
                    StationRecord::new(308, "AYDINTEPE", 40.8508856, 29.295064, 8),
                    StationRecord::new(309, "GUZELYALI", 40.8561729, 29.2860626, 9),
                ],
            )
            .with_line(
                LineCode::M4,
                vec![
                    StationRecord::new(12, "Aydinli", 40.87, 29.30, 1),
                    StationRecord::new(3, "KARTAL", 40.89, 29.19, 2),
                ],
            );
        TransitGraph::build(&catalog).unwrap()
    }

    fn ids(stations: &[&Station]) -> Vec<i64> {
        stations.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn get_by_id() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        let station = index.get(&graph, StationId(309)).unwrap();
        assert_eq!(station.name, "GUZELYALI");
        assert_eq!(station.line, LineCode::MM);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        assert!(index.get(&graph, StationId(0)).is_none());
        assert!(index.get(&graph, StationId(-1)).is_none());
    }

    #[test]
    fn search_is_case_insensitive() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        let upper = index.search(&graph, "AYDIN");
        let lower = index.search(&graph, "aydin");
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&upper), vec![12, 308]);
    }

    #[test]
    fn search_results_ascend_by_id() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        // Build order is M4 then MM, ids come out sorted regardless
        let all = index.search(&graph, "A");
        assert_eq!(ids(&all), vec![3, 12, 308, 309]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        assert_eq!(index.search(&graph, "").len(), index.len());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn no_match_is_empty() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        assert!(index.search(&graph, "ZZZ").is_empty());
    }

    #[test]
    fn repeated_searches_are_identical() {
        let graph = graph();
        let index = StationIndex::new(&graph);

        let first = ids(&index.search(&graph, "al"));
        for _ in 0..5 {
            assert_eq!(ids(&index.search(&graph, "al")), first);
        }
        assert_eq!(first, vec![3, 309]);
    }
}
