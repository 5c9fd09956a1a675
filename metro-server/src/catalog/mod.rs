//! Station catalog: the finalized station data the graph is built from.
//!
//! The catalog maps each line to its ordered list of station records. It is
//! assembled once at startup, either from a prepared catalog file or from a
//! raw station feed, optionally with corrections applied, and then handed to
//! [`crate::graph::TransitGraph::build`]. Nothing in here touches the
//! network.

mod corrections;
mod error;
mod feed;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{LineCode, RawCoordinate, StationId};

pub use corrections::{Correction, load_corrections};
pub use error::CatalogError;
pub use feed::{FeedDetail, FeedStation, StationFeed};

/// One station as listed on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub latitude: RawCoordinate,
    pub longitude: RawCoordinate,
    /// 1-based position on the line as reported by the source.
    pub order: u32,
}

impl StationRecord {
    /// Create a record with numeric coordinates.
    pub fn new(id: i64, name: &str, latitude: f64, longitude: f64, order: u32) -> Self {
        Self {
            id: StationId(id),
            name: name.to_string(),
            latitude: RawCoordinate::Number(latitude),
            longitude: RawCoordinate::Number(longitude),
            order,
        }
    }
}

/// Stations grouped by line.
///
/// Lines iterate in declaration order of [`LineCode`]; within a line,
/// records keep the order they were supplied in, which is the order used to
/// derive adjacency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationCatalog {
    lines: BTreeMap<LineCode, Vec<StationRecord>>,
}

impl StationCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stations of a line, replacing any previous list.
    pub fn insert_line(&mut self, line: LineCode, stations: Vec<StationRecord>) {
        self.lines.insert(line, stations);
    }

    /// Builder-style variant of [`insert_line`](Self::insert_line).
    pub fn with_line(mut self, line: LineCode, stations: Vec<StationRecord>) -> Self {
        self.insert_line(line, stations);
        self
    }

    /// Stations of a single line, if the line is present.
    pub fn line(&self, line: LineCode) -> Option<&[StationRecord]> {
        self.lines.get(&line).map(|v| v.as_slice())
    }

    pub(crate) fn line_mut(&mut self, line: LineCode) -> Option<&mut Vec<StationRecord>> {
        self.lines.get_mut(&line)
    }

    /// Iterate over lines in declaration order.
    pub fn lines(&self) -> impl Iterator<Item = (LineCode, &[StationRecord])> {
        self.lines.iter().map(|(line, s)| (*line, s.as_slice()))
    }

    /// Number of line groups in the catalog, including empty ones.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of station records across all lines.
    ///
    /// Interchanges are counted once per line they appear on.
    pub fn record_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Check if the catalog has no records at all.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json_str(&text).map_err(|e| CatalogError::json(path, e))
    }

    /// Load a raw station feed file and convert it to a catalog.
    pub fn load_feed(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let feed: StationFeed =
            serde_json::from_str(&text).map_err(|e| CatalogError::json(path, e))?;
        Ok(Self::from_feed(feed))
    }

    /// Apply corrections in order, returning how many changed the catalog.
    pub fn apply(&mut self, corrections: &[Correction]) -> usize {
        corrections.iter().filter(|c| c.apply_to(self)).count()
    }
}
