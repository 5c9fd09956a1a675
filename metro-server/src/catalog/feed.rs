//! Raw station feed conversion.
//!
//! The upstream station service publishes a flat list of stations, each
//! tagged with the name of its line. Only stations on declared lines are
//! kept; everything else in the feed is ignored.

use serde::Deserialize;
use tracing::debug;

use super::{StationCatalog, StationRecord};
use crate::domain::{LineCode, RawCoordinate, StationId};

/// Top-level feed document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationFeed {
    pub data: Vec<FeedStation>,
}

/// One station entry in the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedStation {
    pub id: StationId,
    pub name: String,
    pub line_name: String,
    pub order: u32,
    #[serde(default)]
    pub detail_info: FeedDetail,
}

/// Location details of a feed station. Either coordinate may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedDetail {
    pub latitude: Option<RawCoordinate>,
    pub longitude: Option<RawCoordinate>,
}

impl StationCatalog {
    /// Build a catalog from a station feed.
    ///
    /// Every declared line gets an entry, possibly empty. Stations keep feed
    /// order within their line. Missing coordinates are carried as empty
    /// text so that the graph build rejects them rather than guessing.
    pub fn from_feed(feed: StationFeed) -> Self {
        let mut catalog = StationCatalog::new();
        for line in LineCode::ALL {
            catalog.insert_line(line, Vec::new());
        }

        let mut skipped = 0usize;
        for station in feed.data {
            let Ok(line) = station.line_name.parse::<LineCode>() else {
                skipped += 1;
                continue;
            };
            let missing = || RawCoordinate::Text(String::new());
            let record = StationRecord {
                id: station.id,
                name: station.name,
                latitude: station.detail_info.latitude.unwrap_or_else(missing),
                longitude: station.detail_info.longitude.unwrap_or_else(missing),
                order: station.order,
            };
            if let Some(stations) = catalog.line_mut(line) {
                stations.push(record);
            }
        }

        if skipped > 0 {
            debug!(skipped, "ignored feed stations on undeclared lines");
        }

        catalog
    }
}
