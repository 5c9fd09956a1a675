//! Manual corrections applied on top of source data.
//!
//! Source data is not always right: interchange stations may carry a
//! line-local id instead of the shared one, and some coordinates are off.
//! A corrections file lists fixes to apply, in order, before the graph is
//! built.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{CatalogError, StationCatalog, StationRecord};
use crate::domain::{LineCode, RawCoordinate, StationId};

/// A single fix to the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Correction {
    /// Replace the whole station list of a line.
    ReplaceLine {
        line: LineCode,
        stations: Vec<StationRecord>,
    },

    /// Overwrite fields of the station at `index` (0-based) on a line.
    ///
    /// Has no effect when the line is shorter than `index + 1`.
    PatchStation {
        line: LineCode,
        index: usize,
        latitude: Option<RawCoordinate>,
        longitude: Option<RawCoordinate>,
        id: Option<StationId>,
    },
}

impl Correction {
    /// Apply to a catalog. Returns whether anything changed.
    pub(super) fn apply_to(&self, catalog: &mut StationCatalog) -> bool {
        match self {
            Correction::ReplaceLine { line, stations } => {
                catalog.insert_line(*line, stations.clone());
                true
            }
            Correction::PatchStation {
                line,
                index,
                latitude,
                longitude,
                id,
            } => {
                let Some(station) = catalog
                    .line_mut(*line)
                    .and_then(|stations| stations.get_mut(*index))
                else {
                    debug!(%line, index, "patch target not present, skipping");
                    return false;
                };
                if let Some(lat) = latitude {
                    station.latitude = lat.clone();
                }
                if let Some(lon) = longitude {
                    station.longitude = lon.clone();
                }
                if let Some(id) = id {
                    station.id = *id;
                }
                true
            }
        }
    }
}

/// Load a corrections file: a JSON array of corrections.
pub fn load_corrections(path: impl AsRef<Path>) -> Result<Vec<Correction>, CatalogError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CatalogError::json(path, e))
}
