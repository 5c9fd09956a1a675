//! Domain types for the metro route planner.
//!
//! These are the validated building blocks shared by the catalog, the
//! graph and the serving layer. Validation happens at construction time,
//! so code that holds one of these values can trust it.

mod coord;
mod line;
mod station;

pub use coord::{Axis, Coordinate, InvalidCoordinate, RawCoordinate};
pub use line::{InvalidLineCode, LineCode};
pub use station::StationId;
