//! Shortest-path route planning.
//!
//! Answers "how do I get from station A to station B" over the transit
//! graph. Routes minimise total distance using Dijkstra's algorithm; travel
//! times are derived from distances afterwards and never steer the search.

mod config;
mod search;

pub use config::RouteConfig;
pub use search::{Route, RouteError, RouteLeg, RoutePlanner};
