//! Travel-time model for route legs.

/// Parameters used to turn leg distances into travel times.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// Assumed average speed of every line (km/h).
    pub average_speed_kmh: f64,

    /// Fixed allowance added to every leg for stopping and changing (minutes).
    pub dwell_mins: f64,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(average_speed_kmh: f64, dwell_mins: f64) -> Self {
        Self {
            average_speed_kmh,
            dwell_mins,
        }
    }

    /// Unrounded travel time in minutes for a leg of the given length.
    pub fn leg_time_mins(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh * 60.0 + self.dwell_mins
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
            dwell_mins: 1.0,
        }
    }
}
