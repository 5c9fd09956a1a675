//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Error returned when a coordinate value cannot be accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// The value is not a decimal number
    #[error("{axis} {value:?} is not a number")]
    NotNumeric { axis: Axis, value: String },

    /// The value is NaN or infinite
    #[error("{axis} is not finite")]
    NotFinite { axis: Axis },

    /// The value is outside the valid range for its axis
    #[error("{axis} {value} is out of range")]
    OutOfRange { axis: Axis, value: f64 },
}

/// A coordinate value as supplied by a data source.
///
/// Upstream data carries coordinates either as JSON numbers or as decimal
/// strings; both are accepted and checked when the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    fn to_f64(&self, axis: Axis) -> Result<f64, InvalidCoordinate> {
        match self {
            RawCoordinate::Number(v) => Ok(*v),
            RawCoordinate::Text(s) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| InvalidCoordinate::NotNumeric {
                        axis,
                        value: s.clone(),
                    })
            }
        }
    }
}

impl From<f64> for RawCoordinate {
    fn from(v: f64) -> Self {
        RawCoordinate::Number(v)
    }
}

impl From<&str> for RawCoordinate {
    fn from(s: &str) -> Self {
        RawCoordinate::Text(s.to_string())
    }
}

/// A validated latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use metro_server::domain::{Coordinate, RawCoordinate};
///
/// let c = Coordinate::new(41.0055971704, 28.9513306172).unwrap();
/// assert_eq!(c.latitude, 41.0055971704);
///
/// let parsed = Coordinate::parse(&"41.0".into(), &RawCoordinate::Number(29.0)).unwrap();
/// assert_eq!(parsed.longitude, 29.0);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        check(Axis::Latitude, latitude, 90.0)?;
        check(Axis::Longitude, longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a coordinate from raw source values.
    pub fn parse(
        latitude: &RawCoordinate,
        longitude: &RawCoordinate,
    ) -> Result<Self, InvalidCoordinate> {
        let lat = latitude.to_f64(Axis::Latitude)?;
        let lon = longitude.to_f64(Axis::Longitude)?;
        Self::new(lat, lon)
    }
}

fn check(axis: Axis, value: f64, limit: f64) -> Result<(), InvalidCoordinate> {
    if !value.is_finite() {
        return Err(InvalidCoordinate::NotFinite { axis });
    }
    if value.abs() > limit {
        return Err(InvalidCoordinate::OutOfRange { axis, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_and_numbers() {
        let c = Coordinate::parse(&"40.784181".into(), &"29.3935358".into()).unwrap();
        assert_eq!(c.latitude, 40.784181);
        assert_eq!(c.longitude, 29.3935358);

        let c = Coordinate::parse(&RawCoordinate::Number(41.0), &" 28.9 ".into()).unwrap();
        assert_eq!(c.longitude, 28.9);
    }

    #[test]
    fn reject_non_numeric() {
        let err = Coordinate::parse(&"".into(), &"29.0".into()).unwrap_err();
        assert_eq!(
            err,
            InvalidCoordinate::NotNumeric {
                axis: Axis::Latitude,
                value: String::new(),
            }
        );

        let err = Coordinate::parse(&"41.0".into(), &"east".into()).unwrap_err();
        assert!(matches!(
            err,
            InvalidCoordinate::NotNumeric {
                axis: Axis::Longitude,
                ..
            }
        ));
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(-90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn reject_non_finite() {
        assert_eq!(
            Coordinate::new(f64::NAN, 0.0),
            Err(InvalidCoordinate::NotFinite {
                axis: Axis::Latitude
            })
        );
        assert!(Coordinate::parse(&"41.0".into(), &"inf".into()).is_err());
    }

    #[test]
    fn error_display() {
        let err = InvalidCoordinate::OutOfRange {
            axis: Axis::Latitude,
            value: 123.0,
        };
        assert_eq!(err.to_string(), "latitude 123 is out of range");

        let err = InvalidCoordinate::NotNumeric {
            axis: Axis::Longitude,
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "longitude \"x\" is not a number");
    }

    #[test]
    fn raw_coordinate_deserializes_both_shapes() {
        let n: RawCoordinate = serde_json::from_str("41.5").unwrap();
        assert_eq!(n, RawCoordinate::Number(41.5));

        let t: RawCoordinate = serde_json::from_str(r#""41.5""#).unwrap();
        assert_eq!(t, RawCoordinate::Text("41.5".into()));
    }
}
