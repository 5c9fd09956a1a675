//! Graph construction error types.

use crate::domain::{InvalidCoordinate, LineCode, StationId};

/// Errors that abort graph construction.
///
/// No partially built graph is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A station record carries an unusable coordinate
    #[error("station {id} on line {line}: {source}")]
    InvalidCoordinate {
        line: LineCode,
        id: StationId,
        #[source]
        source: InvalidCoordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Axis;

    #[test]
    fn error_display() {
        let err = BuildError::InvalidCoordinate {
            line: LineCode::T4,
            id: StationId(156),
            source: InvalidCoordinate::NotNumeric {
                axis: Axis::Latitude,
                value: "n/a".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "station 156 on line T4: latitude \"n/a\" is not a number"
        );
    }
}
