//! Station identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a physical station.
///
/// Ids are opaque keys: they need not be positive or contiguous. An
/// interchange is expressed by the same id appearing under more than one
/// line, which is what joins those lines in the graph.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let yenikapi = StationId(20);
/// assert_eq!(yenikapi.to_string(), "20");
/// assert_eq!(format!("{:?}", yenikapi), "StationId(20)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub i64);

impl StationId {
    /// Returns the raw integer id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        StationId(id)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let id = StationId(161);
        assert_eq!(format!("{}", id), "161");
        assert_eq!(format!("{:?}", id), "StationId(161)");
    }

    #[test]
    fn negative_ids_are_allowed() {
        let id = StationId::from(-7);
        assert_eq!(id.get(), -7);
        assert!(id < StationId(0));
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&StationId(44)).unwrap();
        assert_eq!(json, "44");

        let back: StationId = serde_json::from_str("44").unwrap();
        assert_eq!(back, StationId(44));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId(20));
        assert!(set.contains(&StationId(20)));
        assert!(!set.contains(&StationId(21)));
    }
}
