//! Line identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an unknown line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line code: {code}")]
pub struct InvalidLineCode {
    code: String,
}

/// A line of the network.
///
/// The set of lines is fixed at build time. Declaration order matters: it
/// is the order in which lines are fed into graph construction, so it
/// decides which line tag an interchange node ends up with.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineCode;
///
/// let m1a: LineCode = "M1A".parse().unwrap();
/// assert_eq!(m1a, LineCode::M1A);
/// assert_eq!(m1a.color(), "#6C757D");
///
/// // Codes are case-sensitive
/// assert!("m1a".parse::<LineCode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineCode {
    M5,
    M4,
    M8,
    /// Marmaray commuter rail.
    MM,
    M2,
    M7,
    M3,
    T1,
    T5,
    M1A,
    M1B,
    M6,
    M9,
    M11,
    T4,
    F1,
    F4,
}

impl LineCode {
    /// Every line, in declaration order.
    pub const ALL: [LineCode; 17] = [
        LineCode::M5,
        LineCode::M4,
        LineCode::M8,
        LineCode::MM,
        LineCode::M2,
        LineCode::M7,
        LineCode::M3,
        LineCode::T1,
        LineCode::T5,
        LineCode::M1A,
        LineCode::M1B,
        LineCode::M6,
        LineCode::M9,
        LineCode::M11,
        LineCode::T4,
        LineCode::F1,
        LineCode::F4,
    ];

    /// Returns the line code as it appears in data files and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCode::M5 => "M5",
            LineCode::M4 => "M4",
            LineCode::M8 => "M8",
            LineCode::MM => "MM",
            LineCode::M2 => "M2",
            LineCode::M7 => "M7",
            LineCode::M3 => "M3",
            LineCode::T1 => "T1",
            LineCode::T5 => "T5",
            LineCode::M1A => "M1A",
            LineCode::M1B => "M1B",
            LineCode::M6 => "M6",
            LineCode::M9 => "M9",
            LineCode::M11 => "M11",
            LineCode::T4 => "T4",
            LineCode::F1 => "F1",
            LineCode::F4 => "F4",
        }
    }

    /// Display colour as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            LineCode::M5 => "#E63946",
            LineCode::M4 => "#1D3557",
            LineCode::M8 => "#2A9D8F",
            LineCode::MM => "#9D4EDD",
            LineCode::M2 => "#F77F00",
            LineCode::M7 => "#06AED5",
            LineCode::M3 => "#8B4513",
            LineCode::T1 => "#FF69B4",
            LineCode::T5 => "#FFD700",
            LineCode::M1A => "#6C757D",
            LineCode::M1B => "#E83283",
            LineCode::M6 => "#90EE90",
            LineCode::M9 => "#008080",
            LineCode::M11 => "#4B0082",
            LineCode::T4 => "#800000",
            LineCode::F1 => "#000080",
            LineCode::F4 => "#808000",
        }
    }
}

impl FromStr for LineCode {
    type Err = InvalidLineCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineCode::ALL
            .iter()
            .find(|line| line.as_str() == s)
            .copied()
            .ok_or_else(|| InvalidLineCode {
                code: s.to_string(),
            })
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LineCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LineCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn parse_every_declared_line() {
        for line in LineCode::ALL {
            assert_eq!(line.as_str().parse::<LineCode>(), Ok(line));
        }
    }

    #[test]
    fn reject_unknown_codes() {
        assert!("M99".parse::<LineCode>().is_err());
        assert!("".parse::<LineCode>().is_err());
        assert!("mm".parse::<LineCode>().is_err());
    }

    #[test]
    fn error_display() {
        let err = "X1".parse::<LineCode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown line code: X1");
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut sorted = LineCode::ALL;
        sorted.sort();
        assert_eq!(sorted, LineCode::ALL);
        assert!(LineCode::M5 < LineCode::F4);
        assert!(LineCode::M1A < LineCode::M1B);
    }

    #[test]
    fn colors_are_distinct() {
        let colors: HashSet<_> = LineCode::ALL.iter().map(|l| l.color()).collect();
        assert_eq!(colors.len(), LineCode::ALL.len());
    }

    #[test]
    fn serde_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(LineCode::MM, 43);
        map.insert(LineCode::M1B, 13);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"MM":43,"M1B":13}"#);

        let back: BTreeMap<LineCode, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn deserialize_rejects_unknown() {
        let result: Result<LineCode, _> = serde_json::from_str(r#""Z9""#);
        assert!(result.is_err());
    }
}
