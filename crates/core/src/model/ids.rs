use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a design pattern in the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatternId(u32);

impl PatternId {
    /// Creates a new `PatternId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `PatternId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError;

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse PatternId from string")
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for PatternId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(PatternId::new).map_err(|_| ParseIdError)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_id_display() {
        let id = PatternId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn pattern_id_from_str() {
        let id: PatternId = "23".parse().unwrap();
        assert_eq!(id, PatternId::new(23));
    }

    #[test]
    fn pattern_id_from_str_invalid() {
        let result = "not-a-number".parse::<PatternId>();
        assert!(result.is_err());
    }

    #[test]
    fn pattern_id_ordering_follows_value() {
        assert!(PatternId::new(1) < PatternId::new(2));
    }

    #[test]
    fn pattern_id_roundtrip() {
        let original = PatternId::new(7);
        let deserialized: PatternId = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
