//! Reading level value object (basic, intermediate, advanced).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the three parallel complexity tiers of a section.
///
/// Only the odd steps exist; there is no level 2 or 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ReadingLevel {
    Basic = 1,
    #[default]
    Intermediate = 3,
    Advanced = 5,
}

impl ReadingLevel {
    /// The values a level selector offers, in order.
    pub const STEPS: [ReadingLevel; 3] = [
        ReadingLevel::Basic,
        ReadingLevel::Intermediate,
        ReadingLevel::Advanced,
    ];

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for ReadingLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ReadingLevel::Basic),
            3 => Ok(ReadingLevel::Intermediate),
            5 => Ok(ReadingLevel::Advanced),
            other => Err(ValidationError::unsupported(
                "level",
                other.to_string(),
                "1, 3, 5",
            )),
        }
    }
}

/// Parses a query-string level such as `"3"`.
impl FromStr for ReadingLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| ValidationError::unsupported("level", trimmed, "1, 3, 5"))
            .and_then(ReadingLevel::try_from)
    }
}

impl From<ReadingLevel> for u8 {
    fn from(level: ReadingLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_values() {
        assert_eq!("5".parse::<ReadingLevel>().unwrap(), ReadingLevel::Advanced);
        assert_eq!(" 1 ".parse::<ReadingLevel>().unwrap(), ReadingLevel::Basic);
        for bad in ["abc", "300", "-1", "", "2"] {
            assert!(matches!(
                bad.parse::<ReadingLevel>(),
                Err(ValidationError::Unsupported { .. })
            ));
        }
    }

    #[test]
    fn accepts_odd_steps_only() {
        assert_eq!(ReadingLevel::try_from(1).unwrap(), ReadingLevel::Basic);
        assert_eq!(ReadingLevel::try_from(3).unwrap(), ReadingLevel::Intermediate);
        assert_eq!(ReadingLevel::try_from(5).unwrap(), ReadingLevel::Advanced);

        for invalid in [0u8, 2, 4, 6, 255] {
            assert!(ReadingLevel::try_from(invalid).is_err(), "{} accepted", invalid);
        }
    }

    #[test]
    fn default_is_intermediate() {
        assert_eq!(ReadingLevel::default(), ReadingLevel::Intermediate);
    }

    #[test]
    fn steps_are_two_apart() {
        let values: Vec<u8> = ReadingLevel::STEPS.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![1, 3, 5]);
    }

    #[test]
    fn deserializes_from_number() {
        let level: ReadingLevel = serde_json::from_str("5").unwrap();
        assert_eq!(level, ReadingLevel::Advanced);
        assert!(serde_json::from_str::<ReadingLevel>("4").is_err());
        assert_eq!(serde_json::to_string(&ReadingLevel::Basic).unwrap(), "1");
    }
}
