//! Snowflake identifiers.

use botlist_error::SnowflakeError;
use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds between the Unix epoch and the platform epoch (2015-01-01T00:00:00Z).
const PLATFORM_EPOCH_MS: u64 = 1_420_070_400_000;

/// A platform-issued 64-bit identifier, serialized on the wire as a decimal
/// string.
///
/// Snowflakes identify bots, users, and guilds. The JSON representation is
/// always a string (`"264811613708746752"`); deserialization rejects anything
/// that does not parse as a decimal `u64`.
///
/// # Examples
///
/// ```
/// use botlist_core::Snowflake;
///
/// let id: Snowflake = "264811613708746752".parse().unwrap();
/// assert_eq!(id.get(), 264811613708746752);
/// assert_eq!(id.to_string(), "264811613708746752");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Create a snowflake from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The numeric value of the snowflake.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The instant the id was issued, recovered from the timestamp bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use botlist_core::Snowflake;
    ///
    /// let id = Snowflake::new(264811613708746752);
    /// assert_eq!(id.created_at().timestamp(), 1483206408);
    /// ```
    pub fn created_at(&self) -> DateTime<Utc> {
        let ms = (self.0 >> 22) + PLATFORM_EPOCH_MS;
        Utc.timestamp_millis_opt(ms as i64).unwrap()
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| SnowflakeError::new(format!("not a decimal snowflake string: {s:?}")))
    }
}

impl std::fmt::Display for Snowflake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a decimal snowflake string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .parse::<u64>()
            .map(Snowflake)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SnowflakeVisitor)
    }
}
