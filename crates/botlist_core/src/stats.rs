//! Bot server-count statistics.

use crate::Validate;
use botlist_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Stats retrieved about a bot.
///
/// Response body of a stats fetch. `shards` is always delivered, possibly
/// empty; `server_count` and `shard_count` are only present once the bot has
/// posted them.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct BotStats {
    /// Servers the bot is in, per shard.
    shards: Vec<u64>,
    /// Total servers the bot is in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    server_count: Option<u64>,
    /// Shards the bot has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    shard_count: Option<u64>,
}

impl Validate for BotStats {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(shard_count) = self.shard_count {
            let len = self.shards.len() as u64;
            if len != shard_count {
                return Err(ValidationError::new(
                    ValidationErrorKind::ShardCountMismatch {
                        expected: shard_count,
                        actual: len,
                    },
                ));
            }
        }
        Ok(())
    }
}

/// The server count carried by a stats post.
///
/// The wire format accepts either a single number or a per-shard list under
/// the same `server_count` key, and the two shapes mean different things: a
/// scalar is a whole-bot total (or one shard's count when `shard_id`
/// accompanies it), while a list is the full per-shard breakdown and makes
/// the platform ignore `shard_id`. The untagged representation preserves the
/// wire shape while keeping the two meanings distinct in the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerCount {
    /// A single count: the whole bot, or one shard when `shard_id` is set.
    Exact(u64),
    /// The full per-shard list.
    PerShard(Vec<u64>),
}

impl ServerCount {
    /// Total servers across the whole bot.
    pub fn total(&self) -> u64 {
        match self {
            ServerCount::Exact(count) => *count,
            ServerCount::PerShard(counts) => counts.iter().sum(),
        }
    }
}

impl From<u64> for ServerCount {
    fn from(count: u64) -> Self {
        ServerCount::Exact(count)
    }
}

impl From<Vec<u64>> for ServerCount {
    fn from(counts: Vec<u64>) -> Self {
        ServerCount::PerShard(counts)
    }
}

/// Stats a bot submits about itself.
///
/// Request body of a stats submission. Built through the scenario
/// constructors rather than field-by-field, since the field combinations
/// carry meaning: a shard-scoped post must pair `shard_id` with a scalar
/// `server_count`.
///
/// # Examples
///
/// ```
/// use botlist_core::StatsUpdate;
///
/// let whole_bot = StatsUpdate::servers(4250);
/// let one_shard = StatsUpdate::for_shard(3, 530, 8);
/// let sharded = StatsUpdate::per_shard(vec![520, 530, 540]);
/// assert_eq!(sharded.server_count().total(), 1590);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StatsUpdate {
    /// Servers the bot is in. A list acts as the per-shard breakdown.
    server_count: ServerCount,
    /// Servers the bot is in, per shard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shards: Option<Vec<u64>>,
    /// Zero-indexed id of the posting shard. Makes `server_count` shard-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shard_id: Option<u64>,
    /// Shards the bot has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shard_count: Option<u64>,
}

impl StatsUpdate {
    /// A whole-bot post: total server count, no shard information.
    pub fn servers(count: u64) -> Self {
        Self {
            server_count: ServerCount::Exact(count),
            shards: None,
            shard_id: None,
            shard_count: None,
        }
    }

    /// A per-shard post: the full breakdown in one submission.
    pub fn per_shard(counts: Vec<u64>) -> Self {
        Self {
            server_count: ServerCount::PerShard(counts),
            shards: None,
            shard_id: None,
            shard_count: None,
        }
    }

    /// A shard-scoped post: one shard reporting its own server count.
    pub fn for_shard(shard_id: u64, servers: u64, shard_count: u64) -> Self {
        Self {
            server_count: ServerCount::Exact(servers),
            shards: None,
            shard_id: Some(shard_id),
            shard_count: Some(shard_count),
        }
    }
}

impl Validate for StatsUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        // A shard-scoped post means "this count is for shard N alone"; a
        // per-shard list in that position is contradictory.
        if self.shard_id.is_some() {
            if let ServerCount::PerShard(_) = self.server_count {
                return Err(ValidationError::new(ValidationErrorKind::ShardScopedList));
            }
        }
        Ok(())
    }
}
