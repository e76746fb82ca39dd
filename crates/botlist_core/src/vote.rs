//! Vote records.

use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// Whether a user has voted for a bot in the current window.
///
/// Response body of a vote-check. The wire encodes the answer as an integer
/// for legacy compatibility: `0` means no, any positive value means yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct VoteStatus {
    /// Positive when the user has voted, `0` otherwise.
    voted: u64,
}

impl VoteStatus {
    /// Create a vote status. `0` means the user has not voted.
    pub fn new(voted: u64) -> Self {
        Self { voted }
    }

    /// Whether the user has voted.
    ///
    /// # Examples
    ///
    /// ```
    /// use botlist_core::VoteStatus;
    ///
    /// let status: VoteStatus = serde_json::from_str(r#"{"voted": 1}"#).unwrap();
    /// assert!(status.has_voted());
    /// ```
    pub fn has_voted(&self) -> bool {
        self.voted > 0
    }
}

/// A single voter's public identity.
///
/// The voter-list response body is an ordered sequence of these. `avatar` is
/// a CDN hash, not a full url.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Voter {
    /// Username of the voter.
    username: String,
    /// Snowflake id of the voter.
    id: Snowflake,
    /// Avatar hash of the voter's avatar.
    avatar: String,
}
