//! Inbound vote webhook bodies.
//!
//! The platform pushes a POST to a registered endpoint when a user votes for
//! a bot or a server listing. These models are the typed entry points for
//! those POST bodies; signature checking and the HTTP surface belong to the
//! receiving framework.

use crate::Snowflake;
use botlist_error::{BotlistResult, JsonError};
use serde::{Deserialize, Serialize};

/// Type of a vote webhook delivery.
///
/// The wire value is always `"upvote"`, except when the listing's test
/// button fires it is `"test"`. No other value is valid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub enum WebhookType {
    /// A real vote.
    #[display("upvote")]
    #[serde(rename = "upvote")]
    Upvote,
    /// A delivery fired from the listing's webhook test button.
    #[display("test")]
    #[serde(rename = "test")]
    Test,
}

impl WebhookType {
    /// Convert to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookType::Upvote => "upvote",
            WebhookType::Test => "test",
        }
    }
}

impl std::str::FromStr for WebhookType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(WebhookType::Upvote),
            "test" => Ok(WebhookType::Test),
            _ => Err(format!("Unknown webhook type: {}", s)),
        }
    }
}

/// Decode a raw vote-page query string (`?a=1&b=2`) into pairs.
fn decode_query(query: Option<&str>) -> Vec<(String, String)> {
    let raw = match query {
        Some(raw) => raw.strip_prefix('?').unwrap_or(raw),
        None => return Vec::new(),
    };
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Notification that a user voted for a bot.
///
/// POST body of a bot-vote webhook delivery.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct BotVote {
    /// Snowflake of the user who voted.
    user: Snowflake,
    /// Snowflake of the bot that received the vote.
    bot: Snowflake,
    /// Whether this is a real vote or a test-button delivery.
    #[serde(rename = "type")]
    kind: WebhookType,
    /// Whether the weekend multiplier is in effect, making votes count double.
    #[serde(rename = "isWeekend", default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    is_weekend: Option<bool>,
    /// Raw query string from the vote page, e.g. `?a=1&b=2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    query: Option<String>,
}

impl BotVote {
    /// Decode a webhook POST body.
    ///
    /// # Errors
    ///
    /// Returns a JSON error when the body is not a valid bot-vote payload.
    pub fn from_json_slice(body: &[u8]) -> BotlistResult<Self> {
        Ok(serde_json::from_slice(body).map_err(JsonError::from)?)
    }

    /// Decode a webhook POST body from a string.
    ///
    /// # Errors
    ///
    /// Returns a JSON error when the body is not a valid bot-vote payload.
    pub fn from_json_str(body: &str) -> BotlistResult<Self> {
        Ok(serde_json::from_str(body).map_err(JsonError::from)?)
    }

    /// Whether this delivery came from the test button.
    pub fn is_test(&self) -> bool {
        self.kind == WebhookType::Test
    }

    /// Whether the weekend multiplier was in effect. Absent means no.
    pub fn weekend(&self) -> bool {
        self.is_weekend.unwrap_or(false)
    }

    /// The vote-page query string decoded into pairs. Empty when absent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        decode_query(self.query.as_deref())
    }
}

/// Notification that a user voted for a guild/server listing.
///
/// POST body of a server-vote webhook delivery. Carries no weekend flag.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ServerVote {
    /// Snowflake of the user who voted.
    user: Snowflake,
    /// Snowflake of the guild that received the vote.
    guild: Snowflake,
    /// Whether this is a real vote or a test-button delivery.
    #[serde(rename = "type")]
    kind: WebhookType,
    /// Raw query string from the vote page, e.g. `?a=1&b=2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    query: Option<String>,
}

impl ServerVote {
    /// Decode a webhook POST body.
    ///
    /// # Errors
    ///
    /// Returns a JSON error when the body is not a valid server-vote payload.
    pub fn from_json_slice(body: &[u8]) -> BotlistResult<Self> {
        Ok(serde_json::from_slice(body).map_err(JsonError::from)?)
    }

    /// Decode a webhook POST body from a string.
    ///
    /// # Errors
    ///
    /// Returns a JSON error when the body is not a valid server-vote payload.
    pub fn from_json_str(body: &str) -> BotlistResult<Self> {
        Ok(serde_json::from_str(body).map_err(JsonError::from)?)
    }

    /// Whether this delivery came from the test button.
    pub fn is_test(&self) -> bool {
        self.kind == WebhookType::Test
    }

    /// The vote-page query string decoded into pairs. Empty when absent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        decode_query(self.query.as_deref())
    }
}
