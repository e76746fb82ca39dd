//! Typed data contracts for the botlist web API.
//!
//! This crate provides the JSON shapes exchanged with the bot-list platform:
//! bot profiles, user profiles, vote records, search queries and responses,
//! stats-posting payloads, and the vote webhook bodies the platform delivers.
//! It carries no transport; pair it with an HTTP client or server framework
//! that moves the bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bot;
mod search;
mod snowflake;
mod stats;
mod user;
mod validate;
mod vote;
mod webhook;

pub use bot::{Bot, BotBuilder};
pub use search::{
    SEARCH_LIMIT_MAX, SearchQuery, SearchQueryBuilder, SearchResponse, SearchResponseBuilder,
    SortDirection,
};
pub use snowflake::Snowflake;
pub use stats::{BotStats, BotStatsBuilder, ServerCount, StatsUpdate};
pub use user::{User, UserBuilder, UserSocials, UserSocialsBuilder};
pub use validate::Validate;
pub use vote::{VoteStatus, Voter, VoterBuilder};
pub use webhook::{BotVote, BotVoteBuilder, ServerVote, ServerVoteBuilder, WebhookType};
