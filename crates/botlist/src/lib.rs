//! Botlist - Typed data contracts for a Discord bot-list web API
//!
//! Botlist provides the JSON shapes exchanged with the bot-list platform:
//! bot and user profiles, vote records, search queries and responses,
//! stats-posting payloads, and the vote webhook bodies the platform pushes
//! to registered endpoints.
//!
//! The crate is deliberately transport-free. It pairs with whatever HTTP
//! client or server framework moves the bytes; authentication, retry, and
//! rate limiting belong to that layer, not to the data model.
//!
//! # Quick Start
//!
//! ```
//! use botlist::{BotVote, SearchQuery, SortDirection, StatsUpdate};
//!
//! // Decode an inbound vote webhook body.
//! let body = r#"{"user": "140862798832861184", "type": "upvote", "bot": "264811613708746752"}"#;
//! let vote = BotVote::from_json_str(body)?;
//! assert!(!vote.is_test());
//!
//! // Build a search request.
//! let query = SearchQuery::builder()
//!     .limit(50)
//!     .filter("tags", "music")
//!     .sort("points", SortDirection::Descending)
//!     .build();
//! assert_eq!(query.to_pairs().len(), 3);
//!
//! // Post stats for one shard.
//! let update = StatsUpdate::for_shard(3, 530, 8);
//! assert_eq!(update.server_count().total(), 530);
//! # Ok::<(), botlist::BotlistError>(())
//! ```
//!
//! # Architecture
//!
//! Botlist is organized as a workspace with focused crates:
//!
//! - `botlist_core` - The data contracts (bot, user, vote, search, stats, webhook)
//! - `botlist_error` - Error types
//!
//! This crate (`botlist`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use botlist_core::*;
pub use botlist_error::*;
