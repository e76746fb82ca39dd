//! Error types for the botlist model library.
//!
//! This crate provides the foundation error types used throughout the botlist
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use botlist_error::{BotlistResult, SnowflakeError};
//!
//! fn parse_id() -> BotlistResult<u64> {
//!     Err(SnowflakeError::new("not a decimal string"))?
//! }
//!
//! match parse_id() {
//!     Ok(id) => println!("Got: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod json;
mod snowflake;
mod validation;

pub use error::{BotlistError, BotlistErrorKind, BotlistResult};
pub use json::JsonError;
pub use snowflake::SnowflakeError;
pub use validation::{ValidationError, ValidationErrorKind};
