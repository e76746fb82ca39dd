//! Top-level error wrapper types.

use crate::{JsonError, SnowflakeError, ValidationError};

/// This is the foundation error enum for the botlist workspace.
///
/// # Examples
///
/// ```
/// use botlist_error::{BotlistError, JsonError};
///
/// let json_err = JsonError::new("unexpected end of input");
/// let err: BotlistError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BotlistErrorKind {
    /// Snowflake parse error
    #[from(SnowflakeError)]
    Snowflake(SnowflakeError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Schema invariant violation
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Botlist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use botlist_error::{BotlistResult, SnowflakeError};
///
/// fn might_fail() -> BotlistResult<()> {
///     Err(SnowflakeError::new("empty string"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Botlist Error: {}", _0)]
pub struct BotlistError(Box<BotlistErrorKind>);

impl BotlistError {
    /// Create a new error from a kind.
    pub fn new(kind: BotlistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BotlistErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BotlistErrorKind
impl<T> From<T> for BotlistError
where
    T: Into<BotlistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for botlist operations.
///
/// # Examples
///
/// ```
/// use botlist_error::{BotlistResult, JsonError};
///
/// fn decode() -> BotlistResult<String> {
///     Err(JsonError::new("trailing characters"))?
/// }
/// ```
pub type BotlistResult<T> = std::result::Result<T, BotlistError>;
